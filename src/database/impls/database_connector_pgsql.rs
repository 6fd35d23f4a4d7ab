use std::time::Duration;
use log::error;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Postgres};
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;

impl DatabaseConnectorPgSQL {
    #[tracing::instrument(level = "debug")]
    pub async fn create(settings: &ConnectionSettings) -> Result<Pool<Postgres>, Error>
    {
        let options = PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.pass)
            .database(&settings.database)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        PgPoolOptions::new().connect_with(options).await
    }

    pub async fn connect(settings: &ConnectionSettings) -> Result<DatabaseConnectorPgSQL, Error>
    {
        match Self::create(settings).await {
            Ok(pool) => Ok(DatabaseConnectorPgSQL { pool }),
            Err(e) => {
                error!("[PgSQL] Unable to connect to PgSQL on DSN {}", settings.dsn_redacted());
                error!("[PgSQL] Message: {e}");
                Err(e)
            }
        }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
