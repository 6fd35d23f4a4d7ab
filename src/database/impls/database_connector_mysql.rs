use std::time::Duration;
use log::error;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, Error, MySql, Pool};
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;

impl DatabaseConnectorMySQL {
    #[tracing::instrument(level = "debug")]
    pub async fn create(settings: &ConnectionSettings) -> Result<Pool<MySql>, Error>
    {
        MySqlPoolOptions::new().connect_with(
            MySqlConnectOptions::new()
                .host(&settings.host)
                .port(settings.port)
                .username(&settings.user)
                .password(&settings.pass)
                .database(&settings.database)
                .log_statements(log::LevelFilter::Debug)
                .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1))
        ).await
    }

    pub async fn connect(settings: &ConnectionSettings) -> Result<DatabaseConnectorMySQL, Error>
    {
        match Self::create(settings).await {
            Ok(pool) => Ok(DatabaseConnectorMySQL { pool }),
            Err(e) => {
                error!("[MySQL] Unable to connect to MySQL on DSN {}", settings.dsn_redacted());
                error!("[MySQL] Message: {e}");
                Err(e)
            }
        }
    }

    pub fn pool(&self) -> &Pool<MySql> {
        &self.pool
    }
}
