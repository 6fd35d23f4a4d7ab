use log::info;
use sqlx::{Error, MySql, Pool, Postgres};
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;

impl DatabaseConnector {
    pub async fn new(settings: &ConnectionSettings) -> Result<DatabaseConnector, Error>
    {
        let mut structure = DatabaseConnector { mysql: None, pgsql: None, engine: settings.engine };
        match settings.engine {
            DatabaseDrivers::mysql => {
                structure.mysql = Some(DatabaseConnectorMySQL::connect(settings).await?);
            }
            DatabaseDrivers::pgsql => {
                structure.pgsql = Some(DatabaseConnectorPgSQL::connect(settings).await?);
            }
        }
        info!("[{}] Connected '{}' on DSN {}", settings.engine, settings.name, settings.dsn_redacted());
        Ok(structure)
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.engine
    }

    pub fn mysql(&self) -> Option<&Pool<MySql>> {
        self.mysql.as_ref().map(DatabaseConnectorMySQL::pool)
    }

    pub fn pgsql(&self) -> Option<&Pool<Postgres>> {
        self.pgsql.as_ref().map(DatabaseConnectorPgSQL::pool)
    }

    pub async fn close(&self)
    {
        match self.engine {
            DatabaseDrivers::mysql => {
                if let Some(mysql) = &self.mysql { mysql.pool.close().await; }
            }
            DatabaseDrivers::pgsql => {
                if let Some(pgsql) = &self.pgsql { pgsql.pool.close().await; }
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        match self.engine {
            DatabaseDrivers::mysql => self.mysql.as_ref().is_none_or(|mysql| mysql.pool.is_closed()),
            DatabaseDrivers::pgsql => self.pgsql.as_ref().is_none_or(|pgsql| pgsql.pool.is_closed()),
        }
    }
}
