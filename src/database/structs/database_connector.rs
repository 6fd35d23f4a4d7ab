use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;

#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) mysql: Option<DatabaseConnectorMySQL>,
    pub(crate) pgsql: Option<DatabaseConnectorPgSQL>,
    pub(crate) engine: DatabaseDrivers,
}
