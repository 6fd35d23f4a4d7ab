use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub name: String,
    pub engine: DatabaseDrivers,
    pub user: String,
    pub pass: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}
