/// Opens [`DatabaseConnector`](crate::database::structs::database_connector::DatabaseConnector)
/// handles through sqlx, picking the pool type from the settings' engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseClient;
