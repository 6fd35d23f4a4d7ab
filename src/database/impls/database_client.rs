use async_trait::async_trait;
use log::{debug, info};
use sqlx::Error;
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::database::structs::database_client::DatabaseClient;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::traits::database_opener::DatabaseOpener;

#[async_trait]
impl DatabaseOpener for DatabaseClient {
    type Handle = DatabaseConnector;

    async fn open(&self, settings: &ConnectionSettings) -> Result<DatabaseConnector, Error> {
        DatabaseConnector::new(settings).await
    }

    async fn close(&self, name: &str, handle: &DatabaseConnector) {
        if handle.is_closed() {
            debug!("[{}] '{}' is already closed", handle.engine(), name);
            return;
        }
        handle.close().await;
        info!("[{}] Closed '{}'", handle.engine(), name);
    }
}
