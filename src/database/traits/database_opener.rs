use async_trait::async_trait;
use sqlx::Error;
use crate::database::structs::connection_settings::ConnectionSettings;

/// Opens and closes the handles a registry caches.
///
/// `open` is called at most once per logical name for as long as the handle
/// stays registered; `close` is called once per handle on registry shutdown.
#[async_trait]
pub trait DatabaseOpener: Send + Sync {
    type Handle: Send + Sync + 'static;

    async fn open(&self, settings: &ConnectionSettings) -> Result<Self::Handle, Error>;

    async fn close(&self, name: &str, handle: &Self::Handle);
}
