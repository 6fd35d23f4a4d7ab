use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use tokio::sync::OnceCell;
use crate::config::traits::config_store::ConfigStore;
use crate::database::structs::database_client::DatabaseClient;
use crate::database::traits::database_opener::DatabaseOpener;
use crate::registry::structs::connection_record::ConnectionHandle;

pub type ConnectionSlot<H> = Arc<OnceCell<ConnectionHandle<H>>>;

pub struct ConnectionRegistry<O: DatabaseOpener = DatabaseClient> {
    pub(crate) store: Arc<dyn ConfigStore>,
    pub(crate) opener: O,
    pub(crate) connections: RwLock<BTreeMap<String, ConnectionSlot<O::Handle>>>,
    pub(crate) closed: AtomicBool,
}
