use std::collections::BTreeMap;
use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{debug, error, info};
use parking_lot::RwLock;
use crate::config::traits::config_store::ConfigStore;
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::database::traits::database_opener::DatabaseOpener;
use crate::registry::errors::RegistryError;
use crate::registry::structs::connection_record::{ConnectionHandle, ConnectionRecord};
use crate::registry::structs::connection_registry::{ConnectionRegistry, ConnectionSlot};

impl<O: DatabaseOpener> ConnectionRegistry<O> {
    pub fn new(store: Arc<dyn ConfigStore>, opener: O) -> ConnectionRegistry<O>
    {
        ConnectionRegistry {
            store,
            opener,
            connections: RwLock::new(BTreeMap::new()),
            closed: AtomicBool::new(false),
        }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn slot(&self, name: &str) -> ConnectionSlot<O::Handle>
    {
        if let Some(slot) = self.connections.read().get(name) {
            return slot.clone();
        }
        self.connections.write().entry(name.to_string()).or_default().clone()
    }

    /// Makes sure a connection named `name` is open and returns it.
    ///
    /// The first call for a name resolves its settings and opens the
    /// connection; concurrent callers for the same name wait for that single
    /// attempt. Once open, the record is reused as-is for the life of the
    /// registry, even if the configuration changes afterwards. A failed attempt
    /// leaves the name unregistered.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn ensure(&self, name: &str) -> Result<ConnectionHandle<O::Handle>, RegistryError>
    {
        if self.is_closed() {
            return Err(RegistryError::Closed);
        }

        let slot = self.slot(name);
        let result = match slot.get() {
            Some(record) => {
                debug!("[Registry] Connection '{name}' already exists, reusing the existing connection");
                Ok(record.clone())
            }
            None => slot.get_or_try_init(|| self.open(name)).await.cloned(),
        };

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                self.release(name, &slot);
                return Err(e);
            }
        };

        if self.is_published(name, &slot) {
            return Ok(record);
        }

        // shutdown() drained the map before this record could be handed out
        if record.claim_close() {
            self.opener.close(name, record.underlying()).await;
            info!("[Registry] Closed connection '{name}' opened during shutdown");
        }
        Err(RegistryError::Closed)
    }

    async fn open(&self, name: &str) -> Result<ConnectionHandle<O::Handle>, RegistryError>
    {
        if self.is_closed() {
            return Err(RegistryError::Closed);
        }

        let settings = ConnectionSettings::resolve(self.store.as_ref(), name).map_err(|e| {
            error!("[Registry] Error creating DSN for '{name}': {e}");
            RegistryError::Config(e)
        })?;

        let handle = self.opener.open(&settings).await.map_err(|e| {
            error!("[Registry] Error opening database for '{name}' on DSN {}: {e}", settings.dsn_redacted());
            RegistryError::Connection { name: name.to_string(), source: e }
        })?;

        info!("[Registry] Opened connection '{name}' ({}) on DSN {}", settings.engine, settings.dsn_redacted());
        Ok(Arc::new(ConnectionRecord::new(settings, handle)))
    }

    /// Whether `slot` is still the live entry for `name`. `closed` only flips
    /// under the write lock, so a `true` here means `shutdown` will see the slot.
    fn is_published(&self, name: &str, slot: &ConnectionSlot<O::Handle>) -> bool
    {
        let connections = self.connections.read();
        !self.is_closed() && connections.get(name).is_some_and(|current| Arc::ptr_eq(current, slot))
    }

    /// Drops the empty slot a failed `ensure` left behind, unless another
    /// caller is still waiting on it.
    fn release(&self, name: &str, slot: &ConnectionSlot<O::Handle>)
    {
        let mut connections = self.connections.write();
        let unused = connections.get(name).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && !current.initialized() && Arc::strong_count(current) == 2
        });
        if unused {
            connections.remove(name);
        }
    }

    /// Returns the connection registered under `name`, without opening anything.
    pub fn get(&self, name: &str) -> Result<ConnectionHandle<O::Handle>, RegistryError>
    {
        if self.is_closed() {
            return Err(RegistryError::Closed);
        }
        self.connections
            .read()
            .get(name)
            .and_then(|slot| slot.get().cloned())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// [`ensure`](Self::ensure), terminating the process when it fails.
    pub async fn ensure_or_exit(&self, name: &str) -> ConnectionHandle<O::Handle>
    {
        match self.ensure(name).await {
            Ok(record) => record,
            Err(e) => {
                error!("[Registry] Unable to ensure connection '{name}': {e}");
                exit(1);
            }
        }
    }

    /// [`get`](Self::get), terminating the process when it fails.
    pub fn get_or_exit(&self, name: &str) -> ConnectionHandle<O::Handle>
    {
        match self.get(name) {
            Ok(record) => record,
            Err(e) => {
                error!("[Registry] {e}");
                exit(1);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.connections.read().get(name).is_some_and(|slot| slot.initialized())
    }

    /// Names with an open connection, in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.connections
            .read()
            .iter()
            .filter(|(_, slot)| slot.initialized())
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.connections.read().values().filter(|slot| slot.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Closes every registered connection in ascending name order and refuses
    /// any further `ensure` or `get`. Returns how many connections were closed;
    /// calling it again closes nothing.
    pub async fn shutdown(&self) -> usize
    {
        let drained = {
            let mut connections = self.connections.write();
            self.closed.store(true, Ordering::Release);
            std::mem::take(&mut *connections)
        };

        let mut closed = 0;
        for (name, slot) in drained {
            if let Some(record) = slot.get()
                && record.claim_close() {
                self.opener.close(&name, record.underlying()).await;
                info!("[Registry] Closed connection '{name}'");
                closed += 1;
            }
        }
        if closed > 0 {
            info!("[Registry] Shutdown complete, {closed} connection(s) closed");
        }
        closed
    }
}
