#![allow(dead_code)]
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use db_registry::config::traits::config_store::ConfigStore;
use db_registry::database::structs::connection_settings::ConnectionSettings;
use db_registry::database::traits::database_opener::DatabaseOpener;
use db_registry::registry::structs::connection_registry::ConnectionRegistry;
use parking_lot::{Mutex, RwLock};
use tokio::sync::Notify;

pub type TestRegistry = Arc<ConnectionRegistry<CountingOpener>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestHandle {
    pub id: usize,
    pub name: String,
    pub dsn: String,
}

/// Stands in for a database: counts opens, can fail or hold an open until released.
#[derive(Default)]
pub struct CountingOpener {
    pub attempts: AtomicUsize,
    pub opens: AtomicUsize,
    pub started: Mutex<Vec<String>>,
    pub closed: Mutex<Vec<String>>,
    pub failing: Mutex<HashSet<String>>,
    pub gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub delay: Duration,
}

impl CountingOpener {
    pub fn with_delay(delay: Duration) -> Self {
        CountingOpener { delay, ..Default::default() }
    }

    pub fn fail(&self, name: &str) {
        self.failing.lock().insert(name.to_string());
    }

    pub fn recover(&self, name: &str) {
        self.failing.lock().remove(name);
    }

    /// Holds every open of `name` until the returned `Notify` is signalled.
    pub fn gate(&self, name: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.lock().insert(name.to_string(), notify.clone());
        notify
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn has_started(&self, name: &str) -> bool {
        self.started.lock().iter().any(|started| started == name)
    }
}

#[async_trait]
impl DatabaseOpener for CountingOpener {
    type Handle = TestHandle;

    async fn open(&self, settings: &ConnectionSettings) -> Result<TestHandle, sqlx::Error> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.started.lock().push(settings.name.clone());

        let gate = self.gates.lock().get(&settings.name).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.lock().contains(&settings.name) {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let id = self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(TestHandle { id, name: settings.name.clone(), dsn: settings.dsn() })
    }

    async fn close(&self, name: &str, _handle: &TestHandle) {
        self.closed.lock().push(name.to_string());
    }
}

/// A configuration store whose contents can change between calls.
#[derive(Default)]
pub struct SwappableStore {
    pub values: RwLock<HashMap<String, String>>,
}

impl SwappableStore {
    pub fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }
}

impl ConfigStore for SwappableStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

pub fn connection_entries(name: &str) -> Vec<(String, String)> {
    vec![
        (format!("{name}.user"), format!("{name}_user")),
        (format!("{name}.pass"), "secret".to_string()),
        (format!("{name}.host"), "127.0.0.1".to_string()),
        (format!("{name}.port"), "3306".to_string()),
        (format!("{name}.database"), format!("{name}_db")),
    ]
}

pub fn create_test_store(names: &[&str]) -> Arc<SwappableStore> {
    let store = SwappableStore::default();
    for name in names {
        store.values.write().extend(connection_entries(name));
    }
    Arc::new(store)
}

pub fn create_test_registry(names: &[&str], opener: CountingOpener) -> TestRegistry {
    Arc::new(ConnectionRegistry::new(create_test_store(names), opener))
}

pub async fn wait_until_started(registry: &TestRegistry, name: &str) {
    for _ in 0..500 {
        if registry.opener().has_started(name) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("open of '{name}' never started");
}
