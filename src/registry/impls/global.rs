use std::sync::{Arc, OnceLock};
use log::info;
use crate::config::structs::installed_configuration::InstalledConfiguration;
use crate::database::structs::database_client::DatabaseClient;
use crate::registry::structs::connection_registry::ConnectionRegistry;

static REGISTRY: OnceLock<ConnectionRegistry> = OnceLock::new();

/// The process-wide registry, created on first use.
///
/// It resolves names against whatever configuration is installed at the time
/// of each `ensure` (see `Configuration::install`) and opens sqlx pools.
pub fn get_registry() -> &'static ConnectionRegistry
{
    REGISTRY.get_or_init(|| {
        info!("[Registry] Creating process-wide connection registry");
        ConnectionRegistry::new(Arc::new(InstalledConfiguration), DatabaseClient)
    })
}
