use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use crate::database::structs::connection_settings::ConnectionSettings;

pub struct ConnectionRecord<H> {
    pub(crate) settings: ConnectionSettings,
    pub(crate) handle: H,
    pub(crate) close_claimed: AtomicBool,
}

/// What the registry hands out; clones share one record.
pub type ConnectionHandle<H> = Arc<ConnectionRecord<H>>;
