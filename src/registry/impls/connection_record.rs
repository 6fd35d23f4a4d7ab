use std::fmt;
use std::sync::atomic::Ordering;
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::registry::structs::connection_record::ConnectionRecord;

impl<H> ConnectionRecord<H> {
    pub(crate) fn new(settings: ConnectionSettings, handle: H) -> Self {
        ConnectionRecord { settings, handle, close_claimed: Default::default() }
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn dsn(&self) -> String {
        self.settings.dsn()
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Returns `true` for exactly one caller; that caller closes the handle.
    pub(crate) fn claim_close(&self) -> bool {
        !self.close_claimed.swap(true, Ordering::AcqRel)
    }

    /// The driver-specific handle.
    pub fn underlying(&self) -> &H {
        &self.handle
    }
}

impl<H: fmt::Debug> fmt::Debug for ConnectionRecord<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRecord")
            .field("name", &self.settings.name)
            .field("dsn", &self.settings.dsn_redacted())
            .field("handle", &self.handle)
            .finish()
    }
}
