use std::fmt;
use crate::database::structs::connection_settings::ConnectionSettings;

impl ConnectionSettings {
    /// The connection string, `user:pass@host:port/database`.
    pub fn dsn(&self) -> String {
        format!("{}:{}@{}:{}/{}", self.user, self.pass, self.host, self.port, self.database)
    }

    /// The connection string with the password masked, for log lines.
    pub fn dsn_redacted(&self) -> String {
        format!("{}:***@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("name", &self.name)
            .field("engine", &self.engine)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}
