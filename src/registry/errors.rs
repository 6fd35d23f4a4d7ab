use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing database configuration for '{name}' ({})", .fields.join(", "))]
    Missing { name: String, fields: Vec<&'static str> },

    #[error("invalid port '{port}' in database configuration for '{name}'")]
    InvalidPort { name: String, port: String },

    #[error("unknown database engine '{engine}' in database configuration for '{name}'")]
    UnknownEngine { name: String, engine: String },
}

impl ConfigError {
    /// The logical connection name the error was raised for.
    pub fn name(&self) -> &str {
        match self {
            ConfigError::Missing { name, .. }
            | ConfigError::InvalidPort { name, .. }
            | ConfigError::UnknownEngine { name, .. } => name,
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection error for '{name}': {source}")]
    Connection {
        name: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Connection named '{0}' does not exist")]
    NotFound(String),

    #[error("Connection registry is shut down")]
    Closed,
}
