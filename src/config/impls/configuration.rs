use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use log::{info, warn};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

static INSTALLED_CONFIGURATION: Lazy<RwLock<Arc<Configuration>>> =
    Lazy::new(|| RwLock::new(Arc::new(Configuration::empty())));

impl Configuration {
    pub(crate) fn default_log_level() -> String {
        String::from("info")
    }

    /// A configuration with no connections at all.
    pub fn empty() -> Configuration {
        Configuration {
            log_level: Self::default_log_level(),
            connections: toml::Table::new(),
        }
    }

    /// The template written out when no configuration file exists yet.
    pub fn init() -> Configuration {
        let mut connection = toml::Table::new();
        connection.insert(String::from("engine"), toml::Value::String(String::from("mysql")));
        connection.insert(String::from("user"), toml::Value::String(String::from("root")));
        connection.insert(String::from("pass"), toml::Value::String(String::from("MyPassword")));
        connection.insert(String::from("host"), toml::Value::String(String::from("127.0.0.1")));
        connection.insert(String::from("port"), toml::Value::Integer(3306));
        connection.insert(String::from("database"), toml::Value::String(String::from("mydatabase")));

        let mut connections = toml::Table::new();
        connections.insert(String::from("default"), toml::Value::Table(connection));

        Configuration {
            log_level: Self::default_log_level(),
            connections,
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads the configuration at `path`.
    ///
    /// When the file is missing or unreadable and `create` is set, the
    /// [`Configuration::init`] template is written to `path` and
    /// [`ConfigurationError::TemplateCreated`] is returned so the caller can
    /// stop and let the operator fill it in.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, ConfigurationError> {
        let path = path.as_ref();
        match Self::load_file(path) {
            Ok(config) => Ok(config),
            Err(ConfigurationError::IOError(error)) if create => {
                warn!("[CONFIG] No config file found at {}: {}", path.display(), error);
                let template = toml::to_string(&Self::init()).map_err(ConfigurationError::SerializeError)?;
                Self::save_file(path, template)?;
                warn!("[CONFIG] Template written, please edit {} and restart", path.display());
                Err(ConfigurationError::TemplateCreated(path.display().to_string()))
            }
            Err(error) => Err(error)
        }
    }

    /// Logical connection names present in this configuration, in sorted order.
    pub fn connection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.connections
            .iter()
            .filter(|(_, value)| value.is_table())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Makes this configuration the process-wide one read by
    /// [`InstalledConfiguration`](crate::config::structs::installed_configuration::InstalledConfiguration).
    ///
    /// Connections already open in a registry are not affected.
    pub fn install(self) {
        info!("[CONFIG] Installing configuration with {} connection(s)", self.connection_names().len());
        *INSTALLED_CONFIGURATION.write() = Arc::new(self);
    }

    pub fn installed() -> Arc<Configuration> {
        INSTALLED_CONFIGURATION.read().clone()
    }
}
