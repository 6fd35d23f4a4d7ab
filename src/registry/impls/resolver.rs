use std::str::FromStr;
use crate::config::traits::config_store::ConfigStore;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::connection_settings::ConnectionSettings;
use crate::registry::errors::ConfigError;

/// Fields every logical connection must define, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 5] = ["user", "pass", "host", "port", "database"];

impl ConnectionSettings {
    /// Reads `<name>.user`, `<name>.pass`, `<name>.host`, `<name>.port` and
    /// `<name>.database` (plus the optional `<name>.engine`) from `store`.
    ///
    /// Missing and empty values are treated alike; all of them are reported at once.
    pub fn resolve(store: &dyn ConfigStore, name: &str) -> Result<ConnectionSettings, ConfigError>
    {
        let lookup = |field: &str| {
            store.get_string(&format!("{name}.{field}")).filter(|value| !value.is_empty())
        };

        let (user, pass, host, port, database) = match (lookup("user"), lookup("pass"), lookup("host"), lookup("port"), lookup("database")) {
            (Some(user), Some(pass), Some(host), Some(port), Some(database)) => (user, pass, host, port, database),
            (user, pass, host, port, database) => {
                let present = [user.is_some(), pass.is_some(), host.is_some(), port.is_some(), database.is_some()];
                let fields = REQUIRED_FIELDS
                    .iter()
                    .zip(present)
                    .filter(|(_, present)| !present)
                    .map(|(field, _)| *field)
                    .collect();
                return Err(ConfigError::Missing { name: name.to_string(), fields });
            }
        };

        let port = port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
            name: name.to_string(),
            port: port.clone(),
        })?;

        let engine = match lookup("engine") {
            None => DatabaseDrivers::default(),
            Some(engine) => DatabaseDrivers::from_str(&engine).map_err(|_| ConfigError::UnknownEngine {
                name: name.to_string(),
                engine,
            })?,
        };

        Ok(ConnectionSettings {
            name: name.to_string(),
            engine,
            user,
            pass,
            host,
            port,
            database,
        })
    }
}

/// Resolves `name` to its connection string, `user:pass@host:port/database`.
pub fn resolve(store: &dyn ConfigStore, name: &str) -> Result<String, ConfigError>
{
    ConnectionSettings::resolve(store, name).map(|settings| settings.dsn())
}
