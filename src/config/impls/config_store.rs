use std::collections::{BTreeMap, HashMap};
use crate::config::structs::configuration::Configuration;
use crate::config::structs::installed_configuration::InstalledConfiguration;
use crate::config::traits::config_store::ConfigStore;

impl ConfigStore for Configuration {
    fn get_string(&self, key: &str) -> Option<String> {
        let mut segments = key.split('.');
        let mut value = self.connections.get(segments.next()?)?;
        for segment in segments {
            value = value.as_table()?.get(segment)?;
        }
        match value {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            toml::Value::Boolean(b) => Some(b.to_string()),
            _ => None
        }
    }
}

impl ConfigStore for InstalledConfiguration {
    fn get_string(&self, key: &str) -> Option<String> {
        Configuration::installed().get_string(key)
    }
}

impl ConfigStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigStore for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
