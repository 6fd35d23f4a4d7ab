use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    #[serde(default = "Configuration::default_log_level")]
    pub log_level: String,
    #[serde(flatten)]
    pub connections: toml::Table,
}
