//! Configuration management module.
//!
//! This module handles loading, parsing and exposing the configuration that the
//! connection registry resolves its logical names against.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) holds a `log_level` and one table per
//! logical connection name:
//!
//! ```toml
//! log_level = "info"
//!
//! [reporting]
//! engine = "mysql"
//! user = "reporter"
//! pass = "secret"
//! host = "127.0.0.1"
//! port = 3306
//! database = "reports"
//! ```
//!
//! Every value is reachable through the [`traits::config_store::ConfigStore`]
//! trait by its dotted key, for example `reporting.port`.
//!
//! # Example
//!
//! ```rust,ignore
//! use db_registry::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.install();
//! ```

/// Configuration enumerations (loading errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Configuration store trait definitions.
pub mod traits;

/// Implementation blocks for configuration loading/saving and lookups.
pub mod impls;
