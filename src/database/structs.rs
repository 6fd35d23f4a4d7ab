//! Database connector structures.

/// Fully resolved parameters for one logical connection.
pub mod connection_settings;

/// The open, engine-tagged connection handle.
pub mod database_connector;

/// MySQL/MariaDB pool wrapper.
pub mod database_connector_mysql;

/// PostgreSQL pool wrapper.
pub mod database_connector_pgsql;

/// The sqlx-backed opener used by the global registry.
pub mod database_client;
