//! Implementation blocks for database types.

/// Display/parsing helpers for the engine enumeration.
pub mod database_drivers;

/// DSN rendering and redaction for connection settings.
pub mod connection_settings;

/// Engine dispatch for the connector.
pub mod database_connector;

/// MySQL pool creation.
pub mod database_connector_mysql;

/// PostgreSQL pool creation.
pub mod database_connector_pgsql;

/// `DatabaseOpener` implementation for the sqlx client.
pub mod database_client;
