//! Database client module.
//!
//! Turns resolved [`structs::connection_settings::ConnectionSettings`] into an
//! open sqlx pool and closes it again. The registry only talks to this module
//! through the [`traits::database_opener::DatabaseOpener`] trait, so any other
//! client (or a test double) can stand in for it.
//!
//! # Supported Engines
//!
//! - **MySQL/MariaDB** (`engine = "mysql"`, the default)
//! - **PostgreSQL** (`engine = "pgsql"`)

/// Database engine enumeration (mysql, pgsql).
pub mod enums;

/// Implementation blocks for the connectors and settings.
pub mod impls;

/// Data structures for connection settings and open connectors.
pub mod structs;

/// Opener trait definitions.
pub mod traits;

#[cfg(test)]
mod tests;
