//! Database enumeration types.

/// Supported database driver types (mysql, pgsql).
pub mod database_drivers;
