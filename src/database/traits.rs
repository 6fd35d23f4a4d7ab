//! Database opener traits.

/// The seam between the registry and the database client.
pub mod database_opener;
