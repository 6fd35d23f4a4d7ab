//! Implementation blocks for the registry.

/// Resolving connection settings from a configuration store.
pub mod resolver;

/// Accessors for connection records.
pub mod connection_record;

/// `ensure`, `get` and `shutdown`.
pub mod connection_registry;

/// The process-wide registry.
pub mod global;
