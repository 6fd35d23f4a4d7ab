//! Registry structures.

/// One opened connection together with the settings it was opened from.
pub mod connection_record;

/// The name to connection map.
pub mod connection_registry;
