//! Configuration store traits.

/// Read-only, dotted-key view onto a configuration source.
pub mod config_store;
