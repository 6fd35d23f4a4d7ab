//! Configuration enumeration types.

/// Errors raised while loading, saving or applying the configuration.
pub mod configuration_error;
