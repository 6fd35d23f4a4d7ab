//! Configuration data structures.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Handle onto the process-wide installed configuration.
pub mod installed_configuration;
