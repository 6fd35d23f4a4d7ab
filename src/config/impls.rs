//! Implementation blocks for configuration types.

/// Loading, saving and installing the configuration.
pub mod configuration;

/// Display and error impls for configuration errors.
pub mod configuration_error;

/// `ConfigStore` implementations.
pub mod config_store;
