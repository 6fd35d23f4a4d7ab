//! # db-registry
//!
//! A process-wide registry of named relational database connections.
//!
//! ## Overview
//!
//! Applications refer to their databases by logical name (`"reporting"`,
//! `"billing"`, ...). The registry looks each name up in the configuration,
//! opens an sqlx pool for it on first use and hands the same pool to every
//! later caller, from any thread.
//!
//! ## Features
//!
//! - **Lazy, exactly-once opening**: concurrent first callers for a name share a single connection attempt
//! - **Independent names**: opening one database never blocks lookups or opens for another
//! - **MySQL and PostgreSQL**: chosen per name with the optional `engine` field
//! - **Recoverable errors**: every operation returns a `Result`; `_or_exit` variants keep fail-fast call sites short
//! - **Deterministic shutdown**: all pools closed in name order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use db_registry::config::structs::configuration::Configuration;
//! use db_registry::logging::setup_logging;
//! use db_registry::registry::impls::global::get_registry;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! setup_logging(&config)?;
//! config.install();
//!
//! let registry = get_registry();
//! let reporting = registry.ensure("reporting").await?;
//! let pool = reporting.underlying().mysql();
//! // ...
//! registry.shutdown().await;
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and dotted-key lookups
//! - [`database`] - sqlx connectors behind the `DatabaseOpener` trait
//! - [`logging`] - fern/log setup
//! - [`registry`] - The connection registry, its resolver and the global instance

/// Configuration management module.
///
/// Loads the TOML configuration and exposes it as a dotted-key store the
/// registry resolves logical names against.
pub mod config;

/// Database client module.
///
/// Opens and closes MySQL and PostgreSQL pools for resolved connection settings.
pub mod database;

/// Logging setup.
pub mod logging;

/// Named connection registry.
///
/// Lazily opens, caches and shuts down connections by logical name.
pub mod registry;
