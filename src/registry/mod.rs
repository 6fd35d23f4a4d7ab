//! Named connection registry.
//!
//! Maps logical connection names onto lazily opened database handles. The
//! first `ensure` for a name resolves its settings from the configuration store
//! and opens the connection; every later `ensure`, and every `get`, hands out
//! the same shared record.
//!
//! # Concurrency
//!
//! The name map sits behind a short-lived `parking_lot::RwLock`. Each name owns
//! a `tokio::sync::OnceCell`, so concurrent `ensure` calls for one name open a
//! single connection between them, while opening one name never blocks lookups
//! or opens for another.
//!
//! # Example
//!
//! ```rust,ignore
//! use db_registry::registry::impls::global::get_registry;
//!
//! let registry = get_registry();
//! registry.ensure("reporting").await?;
//! let pool = registry.get("reporting")?.underlying().mysql().cloned();
//! ```

/// Error types for resolution and registry operations.
pub mod errors;

/// Implementation blocks for the registry, its records and the resolver.
pub mod impls;

/// Data structures for the registry and its records.
pub mod structs;
