//! # service-container - Lifecycle-aware service container for Rust
//!
//! A process-local registry that maps a service identity (a type, or an
//! explicit name) to a factory, builds each service at most once and hands
//! out the shared instance as `Arc<T>`. One-time setup callbacks run after
//! the eager services are built; shutdown callbacks run on teardown.
//!
//! ## Features
//!
//! - 🔒 **Type-safe** - Identities derive from `TypeId`; named lookups are checked at runtime
//! - 🏭 **Eager or deferred** - Build at `bootstrap()` or on first access
//! - 🧵 **Exactly-once construction** - Concurrent first resolutions run the factory once
//! - 🔁 **Re-entrant** - Factories resolve their own dependencies from the container
//! - ♻️ **Fresh instances** - Re-run a factory on demand without touching the cache
//! - 📊 **Observable** - `tracing` events plus an optional pluggable sink
//!
//! ## Quick Start
//!
//! ```rust
//! use service_container::Container;
//! use std::sync::Arc;
//!
//! struct Database {
//!     url: String,
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! let container = Container::new();
//!
//! container
//!     .register(|_| Ok(Database { url: "postgres://localhost".into() }))
//!     .unwrap();
//! container
//!     .register_deferred(|c| Ok(UserService { db: c.resolve::<Database>()? }))
//!     .unwrap();
//!
//! container.bootstrap().unwrap();
//!
//! let users = container.resolve::<UserService>().unwrap();
//! assert_eq!(users.db.url, "postgres://localhost");
//! ```
//!
//! ## Named Services
//!
//! ```rust
//! use service_container::Container;
//!
//! struct Pool { size: usize }
//!
//! let container = Container::new();
//! container.register_named("read", |_| Ok(Pool { size: 16 })).unwrap();
//! container.register_named("write", |_| Ok(Pool { size: 4 })).unwrap();
//! container.bootstrap().unwrap();
//!
//! assert_eq!(container.resolve_named::<Pool>("read").unwrap().size, 16);
//! assert_eq!(container.resolve_named::<Pool>("write").unwrap().size, 4);
//! ```
//!
//! ## Lifecycle
//!
//! ```rust
//! use service_container::Container;
//!
//! let container = Container::new();
//! container.register_setup(|_| {
//!     println!("runs once, after eager services are built");
//!     Ok(())
//! });
//! container.register_shutdown(|_| {
//!     println!("runs on every shutdown()");
//!     Ok(())
//! });
//!
//! container.bootstrap().unwrap();
//! container.shutdown().unwrap();
//! ```

mod builder;
mod container;
mod error;
mod factory;
mod identity;
mod lifecycle;
#[cfg(feature = "logging")]
pub mod logging;
mod must;
mod observe;
mod provider;
mod storage;

pub use builder::*;
pub use container::*;
pub use error::*;
pub use identity::*;
pub use lifecycle::Callback;
pub use observe::{DiagnosticSink, Field, IDENTIFIER_FIELD};
pub use provider::*;

// Re-export tracing macros for convenience when logging feature is enabled
#[cfg(feature = "logging")]
pub use tracing::{debug, error, info, trace, warn};

// Re-export for convenience
pub use std::sync::Arc;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Activation, BoxError, Container, ContainerBuilder, DiError, DiagnosticSink, Injectable,
        Result, ServiceIdentity, Version,
    };
    pub use std::sync::Arc;
}
