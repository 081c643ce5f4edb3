//! # System Lifecycle
//!
//! Starting, wiring and stopping the catalog.
//!
//! 1. **Configuration** - [`CatalogConfig`] from TOML or the embedded default
//! 2. **Observability** - [`setup_tracing`] installs the subscriber
//! 3. **Actor Creation** - [`CatalogSystem::new`] spawns one actor per entity type and builds
//!    the [`CatalogService`](crate::service::CatalogService) over their clients
//! 4. **Graceful Shutdown** - [`CatalogSystem::shutdown`] closes the channels and awaits
//!    every actor task
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Process remaining messages, log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! The two actors never call each other, so shutdown order does not matter.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::*;
