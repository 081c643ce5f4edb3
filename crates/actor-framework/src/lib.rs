//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, concurrent resource actors. It
//! implements a **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor
//! Model**: every resource type gets its own actor that owns the resource's store and serves
//! a uniform CRUD + Search API.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model, its DTOs and filter matching
//! 2. **Storage Layer** ([`EntityStore`]) - Where entities live; [`MemoryStore`] by default
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Item {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct ItemCreate { name: String }
//! #[derive(Debug)] struct ItemUpdate { name: Option<String> }
//! #[derive(Debug, Default)] struct ItemFilter { name: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! impl ActorEntity for Item {
//!     type Id = u32;
//!     type Create = ItemCreate;
//!     type Update = ItemUpdate;
//!     type Filter = ItemFilter;
//!     type Error = ItemError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, ItemError> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     fn on_update(&mut self, update: ItemUpdate) -> Result<(), ItemError> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     fn matches(&self, filter: &ItemFilter) -> bool {
//!         filter.name.as_ref().map_or(true, |n| *n == self.name)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Item>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.create(ItemCreate { name: "Bun".into() }).await.unwrap();
//!     let found = client.search(ItemFilter { name: Some("Bun".into()) }).await.unwrap();
//!     assert_eq!(found[0].id, id);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//! - Nothing is atomic *across* actors; callers that write to several actors must handle
//!   partial failure themselves
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which answers client requests from scripted
//! expectations without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{EntityStore, MemoryStore, StoreError};
