//! # Product Actor
//!
//! This module implements the Product resource actor.
//!
//! ## Overview
//!
//! The Product actor owns the product store and serves the framework's CRUD + Search requests.
//! It knows nothing about ingredients; keeping the two in step is the job of
//! [`CatalogService`](crate::service::CatalogService).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use catalog::clients::ActorClient;
//! use catalog::model::{Category, ProductCreate, ProductReference};
//! use catalog::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, client) = product_actor::new(32);
//!
//!     // Start the actor
//!     tokio::spawn(actor.run());
//!
//!     let params = ProductCreate {
//!         name: "Burger".to_string(),
//!         quantity: 1,
//!         price: 5.0,
//!         category: Category::Food,
//!         product_reference: ProductReference::new("REF-demo"),
//!     };
//!     let id = client.create_product(params).await?;
//!     assert!(client.get(id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
