//! # Product Catalog
//!
//! A catalog of products and the ingredients they are made of, built on the resource actors
//! from [`actor_framework`].
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product),
//!   [`Ingredient`](model::Ingredient)) plus their create, update, filter and payload shapes.
//! - **[product_actor] / [ingredient_actor]**: One `ResourceActor` per entity type, each
//!   owning its store.
//! - **[clients]**: Type-safe wrappers ([`ProductClient`](clients::ProductClient),
//!   [`IngredientClient`](clients::IngredientClient)) that hide the message passing.
//! - **[service]**: [`CatalogService`](service::CatalogService), which validates payloads,
//!   stamps product references, cascades deletes and applies partial updates.
//! - **[lifecycle]**: Configuration, tracing and the [`CatalogSystem`](lifecycle::CatalogSystem)
//!   that starts and stops the actors.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog::lifecycle::{CatalogConfig, CatalogSystem};
//! use catalog::model::{Category, ProductPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = CatalogSystem::new(&CatalogConfig::default());
//!
//!     let payload = ProductPayload {
//!         name: Some("Lemonade".into()),
//!         quantity: Some(4),
//!         price: Some(2.5),
//!         category: Some(Category::Drink),
//!         ingredients: vec![],
//!     };
//!     let reference = system.service.create_product(Some(payload)).await?;
//!     assert!(reference.as_str().starts_with("REF-"));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients and the service without
//! spawning actors.

pub mod clients;
pub mod ingredient_actor;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod service;
