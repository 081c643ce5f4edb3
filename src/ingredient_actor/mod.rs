//! # Ingredient Actor
//!
//! Owns the ingredient store. Ingredients are grouped by the [`ProductReference`] they carry,
//! so the actor's filtered bulk delete is what removes a product's ingredients in one request.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Ingredient`]
//! - [`error`] - [`IngredientError`]
//!
//! [`ProductReference`]: crate::model::ProductReference

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::IngredientClient;
use crate::model::Ingredient;
use actor_framework::ResourceActor;

/// Creates a new Ingredient actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Ingredient>, IngredientClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, IngredientClient::new(generic_client))
}
