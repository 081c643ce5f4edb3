//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Product, Ingredient, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types
//! for IDs, DTOs, search filters and errors, and the hooks the actor calls while serving
//! CRUD + Search requests.
//!
//! # Architecture Note
//! By defining a contract that all resource types must satisfy, we write the
//! `ResourceActor` logic *once* and reuse it everywhere.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Product` entity requires a `ProductCreate` payload, and you can't accidentally send it
//! an `IngredientCreate` payload. The compiler prevents this class of bugs entirely.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so that
    /// listings come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Optional-field filter used by search and bulk delete.
    /// `Default` must be the filter that matches every entity.
    type Filter: Default + Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather
    /// than per-message error types. Clients deal with a single `ProductError` type, making
    /// pattern matching easier.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identity the entity was created with.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request is received. The entity modifies its own state.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Returns true when every field set on `filter` equals the entity's field.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
