//! # Domain Model
//!
//! Plain data types for the catalog: the stored entities, the DTOs used to create, update and
//! search them, and the payload shapes a transport deserializes inbound requests into.
//!
//! Products own ingredients through a shared [`ProductReference`] token rather than through a
//! foreign-key identity.

pub mod ingredient;
pub mod product;

pub use ingredient::*;
pub use product::*;
