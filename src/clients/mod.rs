//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`], which supplies `get`, `list`, `search` and
//! `delete`, and adds the entity's own create/update calls.

pub mod ingredient_client;
pub mod product_client;

pub use actor_framework::ActorClient;
pub use ingredient_client::*;
pub use product_client::*;
