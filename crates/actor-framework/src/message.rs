//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to standard **CRUD** operations plus filtered reads and a
/// filtered bulk delete:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get / List (Read)**: Fetch one resource by ID, or all of them.
/// - **Search**: Fetch every resource matching an [`ActorEntity::Filter`].
/// - **Update**: State mutation. Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Lifecycle end. Removes the resource and hands it back.
/// - **DeleteMatching**: Removes every resource matching a filter in one step.
///
/// This type is generic over `T: ActorEntity`, which guarantees that you can't send a
/// "Product Create" payload to an "Ingredient" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Search {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    DeleteMatching {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
}
