//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::{EntityStore, MemoryStore};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the store and the receiver end
/// of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the store needs no
/// `Mutex` or `RwLock`. A single row write is atomic with respect to every other request
/// sent to the same actor.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_store()`) to get the `actor`
///     (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client freely; drop every clone to stop the actor.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug, Default)] struct NoteFilter;
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Filter = NoteFilter;
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
///     fn on_update(&mut self, text: String) -> Result<(), NoteError> { self.text = text; Ok(()) }
///     fn matches(&self, _: &NoteFilter) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(id, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: asks the store for the next id, builds the entity with
///   `T::from_create_params` and saves it.
/// * **Get / List / Search**: read from the store; a missing id yields `None`, never an error.
/// * **Update**: loads the entity, applies `on_update` to a copy and saves the copy, so a
///   rejected update leaves the stored entity untouched.
/// * **Delete**: removes the entity and returns it, or `NotFound`.
/// * **DeleteMatching**: removes every entity matching the filter and returns the count.
pub struct ResourceActor<T: ActorEntity, S: EntityStore<T> = MemoryStore<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` over an empty [`MemoryStore`] and its `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, MemoryStore::new())
    }
}

impl<T: ActorEntity, S: EntityStore<T>> ResourceActor<T, S> {
    /// Creates a new `ResourceActor` backed by `store`.
    pub fn with_store(buffer_size: usize, store: S) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match self.create(params) {
                        Ok(id) => {
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.store.find_by_id(&id).map_err(FrameworkError::from);
                    let found = matches!(result, Ok(Some(_)));
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(self.store.find_all().map_err(FrameworkError::from));
                }
                ResourceRequest::Search { filter, respond_to } => {
                    let result = self
                        .store
                        .find_matching(&filter)
                        .map_err(FrameworkError::from);
                    let hits = result.as_ref().map_or(0, Vec::len);
                    debug!(entity_type, ?filter, hits, "Search");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(entity_type, &id, update));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match self.store.delete(&id) {
                        Ok(Some(item)) => {
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            Ok(item)
                        }
                        Ok(None) => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Delete failed");
                            Err(e.into())
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::DeleteMatching { filter, respond_to } => {
                    debug!(entity_type, ?filter, "DeleteMatching");
                    let result = self
                        .store
                        .delete_matching(&filter)
                        .map_err(FrameworkError::from);
                    match &result {
                        Ok(removed) => {
                            info!(entity_type, removed, size = self.store.len(), "Deleted matching")
                        }
                        Err(e) => warn!(entity_type, error = %e, "DeleteMatching failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let id = self.store.next_id()?;
        let item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.save(item)?;
        Ok(id)
    }

    fn update(
        &mut self,
        entity_type: &str,
        id: &T::Id,
        update: T::Update,
    ) -> Result<T, FrameworkError> {
        let Some(mut item) = self.store.find_by_id(id)? else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        let saved = self.store.save(item)?;
        info!(entity_type, %id, "Updated");
        Ok(saved)
    }
}
