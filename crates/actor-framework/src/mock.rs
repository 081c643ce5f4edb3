//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of scripted responses instead of a running actor. It lets you test the logic
//! *around* a client (wrappers, services that orchestrate several clients) quickly and
//! deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing [`EntityStore`](crate::EntityStore) |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug, Default)] struct NoteFilter;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! impl ActorEntity for Note {
//!     type Id = u32; type Create = (); type Update = ();
//!     type Filter = NoteFilter; type Error = NoteError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
//!     fn on_update(&mut self, _: ()) -> Result<(), NoteError> { Ok(()) }
//!     fn matches(&self, _: &NoteFilter) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver and answer requests by hand, or
//! use the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// The scripted answer for one expected request, tagged by request kind.
enum MockResponse<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Search(Result<Vec<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<T, FrameworkError>),
    DeleteMatching(Result<usize, FrameworkError>),
}

/// An expected request. When `id` is set the request must address that id.
struct Expectation<T: ActorEntity> {
    id: Option<T::Id>,
    response: MockResponse<T>,
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were declared.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_create().return_ok(ProductId(1));
/// mock.expect_delete(ProductId(1)).return_ok(product);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                // The guard is a temporary, released before answering
                let expectation = expectations_clone.lock().unwrap().pop_front();

                let Some(Expectation { id: expected, response }) = expectation else {
                    panic!("Unexpected request: no expectations left");
                };

                match (request, response) {
                    (ResourceRequest::Create { respond_to, .. }, MockResponse::Create(r)) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Get { id, respond_to }, MockResponse::Get(r)) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { respond_to }, MockResponse::List(r)) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Search { respond_to, .. }, MockResponse::Search(r)) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, MockResponse::Update(r)) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Delete { id, respond_to }, MockResponse::Delete(r)) => {
                        check_id(&expected, &id);
                        let _ = respond_to.send(r);
                    }
                    (
                        ResourceRequest::DeleteMatching { respond_to, .. },
                        MockResponse::DeleteMatching(r),
                    ) => {
                        let _ = respond_to.send(r);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, MockResponse::Create)
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), MockResponse::Get)
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, MockResponse::List)
    }

    /// Expects a `search` operation.
    pub fn expect_search(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, MockResponse::Search)
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), MockResponse::Update)
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), MockResponse::Delete)
    }

    /// Expects a `delete_matching` operation.
    pub fn expect_delete_matching(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(None, MockResponse::DeleteMatching)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> MockResponse<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

fn check_id<Id: PartialEq + std::fmt::Debug>(expected: &Option<Id>, actual: &Id) {
    if let Some(expected) = expected {
        assert_eq!(expected, actual, "Request addressed an unexpected id");
    }
}

/// Builder returned by the `expect_*` methods; queues the scripted response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> MockResponse<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            id: self.id,
            response: (self.wrap)(response),
        });
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends messages to a channel we control (`receiver`). The test inspects the
/// messages arriving on that channel, asserts they are correct, and answers through the
/// enclosed responder. Prefer [`MockClient`] unless the test needs to look at payloads.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteMatching request
pub async fn expect_delete_matching<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<usize, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::DeleteMatching { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct UserCreate {
        name: String,
    }

    #[derive(Debug, Default)]
    struct UserFilter {
        name: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("User error")]
    struct UserError;

    impl ActorEntity for User {
        type Id = u32;
        type Create = UserCreate;
        type Update = ();
        type Filter = UserFilter;
        type Error = UserError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: UserCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        fn on_update(&mut self, _update: ()) -> Result<(), Self::Error> {
            Ok(())
        }

        fn matches(&self, filter: &UserFilter) -> bool {
            filter.name.as_ref().map_or(true, |n| *n == self.name)
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let create_task = tokio::spawn(async move {
            let user = UserCreate {
                name: "Test".to_string(),
            };
            client.create(user).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn test_mock_client_delete_matching_payload() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let task = tokio::spawn(async move {
            client
                .delete_matching(UserFilter {
                    name: Some("Bob".into()),
                })
                .await
        });

        let (filter, responder) = expect_delete_matching(&mut receiver)
            .await
            .expect("Expected DeleteMatching request");
        assert_eq!(filter.name.as_deref(), Some("Bob"));
        responder.send(Ok(3)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<User>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(User {
            id: 1,
            name: "Test".to_string(),
        }));
        mock.expect_delete(1)
            .return_err(FrameworkError::NotFound("1".to_string()));

        let client = mock.client();

        let id = client
            .create(UserCreate {
                name: "Test".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Test");

        let deleted = client.delete(1).await;
        assert!(matches!(deleted, Err(FrameworkError::NotFound(_))));

        mock.verify();
    }
}
