//! Error types for the Ingredient actor.

use thiserror::Error;

/// Errors that can occur during ingredient operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IngredientError {
    /// The requested ingredient was not found.
    #[error("Ingredient not found: {0}")]
    NotFound(String),

    /// The ingredient store failed.
    #[error("Ingredient database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for IngredientError {
    fn from(msg: String) -> Self {
        IngredientError::ActorCommunicationError(msg)
    }
}
