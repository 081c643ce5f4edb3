//! Errors surfaced by [`CatalogService`](super::CatalogService).

use super::validation::ValidationError;
use crate::ingredient_actor::IngredientError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// What callers of the catalog see. Each variant maps to one HTTP-style status.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The creation payload failed validation; nothing was written.
    #[error("Bad request: {0}")]
    BadRequest(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A store or actor failed underneath the service.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn status(&self) -> u16 {
        match self {
            CatalogError::BadRequest(_) => 400,
            CatalogError::NotFound { .. } => 404,
            CatalogError::Storage(_) => 500,
        }
    }
}

impl From<ProductError> for CatalogError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => CatalogError::NotFound {
                entity: "Product",
                id,
            },
            ProductError::DatabaseError(msg) | ProductError::ActorCommunicationError(msg) => {
                CatalogError::Storage(msg)
            }
        }
    }
}

impl From<IngredientError> for CatalogError {
    fn from(e: IngredientError) -> Self {
        match e {
            IngredientError::NotFound(id) => CatalogError::NotFound {
                entity: "Ingredient",
                id,
            },
            IngredientError::DatabaseError(msg)
            | IngredientError::ActorCommunicationError(msg) => CatalogError::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::from(ValidationError::EmptyName).status(), 400);
        assert_eq!(
            CatalogError::from(ProductError::NotFound("7".into())).status(),
            404
        );
        assert_eq!(
            CatalogError::from(IngredientError::DatabaseError("disk".into())).status(),
            500
        );
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = CatalogError::from(IngredientError::NotFound("3".into()));
        assert_eq!(err.to_string(), "Ingredient not found: 3");
    }
}
