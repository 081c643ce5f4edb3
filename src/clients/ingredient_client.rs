//! # Ingredient Client
//!
//! Wraps a `ResourceClient<Ingredient>`. On top of the standard calls it offers lookups and
//! bulk removal by owning product reference.
use crate::clients::ActorClient;
use crate::ingredient_actor::IngredientError;
use crate::model::{
    Ingredient, IngredientCreate, IngredientFilter, IngredientId, IngredientUpdate,
    ProductReference,
};
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Ingredient actor.
#[derive(Clone)]
pub struct IngredientClient {
    inner: ResourceClient<Ingredient>,
}

impl IngredientClient {
    pub fn new(inner: ResourceClient<Ingredient>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_ingredient(
        &self,
        params: IngredientCreate,
    ) -> Result<IngredientId, IngredientError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_ingredient(
        &self,
        id: IngredientId,
        update: IngredientUpdate,
    ) -> Result<Ingredient, IngredientError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Every ingredient stamped with `reference`.
    #[instrument(skip(self))]
    pub async fn owned_by(
        &self,
        reference: &ProductReference,
    ) -> Result<Vec<Ingredient>, IngredientError> {
        self.search(IngredientFilter::owned_by(reference)).await
    }

    /// Removes every ingredient stamped with `reference` in one request.
    /// Returns how many rows were removed.
    #[instrument(skip(self))]
    pub async fn delete_by_reference(
        &self,
        reference: &ProductReference,
    ) -> Result<usize, IngredientError> {
        debug!("Sending request");
        self.inner
            .delete_matching(IngredientFilter::owned_by(reference))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Ingredient> for IngredientClient {
    type Error = IngredientError;

    fn inner(&self) -> &ResourceClient<Ingredient> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => IngredientError::NotFound(id),
            FrameworkError::Store(e) => IngredientError::DatabaseError(e.to_string()),
            other => IngredientError::ActorCommunicationError(other.to_string()),
        }
    }
}
