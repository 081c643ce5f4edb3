//! # Catalog Service
//!
//! Orchestrates the product and ingredient actors. The actors each guarantee that a single
//! row write is atomic; everything that spans both of them lives here:
//!
//! - **Create** validates the payload, generates a [`ProductReference`], writes the product and
//!   then one ingredient per entry, all stamped with that reference. If an ingredient write
//!   fails the rows already written are removed again before the error is returned.
//! - **Delete** removes the product and then, in one bulk request, every ingredient carrying
//!   its reference.
//! - **Updates** are partial: only fields set on the update overwrite stored values.
//!
//! The service holds no state of its own and is cheap to clone.

pub mod error;
pub mod reference;
pub mod validation;

pub use error::CatalogError;
pub use reference::{ReferenceGenerator, TimestampReferences, UuidReferences};
pub use validation::ValidationError;

use crate::clients::{ActorClient, IngredientClient, ProductClient};
use crate::model::{
    Ingredient, IngredientFilter, IngredientId, IngredientUpdate, Product, ProductFilter,
    ProductId, ProductPayload, ProductReference, ProductUpdate,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[derive(Clone)]
pub struct CatalogService {
    products: ProductClient,
    ingredients: IngredientClient,
    references: Arc<dyn ReferenceGenerator>,
}

impl CatalogService {
    pub fn new(
        products: ProductClient,
        ingredients: IngredientClient,
        references: Arc<dyn ReferenceGenerator>,
    ) -> Self {
        Self {
            products,
            ingredients,
            references,
        }
    }

    /// Creates a product and its ingredients, returning the reference that links them.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::BadRequest`] when the payload fails validation. Nothing is written.
    /// - [`CatalogError::Storage`] when a write fails. Rows written so far are removed.
    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        payload: Option<ProductPayload>,
    ) -> Result<ProductReference, CatalogError> {
        let valid = match validation::validate(payload) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(field = e.field(), error = %e, "Rejected product payload");
                return Err(e.into());
            }
        };

        let reference = self.references.generate();
        let (product, ingredients) = valid.into_create(&reference);

        let product_id = self.products.create_product(product).await?;
        info!(%product_id, %reference, "Product stored");

        let mut written = Vec::with_capacity(ingredients.len());
        for (index, ingredient) in ingredients.into_iter().enumerate() {
            match self.ingredients.create_ingredient(ingredient).await {
                Ok(id) => written.push(id),
                Err(e) => {
                    error!(%product_id, %reference, index, error = %e, "Ingredient write failed");
                    self.roll_back(product_id, &written).await;
                    return Err(CatalogError::Storage(e.to_string()));
                }
            }
        }

        Ok(reference)
    }

    /// Best-effort removal of a half-created product and the ingredient rows it wrote.
    /// Rows are removed by id; another product may carry the same reference.
    /// Failures are logged, not returned.
    async fn roll_back(&self, product_id: ProductId, ingredient_ids: &[IngredientId]) {
        if let Err(e) = self.products.delete(product_id).await {
            warn!(%product_id, error = %e, "Rollback could not remove product");
        }
        for &id in ingredient_ids {
            if let Err(e) = self.ingredients.delete(id).await {
                warn!(
                    %product_id,
                    ingredient_id = %id,
                    error = %e,
                    "Rollback could not remove ingredient"
                );
            }
        }
        info!(%product_id, removed = ingredient_ids.len(), "Rolled back partial create");
    }

    /// Applies a partial update to a product and returns the stored result.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        if let Some(reference) = &update.product_reference {
            // Ingredients keep whatever token they were created with
            warn!(%id, %reference, "Update carries a product reference");
        }
        Ok(self.products.update_product(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_ingredient(
        &self,
        id: IngredientId,
        update: IngredientUpdate,
    ) -> Result<Ingredient, CatalogError> {
        Ok(self.ingredients.update_ingredient(id, update).await?)
    }

    /// Deletes a product and every ingredient carrying its reference.
    /// Returns the deleted product.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let product = self.products.delete(id).await?;
        let removed = self
            .ingredients
            .delete_by_reference(&product.product_reference)
            .await?;
        info!(%id, reference = %product.product_reference, removed, "Product deleted");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn find_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_ingredient(
        &self,
        id: IngredientId,
    ) -> Result<Option<Ingredient>, CatalogError> {
        Ok(self.ingredients.get(id).await?)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.list().await?)
    }

    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, CatalogError> {
        Ok(self.ingredients.list().await?)
    }

    /// Every ingredient owned by the product with identity `id`.
    #[instrument(skip(self))]
    pub async fn ingredients_of_product(
        &self,
        id: ProductId,
    ) -> Result<Vec<Ingredient>, CatalogError> {
        let Some(product) = self.products.get(id).await? else {
            return Err(CatalogError::NotFound {
                entity: "Product",
                id: id.to_string(),
            });
        };
        Ok(self.ingredients.owned_by(&product.product_reference).await?)
    }

    /// Products matching every field set on `filter`. An empty filter matches all.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogError> {
        let found = self.products.search(filter).await?;
        debug!(hits = found.len(), "Product search");
        Ok(found)
    }

    /// Ingredients matching every field set on `filter`. An empty filter matches all.
    #[instrument(skip(self))]
    pub async fn search_ingredients(
        &self,
        filter: IngredientFilter,
    ) -> Result<Vec<Ingredient>, CatalogError> {
        let found = self.ingredients.search(filter).await?;
        debug!(hits = found.len(), "Ingredient search");
        Ok(found)
    }
}
