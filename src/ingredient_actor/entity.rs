//! ActorEntity trait implementation for the Ingredient domain type.

use super::IngredientError;
use crate::model::{Ingredient, IngredientCreate, IngredientFilter, IngredientId, IngredientUpdate};
use actor_framework::ActorEntity;

impl ActorEntity for Ingredient {
    type Id = IngredientId;
    type Create = IngredientCreate;
    type Update = IngredientUpdate;
    type Filter = IngredientFilter;
    type Error = IngredientError;

    fn id(&self) -> &IngredientId {
        &self.id
    }

    fn from_create_params(
        id: IngredientId,
        params: IngredientCreate,
    ) -> Result<Self, IngredientError> {
        Ok(Self::new(id, params))
    }

    fn on_update(&mut self, update: IngredientUpdate) -> Result<(), IngredientError> {
        if let Some(reference) = update.product_reference {
            self.product_reference = reference;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    fn matches(&self, filter: &IngredientFilter) -> bool {
        filter
            .product_reference
            .as_ref()
            .map_or(true, |reference| *reference == self.product_reference)
            && filter.name.as_ref().map_or(true, |name| *name == self.name)
            && filter.quantity.map_or(true, |quantity| quantity == self.quantity)
            && filter.price.map_or(true, |price| price == self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductReference;

    #[test]
    fn test_owned_by_filter_selects_reference_only() {
        let bun = Ingredient {
            id: IngredientId(1),
            product_reference: ProductReference::new("REF-a"),
            name: "Bun".into(),
            quantity: 2,
            price: 0.5,
        };
        let reference_a = ProductReference::new("REF-a");
        let reference_b = ProductReference::new("REF-b");

        assert!(bun.matches(&IngredientFilter::owned_by(&reference_a)));
        assert!(!bun.matches(&IngredientFilter::owned_by(&reference_b)));
    }

    #[test]
    fn test_partial_update() {
        let mut bun = Ingredient {
            id: IngredientId(1),
            product_reference: ProductReference::new("REF-a"),
            name: "Bun".into(),
            quantity: 2,
            price: 0.5,
        };
        bun.on_update(IngredientUpdate {
            quantity: Some(4),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(bun.quantity, 4);
        assert_eq!(bun.name, "Bun");
        assert_eq!(bun.price, 0.5);
    }
}
