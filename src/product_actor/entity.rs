//! ActorEntity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use actor_framework::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from already validated creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self::new(id, params))
    }

    /// Applies a partial update.
    ///
    /// # Fields Updated
    /// Each of `name`, `quantity`, `price`, `category` and `product_reference` is
    /// overwritten only when the update carries a value for it.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(reference) = update.product_reference {
            self.product_reference = reference;
        }
        Ok(())
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.name.as_ref().map_or(true, |name| *name == self.name)
            && filter.quantity.map_or(true, |quantity| quantity == self.quantity)
            && filter.price.map_or(true, |price| price == self.price)
            && filter.category.map_or(true, |category| category == self.category)
            && filter
                .product_reference
                .as_ref()
                .map_or(true, |reference| *reference == self.product_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ProductReference};

    fn pizza() -> Product {
        Product {
            id: ProductId(7),
            name: "Pizza".into(),
            quantity: 3,
            price: 5.0,
            category: Category::Food,
            product_reference: ProductReference::new("REF-pizza"),
        }
    }

    #[test]
    fn test_partial_update_keeps_unset_fields() {
        let mut product = pizza();
        let update = ProductUpdate {
            price: Some(6.5),
            ..Default::default()
        };
        product.on_update(update).unwrap();

        assert_eq!(product.name, "Pizza");
        assert_eq!(product.price, 6.5);
        assert_eq!(product.quantity, 3);
        assert_eq!(product.category, Category::Food);
        assert_eq!(product.product_reference.as_str(), "REF-pizza");
    }

    #[test]
    fn test_update_can_move_reference() {
        let mut product = pizza();
        let update = ProductUpdate {
            product_reference: Some(ProductReference::new("REF-other")),
            ..Default::default()
        };
        product.on_update(update).unwrap();
        assert_eq!(product.product_reference.as_str(), "REF-other");
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let product = pizza();
        assert!(product.matches(&ProductFilter::default()));
        assert!(product.matches(&ProductFilter {
            name: Some("Pizza".into()),
            category: Some(Category::Food),
            ..Default::default()
        }));
        assert!(!product.matches(&ProductFilter {
            name: Some("Pizza".into()),
            category: Some(Category::Drink),
            ..Default::default()
        }));
        // Exact, case-sensitive text match
        assert!(!product.matches(&ProductFilter {
            name: Some("pizza".into()),
            ..Default::default()
        }));
    }
}
