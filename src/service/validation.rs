//! # Creation Payload Validation
//!
//! Checks a [`ProductPayload`] before anything is written. Checks run in a fixed order and
//! the first failure wins: payload, name, quantity, price, category, then every ingredient in
//! list order (name, quantity, price).
//!
//! A successful check yields a [`ValidProduct`] whose fields are no longer optional.

use crate::model::{
    Category, IngredientCreate, IngredientPayload, ProductCreate, ProductPayload,
    ProductReference,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product cannot be null")]
    MissingPayload,

    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Product quantity cannot be null")]
    MissingQuantity,

    #[error("Product price cannot be null")]
    MissingPrice,

    #[error("Product price must be a number")]
    InvalidPrice,

    #[error("Product category cannot be null")]
    MissingCategory,

    #[error("Ingredient {index} name cannot be empty")]
    IngredientName { index: usize },

    #[error("Ingredient {index} quantity cannot be null")]
    IngredientQuantity { index: usize },

    #[error("Ingredient {index} price cannot be null or NaN")]
    IngredientPrice { index: usize },
}

impl ValidationError {
    /// Name of the offending payload field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingPayload => "product",
            ValidationError::EmptyName | ValidationError::IngredientName { .. } => "name",
            ValidationError::MissingQuantity | ValidationError::IngredientQuantity { .. } => {
                "quantity"
            }
            ValidationError::MissingPrice
            | ValidationError::InvalidPrice
            | ValidationError::IngredientPrice { .. } => "price",
            ValidationError::MissingCategory => "category",
        }
    }

    /// Position of the offending ingredient, if the failure is inside the ingredient list.
    pub fn ingredient_index(&self) -> Option<usize> {
        match self {
            ValidationError::IngredientName { index }
            | ValidationError::IngredientQuantity { index }
            | ValidationError::IngredientPrice { index } => Some(*index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidIngredient {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<ValidIngredient>,
}

impl ValidProduct {
    /// Stamps the product and every ingredient with `reference`.
    pub fn into_create(
        self,
        reference: &ProductReference,
    ) -> (ProductCreate, Vec<IngredientCreate>) {
        let ingredients = self
            .ingredients
            .into_iter()
            .map(|ingredient| IngredientCreate {
                product_reference: reference.clone(),
                name: ingredient.name,
                quantity: ingredient.quantity,
                price: ingredient.price,
            })
            .collect();
        let product = ProductCreate {
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            category: self.category,
            product_reference: reference.clone(),
        };
        (product, ingredients)
    }
}

pub fn validate(payload: Option<ProductPayload>) -> Result<ValidProduct, ValidationError> {
    let payload = payload.ok_or(ValidationError::MissingPayload)?;

    let name = payload
        .name
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::EmptyName)?;
    let quantity = payload.quantity.ok_or(ValidationError::MissingQuantity)?;
    let price = payload.price.ok_or(ValidationError::MissingPrice)?;
    if price.is_nan() {
        return Err(ValidationError::InvalidPrice);
    }
    let category = payload.category.ok_or(ValidationError::MissingCategory)?;

    let ingredients = payload
        .ingredients
        .into_iter()
        .enumerate()
        .map(|(index, ingredient)| validate_ingredient(index, ingredient))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidProduct {
        name,
        quantity,
        price,
        category,
        ingredients,
    })
}

fn validate_ingredient(
    index: usize,
    ingredient: IngredientPayload,
) -> Result<ValidIngredient, ValidationError> {
    let name = ingredient
        .name
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::IngredientName { index })?;
    let quantity = ingredient
        .quantity
        .ok_or(ValidationError::IngredientQuantity { index })?;
    let price = ingredient
        .price
        .filter(|price| !price.is_nan())
        .ok_or(ValidationError::IngredientPrice { index })?;
    Ok(ValidIngredient {
        name,
        quantity,
        price,
    })
}
