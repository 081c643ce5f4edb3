//! # Product
//!
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait so it can be
//! managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
//! - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
//! - Search filters ([`ProductFilter`](crate::model::ProductFilter))

use serde::{Deserialize, Serialize};

use super::IngredientPayload;
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The correlation token that ties a product to its ingredient rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductReference(String);

impl ProductReference {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductReference {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl Display for ProductReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Drink,
    Dessert,
    Other,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Food => "FOOD",
            Category::Drink => "DRINK",
            Category::Dessert => "DESSERT",
            Category::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub category: Category,
    pub product_reference: ProductReference,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the product store)
    /// * `params` - Validated creation data, already stamped with its reference
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            quantity: params.quantity,
            price: params.price,
            category: params.category,
            product_reference: params.product_reference,
        }
    }
}

/// DTO for Product creation. Built from a validated [`ProductPayload`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub category: Category,
    pub product_reference: ProductReference,
}

/// DTO for partial Product updates. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub product_reference: Option<ProductReference>,
}

/// Search criteria for products. Every set field must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub product_reference: Option<ProductReference>,
}

/// Inbound product creation request, as a transport deserializes it.
///
/// Every scalar is optional here so that missing fields reach validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    #[serde(alias = "ingredientDTOs")]
    pub ingredients: Vec<IngredientPayload>,
}
