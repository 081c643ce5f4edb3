use super::ProductReference;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub u32);

impl From<u32> for IngredientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ingredient row. It belongs to the product whose reference it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub product_reference: ProductReference,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Ingredient {
    pub fn new(id: IngredientId, params: IngredientCreate) -> Self {
        Self {
            id,
            product_reference: params.product_reference,
            name: params.name,
            quantity: params.quantity,
            price: params.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientCreate {
    pub product_reference: ProductReference,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientUpdate {
    pub product_reference: Option<ProductReference>,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientFilter {
    pub product_reference: Option<ProductReference>,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

impl IngredientFilter {
    /// Filter selecting every ingredient owned by `reference`.
    pub fn owned_by(reference: &ProductReference) -> Self {
        Self {
            product_reference: Some(reference.clone()),
            ..Default::default()
        }
    }
}

/// Ingredient entry nested in a [`ProductPayload`](super::ProductPayload).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientPayload {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}
