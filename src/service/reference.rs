//! # Product References
//!
//! A product reference is the token stamped on a product and on each of its ingredients at
//! creation time. Generators read the clock and a random source only; they never fail.

use crate::lifecycle::{ReferenceConfig, ReferenceStrategy};
use crate::model::ProductReference;
use rand::Rng;
use std::sync::Arc;

/// Produces correlation tokens for newly created products.
pub trait ReferenceGenerator: Send + Sync {
    fn generate(&self) -> ProductReference;
}

/// `{prefix}-{local timestamp}-{0..1000}`, e.g. `REF-2026-10-17T12:00:00.123456789-417`.
///
/// Two products created within the same clock tick can draw the same suffix, so uniqueness is
/// best-effort. Use [`UuidReferences`] when that window matters.
#[derive(Debug, Clone)]
pub struct TimestampReferences {
    prefix: String,
}

impl TimestampReferences {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ReferenceGenerator for TimestampReferences {
    fn generate(&self) -> ProductReference {
        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.f");
        let suffix = rand::thread_rng().gen_range(0..1000);
        ProductReference::new(format!("{}-{}-{}", self.prefix, timestamp, suffix))
    }
}

/// `{prefix}-{uuid v4}`.
#[derive(Debug, Clone)]
pub struct UuidReferences {
    prefix: String,
}

impl UuidReferences {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ReferenceGenerator for UuidReferences {
    fn generate(&self) -> ProductReference {
        ProductReference::new(format!("{}-{}", self.prefix, uuid::Uuid::new_v4()))
    }
}

/// Builds the generator selected by `config`.
pub fn generator_for(config: &ReferenceConfig) -> Arc<dyn ReferenceGenerator> {
    match config.strategy {
        ReferenceStrategy::Timestamp => Arc::new(TimestampReferences::new(config.prefix.clone())),
        ReferenceStrategy::Uuid => Arc::new(UuidReferences::new(config.prefix.clone())),
    }
}
