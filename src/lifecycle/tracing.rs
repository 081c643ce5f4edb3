//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter. Module paths are
//! hidden (`with_target(false)`); actors tag their events with `entity_type` instead.
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from `[logging] filter` in
//! the configuration.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `RUST_LOG=info` creating and deleting a product reads:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=0
//! INFO create_product: Created entity_type="Product" id=1 size=1
//! INFO create_product: Product stored product_id=1 reference=REF-2026-10-17T12:00:00.123456789-417
//! INFO create_product: Created entity_type="Ingredient" id=1 size=1
//! INFO delete_product: Deleted entity_type="Product" id=1 size=0
//! INFO delete_product: Deleted matching entity_type="Ingredient" removed=1 size=0
//! INFO delete_product: Product deleted id=1 reference=REF-2026-10-17T12:00:00.123456789-417 removed=1
//! ```

use super::LoggingConfig;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the context
        .compact()
        .init();
}
