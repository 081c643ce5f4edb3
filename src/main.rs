//! Demo run of the catalog: create a product with ingredients, update it, inspect it and
//! delete it again.
//!
//! Set `CATALOG_CONFIG` to a TOML file to override the embedded configuration.

use catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use catalog::model::{Category, IngredientPayload, ProductFilter, ProductPayload, ProductUpdate};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = CatalogConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.logging);

    info!("Starting product catalog");
    let system = CatalogSystem::new(&config);
    let service = system.service.clone();

    let payload = ProductPayload {
        name: Some("Burger".to_string()),
        quantity: Some(1),
        price: Some(5.0),
        category: Some(Category::Food),
        ingredients: vec![
            IngredientPayload {
                name: Some("Bun".to_string()),
                quantity: Some(2),
                price: Some(0.5),
            },
            IngredientPayload {
                name: Some("Patty".to_string()),
                quantity: Some(1),
                price: Some(2.0),
            },
        ],
    };

    let span = tracing::info_span!("product_creation");
    let reference = service
        .create_product(Some(payload))
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    info!(%reference, "Product created");

    let filter = ProductFilter {
        product_reference: Some(reference.clone()),
        ..Default::default()
    };
    let burger = service
        .search_products(filter)
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .next()
        .ok_or("created product not found")?;

    let update = ProductUpdate {
        price: Some(6.5),
        ..Default::default()
    };
    let updated = service
        .update_product(burger.id, update)
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %updated.id, name = %updated.name, price = updated.price, "Product updated");

    let ingredients = service
        .ingredients_of_product(burger.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = ingredients.len(), "Ingredients linked to product");

    // Invalid payloads are rejected before anything is written
    if let Err(e) = service.create_product(None).await {
        info!(status = e.status(), error = %e, "Rejected empty request");
    }

    let span = tracing::info_span!("product_removal");
    let deleted = service
        .delete_product(burger.id)
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    let remaining = service
        .list_ingredients()
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %deleted.id, remaining = remaining.len(), "Product deleted");

    drop(service);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
