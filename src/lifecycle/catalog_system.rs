use super::CatalogConfig;
use crate::service::{reference, CatalogService};
use crate::{ingredient_actor, product_actor};
use tracing::{error, info};

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Product and Ingredient actors
/// - **Wiring**: Handing both clients and the configured reference generator to the
///   [`CatalogService`]
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
///
/// let reference = system.service.create_product(Some(payload)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Entry point for every catalog operation.
    pub service: CatalogService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns both actors and builds the service. Must be called inside a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let buffer_size = config.actors.buffer_size;

        let (product_actor, product_client) = product_actor::new(buffer_size);
        let (ingredient_actor, ingredient_client) = ingredient_actor::new(buffer_size);

        let product_handle = tokio::spawn(product_actor.run());
        let ingredient_handle = tokio::spawn(ingredient_actor.run());

        info!(
            buffer_size,
            strategy = ?config.references.strategy,
            "Catalog system started"
        );

        Self {
            service: CatalogService::new(
                product_client,
                ingredient_client,
                reference::generator_for(&config.references),
            ),
            handles: vec![product_handle, ingredient_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the service closes both request channels; each actor drains what is queued
    /// and exits. Clones of the service handed out earlier keep their actor alive, so drop
    /// them first or this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
