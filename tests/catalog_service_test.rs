//! Service behaviour when a store fails underneath it.

use actor_framework::{EntityStore, MemoryStore, ResourceActor, StoreError};
use catalog::clients::{IngredientClient, ProductClient};
use catalog::model::{
    Category, Ingredient, IngredientFilter, IngredientId, IngredientPayload, Product,
    ProductPayload, ProductReference,
};
use catalog::service::{CatalogError, CatalogService, ReferenceGenerator, UuidReferences};
use std::sync::Arc;

/// Ingredient store that accepts a fixed number of writes and then fails every save.
struct FlakyIngredients {
    inner: MemoryStore<Ingredient>,
    saves_left: usize,
    fail_bulk_delete: bool,
}

impl FlakyIngredients {
    fn new(saves_left: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            saves_left,
            fail_bulk_delete: false,
        }
    }
}

impl EntityStore<Ingredient> for FlakyIngredients {
    fn next_id(&mut self) -> Result<IngredientId, StoreError> {
        self.inner.next_id()
    }

    fn find_all(&self) -> Result<Vec<Ingredient>, StoreError> {
        self.inner.find_all()
    }

    fn find_by_id(&self, id: &IngredientId) -> Result<Option<Ingredient>, StoreError> {
        self.inner.find_by_id(id)
    }

    fn save(&mut self, item: Ingredient) -> Result<Ingredient, StoreError> {
        if self.saves_left == 0 {
            return Err(StoreError::Backend("ingredient table is read-only".into()));
        }
        self.saves_left -= 1;
        self.inner.save(item)
    }

    fn delete(&mut self, id: &IngredientId) -> Result<Option<Ingredient>, StoreError> {
        self.inner.delete(id)
    }

    fn delete_matching(&mut self, filter: &IngredientFilter) -> Result<usize, StoreError> {
        if self.fail_bulk_delete {
            return Err(StoreError::Backend("bulk delete unavailable".into()));
        }
        self.inner.delete_matching(filter)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Hands out the same token every time, as a colliding generator would.
struct SameReference(&'static str);

impl ReferenceGenerator for SameReference {
    fn generate(&self) -> ProductReference {
        ProductReference::new(self.0)
    }
}

fn build_service(store: FlakyIngredients) -> CatalogService {
    build_service_with(store, Arc::new(UuidReferences::new("REF")))
}

fn build_service_with(
    store: FlakyIngredients,
    references: Arc<dyn ReferenceGenerator>,
) -> CatalogService {
    let (product_actor, products) = catalog::product_actor::new(10);
    let (ingredient_actor, ingredients) =
        ResourceActor::<Ingredient, FlakyIngredients>::with_store(10, store);
    tokio::spawn(product_actor.run());
    tokio::spawn(ingredient_actor.run());

    CatalogService::new(
        products,
        IngredientClient::new(ingredients),
        references,
    )
}

fn three_course_payload() -> ProductPayload {
    let entry = |name: &str| IngredientPayload {
        name: Some(name.to_string()),
        quantity: Some(1),
        price: Some(1.0),
    };
    ProductPayload {
        name: Some("Menu".into()),
        quantity: Some(1),
        price: Some(12.0),
        category: Some(Category::Other),
        ingredients: vec![entry("Starter"), entry("Main"), entry("Dessert")],
    }
}

#[tokio::test]
async fn test_failed_ingredient_write_leaves_nothing_behind() {
    // Two ingredient saves succeed, the third fails
    let service = build_service(FlakyIngredients::new(2));

    let result = service.create_product(Some(three_course_payload())).await;

    assert!(matches!(result, Err(CatalogError::Storage(ref msg)) if msg.contains("read-only")));
    assert_eq!(result.unwrap_err().status(), 500);
    assert!(service.list_products().await.unwrap().is_empty());
    assert!(service.list_ingredients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rollback_spares_rows_of_product_with_same_reference() {
    let service = build_service_with(
        FlakyIngredients::new(2),
        Arc::new(SameReference("REF-shared")),
    );

    let mut first = three_course_payload();
    first.ingredients.truncate(2);
    let reference = service.create_product(Some(first)).await.unwrap();

    // Ingredient budget is spent, so the second create fails on its first ingredient
    let mut second = three_course_payload();
    second.name = Some("Lunch".into());
    let result = service.create_product(Some(second)).await;
    assert!(matches!(result, Err(CatalogError::Storage(_))));

    let products = service.list_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Menu");

    let survivors = service.list_ingredients().await.unwrap();
    assert_eq!(survivors.len(), 2);
    assert!(survivors.iter().all(|i| i.product_reference == reference));
    assert_eq!(
        service.ingredients_of_product(products[0].id).await.unwrap(),
        survivors
    );
}

#[tokio::test]
async fn test_store_failure_on_first_ingredient() {
    let service = build_service(FlakyIngredients::new(0));

    let result = service.create_product(Some(three_course_payload())).await;

    assert!(matches!(result, Err(CatalogError::Storage(_))));
    assert!(service.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_products_without_ingredients_never_touch_ingredient_store() {
    let service = build_service(FlakyIngredients::new(0));

    let mut payload = three_course_payload();
    payload.ingredients.clear();
    let reference = service.create_product(Some(payload)).await.unwrap();

    let products = service.list_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_reference, reference);
}

#[tokio::test]
async fn test_failed_cascade_surfaces_storage_error() {
    let mut store = FlakyIngredients::new(10);
    store.fail_bulk_delete = true;
    let service = build_service(store);

    service
        .create_product(Some(three_course_payload()))
        .await
        .unwrap();
    let id = service.list_products().await.unwrap()[0].id;

    let result = service.delete_product(id).await;

    assert!(matches!(result, Err(CatalogError::Storage(ref msg)) if msg.contains("bulk delete")));
    // The product row is gone; its ingredients are still there
    assert!(service.find_product(id).await.unwrap().is_none());
    assert_eq!(service.list_ingredients().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_service_over_product_client_built_by_hand() {
    let (product_actor, generic_products) = ResourceActor::<Product>::new(10);
    tokio::spawn(product_actor.run());
    // The ingredient actor is never started, so its channel is closed
    let (ingredient_actor, ingredients) = catalog::ingredient_actor::new(10);
    drop(ingredient_actor);

    let service = CatalogService::new(
        ProductClient::new(generic_products),
        ingredients,
        Arc::new(UuidReferences::new("REF")),
    );

    let result = service.create_product(Some(three_course_payload())).await;
    assert!(matches!(result, Err(CatalogError::Storage(ref msg)) if msg.contains("Actor closed")));
    assert!(service.list_products().await.unwrap().is_empty());
}
