use actor_framework::{
    ActorEntity, EntityStore, FrameworkError, MemoryStore, ResourceActor, StoreError,
};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Part {
    id: u32,
    name: String,
    batch: String,
}

#[derive(Debug)]
struct PartCreate {
    name: String,
    batch: String,
}

#[derive(Debug, Default)]
struct PartUpdate {
    name: Option<String>,
    batch: Option<String>,
}

#[derive(Debug, Default)]
struct PartFilter {
    name: Option<String>,
    batch: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("Part name cannot be empty")]
struct PartError;

impl ActorEntity for Part {
    type Id = u32;
    type Create = PartCreate;
    type Update = PartUpdate;
    type Filter = PartFilter;
    type Error = PartError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: PartCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(PartError);
        }
        Ok(Self {
            id,
            name: params.name,
            batch: params.batch,
        })
    }

    fn on_update(&mut self, update: PartUpdate) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.is_empty() {
                return Err(PartError);
            }
            self.name = name;
        }
        if let Some(batch) = update.batch {
            self.batch = batch;
        }
        Ok(())
    }

    fn matches(&self, filter: &PartFilter) -> bool {
        filter.name.as_ref().map_or(true, |n| *n == self.name)
            && filter.batch.as_ref().map_or(true, |b| *b == self.batch)
    }
}

fn part(name: &str, batch: &str) -> PartCreate {
    PartCreate {
        name: name.into(),
        batch: batch.into(),
    }
}

/// Store that refuses every write once its budget is spent.
struct BudgetStore {
    inner: MemoryStore<Part>,
    writes_left: usize,
}

impl EntityStore<Part> for BudgetStore {
    fn next_id(&mut self) -> Result<u32, StoreError> {
        self.inner.next_id()
    }

    fn find_all(&self) -> Result<Vec<Part>, StoreError> {
        self.inner.find_all()
    }

    fn find_by_id(&self, id: &u32) -> Result<Option<Part>, StoreError> {
        self.inner.find_by_id(id)
    }

    fn save(&mut self, item: Part) -> Result<Part, StoreError> {
        if self.writes_left == 0 {
            return Err(StoreError::Backend("disk full".into()));
        }
        self.writes_left -= 1;
        self.inner.save(item)
    }

    fn delete(&mut self, id: &u32) -> Result<Option<Part>, StoreError> {
        self.inner.delete(id)
    }

    fn delete_matching(&mut self, filter: &PartFilter) -> Result<usize, StoreError> {
        self.inner.delete_matching(filter)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Part>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Create
    let id = client.create(part("Bolt", "A")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Partial update leaves unset fields alone
    let update = PartUpdate {
        name: Some("Nut".into()),
        ..Default::default()
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.name, "Nut");
    assert_eq!(updated.batch, "A");

    // 3. Delete hands back the removed record
    let deleted = client.delete(id).await.unwrap();
    assert_eq!(deleted.name, "Nut");
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_search_and_delete_matching() {
    let (actor, client) = ResourceActor::<Part>::new(10);
    tokio::spawn(actor.run());

    client.create(part("Bolt", "A")).await.unwrap();
    client.create(part("Nut", "A")).await.unwrap();
    client.create(part("Bolt", "B")).await.unwrap();

    let bolts_in_a = client
        .search(PartFilter {
            name: Some("Bolt".into()),
            batch: Some("A".into()),
        })
        .await
        .unwrap();
    assert_eq!(bolts_in_a.len(), 1);
    assert_eq!(bolts_in_a[0].id, 1);

    let everything = client.search(PartFilter::default()).await.unwrap();
    assert_eq!(everything, client.list().await.unwrap());

    let removed = client
        .delete_matching(PartFilter {
            batch: Some("A".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(removed, 2);

    let remaining = client.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].batch, "B");
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Part>::new(10);
    tokio::spawn(actor.run());

    let update = client.update(42, PartUpdate::default()).await;
    assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "42"));

    let delete = client.delete(42).await;
    assert!(matches!(delete, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_rejected_update_keeps_stored_state() {
    let (actor, client) = ResourceActor::<Part>::new(10);
    tokio::spawn(actor.run());

    let id = client.create(part("Bolt", "A")).await.unwrap();
    let update = PartUpdate {
        name: Some(String::new()),
        batch: Some("Z".into()),
    };
    let result = client.update(id, update).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.batch, "A");
}

#[tokio::test]
async fn test_store_failures_surface_as_store_errors() {
    let store = BudgetStore {
        inner: MemoryStore::new(),
        writes_left: 1,
    };
    let (actor, client) = ResourceActor::<Part, BudgetStore>::with_store(10, store);
    tokio::spawn(actor.run());

    client.create(part("Bolt", "A")).await.unwrap();
    let second = client.create(part("Nut", "A")).await;
    assert!(matches!(
        second,
        Err(FrameworkError::Store(StoreError::Backend(_)))
    ));
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Part>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
