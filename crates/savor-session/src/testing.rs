//! In-memory `MenuApi` with gates that hold replies until released.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{Notify, Semaphore};

use savor_client::{ClientError, ClientResult, MenuApi};
use savor_core::{
    CatalogFilter, Category, CategoryId, ExtraDefinition, ExtraId, Item, ItemId, ItemSummary,
    Money, Order,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetFood,
    ListFavorites,
    CreateFavorite,
    DeleteFavorite,
    CreateOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetFood(ItemId),
    ListFavorites(ItemId),
    CreateFavorite(ItemSummary),
    DeleteFavorite(ItemId),
    CreateOrder(Order),
}

#[derive(Default)]
pub struct FakeMenuApi {
    items: Mutex<HashMap<ItemId, Item>>,
    favorites: Mutex<HashSet<ItemId>>,
    failing: Mutex<HashSet<Endpoint>>,
    gates: Mutex<HashMap<Endpoint, Arc<Semaphore>>>,
    calls: Mutex<Vec<Call>>,
    call_made: Notify,
}

impl FakeMenuApi {
    pub fn new() -> Arc<Self> {
        let api = Self::default();
        api.add_item(item(1, 1000, &[(1, 200)]));
        api.add_item(item(2, 2500, &[(5, 300), (6, 100)]));
        Arc::new(api)
    }

    pub fn add_item(&self, item: Item) {
        self.items.lock().unwrap().insert(item.id, item);
    }

    pub fn set_favorite(&self, id: ItemId) {
        self.favorites.lock().unwrap().insert(id);
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.lock().unwrap().insert(endpoint);
    }

    /// Replies on `endpoint` wait for [`release`](Self::release).
    pub fn hold(&self, endpoint: Endpoint) {
        self.gates
            .lock()
            .unwrap()
            .insert(endpoint, Arc::new(Semaphore::new(0)));
    }

    /// Lets one held reply through.
    pub fn release(&self, endpoint: Endpoint) {
        if let Some(gate) = self.gates.lock().unwrap().get(&endpoint) {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Waits until a call matching `pred` has reached the fake.
    pub async fn wait_for_call(&self, pred: impl Fn(&Call) -> bool) {
        loop {
            let notified = self.call_made.notified();
            if self.calls().iter().any(&pred) {
                return;
            }
            notified.await;
        }
    }

    async fn enter(&self, endpoint: Endpoint, call: Call) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        self.call_made.notify_waiters();

        let gate = self.gates.lock().unwrap().get(&endpoint).cloned();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        if self.failing.lock().unwrap().contains(&endpoint) {
            return Err(ClientError::Status {
                endpoint: format!("{endpoint:?}"),
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MenuApi for FakeMenuApi {
    async fn get_food(&self, id: ItemId) -> ClientResult<Item> {
        self.enter(Endpoint::GetFood, Call::GetFood(id)).await?;
        self.items
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                endpoint: format!("GET foods/{id}"),
                status: 404,
                body: String::new(),
            })
    }

    async fn list_favorites(&self, id: ItemId) -> ClientResult<Vec<ItemSummary>> {
        self.enter(Endpoint::ListFavorites, Call::ListFavorites(id))
            .await?;
        let favorited = self.favorites.lock().unwrap().contains(&id);
        let items = self.items.lock().unwrap();
        Ok(items
            .get(&id)
            .filter(|_| favorited)
            .map(ItemSummary::from)
            .into_iter()
            .collect())
    }

    async fn create_favorite(&self, favorite: &ItemSummary) -> ClientResult<()> {
        self.enter(Endpoint::CreateFavorite, Call::CreateFavorite(favorite.clone()))
            .await?;
        self.favorites.lock().unwrap().insert(favorite.id);
        Ok(())
    }

    async fn delete_favorite(&self, id: ItemId) -> ClientResult<()> {
        self.enter(Endpoint::DeleteFavorite, Call::DeleteFavorite(id))
            .await?;
        self.favorites.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn create_order(&self, order: &Order) -> ClientResult<()> {
        self.enter(Endpoint::CreateOrder, Call::CreateOrder(order.clone()))
            .await
    }

    async fn list_foods(&self, _filter: &CatalogFilter) -> ClientResult<Vec<ItemSummary>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .map(ItemSummary::from)
            .collect())
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        Ok(Vec::new())
    }
}

/// Item `id` at `price_cents` with `(extra_id, value_cents)` extras.
pub fn item(id: u64, price_cents: i64, extras: &[(u64, i64)]) -> Item {
    Item {
        id: ItemId(id),
        name: format!("Food {id}"),
        description: "Test food".to_string(),
        price: Money::from_cents(price_cents),
        image_url: format!("https://example.com/{id}.png"),
        thumbnail_url: format!("https://example.com/{id}-thumb.png"),
        category: CategoryId(1),
        extras: extras
            .iter()
            .map(|&(extra_id, value)| ExtraDefinition {
                id: ExtraId(extra_id),
                name: format!("Extra {extra_id}"),
                value: Money::from_cents(value),
            })
            .collect(),
    }
}
