//! The menu service seam.
//!
//! Sessions depend on [`MenuApi`] rather than on HTTP directly, so the
//! detail screen logic runs the same against [`crate::HttpMenuApi`] and
//! against in-memory fakes.

use async_trait::async_trait;
use savor_core::{CatalogFilter, Category, Item, ItemId, ItemSummary, Order};

use crate::error::ClientResult;

/// Remote operations the storefront needs.
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Full item with its extras.
    async fn get_food(&self, id: ItemId) -> ClientResult<Item>;

    /// Favorite records matching `id`. Non-empty means favorited.
    async fn list_favorites(&self, id: ItemId) -> ClientResult<Vec<ItemSummary>>;

    async fn create_favorite(&self, favorite: &ItemSummary) -> ClientResult<()>;

    async fn delete_favorite(&self, id: ItemId) -> ClientResult<()>;

    async fn create_order(&self, order: &Order) -> ClientResult<()>;

    /// Catalog rows matching the filter.
    async fn list_foods(&self, filter: &CatalogFilter) -> ClientResult<Vec<ItemSummary>>;

    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
}
