//! reqwest-backed [`MenuApi`].
//!
//! ## Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `foods/{id}` | Item with extras |
//! | GET    | `favorites?id={id}` | Favorite membership |
//! | POST   | `favorites` | Create favorite |
//! | DELETE | `favorites/{id}` | Delete favorite |
//! | POST   | `orders` | Create order |
//! | GET    | `foods?category_like=&name_like=` | Catalog listing |
//! | GET    | `categories` | Category listing |

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use savor_core::{CatalogFilter, Category, Item, ItemId, ItemSummary, Order};

use crate::api::MenuApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the menu service.
#[derive(Debug, Clone)]
pub struct HttpMenuApi {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpMenuApi {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Maps transport failures and non-2xx statuses to [`ClientError`].
    async fn check(endpoint: &str, sent: reqwest::Result<Response>) -> ClientResult<Response> {
        let resp = sent.map_err(|e| {
            warn!(endpoint, error = %e, "menu service request failed");
            ClientError::Http {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!(endpoint, status, "menu service returned an error status");
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        debug!(endpoint, status = resp.status().as_u16(), "menu service responded");
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> ClientResult<T> {
        resp.json().await.map_err(|e| ClientError::Decode {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl MenuApi for HttpMenuApi {
    async fn get_food(&self, id: ItemId) -> ClientResult<Item> {
        let endpoint = format!("GET foods/{id}");
        let url = self.config.endpoint(&format!("foods/{id}"))?;

        let resp = Self::check(&endpoint, self.http.get(url).send().await).await?;
        Self::decode(&endpoint, resp).await
    }

    async fn list_favorites(&self, id: ItemId) -> ClientResult<Vec<ItemSummary>> {
        let endpoint = "GET favorites";
        let url = self.config.endpoint("favorites")?;

        let sent = self.http.get(url).query(&[("id", id.get())]).send().await;
        let resp = Self::check(endpoint, sent).await?;
        Self::decode(endpoint, resp).await
    }

    async fn create_favorite(&self, favorite: &ItemSummary) -> ClientResult<()> {
        let endpoint = "POST favorites";
        let url = self.config.endpoint("favorites")?;

        Self::check(endpoint, self.http.post(url).json(favorite).send().await).await?;
        Ok(())
    }

    async fn delete_favorite(&self, id: ItemId) -> ClientResult<()> {
        let endpoint = format!("DELETE favorites/{id}");
        let url = self.config.endpoint(&format!("favorites/{id}"))?;

        Self::check(&endpoint, self.http.delete(url).send().await).await?;
        Ok(())
    }

    async fn create_order(&self, order: &Order) -> ClientResult<()> {
        let endpoint = "POST orders";
        let url = self.config.endpoint("orders")?;

        Self::check(endpoint, self.http.post(url).json(order).send().await).await?;
        Ok(())
    }

    async fn list_foods(&self, filter: &CatalogFilter) -> ClientResult<Vec<ItemSummary>> {
        let endpoint = "GET foods";
        let url = self.config.endpoint("foods")?;

        let sent = self
            .http
            .get(url)
            .query(&filter.query_params())
            .send()
            .await;
        let resp = Self::check(endpoint, sent).await?;
        Self::decode(endpoint, resp).await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let endpoint = "GET categories";
        let url = self.config.endpoint("categories")?;

        let resp = Self::check(endpoint, self.http.get(url).send().await).await?;
        Self::decode(endpoint, resp).await
    }
}
