//! # savor-client: Menu Service Client
//!
//! Typed access to the storefront's remote data service: items, favorites,
//! orders, and the catalog.
//!
//! ## Architecture
//!
//! This crate is the only path to the menu service. The session crate
//! talks to the [`MenuApi`] trait; [`HttpMenuApi`] is the production
//! implementation over reqwest.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use savor_client::{ClientConfig, HttpMenuApi, MenuApi};
//! use savor_core::ItemId;
//!
//! # async fn demo() -> Result<(), savor_client::ClientError> {
//! let config = ClientConfig::new("http://localhost:3333/", Duration::from_secs(30))?;
//! let api = HttpMenuApi::new(config)?;
//! let item = api.get_food(ItemId(1)).await?;
//! println!("{}", item.name);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::MenuApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpMenuApi;
