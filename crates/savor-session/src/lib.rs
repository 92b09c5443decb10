//! # savor-session: Detail Screen Session
//!
//! Ties the pure order-composition logic of `savor-core` to the menu
//! service with cancellable, generation-checked async operations.
//!
//! ## Modules
//!
//! - [`coordinator`] - Generations, tickets, operation and cancel handles
//! - [`session`] - [`DetailsSession`]: open/close, extras, quantity,
//!   favorite toggle, order submission
//! - [`view`] - Observable [`DetailsView`] snapshot
//! - [`overlay`] - Confirmation overlay driver and [`Navigator`] seam
//! - [`error`] - [`SessionError`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use savor_client::{ClientConfig, HttpMenuApi};
//! use savor_core::{ExtraId, ItemId};
//! use savor_session::{DetailsSession, Outcome};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpMenuApi::new(ClientConfig::new("http://localhost:3333/", Duration::from_secs(30))?)?;
//! let session = DetailsSession::new(Arc::new(api));
//!
//! let handles = session.open(ItemId(1));
//! if let Outcome::Completed(item) = handles.item.await? {
//!     println!("{}", item.name);
//! }
//!
//! session.increment_extra(ExtraId(1));
//! session.increment_order_quantity();
//! println!("{}", session.view().formatted_total);
//!
//! session.submit_order()?.await?;
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod error;
pub mod overlay;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::{CancelHandle, FetchKind, Generation, OperationHandle, Outcome};
pub use error::{SessionError, SessionResult};
pub use overlay::{Navigator, Overlay, OverlayProps};
pub use session::{DetailsSession, OpenHandles, SessionOptions};
pub use view::DetailsView;
