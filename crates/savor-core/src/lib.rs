//! # savor-core: Pure Order-Composition Logic for the Savor Storefront
//!
//! This crate holds everything the detail screen computes: the extras
//! ledger, the order quantity, the running total, and how money is shown.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Savor Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/storefront (CLI shell)                     │   │
//! │  │         browse ──► show ──► favorite ──► order                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │      savor-session (fetch coordinator, favorites, orders)       │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌───────▼────────────────────┐   │
//! │  │   ★ savor-core (THIS CRATE) ★   │  │  savor-client (HTTP)       │   │
//! │  │                                 │  │  MenuApi, HttpMenuApi      │   │
//! │  │  money  format  types  extras   │  └────────────────────────────┘   │
//! │  │  quantity  pricing  catalog     │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO NETWORK • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`format`] - Localized currency display strings
//! - [`types`] - Domain types (Item, Extra, Order, etc.)
//! - [`extras`] - Extras Ledger
//! - [`quantity`] - Order quantity with a floor of 1
//! - [`pricing`] - Running total derivation
//! - [`catalog`] - Browse-screen filter state
//! - [`validation`] - Raw input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use savor_core::{pricing, ExtrasLedger, MoneyFormatter, QuantityCounter};
//! use savor_core::{ExtraDefinition, ExtraId, Money};
//!
//! let bacon = ExtraDefinition {
//!     id: ExtraId(1),
//!     name: "Bacon".to_string(),
//!     value: Money::from_cents(200),
//! };
//!
//! let mut ledger = ExtrasLedger::new();
//! ledger.load(&[bacon]);
//! ledger.increment(ExtraId(1));
//!
//! let mut qty = QuantityCounter::new();
//! qty.increment();
//!
//! let unit = Money::from_cents(1000) + pricing::extras_subtotal(ledger.extras());
//! let total = unit.multiply_quantity(qty.get());
//! assert_eq!(MoneyFormatter::en_us().format(total), "$24.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod extras;
pub mod format;
pub mod money;
pub mod pricing;
pub mod quantity;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::CatalogFilter;
pub use error::{CoreError, CoreResult, ValidationError};
pub use extras::ExtrasLedger;
pub use format::{Locale, MoneyFormatter};
pub use money::Money;
pub use quantity::QuantityCounter;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of the browse-screen search text.
pub const MAX_SEARCH_LEN: usize = 100;

/// Upper bound for repeated increments requested in one shell command.
pub const MAX_STEP_COUNT: u32 = 99;
