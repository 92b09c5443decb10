//! # Domain Types
//!
//! Core domain types shared by the storefront crates.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │   ItemSummary   │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │──►│  Item minus     │   │  product_id     │       │
//! │  │  price (Money)  │   │  its extras     │   │  extras + qty   │       │
//! │  │  extras: [Def]  │   │  (favorite row) │   │  (snapshot)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ExtraDefinition │   │     Extra       │   │    Category     │       │
//! │  │  id, name,      │──►│  definition +   │   │  id, title,     │       │
//! │  │  value          │   │  quantity ≥ 0   │   │  image_url      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are numeric on the wire, so they travel as transparent
//! `u64` newtypes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::extras::ExtrasLedger;
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(#[ts(type = "number")] pub u64);

        impl $name {
            #[inline]
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }
    };
}

numeric_id! {
    /// Menu item identifier.
    ItemId
}

numeric_id! {
    /// Extra (add-on) identifier, unique within an item.
    ExtraId
}

numeric_id! {
    /// Menu category identifier.
    CategoryId
}

// =============================================================================
// Extras
// =============================================================================

/// An add-on as the menu service describes it: no quantity yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtraDefinition {
    pub id: ExtraId,
    pub name: String,
    /// Price per unit.
    pub value: Money,
}

/// An add-on with the quantity the customer picked.
///
/// Only `quantity` changes, and only through [`ExtrasLedger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub value: Money,
    pub quantity: u32,
}

impl Extra {
    /// Seeds an extra from its definition with quantity 0.
    pub fn from_definition(def: &ExtraDefinition) -> Self {
        Extra {
            id: def.id,
            name: def.name.clone(),
            value: def.value,
            quantity: 0,
        }
    }

    /// `value × quantity`.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.value.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A menu item with its available extras.
///
/// Immutable once fetched; a new identifier replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Base unit price.
    pub price: Money,
    pub image_url: String,
    pub thumbnail_url: String,
    pub category: CategoryId,
    #[serde(default)]
    pub extras: Vec<ExtraDefinition>,
}

/// An item without its extras list.
///
/// Used both as the favorite record and as a catalog list row. Catalog rows
/// may omit the image and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        ItemSummary {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image_url: Some(item.image_url.clone()),
            thumbnail_url: item.thumbnail_url.clone(),
            category: Some(item.category),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A menu category shown on the browse screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub image_url: String,
}

// =============================================================================
// Order
// =============================================================================

/// The order payload, composed once at submission time.
///
/// The full extras list is sent, zero-quantity entries included. The order
/// quantity is not part of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub product_id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: CategoryId,
    pub thumbnail_url: String,
    pub extras: Vec<Extra>,
}

impl Order {
    /// Builds the snapshot from the loaded item and the current ledger.
    pub fn snapshot(item: &Item, ledger: &ExtrasLedger) -> Self {
        Order {
            product_id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category,
            thumbnail_url: item.thumbnail_url.clone(),
            extras: ledger.extras().to_vec(),
        }
    }
}

/// Returned to the caller after the menu service accepted an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderConfirmation {
    pub product_id: ItemId,
    #[ts(type = "string")]
    pub confirmed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn now(product_id: ItemId) -> Self {
        OrderConfirmation {
            product_id,
            confirmed_at: Utc::now(),
        }
    }
}
