//! Observable snapshot of the detail screen.

use serde::Serialize;
use ts_rs::TS;

use savor_core::{pricing, Extra, ExtrasLedger, Item, ItemId, Money, MoneyFormatter};

/// Header icon when the item is a favorite.
pub const FAVORITE_ICON: &str = "favorite";

/// Header icon when it is not.
pub const NOT_FAVORITE_ICON: &str = "favorite-border";

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct DetailsView {
    pub item_id: Option<ItemId>,
    pub item: Option<Item>,
    pub extras: Vec<Extra>,
    pub order_quantity: u32,
    pub total: Money,
    pub formatted_total: String,
    pub is_favorite: bool,
    pub order_confirmed: bool,
    pub favorite_icon: String,
}

impl DetailsView {
    /// Derives a snapshot. The total is computed here, never stored.
    pub fn compute(
        item_id: Option<ItemId>,
        item: Option<&Item>,
        ledger: &ExtrasLedger,
        order_quantity: u32,
        is_favorite: bool,
        order_confirmed: bool,
        formatter: &MoneyFormatter,
    ) -> Self {
        let total = pricing::ledger_total(item, ledger, order_quantity);
        let icon = if is_favorite {
            FAVORITE_ICON
        } else {
            NOT_FAVORITE_ICON
        };

        DetailsView {
            item_id,
            item: item.cloned(),
            extras: ledger.extras().to_vec(),
            order_quantity,
            total,
            formatted_total: formatter.format(total),
            is_favorite,
            order_confirmed,
            favorite_icon: icon.to_string(),
        }
    }

    /// Snapshot of a session with nothing open.
    pub fn empty(formatter: &MoneyFormatter) -> Self {
        Self::compute(
            None,
            None,
            &ExtrasLedger::new(),
            savor_core::quantity::MIN_ORDER_QUANTITY,
            false,
            false,
            formatter,
        )
    }

    pub fn is_loaded(&self) -> bool {
        self.item.is_some()
    }
}
