//! # Extras Ledger
//!
//! Holds the add-ons of the item on screen, each with its own quantity.
//!
//! ## Rules
//! ```text
//! load(defs)      → every extra present, quantity 0, menu order kept
//! increment(id)   → quantity + 1 (no upper bound)
//! decrement(id)   → quantity - 1, floored at 0
//! unknown id      → no-op for both
//! ```

use crate::money::Money;
use crate::types::{Extra, ExtraDefinition, ExtraId};

/// Ordered add-ons for the current item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrasLedger {
    extras: Vec<Extra>,
}

impl ExtrasLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ledger with `definitions`, all at quantity 0.
    pub fn load(&mut self, definitions: &[ExtraDefinition]) {
        self.extras = definitions.iter().map(Extra::from_definition).collect();
    }

    /// Empties the ledger (no item on screen).
    pub fn clear(&mut self) {
        self.extras.clear();
    }

    /// Adds one unit of the extra. Returns `false` when `id` is unknown.
    pub fn increment(&mut self, id: ExtraId) -> bool {
        match self.find_mut(id) {
            Some(extra) => {
                extra.quantity = extra.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes one unit of the extra, never going below 0.
    ///
    /// Returns `true` only when the quantity actually changed.
    pub fn decrement(&mut self, id: ExtraId) -> bool {
        match self.find_mut(id) {
            Some(extra) if extra.quantity > 0 => {
                extra.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Read-only view in menu order.
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extra> {
        self.extras.iter()
    }

    pub fn get(&self, id: ExtraId) -> Option<&Extra> {
        self.extras.iter().find(|e| e.id == id)
    }

    pub fn quantity_of(&self, id: ExtraId) -> Option<u32> {
        self.get(id).map(|e| e.quantity)
    }

    /// Σ value × quantity across every extra.
    pub fn subtotal(&self) -> Money {
        self.extras.iter().map(Extra::subtotal).sum()
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    fn find_mut(&mut self, id: ExtraId) -> Option<&mut Extra> {
        self.extras.iter_mut().find(|e| e.id == id)
    }
}
