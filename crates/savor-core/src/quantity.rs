//! # Quantity Counter
//!
//! How many of the base item are being ordered. Starts at 1, never drops
//! below 1, no upper bound.

use serde::{Deserialize, Serialize};

/// Smallest order quantity.
pub const MIN_ORDER_QUANTITY: u32 = 1;

/// Order quantity for the item on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityCounter(u32);

impl QuantityCounter {
    pub const fn new() -> Self {
        QuantityCounter(MIN_ORDER_QUANTITY)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Returns `false` when already at the floor.
    pub fn decrement(&mut self) -> bool {
        if self.0 > MIN_ORDER_QUANTITY {
            self.0 -= 1;
            true
        } else {
            false
        }
    }

    /// Back to 1, as on loading a new item.
    pub fn reset(&mut self) {
        self.0 = MIN_ORDER_QUANTITY;
    }
}

impl Default for QuantityCounter {
    fn default() -> Self {
        Self::new()
    }
}
