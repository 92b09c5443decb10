//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The menu service sends prices as JSON numbers:                         │
//! │    { "price": 19.9, "extras": [{ "value": 0.1 }, { "value": 0.2 }] }    │
//! │                                                                         │
//! │  Summed as floats:                                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The decimal TEXT of the number is parsed straight into cents:        │
//! │    "19.9" → 1990, "0.1" → 10, "0.2" → 20  → 10 + 20 = 30 exactly       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use savor_core::money::Money;
//!
//! let price = Money::from_cents(1000);          // $10.00
//! let extra = Money::from_decimal_str("2.00").unwrap();
//!
//! let total = (price + extra.multiply_quantity(2)).multiply_quantity(2);
//! assert_eq!(total.cents(), 2800);              // $28.00
//! ```

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::ValidationError;

/// Number of minor units in one major unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction below zero stays representable
/// - **Saturating arithmetic**: `+`, `-` and quantity multiplication clamp
///   at the `i64` bounds instead of overflowing
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: travels as a JSON decimal number, stored as exact cents
///
/// ## Where Money Flows
/// ```text
/// Item.price ──────────┐
///                      ├──► pricing::total() ──► MoneyFormatter ──► "$28.00"
/// Extra.value × qty ───┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use savor_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * CENTS_PER_UNIT - minor)
        } else {
            Money(major * CENTS_PER_UNIT + minor)
        }
    }

    /// Parses a decimal string such as `"19.9"`, `"2"`, or `"-0.05"`.
    ///
    /// Digits past the second decimal place round half away from zero,
    /// so `"1.005"` becomes 101 cents.
    ///
    /// ## Example
    /// ```rust
    /// use savor_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("19.9").unwrap().cents(), 1990);
    /// assert_eq!(Money::from_decimal_str("0.125").unwrap().cents(), 13);
    /// assert!(Money::from_decimal_str("abc").is_err());
    /// ```
    pub fn from_decimal_str(raw: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("{reason}: '{raw}'"),
        };

        let text = raw.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        // Exponent notation is never produced for menu prices
        if unsigned.is_empty() || unsigned.contains(['e', 'E']) {
            return Err(invalid("not a plain decimal number"));
        }

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid("not a plain decimal number"));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(CENTS_PER_UNIT))
                .ok_or_else(|| invalid("amount out of range"))?
        };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        let cents = whole_cents
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))
            .ok_or_else(|| invalid("amount out of range"))?;
        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use savor_core::money::Money;
    ///
    /// let bacon = Money::from_cents(250); // $2.50
    /// assert_eq!(bacon.multiply_quantity(3).cents(), 750);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Renders the amount as the plain decimal text used on the wire (`"19.90"`).
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. Use [`crate::format::MoneyFormatter`] for UI text.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Serialized as a JSON number (`19.9`), matching the menu service.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Display-only conversion: cents/100 has an exact shortest decimal form
        serializer.serialize_f64(self.0 as f64 / CENTS_PER_UNIT as f64)
    }
}

/// Accepts JSON numbers or numeric strings, parsed through their decimal text.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        };
        Money::from_decimal_str(&text).map_err(DeError::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
