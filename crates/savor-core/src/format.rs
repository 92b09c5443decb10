//! # Money Formatter
//!
//! Converts a [`Money`] amount into a localized display string.
//!
//! Formatting is a presentation step only: the numeric value held by the
//! pricing engine is never touched.
//!
//! ```text
//! Money(2800) ──► MoneyFormatter::en_us() ──► "$28.00"
//!             └─► MoneyFormatter::pt_br() ──► "R$ 28,00"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Locale
// =============================================================================

/// Display locale for currency strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// US dollars, `$1,234.56`.
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Brazilian reais, `R$ 1.234,56`.
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::EnUs => write!(f, "en-US"),
            Locale::PtBr => write!(f, "pt-BR"),
        }
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "pt-br" | "pt" => Ok(Locale::PtBr),
            _ => Err(ValidationError::NotAllowed {
                field: "locale".to_string(),
                allowed: vec!["en-US".to_string(), "pt-BR".to_string()],
            }),
        }
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Currency display rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormatter {
    symbol: String,
    decimal_separator: char,
    thousands_separator: char,
    /// Whether a space separates the symbol from the digits.
    symbol_spacing: bool,
}

impl MoneyFormatter {
    /// US English: `$1,234.56`.
    pub fn en_us() -> Self {
        MoneyFormatter {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            symbol_spacing: false,
        }
    }

    /// Brazilian Portuguese: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        MoneyFormatter {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            symbol_spacing: true,
        }
    }

    /// Returns the preset for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::EnUs => Self::en_us(),
            Locale::PtBr => Self::pt_br(),
        }
    }

    /// Formats an amount.
    ///
    /// ## Example
    /// ```rust
    /// use savor_core::format::MoneyFormatter;
    /// use savor_core::money::Money;
    ///
    /// let fmt = MoneyFormatter::en_us();
    /// assert_eq!(fmt.format(Money::from_cents(123456)), "$1,234.56");
    /// assert_eq!(fmt.format(Money::from_cents(-550)), "-$5.50");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let digits = amount.major().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{}{}{}{}{}{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.symbol,
            if self.symbol_spacing { " " } else { "" },
            grouped,
            self.decimal_separator,
            amount.minor()
        )
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::en_us()
    }
}
