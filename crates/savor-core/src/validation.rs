//! # Validation Module
//!
//! Input validation for values that arrive as raw text (route parameters,
//! command-line arguments, search boxes).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (CLI / screen)                                         │
//! │  ├── Raw route parameter, search text                                  │
//! │  └── THIS MODULE: fail fast before any request                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session                                                      │
//! │  └── Only ever sees a typed ItemId                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Menu service                                                 │
//! │  └── 404 for identifiers that do not exist                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use savor_core::validation::{parse_item_id, validate_search_query};
//!
//! let id = parse_item_id(Some("42")).unwrap();
//! assert_eq!(id.get(), 42);
//!
//! assert!(parse_item_id(None).is_err());
//! assert_eq!(validate_search_query("  burger ").unwrap(), "burger");
//! ```

use crate::error::ValidationError;
use crate::types::{ExtraId, ItemId};
use crate::MAX_SEARCH_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Parses a positive numeric identifier.
fn parse_positive_id(field: &str, raw: Option<&str>) -> ValidationResult<u64> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    match raw.parse::<u64>() {
        Ok(0) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(id) => Ok(id),
        Err(_) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{raw}' is not a positive integer"),
        }),
    }
}

/// Validates the item identifier taken from the route.
///
/// ## Rules
/// - Missing or blank → `Required`
/// - Non-numeric, negative, or zero → `InvalidFormat`
pub fn parse_item_id(raw: Option<&str>) -> ValidationResult<ItemId> {
    parse_positive_id("id", raw).map(ItemId)
}

/// Validates an extra identifier.
pub fn parse_extra_id(raw: &str) -> ValidationResult<ExtraId> {
    parse_positive_id("extra_id", Some(raw)).map(ExtraId)
}

// =============================================================================
// String Validators
// =============================================================================

/// Trims search text and bounds its length.
///
/// Empty text is valid and means "no filter".
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a repeat count given on the command line (e.g. `--quantity`).
pub fn validate_step_count(field: &str, count: u32) -> ValidationResult<u32> {
    if count > crate::MAX_STEP_COUNT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: u64::from(crate::MAX_STEP_COUNT),
        });
    }
    Ok(count)
}
