//! # Error Types
//!
//! Domain-specific error types for savor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  savor-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule failures                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  savor-client errors                                                   │
//! │  └── ClientError      - Menu service failures                          │
//! │                                                                         │
//! │  savor-session errors                                                  │
//! │  └── SessionError     - What the screen boundary sees                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → AppError → User    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity underflow has no variant: decrementing below a floor is
//! clamped, not reported.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An operation needs the item details, but they have not arrived yet.
    ///
    /// ## When This Occurs
    /// - Submitting an order before the item fetch completed
    /// - Favoriting an item whose details are still loading
    #[error("Item details are not loaded yet")]
    ItemNotLoaded,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Invalid format (e.g., non-numeric identifier).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
