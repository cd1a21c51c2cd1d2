//! # Error Types
//!
//! Domain-specific error types for coinage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Recoverable (returned as Err)                                         │
//! │  ├── CoreError::UnknownCurrency   - code not in the currency table     │
//! │  ├── CoreError::MalformedInput    - string could not be parsed         │
//! │  ├── CoreError::CurrencyMismatch  - only from checked_* variants       │
//! │  ├── CoreError::Validation        - wraps ValidationError              │
//! │  └── CoreError::Config*           - pricing.toml / environment         │
//! │                                                                         │
//! │  Unrecoverable (panic)                                                  │
//! │  ├── `+`, `-`, `==`, `<` ... on two different currencies              │
//! │  └── split(0), allocate(&[]) and zero-sum ratios                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, input text, percent)
//! 3. Mixing currencies through an operator is a bug, not an error value

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by money, price and config construction.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The ISO 4217 code is not present in the currency table.
    ///
    /// ## When This Occurs
    /// - Typo in a code (`"GPB"`)
    /// - Lower-case code (`"gbp"`) - lookups are exact
    /// - Withdrawn or unsupported currency
    #[error("The currency code '{0}' is not recognised")]
    UnknownCurrency(String),

    /// A string could not be turned into a monetary value.
    ///
    /// ## User Workflow
    /// ```text
    /// Money::from_string("EUR", "14.570")
    ///      │
    ///      ▼
    /// Expect ',' or '.' two places from the right
    ///      │
    ///      ▼
    /// MalformedInput { input: "14.570", reason: "expected subunit separator '.'" }
    /// ```
    #[error("Failed to parse '{input}' as money: {reason}")]
    MalformedInput { input: String, reason: String },

    /// Two values of different currencies were combined.
    ///
    /// Only the `checked_*` / `try_*` methods return this; the operator
    /// forms panic instead.
    #[error("Cannot combine {left} with {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration is readable but semantically wrong.
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read.
    #[error("Failed to read pricing configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config file is not valid TOML for `PricingConfig`.
    #[error("Failed to parse pricing configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written back as TOML.
    #[error("Failed to serialize pricing configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No path was given and no platform config directory exists.
    #[error("Failed to save pricing configuration: {0}")]
    ConfigSaveFailed(String),
}

impl CoreError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        CoreError::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any value is built.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Tax percentage outside `[0, 100]` or not a finite number.
    #[error("Tax percent '{percent}' must be between 0 and 100")]
    InvalidTaxPercent { percent: f64 },

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., lower-case currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
