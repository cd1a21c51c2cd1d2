//! # Validation Module
//!
//! Input validation for values that arrive from callers or config files.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Type system                                                  │
//! │  ├── Money is always an integer of subunits                            │
//! │  └── Currency formats only come from the static table                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Tax percentages (finite, 0..=100)                                 │
//! │  ├── ISO codes read from config                                        │
//! │  └── Tax descriptions read from config                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Panics                                                       │
//! │  └── Programming errors: mixed currencies, split(0)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coinage_core::validation::{validate_iso_code, validate_tax_percent};
//!
//! assert_eq!(validate_tax_percent(20.0).unwrap(), 20.0);
//! assert!(validate_tax_percent(120.0).is_err());
//! assert!(validate_iso_code("GBP").is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_DESCRIPTION_LEN, MAX_TAX_PERCENT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tax percentage.
///
/// ## Rules
/// - Must be a finite number
/// - Must be between 0 and 100 inclusive
///
/// ## Returns
/// The percentage, unchanged.
pub fn validate_tax_percent(percent: f64) -> ValidationResult<f64> {
    if !percent.is_finite() || !(0.0..=MAX_TAX_PERCENT).contains(&percent) {
        return Err(ValidationError::InvalidTaxPercent { percent });
    }

    Ok(percent)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the shape of an ISO 4217 code.
///
/// ## Rules
/// - Exactly three characters
/// - Upper-case ASCII letters only
///
/// Whether the code is in the currency table is checked separately by
/// [`crate::currency::CurrencyFormat::lookup`].
pub fn validate_iso_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be three upper-case letters".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax description such as `"VAT"`.
///
/// ## Rules
/// - Must not be blank
/// - At most `MAX_DESCRIPTION_LEN` characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
