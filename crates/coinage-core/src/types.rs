//! # Wire Types
//!
//! Plain data shapes for the JSON wire format, plus the tax mode enum shared
//! by config and pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Wire Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   MoneyRepr     │   │   PriceRepr     │   │  TaxSummaryRepr │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  currency       │   │  currency       │   │  total          │       │
//! │  │  amount "£1.00" │   │  gross / net    │──▶│  detail[]       │       │
//! │  └─────────────────┘   │  tax            │   └────────┬────────┘       │
//! │                        └─────────────────┘            ▼                │
//! │                                              ┌─────────────────┐       │
//! │                                              │  TaxDetailRepr  │       │
//! │                                              │  amount         │       │
//! │                                              │  description    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts travel as formatted strings (`"£10.99"`), never floats. `Money`
//! and `Price` convert through these types with `#[serde(into, try_from)]`,
//! so the TypeScript bindings generated by ts-rs describe exactly what the
//! JSON looks like.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;

// =============================================================================
// Money
// =============================================================================

/// JSON shape of a `Money`: `{"currency":"GBP","amount":"£10.99"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoneyRepr {
    /// ISO 4217 code.
    pub currency: String,
    /// Formatted amount including the symbol.
    pub amount: String,
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        MoneyRepr {
            currency: money.iso_code().to_string(),
            amount: money.to_string(),
        }
    }
}

impl TryFrom<MoneyRepr> for Money {
    type Error = CoreError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::from_string(&repr.currency, &repr.amount)
    }
}

// =============================================================================
// Price
// =============================================================================

/// JSON shape of a `Price`.
///
/// `net` and `tax.total` are derived values; deserialization checks them
/// against the gross and the detail entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRepr {
    pub currency: String,
    pub gross: String,
    pub net: String,
    pub tax: TaxSummaryRepr,
}

/// JSON shape of a tax ledger inside a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxSummaryRepr {
    pub total: String,
    pub detail: Vec<TaxDetailRepr>,
}

/// One tax line inside a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxDetailRepr {
    pub amount: String,
    pub description: String,
}

// =============================================================================
// Tax Mode
// =============================================================================

/// How a configured default tax is applied to a new price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Tax is added on top of the amount (USA model).
    #[default]
    Exclusive,
    /// The amount already includes the tax (EU/UK model).
    Inclusive,
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxMode::Exclusive => write!(f, "exclusive"),
            TaxMode::Inclusive => write!(f, "inclusive"),
        }
    }
}

impl FromStr for TaxMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" | "additive" => Ok(TaxMode::Exclusive),
            "inclusive" => Ok(TaxMode::Inclusive),
            other => Err(ValidationError::InvalidFormat {
                field: "tax mode".to_string(),
                reason: format!("unknown mode '{}'. Valid options: exclusive, inclusive", other),
            }
            .into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
