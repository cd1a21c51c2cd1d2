//! # coinage-core: Monetary Values, Prices and Taxes
//!
//! Exact money arithmetic on integer subunits, with per-currency parsing and
//! formatting, selectable rounding, and prices that carry their tax ledger.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coinage Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Callers (storefronts, invoicing, reports)              │   │
//! │  │    build prices ──► add taxes ──► sum baskets ──► render        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ coinage-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   price   │  │    tax    │  │   money   │  │  currency │  │   │
//! │  │   │  Price    │─►│ TaxLedger │─►│   Money   │─►│  formats  │  │   │
//! │  │   │  builders │  │ TaxEntry  │  │  split    │  │  ISO 4217 │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       ▼                         │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  config   │  │   types   │  │ rounding  │  │ validation│  │   │
//! │  │   │ pricing.  │  │ JSON wire │  │ policies  │  │  percent  │  │   │
//! │  │   │   toml    │  │  + ts-rs  │  │           │  │  iso code │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • NO EXCHANGE RATES                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic, split and allocate
//! - [`currency`] - Static ISO 4217 format table
//! - [`rounding`] - Rounding policies for division and percentages
//! - [`tax`] - Ordered tax ledger
//! - [`price`] - Gross amount plus its taxes
//! - [`config`] - Default currency, rounding and tax from pricing.toml
//! - [`types`] - JSON wire shapes (exported to TypeScript)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: Values are i64 counts of the smallest subunit
//! 2. **Lossless Distribution**: split and allocate always sum to the input
//! 3. **Loud Currency Mixing**: Operators panic on mismatched currencies;
//!    `checked_*` variants return `CoreError::CurrencyMismatch`
//! 4. **Values, Not Objects**: Every operation returns a new value
//!
//! ## Example Usage
//!
//! ```rust
//! use coinage_core::{Money, Price};
//!
//! // Create money from pence (never from floats!)
//! let price = Money::gbp(1099); // £10.99
//!
//! // Split the bill three ways without losing a penny
//! let shares = price.split(3);
//! assert_eq!(shares.iter().map(|m| m.value()).collect::<Vec<_>>(), vec![367, 366, 366]);
//!
//! // A price with 20% VAT already included
//! let price = Price::gbp(1099, 20.0).unwrap();
//! assert_eq!(price.net().to_string(), "£9.16");
//! assert_eq!(price.tax().to_string(), "£1.83");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod currency;
pub mod error;
pub mod money;
pub mod price;
pub mod rounding;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use coinage_core::Money` instead of
// `use coinage_core::money::Money`

pub use config::PricingConfig;
pub use currency::CurrencyFormat;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use price::Price;
pub use rounding::{Rounding, RoundingPolicy};
pub use tax::{TaxEntry, TaxLedger};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency used when no configuration is given.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Highest accepted tax percentage.
///
/// ## Business Reason
/// A tax of more than the whole net amount is almost certainly a typo
/// (e.g. 200 instead of 20.0).
pub const MAX_TAX_PERCENT: f64 = 100.0;

/// Maximum length of a tax description read from config.
pub const MAX_DESCRIPTION_LEN: usize = 100;
