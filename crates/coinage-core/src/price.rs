//! # Price Module
//!
//! A gross amount together with the ledger of taxes it contains.
//!
//! ## Gross, Net and Tax
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   gross  ─────────────────────────────────────────  £10.99  (stored)    │
//! │   tax    = ledger.total  ─────────────────────────   £1.83  (stored)    │
//! │   net    = gross - tax   ─────────────────────────   £9.16  (derived)   │
//! │                                                                         │
//! │   add_tax(£x)          gross += x, ledger += x      (tax on top)        │
//! │   include_tax(£x)      gross unchanged, ledger += x (already inside)    │
//! │                                                                         │
//! │   add_tax_percent(p)      x = policy(gross / 100 × p)                   │
//! │   include_tax_percent(p)  x = net - policy(net / (1 + p / 100))         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coinage_core::Price;
//!
//! let price = Price::gbp(1099, 20.0).unwrap();
//! assert_eq!(price.gross().to_string(), "£10.99");
//! assert_eq!(price.net().to_string(), "£9.16");
//! assert_eq!(price.tax().to_string(), "£1.83");
//!
//! let basket = price.clone() + price * 2;
//! assert_eq!(basket.gross().value(), 3297);
//! ```
//!
//! Builders consume `self` and return the extended price, so a price is
//! never observed half-built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rounding::Rounding;
use crate::tax::TaxLedger;
use crate::types::{PriceRepr, TaxDetailRepr, TaxSummaryRepr};
use crate::validation::validate_tax_percent;

// =============================================================================
// Price Type
// =============================================================================

/// A gross amount and the taxes it contains.
///
/// The ledger total is kept equal to the sum of its entries and shares the
/// gross currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PriceRepr", try_from = "PriceRepr")]
pub struct Price {
    gross: Money,
    taxes: TaxLedger,
}

impl Price {
    /// A price with no taxes recorded.
    pub fn from_money(gross: Money) -> Self {
        Price {
            gross,
            taxes: TaxLedger::new(gross),
        }
    }

    /// Creates a price from an integer count of subunits.
    pub fn from_subunits(code: &str, value: impl Into<i64>) -> CoreResult<Self> {
        Ok(Price::from_money(Money::from_subunits(code, value)?))
    }

    /// Creates a price from a real number of units.
    pub fn from_float(code: &str, value: impl Into<f64>) -> CoreResult<Self> {
        Ok(Price::from_money(Money::from_float(code, value)?))
    }

    /// Parses a formatted gross amount, e.g. `"£10.99"`.
    pub fn from_string(code: &str, text: &str) -> CoreResult<Self> {
        Ok(Price::from_money(Money::from_string(code, text)?))
    }

    /// Pound sterling price with VAT at `vat_percent` already included.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::Price;
    ///
    /// let price = Price::gbp(104, 20.0).unwrap();
    /// assert_eq!(price.net().value(), 87);
    /// assert_eq!(price.tax().value(), 17);
    /// ```
    pub fn gbp(value: impl Into<i64>, vat_percent: f64) -> CoreResult<Self> {
        Price::from_money(Money::gbp(value)).include_tax_percent(vat_percent, "VAT")
    }

    /// Uses `rounding` for every later percentage calculation.
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.gross = self.gross.with_rounding(rounding);
        self
    }

    // =========================================================================
    // Tax Builders
    // =========================================================================

    /// Adds a tax on top of the price. Gross grows by `amount`.
    ///
    /// ## Panics
    /// If `amount` is in a different currency.
    #[track_caller]
    pub fn add_tax(mut self, amount: Money, description: impl Into<String>) -> Self {
        self.gross += amount;
        self.taxes.add(amount, description);
        self
    }

    /// Adds a percentage of the current gross on top of the price.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::Price;
    ///
    /// let price = Price::from_subunits("GBP", 5500)
    ///     .unwrap()
    ///     .add_tax_percent(15.0, "VAT")
    ///     .unwrap();
    /// assert_eq!(price.gross().value(), 6325);
    /// assert_eq!(price.tax().value(), 825);
    /// ```
    pub fn add_tax_percent(self, percent: f64, description: impl Into<String>) -> CoreResult<Self> {
        let percent = validate_tax_percent(percent)?;
        let rounding = self.gross.rounding();
        let tax = self
            .gross
            .with_value(rounding.round(self.gross.value() as f64 / 100.0 * percent));

        debug!(
            currency = self.iso_code(),
            percent,
            tax = tax.value(),
            "Adding tax on top"
        );
        Ok(self.add_tax(tax, description))
    }

    /// Records a tax already contained in the gross. Gross is unchanged.
    ///
    /// ## Panics
    /// If `amount` is in a different currency.
    #[track_caller]
    pub fn include_tax(mut self, amount: Money, description: impl Into<String>) -> Self {
        self.gross.assert_same_currency(&amount);
        self.taxes.add(amount, description);
        self
    }

    /// Records a percentage tax contained in the current net amount.
    ///
    /// Repeated calls layer: each percentage applies to the net left by
    /// the previous one.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::Price;
    ///
    /// let price = Price::from_subunits("GBP", 2083)
    ///     .unwrap()
    ///     .include_tax_percent(21.76, "Tax 1")
    ///     .unwrap()
    ///     .include_tax_percent(6.7, "Tax 2")
    ///     .unwrap();
    /// assert_eq!(price.net().value(), 1604);
    /// assert_eq!(price.tax().value(), 479);
    /// ```
    pub fn include_tax_percent(
        self,
        percent: f64,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        let percent = validate_tax_percent(percent)?;
        let net = self.net();
        let tax = net - net / (1.0 + percent / 100.0);

        debug!(
            currency = self.iso_code(),
            percent,
            tax = tax.value(),
            "Including tax"
        );
        Ok(self.include_tax(tax, description))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The amount paid, taxes included.
    #[inline]
    pub fn gross(&self) -> Money {
        self.gross
    }

    /// Gross minus all taxes.
    #[inline]
    pub fn net(&self) -> Money {
        self.gross - self.taxes.total()
    }

    /// Total of all taxes.
    #[inline]
    pub fn tax(&self) -> Money {
        self.taxes.total()
    }

    /// The individual tax entries.
    #[inline]
    pub fn taxes(&self) -> &TaxLedger {
        &self.taxes
    }

    #[inline]
    pub fn iso_code(&self) -> &'static str {
        self.gross.iso_code()
    }

    /// Gross without the currency symbol.
    pub fn to_string_no_symbol(&self) -> String {
        self.gross.to_string_no_symbol()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the gross amount.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.gross, f)
    }
}

/// Sums gross amounts and concatenates the tax ledgers.
///
/// ## Panics
/// If the prices are in different currencies.
impl Add for Price {
    type Output = Price;

    #[track_caller]
    fn add(self, other: Price) -> Price {
        &self + &other
    }
}

impl Add<&Price> for &Price {
    type Output = Price;

    #[track_caller]
    fn add(self, other: &Price) -> Price {
        Price {
            gross: self.gross + other.gross,
            taxes: self.taxes.concat(&other.taxes),
        }
    }
}

/// Multiplies the gross and every tax entry.
impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, n: i64) -> Price {
        &self * n
    }
}

impl Mul<i64> for &Price {
    type Output = Price;

    fn mul(self, n: i64) -> Price {
        Price {
            gross: self.gross * n,
            taxes: self.taxes.scaled(n),
        }
    }
}

impl From<Price> for PriceRepr {
    fn from(price: Price) -> Self {
        PriceRepr {
            currency: price.iso_code().to_string(),
            gross: price.gross.to_string(),
            net: price.net().to_string(),
            tax: TaxSummaryRepr {
                total: price.tax().to_string(),
                detail: price
                    .taxes
                    .iter()
                    .map(|entry| TaxDetailRepr {
                        amount: entry.amount.to_string(),
                        description: entry.description.clone(),
                    })
                    .collect(),
            },
        }
    }
}

/// Rebuilds a price from its gross and detail entries, then checks the
/// derived `net` and `tax.total` fields agree.
impl TryFrom<PriceRepr> for Price {
    type Error = CoreError;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        let mut price = Price::from_string(&repr.currency, &repr.gross)?;
        for detail in repr.tax.detail {
            let amount = Money::from_string(&repr.currency, &detail.amount)?;
            price = price.include_tax(amount, detail.description);
        }

        let total = Money::from_string(&repr.currency, &repr.tax.total)?;
        if total != price.tax() {
            return Err(CoreError::malformed(
                &repr.tax.total,
                format!("tax total does not match its detail ({})", price.tax()),
            ));
        }

        let net = Money::from_string(&repr.currency, &repr.net)?;
        if net != price.net() {
            return Err(CoreError::malformed(
                &repr.net,
                format!("net does not match gross minus tax ({})", price.net()),
            ));
        }

        Ok(price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
