//! # Money Module
//!
//! Provides the `Money` type: an integer count of a currency's smallest
//! subunit, the currency's format and a rounding policy.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    £10.00 / 3 = £3.33 (×3 = £9.99)  → Lost £0.01!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer subunits + lossless distribution                 │
//! │    1000 pence split 3 → [334, 333, 333]  (sum = 1000)                   │
//! │    1099 pence allocate [30, 70] → [330, 769]  (sum = 1099)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coinage_core::money::Money;
//!
//! let price = Money::gbp(1099);
//! assert_eq!(price.to_string(), "£10.99");
//!
//! let doubled = price * 2;
//! assert_eq!(doubled.value(), 2198);
//!
//! let shares = price.split(3);
//! assert_eq!(shares.iter().map(|m| m.value()).sum::<i64>(), 1099);
//! ```
//!
//! ## Currency Safety
//! Adding, subtracting or comparing two different currencies panics. Use
//! [`Money::checked_add`], [`Money::checked_sub`] or [`Money::try_cmp`] when
//! the currencies come from untrusted input.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use tracing::debug;

use crate::currency::{self, CurrencyFormat};
use crate::error::{CoreError, CoreResult};
use crate::rounding::{round_half_up, Rounding};
use crate::types::MoneyRepr;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest unit of its currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Copy**: Every operation returns a new value, the original is untouched
/// - **Static format**: The currency table is `'static`, so a reference is free
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "MoneyRepr", try_from = "MoneyRepr")]
pub struct Money {
    format: &'static CurrencyFormat,
    value: i64,
    rounding: Rounding,
}

impl Money {
    /// Creates money from a known format and a subunit value.
    ///
    /// Uses the default `HalfUp` rounding policy.
    #[inline]
    pub const fn new(format: &'static CurrencyFormat, value: i64) -> Self {
        Money {
            format,
            value,
            rounding: Rounding::HalfUp,
        }
    }

    /// Creates money from an integer count of subunits.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// let m = Money::from_subunits("GBP", 1457).unwrap(); // £14.57
    /// assert_eq!(m.value(), 1457);
    ///
    /// let m = Money::from_subunits("JPY", 1457u16).unwrap(); // ¥1,457
    /// assert_eq!(m.units(), 1457);
    ///
    /// assert!(Money::from_subunits("XXX", 1457).is_err());
    /// ```
    pub fn from_subunits(code: &str, value: impl Into<i64>) -> CoreResult<Self> {
        let format = CurrencyFormat::lookup(code)?;
        Ok(Money::new(format, value.into()))
    }

    /// Creates money from a real number of units.
    ///
    /// The value is scaled by `10^subunits` and always rounded half-up,
    /// whatever the division policy: this is a change of representation.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// let m = Money::from_float("GBP", 10.59).unwrap();
    /// assert_eq!(m.value(), 1059);
    /// ```
    pub fn from_float(code: &str, value: impl Into<f64>) -> CoreResult<Self> {
        let format = CurrencyFormat::lookup(code)?;
        let subunits = round_half_up(value.into() * format.scale() as f64);
        Ok(Money::new(format, subunits))
    }

    /// Parses a formatted amount such as `"£1,059.00"` or `"UF157.896,4418"`.
    ///
    /// ## Rules
    /// - A `-` anywhere in the text makes the value negative
    /// - Everything before the first digit and after the last is discarded
    /// - When the numeral is longer than the currency's subunit digits, the
    ///   subunit separator must sit exactly that many digits from the right
    /// - Thousands separators are ignored
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// assert_eq!(Money::from_string("EUR", "€14.57").unwrap().value(), 1457);
    /// assert_eq!(Money::from_string("JPY", "¥1,234,567").unwrap().value(), 1234567);
    /// assert!(Money::from_string("EUR", "14.570").is_err());
    /// ```
    pub fn from_string(code: &str, text: &str) -> CoreResult<Self> {
        let format = CurrencyFormat::lookup(code)?;
        let value = parse_subunits(format, text)?;
        Ok(Money::new(format, value))
    }

    /// Pound sterling from pence.
    #[inline]
    pub fn gbp(value: impl Into<i64>) -> Self {
        Money::new(&currency::GBP, value.into())
    }

    /// Euro from cents.
    #[inline]
    pub fn eur(value: impl Into<i64>) -> Self {
        Money::new(&currency::EUR, value.into())
    }

    /// US dollar from cents.
    #[inline]
    pub fn usd(value: impl Into<i64>) -> Self {
        Money::new(&currency::USD, value.into())
    }

    /// Returns a copy using `rounding` for division and scaling.
    #[inline]
    pub const fn with_rounding(self, rounding: Rounding) -> Self {
        Money { rounding, ..self }
    }

    /// Returns a copy of this money holding `value` subunits.
    ///
    /// Currency and rounding policy are kept.
    #[inline]
    pub const fn with_value(&self, value: i64) -> Self {
        Money {
            format: self.format,
            value,
            rounding: self.rounding,
        }
    }

    /// Zero in the same currency.
    #[inline]
    pub const fn zero_like(&self) -> Self {
        self.with_value(0)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The ISO 4217 currency code.
    #[inline]
    pub fn iso_code(&self) -> &'static str {
        self.format.code
    }

    /// The currency's formatting rules.
    #[inline]
    pub fn format(&self) -> &'static CurrencyFormat {
        self.format
    }

    /// The rounding policy used by division and scaling.
    #[inline]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// The whole value in subunits (pence for GBP, cents for EUR).
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Whole units only. Follows the sign of the value.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// assert_eq!(Money::gbp(1099).units(), 10);
    /// assert_eq!(Money::gbp(-547).units(), -5);
    /// ```
    #[inline]
    pub fn units(&self) -> i64 {
        self.value / self.format.scale()
    }

    /// Subunits left over after [`Money::units`]. Follows the sign of the value.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// assert_eq!(Money::gbp(1099).subunits(), 99);
    /// assert_eq!(Money::gbp(-547).subunits(), -47);
    /// ```
    #[inline]
    pub fn subunits(&self) -> i64 {
        self.value % self.format.scale()
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Checks if the value is zero or above.
    #[inline]
    pub const fn is_pos(&self) -> bool {
        self.value >= 0
    }

    /// Checks if the value is below zero.
    #[inline]
    pub const fn is_neg(&self) -> bool {
        self.value < 0
    }

    /// Whether both values share a currency code.
    #[inline]
    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.format.code == other.format.code
    }

    /// Panics unless both values share a currency.
    #[track_caller]
    pub(crate) fn assert_same_currency(&self, other: &Money) {
        assert!(
            self.is_same_currency(other),
            "Failed to perform operation on different currencies: {} and {}",
            self.iso_code(),
            other.iso_code()
        );
    }

    fn ensure_same_currency(&self, other: &Money) -> CoreResult<()> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(CoreError::CurrencyMismatch {
                left: self.iso_code().to_string(),
                right: other.iso_code().to_string(),
            })
        }
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        self.with_value(self.value.saturating_abs())
    }

    /// Switches positive to negative and vice versa.
    ///
    /// Saturates at `i64::MAX` for `i64::MIN`, like [`Money::abs`].
    #[inline]
    pub const fn flip_sign(&self) -> Self {
        self.with_value(self.value.saturating_neg())
    }

    /// Adds two values, returning an error instead of panicking on a
    /// currency mismatch.
    pub fn checked_add(&self, other: &Money) -> CoreResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(self.with_value(self.value + other.value))
    }

    /// Subtracts two values, returning an error instead of panicking on a
    /// currency mismatch.
    pub fn checked_sub(&self, other: &Money) -> CoreResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(self.with_value(self.value - other.value))
    }

    /// Compares two values, returning an error instead of panicking on a
    /// currency mismatch.
    pub fn try_cmp(&self, other: &Money) -> CoreResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.value.cmp(&other.value))
    }

    /// Multiplies by a real factor, rounding with this value's policy.
    ///
    /// Lossy. Use [`Money::allocate`] when the parts must add back up.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// assert_eq!(Money::gbp(1337).scale(1.2457).value(), 1666);
    /// ```
    pub fn scale(&self, factor: f64) -> Self {
        self.with_value(self.rounding.round(self.value as f64 * factor))
    }

    /// Splits into `n` shares as evenly as possible without losing a subunit.
    ///
    /// The first `value % n` shares carry one extra subunit.
    ///
    /// ## Panics
    /// If `n` is zero.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// let shares: Vec<i64> = Money::gbp(100).split(3).iter().map(|m| m.value()).collect();
    /// assert_eq!(shares, vec![34, 33, 33]);
    /// ```
    pub fn split(&self, n: usize) -> Vec<Money> {
        assert!(n > 0, "Failed to split money into zero shares");

        let count = n as i64;
        let base = self.value / count;
        let remainder = self.value % count;
        let step = remainder.signum();
        let extra = remainder.unsigned_abs() as usize;

        (0..n)
            .map(|i| {
                if i < extra {
                    self.with_value(base + step)
                } else {
                    self.with_value(base)
                }
            })
            .collect()
    }

    /// Allocates by ratio without losing a subunit.
    ///
    /// Each share gets `value × ratio / sum` (truncated); what is left over
    /// is handed out one subunit at a time from the first share onwards.
    ///
    /// ## Panics
    /// If `ratios` is empty or sums to zero.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// let shares: Vec<i64> = Money::gbp(1099).allocate(&[30, 70]).iter().map(|m| m.value()).collect();
    /// assert_eq!(shares, vec![330, 769]);
    /// ```
    pub fn allocate(&self, ratios: &[u32]) -> Vec<Money> {
        let total: u64 = ratios.iter().map(|&ratio| u64::from(ratio)).sum();
        assert!(total > 0, "Failed to allocate money, ratios must sum to more than zero");

        let value = i128::from(self.value);
        let total = i128::from(total);
        let mut shares: Vec<Money> = ratios
            .iter()
            .map(|&ratio| self.with_value((value * i128::from(ratio) / total) as i64))
            .collect();

        let allocated: i64 = shares.iter().map(|share| share.value).sum();
        let mut remainder = self.value - allocated;
        if remainder != 0 {
            debug!(
                currency = self.iso_code(),
                remainder, "Distributing allocation remainder"
            );
        }

        let step = remainder.signum();
        for share in shares.iter_mut() {
            if remainder == 0 {
                break;
            }
            share.value += step;
            remainder -= step;
        }

        shares
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// The numeral without the currency symbol, e.g. `"1,234.56"`.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::money::Money;
    ///
    /// assert_eq!(Money::gbp(105900).to_string_no_symbol(), "1,059.00");
    /// assert_eq!(Money::gbp(-5).to_string_no_symbol(), "-0.05");
    /// ```
    pub fn to_string_no_symbol(&self) -> String {
        let digits = self.format.subunits as usize;
        let mut raw = self.value.unsigned_abs().to_string();
        if raw.len() <= digits {
            raw = "0".repeat(digits - raw.len() + 1) + &raw;
        }

        let (units, fraction) = raw.split_at(raw.len() - digits);
        let mut out = String::with_capacity(raw.len() + units.len() / 3 + 2);
        if self.value < 0 {
            out.push('-');
        }

        match self.format.thousands_separator {
            Some(separator) => {
                for (i, digit) in units.chars().enumerate() {
                    if i > 0 && (units.len() - i) % 3 == 0 {
                        out.push(separator);
                    }
                    out.push(digit);
                }
            }
            None => out.push_str(units),
        }

        if digits > 0 {
            out.push(self.format.subunit_separator);
            out.push_str(fraction);
        }

        out
    }
}

/// Turns formatted text into a subunit count for `format`.
fn parse_subunits(format: &CurrencyFormat, text: &str) -> CoreResult<i64> {
    let negative = text.contains('-');

    let numeral = match (
        text.find(|c: char| c.is_ascii_digit()),
        text.rfind(|c: char| c.is_ascii_digit()),
    ) {
        (Some(first), Some(last)) => &text[first..=last],
        _ => {
            debug!(input = %text, "Rejecting money text without digits");
            return Err(CoreError::malformed(text, "no digits found"));
        }
    };

    let chars: Vec<char> = numeral.chars().collect();
    let digits = format.subunits as usize;
    let has_subunits = digits > 0 && chars.len() > digits;

    if has_subunits && chars[chars.len() - (digits + 1)] != format.subunit_separator {
        debug!(input = %text, currency = format.code, "Subunit separator not where expected");
        return Err(CoreError::malformed(
            text,
            format!(
                "expected subunit separator '{}' {} digits from the right",
                format.subunit_separator, digits
            ),
        ));
    }

    if let Some(separator) = format.thousands_separator {
        let units = if has_subunits {
            &chars[..chars.len() - (digits + 1)]
        } else {
            &chars[..]
        };
        if !groups_are_aligned(units, separator) {
            debug!(input = %text, currency = format.code, "Thousands separator not on a group boundary");
            return Err(CoreError::malformed(
                text,
                format!("thousands separator '{}' must split groups of three digits", separator),
            ));
        }
    }

    let mut cleaned: String = chars
        .into_iter()
        .filter(|&c| {
            !(has_subunits && c == format.subunit_separator)
                && Some(c) != format.thousands_separator
        })
        .collect();

    if negative {
        cleaned.insert(0, '-');
    }

    cleaned.parse::<i64>().map_err(|err| {
        debug!(input = %text, error = %err, "Money text is not an integer");
        CoreError::malformed(text, err.to_string())
    })
}

/// Whether every `separator` in `units` sits between groups of three,
/// with a leading group of one to three characters.
fn groups_are_aligned(units: &[char], separator: char) -> bool {
    let mut groups = units.split(|&c| c == separator);
    let leading_ok = groups
        .next()
        .map_or(true, |first| (1..=3).contains(&first.len()) || first.len() == units.len());
    leading_ok && groups.all(|group| group.len() == 3)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the numeral inside the currency template, e.g. `"£10.59"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format.template.replacen('0', &self.to_string_no_symbol(), 1))
    }
}

/// Equality of values. Panics when the currencies differ.
impl PartialEq for Money {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.assert_same_currency(other);
        self.value == other.value
    }
}

impl Eq for Money {}

/// Ordering of values. Panics when the currencies differ.
impl PartialOrd for Money {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.assert_same_currency(other);
        Some(self.value.cmp(&other.value))
    }
}

/// Addition of two Money values. Panics when the currencies differ.
impl Add for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn add(self, other: Self) -> Self {
        self.assert_same_currency(&other);
        self.with_value(self.value + other.value)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Subtraction of two Money values. Panics when the currencies differ.
impl Sub for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn sub(self, other: Self) -> Self {
        self.assert_same_currency(&other);
        self.with_value(self.value - other.value)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Exact multiplication by an integer.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, n: i64) -> Self {
        self.with_value(self.value * n)
    }
}

/// Lossy division, rounded with the value's policy.
///
/// Use [`Money::split`] or [`Money::allocate`] when nothing may be lost.
impl Div<f64> for Money {
    type Output = Self;

    #[inline]
    fn div(self, divisor: f64) -> Self {
        self.with_value(self.rounding.round(self.value as f64 / divisor))
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.flip_sign()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(shares: &[Money]) -> Vec<i64> {
        shares.iter().map(Money::value).collect()
    }

    #[test]
    fn test_helpers() {
        let m = Money::gbp(11);
        assert_eq!(m.iso_code(), "GBP");
        assert_eq!(m.to_string(), "£0.11");

        let m = Money::eur(22);
        assert_eq!(m.iso_code(), "EUR");
        assert_eq!(m.to_string(), "€0.22");

        let m = Money::usd(1099);
        assert_eq!(m.to_string(), "$10.99");
        assert_eq!(m.rounding(), Rounding::HalfUp);
    }

    #[test]
    fn test_from_subunits() {
        assert!(matches!(
            Money::from_subunits("XXX", 1457),
            Err(CoreError::UnknownCurrency(_))
        ));

        let m = Money::from_subunits("GBP", 1457).unwrap();
        assert_eq!(m.value(), 1457);

        assert_eq!(Money::from_subunits("GBP", 104i8).unwrap().value(), 104);
        assert_eq!(Money::from_subunits("GBP", 104u8).unwrap().value(), 104);
        assert_eq!(Money::from_subunits("GBP", 68242u32).unwrap().value(), 68242);
    }

    #[test]
    fn test_from_float() {
        assert_eq!(Money::from_float("GBP", 10.59).unwrap().value(), 1059);
        assert_eq!(Money::from_float("GBP", -10.59).unwrap().value(), -1059);
        assert_eq!(Money::from_float("JPY", 1234.5f32).unwrap().value(), 1235);
        assert_eq!(Money::from_float("CLF", 1.2345).unwrap().value(), 12345);
        assert!(Money::from_float("XXX", 1.0).is_err());
    }

    #[test]
    fn test_from_float_ignores_division_policy() {
        let m = Money::from_float("GBP", 0.125).unwrap();
        assert_eq!(m.value(), 13);
    }

    #[test]
    fn test_from_string() {
        assert!(Money::from_string("XXX", "14.57").is_err());
        assert_eq!(Money::from_string("GBP", "14.57").unwrap().value(), 1457);
    }

    #[test]
    fn test_from_string_formats() {
        assert_eq!(Money::from_string("JPY", "¥145139").unwrap().value(), 145139);
        assert_eq!(Money::from_string("EUR", "€14.57").unwrap().value(), 1457);
        assert_eq!(
            Money::from_string("JOD", "2,462.486 د.أ").unwrap().value(),
            2462486
        );
        assert_eq!(
            Money::from_string("CLF", "UF157.896,4418").unwrap().value(),
            1578964418
        );
        assert_eq!(Money::from_string("GBP", "£1,059.00").unwrap().value(), 105900);
        assert_eq!(Money::from_string("BYN", "1 234,56 p.").unwrap().value(), 123456);
        assert_eq!(Money::from_string("GBP", "7").unwrap().value(), 7);
    }

    #[test]
    fn test_from_string_negative() {
        assert_eq!(Money::from_string("GBP", "-£10.59").unwrap().value(), -1059);
        assert_eq!(Money::from_string("GBP", "£-0.05").unwrap().value(), -5);
        assert_eq!(Money::from_string("GBP", "10.59-").unwrap().value(), -1059);
    }

    #[test]
    fn test_from_string_errors() {
        // Subunits on a currency that has none
        assert!(Money::from_string("JPY", "145139.0").is_err());
        // Too many subunits
        assert!(Money::from_string("EUR", "14.570").is_err());
        // Too few subunits
        assert!(Money::from_string("JOD", "2,462.48").is_err());
        // No subunits at all
        assert!(Money::from_string("CLF", "1578964418").is_err());
        // No digits
        assert!(matches!(
            Money::from_string("GBP", "£"),
            Err(CoreError::MalformedInput { .. })
        ));
        // Junk between the digits
        assert!(Money::from_string("GBP", "1x2.00").is_err());
        // Overflow
        assert!(Money::from_string("JPY", "99999999999999999999").is_err());
        // Subunit separator on a currency whose thousands separator is '.'
        assert!(matches!(
            Money::from_string("CLP", "145139.0"),
            Err(CoreError::MalformedInput { .. })
        ));
        // Thousands separators off the three-digit boundaries
        assert!(Money::from_string("GBP", "1,2345.00").is_err());
        assert!(Money::from_string("GBP", "£1234,567.00").is_err());
        assert!(Money::from_string("JPY", "1,23").is_err());
    }

    #[test]
    fn test_from_string_grouped_units() {
        assert_eq!(Money::from_string("CLP", "$145.139").unwrap().value(), 145139);
        assert_eq!(Money::from_string("CLP", "145139").unwrap().value(), 145139);
        assert_eq!(Money::from_string("JPY", "¥1,234,567").unwrap().value(), 1234567);
        assert_eq!(Money::from_string("GBP", "£12,345.67").unwrap().value(), 1234567);
        assert_eq!(Money::from_string("GBP", "12345.67").unwrap().value(), 1234567);
    }

    #[test]
    fn test_thb_display() {
        let m = Money::from_subunits("THB", 1000).unwrap();
        assert_eq!(m.to_string(), "฿ 10.00");
        assert_eq!(Money::from_string("THB", &m.to_string()).unwrap().value(), 1000);
    }

    #[test]
    fn test_units_and_subunits() {
        let m = Money::gbp(1099);
        assert_eq!((m.units(), m.subunits()), (10, 99));

        let m = Money::gbp(-547);
        assert_eq!((m.units(), m.subunits()), (-5, -47));

        let m = Money::from_subunits("JPY", 1234).unwrap();
        assert_eq!((m.units(), m.subunits()), (1234, 0));

        let m = Money::from_subunits("BHD", 12345).unwrap();
        assert_eq!((m.units(), m.subunits()), (12, 345));

        let m = Money::from_subunits("CLF", 123456).unwrap();
        assert_eq!((m.units(), m.subunits()), (12, 3456));
    }

    #[test]
    fn test_scenario() {
        let gross = Money::gbp(1059);
        let net = gross / 1.2;
        let tax = gross - net;

        assert_eq!(gross.to_string(), "£10.59");
        assert_eq!(net.to_string(), "£8.83");
        assert_eq!(tax.to_string(), "£1.76");
        assert_eq!((net + tax).value(), 1059);
    }

    #[test]
    fn test_immutability() {
        let x = Money::gbp(69);
        let y = Money::gbp(50);
        let _ = x + y;
        let _ = x - y;
        let _ = x * 20;
        let z = x / 7.0;
        let s = x.split(3);

        assert_eq!(z.value(), 10);
        assert_eq!(values(&s), vec![23, 23, 23]);
        assert_eq!(x.value(), 69);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_add() {
        let _ = Money::gbp(69) + Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_sub() {
        let _ = Money::gbp(69) - Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_eq() {
        let _ = Money::gbp(69) == Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_neq() {
        let _ = Money::gbp(69) != Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_gt() {
        let _ = Money::gbp(69) > Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_gte() {
        let _ = Money::gbp(69) >= Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_lt() {
        let _ = Money::gbp(69) < Money::eur(50);
    }

    #[test]
    #[should_panic(expected = "different currencies")]
    fn test_panic_on_lte() {
        let _ = Money::gbp(69) <= Money::eur(50);
    }

    #[test]
    fn test_checked_variants() {
        let gbp = Money::gbp(69);
        let eur = Money::eur(50);

        assert!(matches!(
            gbp.checked_add(&eur),
            Err(CoreError::CurrencyMismatch { .. })
        ));
        assert!(gbp.checked_sub(&eur).is_err());
        assert!(gbp.try_cmp(&eur).is_err());

        assert_eq!(gbp.checked_add(&Money::gbp(1)).unwrap().value(), 70);
        assert_eq!(gbp.checked_sub(&Money::gbp(70)).unwrap().value(), -1);
        assert_eq!(gbp.try_cmp(&Money::gbp(70)).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_add_and_sub() {
        assert_eq!((Money::gbp(67) + Money::gbp(33)).value(), 100);
        assert_eq!((Money::gbp(-1) + Money::gbp(-2)).value(), -3);
        assert_eq!((Money::gbp(67) - Money::gbp(33)).value(), 34);
        assert_eq!((Money::gbp(-51) - Money::gbp(-45)).value(), -6);

        let mut m = Money::gbp(10);
        m += Money::gbp(5);
        m -= Money::gbp(3);
        assert_eq!(m.value(), 12);
    }

    #[test]
    fn test_mul() {
        assert_eq!((Money::gbp(100) * 5).value(), 500);
        assert_eq!((Money::gbp(-114) * 3).value(), -342);
    }

    #[test]
    fn test_scale() {
        let x = Money::gbp(1337);
        assert_eq!(x.scale(1.2457).value(), 1666);
        assert_eq!(x.scale(0.872).value(), 1166);
        assert_eq!(x.scale(541.544).value(), 724044);

        let x = Money::gbp(-114);
        assert_eq!(x.scale(1.2457).value(), -142);
        assert_eq!(x.scale(0.872).value(), -99);
        assert_eq!(x.scale(541.543).value(), -61736);
    }

    #[test]
    fn test_div() {
        let x = Money::gbp(1337);
        assert_eq!((x / 1.2457).value(), 1073);
        assert_eq!((x / 0.871).value(), 1535);
        assert_eq!((x / 541.544).value(), 2);

        let x = Money::gbp(-114);
        assert_eq!((x / 1.2457).value(), -92);
        assert_eq!((x / 0.872).value(), -131);
        assert_eq!((x / 541.543).value(), 0);
    }

    #[test]
    fn test_div_uses_policy() {
        let m = Money::gbp(21);
        assert_eq!((m / 2.0).value(), 11);
        assert_eq!((m.with_rounding(Rounding::HalfDown) / 2.0).value(), 10);
        assert_eq!((m.with_rounding(Rounding::HalfToEven) / 2.0).value(), 10);
        assert_eq!((m.with_rounding(Rounding::Down) / 2.0).value(), 10);
        assert_eq!((Money::gbp(23).with_rounding(Rounding::HalfToEven) / 2.0).value(), 12);
        assert_eq!((Money::gbp(-21).with_rounding(Rounding::Up) / 2.0).value(), -10);
    }

    #[test]
    fn test_abs_and_flip_sign() {
        assert_eq!(Money::gbp(-5434651).abs().value(), 5434651);
        assert_eq!(Money::gbp(2464125665i64).abs().value(), 2464125665);
        assert_eq!(Money::gbp(-i64::MAX).abs().value(), i64::MAX);
        assert_eq!(Money::gbp(12).flip_sign().value(), -12);
        assert_eq!((-Money::gbp(-12)).value(), 12);
        // Saturates like abs
        assert_eq!(Money::gbp(i64::MIN).flip_sign().value(), i64::MAX);
        assert_eq!((-Money::gbp(i64::MIN)).value(), i64::MAX);
    }

    #[test]
    fn test_comparisons() {
        assert!(Money::gbp(67) != Money::gbp(33));
        assert!(Money::gbp(12) == Money::gbp(12));

        assert!(Money::gbp(67) > Money::gbp(33));
        assert!(!(Money::gbp(12) > Money::gbp(12)));
        assert!(Money::gbp(12) >= Money::gbp(12));
        assert!(!(Money::gbp(5) >= Money::gbp(12)));

        assert!(Money::gbp(5) < Money::gbp(12));
        assert!(!(Money::gbp(12) < Money::gbp(12)));
        assert!(Money::gbp(12) <= Money::gbp(12));
        assert!(!(Money::gbp(67) <= Money::gbp(33)));
    }

    #[test]
    fn test_equality_ignores_rounding_policy() {
        assert!(Money::gbp(5) == Money::gbp(5).with_rounding(Rounding::Down));
    }

    #[test]
    fn test_zero_and_sign_checks() {
        assert!(Money::gbp(0).is_zero());
        assert!(!Money::gbp(67).is_zero());

        assert!(Money::gbp(67).is_pos());
        assert!(Money::gbp(0).is_pos());
        assert!(!Money::gbp(-5).is_pos());

        assert!(!Money::gbp(67).is_neg());
        assert!(!Money::gbp(0).is_neg());
        assert!(Money::gbp(-5).is_neg());
    }

    #[test]
    #[should_panic(expected = "zero shares")]
    fn test_split_by_zero() {
        Money::gbp(100).split(0);
    }

    #[test]
    fn test_split() {
        assert_eq!(values(&Money::gbp(100).split(3)), vec![34, 33, 33]);
        assert_eq!(values(&Money::gbp(123).split(4)), vec![31, 31, 31, 30]);
        assert_eq!(values(&Money::gbp(5).split(1)), vec![5]);
        assert_eq!(values(&Money::gbp(2).split(4)), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_split_negative() {
        assert_eq!(values(&Money::gbp(-100).split(3)), vec![-34, -33, -33]);
        assert_eq!(values(&Money::gbp(-2).split(4)), vec![-1, -1, 0, 0]);
    }

    #[test]
    fn test_split_keeps_currency() {
        let shares = Money::from_subunits("JPY", 1000).unwrap().split(3);
        assert!(shares.iter().all(|share| share.iso_code() == "JPY"));
    }

    #[test]
    #[should_panic(expected = "ratios")]
    fn test_allocate_by_zero() {
        Money::gbp(100).allocate(&[0]);
    }

    #[test]
    #[should_panic(expected = "ratios")]
    fn test_allocate_empty() {
        Money::gbp(100).allocate(&[]);
    }

    #[test]
    fn test_allocate() {
        assert_eq!(values(&Money::gbp(100).allocate(&[1, 1, 1])), vec![34, 33, 33]);
        assert_eq!(
            values(&Money::gbp(123).allocate(&[2, 2, 2, 2])),
            vec![31, 31, 31, 30]
        );
        assert_eq!(values(&Money::gbp(1099).allocate(&[30, 70])), vec![330, 769]);
        assert_eq!(values(&Money::gbp(1099).allocate(&[305, 695])), vec![336, 763]);
        assert_eq!(values(&Money::gbp(100).allocate(&[0, 1])), vec![0, 100]);
    }

    #[test]
    fn test_allocate_many_ratios() {
        let ratios = [
            654, 465, 45565, 65, 4, 6542, 54, 574, 564, 6544, 9, 2342342, 237, 45, 34325, 2221,
            111, 577, 7,
        ];
        let shares = Money::gbp(1135354247).allocate(&ratios);
        assert_eq!(shares.len(), ratios.len());
        assert_eq!(values(&shares).iter().sum::<i64>(), 1135354247);
    }

    #[test]
    fn test_allocate_negative() {
        let shares = Money::gbp(-100).allocate(&[1, 1, 1]);
        assert_eq!(values(&shares), vec![-34, -33, -33]);
    }

    #[test]
    fn test_allocate_large_values_do_not_overflow() {
        let shares = Money::gbp(i64::MAX).allocate(&[u32::MAX, u32::MAX]);
        assert_eq!(
            shares.iter().map(|s| i128::from(s.value())).sum::<i128>(),
            i128::from(i64::MAX)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::gbp(105900).to_string(), "£1,059.00");
        assert_eq!(Money::gbp(1059).to_string(), "£10.59");
        assert_eq!(Money::gbp(0).to_string(), "£0.00");
        assert_eq!(Money::gbp(-5).to_string(), "£-0.05");
        assert_eq!(Money::gbp(-123456).to_string(), "£-1,234.56");
    }

    #[test]
    fn test_jpy_string() {
        let cases = [
            (1, "1"),
            (12, "12"),
            (123, "123"),
            (1234, "1,234"),
            (12345, "12,345"),
            (123456, "123,456"),
            (1234567, "1,234,567"),
            (12345678, "12,345,678"),
            (123456789, "123,456,789"),
        ];
        for (value, expected) in cases {
            let m = Money::from_subunits("JPY", value).unwrap();
            assert_eq!(m.to_string_no_symbol(), expected);
            assert_eq!(m.to_string(), format!("¥{}", expected));
        }
        let m = Money::from_subunits("JPY", -123456).unwrap();
        assert_eq!(m.to_string_no_symbol(), "-123,456");
    }

    #[test]
    fn test_usd_string() {
        let cases = [
            (1, "0.01"),
            (12, "0.12"),
            (123, "1.23"),
            (1234, "12.34"),
            (12345, "123.45"),
            (123456, "1,234.56"),
            (1234567, "12,345.67"),
            (12345678, "123,456.78"),
            (123456789, "1,234,567.89"),
        ];
        for (value, expected) in cases {
            let m = Money::usd(value);
            assert_eq!(m.to_string_no_symbol(), expected);
            assert_eq!(m.to_string(), format!("${}", expected));
        }
    }

    #[test]
    fn test_byn_string() {
        let m = Money::from_subunits("BYN", 123456789).unwrap();
        assert_eq!(m.to_string_no_symbol(), "1 234 567,89");
        assert_eq!(m.to_string(), "1 234 567,89 p.");
    }

    #[test]
    fn test_bhd_string() {
        let cases = [
            (1, "0.001"),
            (12, "0.012"),
            (123, "0.123"),
            (1234, "1.234"),
            (1234567, "1,234.567"),
            (123456789, "123,456.789"),
        ];
        for (value, expected) in cases {
            let m = Money::from_subunits("BHD", value).unwrap();
            assert_eq!(m.to_string_no_symbol(), expected);
            assert_eq!(m.to_string(), format!("{} .د.ب ", expected));
        }
    }

    #[test]
    fn test_clf_string() {
        let cases = [
            (1, "0,0001"),
            (12, "0,0012"),
            (123, "0,0123"),
            (1234, "0,1234"),
            (12345, "1,2345"),
            (12345678, "1.234,5678"),
            (123456789, "12.345,6789"),
        ];
        for (value, expected) in cases {
            let m = Money::from_subunits("CLF", value).unwrap();
            assert_eq!(m.to_string_no_symbol(), expected);
            assert_eq!(m.to_string(), format!("UF{}", expected));
        }
    }

    #[test]
    fn test_extreme_values_format() {
        let m = Money::gbp(i64::MIN);
        assert_eq!(m.to_string_no_symbol(), "-92,233,720,368,547,758.08");
        let m = Money::gbp(i64::MAX);
        assert_eq!(m.to_string_no_symbol(), "92,233,720,368,547,758.07");
    }

    #[test]
    fn test_string_round_trip() {
        for code in ["JPY", "GBP", "BHD", "CLF", "BYN", "EUR", "THB", "CLP"] {
            for value in [0i64, 1, -1, 7, 99, 1000, -1059, 123456789, -987654321] {
                let m = Money::from_subunits(code, value).unwrap();
                let parsed = Money::from_string(code, &m.to_string()).unwrap();
                assert_eq!(parsed.value(), value, "{} {}", code, m);
            }
        }
    }
}
