//! # Tax Ledger
//!
//! An ordered record of the taxes contained in a price, with a running total.
//!
//! ## Ledger Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TaxLedger                                                              │
//! │  ├── total    £4.32   ◀── always the sum of the entry amounts          │
//! │  └── entries                                                            │
//! │      ├── [0]  £3.12  "VAT"                                              │
//! │      └── [1]  £1.20  "Small order"                                      │
//! │                                                                         │
//! │  concat(a, b)  → a.entries ++ b.entries, total = a.total + b.total     │
//! │  scaled(n)     → every entry × n, total × n                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries with the same description are kept apart. Two "VAT" lines from
//! two prices stay two lines after concatenation.

use serde::Serialize;

use crate::money::Money;

// =============================================================================
// Tax Entry
// =============================================================================

/// One tax contained in a price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxEntry {
    pub amount: Money,
    pub description: String,
}

impl TaxEntry {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        TaxEntry {
            amount,
            description: description.into(),
        }
    }
}

// =============================================================================
// Tax Ledger
// =============================================================================

/// Ordered tax entries plus their total, all in one currency.
///
/// Serializes as `{"total": <money>, "detail": [<entry>, ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxLedger {
    total: Money,
    #[serde(rename = "detail")]
    entries: Vec<TaxEntry>,
}

impl TaxLedger {
    /// An empty ledger in the currency of `like`.
    pub fn new(like: Money) -> Self {
        TaxLedger {
            total: like.zero_like(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry and adds its amount to the total.
    ///
    /// ## Panics
    /// If `amount` is in a different currency from the ledger.
    #[track_caller]
    pub fn add(&mut self, amount: Money, description: impl Into<String>) {
        self.total += amount;
        self.entries.push(TaxEntry::new(amount, description));
    }

    /// A new ledger holding this ledger's entries followed by `other`'s.
    ///
    /// ## Panics
    /// If the two ledgers are in different currencies.
    #[track_caller]
    pub fn concat(&self, other: &TaxLedger) -> TaxLedger {
        let mut entries = Vec::with_capacity(self.entries.len() + other.entries.len());
        entries.extend_from_slice(&self.entries);
        entries.extend_from_slice(&other.entries);

        TaxLedger {
            total: self.total + other.total,
            entries,
        }
    }

    /// A new ledger with every amount multiplied by `n`.
    pub fn scaled(&self, n: i64) -> TaxLedger {
        TaxLedger {
            total: self.total * n,
            entries: self
                .entries
                .iter()
                .map(|entry| TaxEntry::new(entry.amount * n, entry.description.clone()))
                .collect(),
        }
    }

    /// Sum of all entry amounts.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Entries in the order they were added.
    #[inline]
    pub fn entries(&self) -> &[TaxEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TaxLedger {
    type Item = &'a TaxEntry;
    type IntoIter = std::slice::Iter<'a, TaxEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
