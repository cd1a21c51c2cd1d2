//! # Currency Formats
//!
//! Static ISO 4217 reference table: how many subunit digits each currency
//! has, which separators it uses and where its symbol goes.
//!
//! ## Template Placeholder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  template   numeral        rendered                                     │
//! │  ────────   ───────────    ──────────────                               │
//! │  "£0"       "10.59"        "£10.59"                                     │
//! │  "0 Kč"     "1,234.00"     "1,234.00 Kč"                                │
//! │  "UF0"      "12.345,6789"  "UF12.345,6789"                              │
//! │                                                                         │
//! │  The first '0' in the template is replaced by the numeral.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};

/// Formatting rules for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyFormat {
    /// ISO 4217 code, upper case.
    pub code: &'static str,
    /// Number of decimal digits between units and subunits (0..=4).
    pub subunits: u8,
    /// Grouping separator for every three unit digits.
    pub thousands_separator: Option<char>,
    /// Separator between units and subunits.
    pub subunit_separator: char,
    /// Display template; its first `0` is replaced by the numeral.
    pub template: &'static str,
}

impl CurrencyFormat {
    /// Looks up a currency by its exact ISO 4217 code.
    ///
    /// ## Example
    /// ```rust
    /// use coinage_core::currency::CurrencyFormat;
    ///
    /// let gbp = CurrencyFormat::lookup("GBP").unwrap();
    /// assert_eq!(gbp.subunits, 2);
    /// assert!(CurrencyFormat::lookup("gbp").is_err());
    /// ```
    pub fn lookup(code: &str) -> CoreResult<&'static CurrencyFormat> {
        find(code).ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))
    }

    /// `10^subunits`, the number of subunits in one unit.
    #[inline]
    pub const fn scale(&self) -> i64 {
        10i64.pow(self.subunits as u32)
    }
}

/// Returns the format for `code`, if the code is known.
pub fn find(code: &str) -> Option<&'static CurrencyFormat> {
    CURRENCY_FORMATS
        .binary_search_by(|format| format.code.cmp(code))
        .ok()
        .map(|index| &CURRENCY_FORMATS[index])
}

/// Every known currency, ordered by code.
pub fn all() -> &'static [CurrencyFormat] {
    &CURRENCY_FORMATS
}

const fn fmt(
    code: &'static str,
    subunits: u8,
    thousands: char,
    subunit: char,
    template: &'static str,
) -> CurrencyFormat {
    CurrencyFormat {
        code,
        subunits,
        thousands_separator: Some(thousands),
        subunit_separator: subunit,
        template,
    }
}

/// Pound sterling.
pub const GBP: CurrencyFormat = fmt("GBP", 2, ',', '.', "£0");

/// Euro.
pub const EUR: CurrencyFormat = fmt("EUR", 2, ',', '.', "€0");

/// US dollar.
pub const USD: CurrencyFormat = fmt("USD", 2, ',', '.', "$0");

// Sorted by code: `find` relies on binary search.
static CURRENCY_FORMATS: [CurrencyFormat; 169] = [
    fmt("AED", 2, ',', '.', "0 د.إ"),
    fmt("AFN", 2, ',', '.', "0 ؋"),
    fmt("ALL", 2, ',', '.', "L0"),
    fmt("AMD", 2, ',', '.', "0 ֏"),
    fmt("ANG", 2, '.', ',', "ƒ0"),
    fmt("AOA", 2, ',', '.', "0Kz"),
    fmt("ARS", 2, ',', '.', "$0"),
    fmt("AUD", 2, ',', '.', "$0"),
    fmt("AWG", 2, ',', '.', "0ƒ"),
    fmt("AZN", 2, ',', '.', "m0"),
    fmt("BAM", 2, ',', '.', "KM0"),
    fmt("BBD", 2, ',', '.', "$0"),
    fmt("BDT", 2, ',', '.', "৳0"),
    fmt("BGN", 2, ',', '.', "лв0"),
    fmt("BHD", 3, ',', '.', "0 .د.ب "),
    fmt("BIF", 0, ',', '.', "0Fr"),
    fmt("BMD", 2, ',', '.', "$0"),
    fmt("BND", 2, ',', '.', "$0"),
    fmt("BOB", 2, ',', '.', "Bs.0"),
    fmt("BRL", 2, '.', ',', "R$0"),
    fmt("BSD", 2, ',', '.', "$0"),
    fmt("BTN", 2, ',', '.', "0Nu."),
    fmt("BWP", 2, ',', '.', "P0"),
    fmt("BYN", 2, ' ', ',', "0 p."),
    fmt("BYR", 0, ' ', ',', "0 p."),
    fmt("BZD", 2, ',', '.', "BZ$0"),
    fmt("CAD", 2, ',', '.', "$0"),
    fmt("CDF", 2, ',', '.', "0FC"),
    fmt("CHF", 2, ',', '.', "0 CHF"),
    fmt("CLF", 4, '.', ',', "UF0"),
    fmt("CLP", 0, '.', ',', "$0"),
    fmt("CNY", 2, ',', '.', "0 ¥"),
    fmt("COP", 2, '.', ',', "$0"),
    fmt("CRC", 2, ',', '.', "₡0"),
    fmt("CUC", 2, ',', '.', "0$"),
    fmt("CUP", 2, ',', '.', "$MN0"),
    fmt("CVE", 2, ',', '.', "0$"),
    fmt("CZK", 2, ',', '.', "0 Kč"),
    fmt("DJF", 0, ',', '.', "0 Fdj"),
    fmt("DKK", 2, '.', ',', "kr 0"),
    fmt("DOP", 2, ',', '.', "RD$0"),
    fmt("DZD", 2, ',', '.', "0 دج "),
    fmt("EEK", 2, ',', '.', "kr0"),
    fmt("EGP", 2, ',', '.', "ج.م 0"),
    fmt("ERN", 2, ',', '.', "0 Nfk"),
    fmt("ETB", 2, ',', '.', "0 Br"),
    EUR,
    fmt("FJD", 2, ',', '.', "$0"),
    fmt("FKP", 2, ',', '.', "£0"),
    GBP,
    fmt("GEL", 2, ',', '.', "0 ლ"),
    fmt("GGP", 2, ',', '.', "£0"),
    fmt("GHC", 2, ',', '.', "GH₵0"),
    fmt("GHS", 2, ',', '.', "GH₵0"),
    fmt("GIP", 2, ',', '.', "£0"),
    fmt("GMD", 2, ',', '.', "0 D"),
    fmt("GNF", 0, ',', '.', "0 FG"),
    fmt("GTQ", 2, ',', '.', "Q0"),
    fmt("GYD", 2, ',', '.', "$0"),
    fmt("HKD", 2, ',', '.', "$0"),
    fmt("HNL", 2, ',', '.', "L0"),
    fmt("HRK", 2, '.', ',', "0 Kn"),
    fmt("HTG", 2, '.', ',', "0 G"),
    fmt("HUF", 0, ',', '.', "Ft0"),
    fmt("IDR", 2, ',', '.', "Rp0"),
    fmt("ILS", 2, ',', '.', "₪0"),
    fmt("IMP", 2, ',', '.', "£0"),
    fmt("INR", 2, ',', '.', "₹0"),
    fmt("IQD", 3, ',', '.', "0 د.ع"),
    fmt("IRR", 2, ',', '.', "0 ﷼"),
    fmt("ISK", 0, '.', ',', "Kr0"),
    fmt("JEP", 2, ',', '.', "£0"),
    fmt("JMD", 2, ',', '.', "J$0"),
    fmt("JOD", 3, ',', '.', "0 د.أ"),
    fmt("JPY", 0, ',', '.', "¥0"),
    fmt("KES", 2, ',', '.', "KSh0"),
    fmt("KGS", 2, ',', '.', "С̲0"),
    fmt("KHR", 2, ',', '.', "៛0"),
    fmt("KMF", 0, ',', '.', "CF0"),
    fmt("KPW", 0, ',', '.', "₩0"),
    fmt("KRW", 0, ',', '.', "₩0"),
    fmt("KWD", 3, ',', '.', "0 د.ك"),
    fmt("KYD", 2, ',', '.', "$0"),
    fmt("KZT", 2, ',', '.', "₸0"),
    fmt("LAK", 2, ',', '.', "₭0"),
    fmt("LBP", 2, ',', '.', "£0"),
    fmt("LKR", 2, ',', '.', "රු, ரூ0"),
    fmt("LRD", 2, ',', '.', "$0"),
    fmt("LSL", 2, ',', '.', "L0"),
    fmt("LTL", 2, ',', '.', "Lt0"),
    fmt("LVL", 2, ',', '.', "0 Ls"),
    fmt("LYD", 3, ',', '.', "0 ل.د"),
    fmt("MAD", 2, ',', '.', "0 DH"),
    fmt("MDL", 2, ',', '.', "0 lei"),
    fmt("MKD", 2, ',', '.', "ден0"),
    fmt("MMK", 2, ',', '.', "K0"),
    fmt("MNT", 2, ',', '.', "₮0"),
    fmt("MOP", 2, ',', '.', "0 P"),
    fmt("MUR", 2, ',', '.', "₨0"),
    fmt("MVR", 2, ',', '.', "0 MVR"),
    fmt("MWK", 2, ',', '.', "MK0"),
    fmt("MXN", 2, ',', '.', "$0"),
    fmt("MYR", 2, ',', '.', "RM0"),
    fmt("MZN", 2, ',', '.', "MT0"),
    fmt("NAD", 2, ',', '.', "$0"),
    fmt("NGN", 2, ',', '.', "₦0"),
    fmt("NIO", 2, ',', '.', "C$0"),
    fmt("NOK", 2, ',', '.', "0 Kr"),
    fmt("NPR", 2, ',', '.', "रु0"),
    fmt("NZD", 2, ',', '.', "$0"),
    fmt("OMR", 3, ',', '.', "0 ر.ع."),
    fmt("PAB", 2, ',', '.', "B/.0"),
    fmt("PEN", 2, ',', '.', "S/0"),
    fmt("PGK", 2, ',', '.', "0 K"),
    fmt("PHP", 2, ',', '.', "₱0"),
    fmt("PKR", 2, ',', '.', "₨0"),
    fmt("PLN", 2, ',', '.', "0 zł"),
    fmt("PYG", 0, ',', '.', "0Gs"),
    fmt("QAR", 2, ',', '.', "0 ر.ق"),
    fmt("RON", 2, ',', '.', "lei0"),
    fmt("RSD", 2, ',', '.', "дин0"),
    fmt("RUB", 2, ',', '.', "0 ₽"),
    fmt("RUR", 2, ',', '.', "0 ₽"),
    fmt("RWF", 0, ',', '.', "0 FRw"),
    fmt("SAR", 2, ',', '.', "0 ر.س"),
    fmt("SBD", 2, ',', '.', "$0"),
    fmt("SCR", 2, ',', '.', "SCR0"),
    fmt("SDG", 2, ',', '.', "£0"),
    fmt("SEK", 2, ',', '.', "0 Kr"),
    fmt("SGD", 2, ',', '.', "$0"),
    fmt("SHP", 2, ',', '.', "£0"),
    fmt("SKK", 2, ',', '.', "Sk0"),
    fmt("SLL", 2, ',', '.', "0 Le"),
    fmt("SOS", 2, ',', '.', "0 Sh"),
    fmt("SRD", 2, ',', '.', "$0"),
    fmt("SSP", 2, ',', '.', "0 £"),
    fmt("STD", 2, ',', '.', "0 Db"),
    fmt("SVC", 2, ',', '.', "₡0"),
    fmt("SYP", 2, ',', '.', "0 £"),
    fmt("SZL", 2, ',', '.', "£0"),
    fmt("THB", 2, ',', '.', "฿ 0"),
    fmt("TJS", 2, ',', '.', "0 SM"),
    fmt("TMT", 2, ',', '.', "0 T"),
    fmt("TND", 3, ',', '.', "0 د.ت"),
    fmt("TOP", 2, ',', '.', "T$0"),
    fmt("TRL", 2, ',', '.', "₺0"),
    fmt("TRY", 2, ',', '.', "₺0"),
    fmt("TTD", 2, ',', '.', "TT$0"),
    fmt("TWD", 2, ',', '.', "NT$0"),
    fmt("TZS", 0, ',', '.', "TSh0"),
    fmt("UAH", 2, ',', '.', "0 ₴"),
    fmt("UGX", 0, ',', '.', "0 USh"),
    USD,
    fmt("UYU", 2, ',', '.', "U$0"),
    fmt("UZS", 2, ',', '.', "сум0"),
    fmt("VEF", 2, ',', '.', "Bs0"),
    fmt("VND", 0, ',', '.', "0 ₫"),
    fmt("VUV", 0, ',', '.', "Vt0"),
    fmt("WST", 2, ',', '.', "0 T"),
    fmt("XAF", 0, ',', '.', "0 Fr"),
    fmt("XAG", 0, ',', '.', "0 oz t"),
    fmt("XAU", 0, ',', '.', "0 oz t"),
    fmt("XCD", 2, ',', '.', "$0"),
    fmt("XDR", 0, ',', '.', "0 SDR"),
    fmt("XPF", 0, ',', '.', "0 ₣"),
    fmt("YER", 2, ',', '.', "0 ر.ي, ﷼"),
    fmt("ZAR", 2, ',', '.', "R0"),
    fmt("ZMW", 2, ',', '.', "ZK0"),
    fmt("ZWD", 2, ',', '.', "Z$0"),
];

// =============================================================================
// Unit Tests
// =============================================================================
