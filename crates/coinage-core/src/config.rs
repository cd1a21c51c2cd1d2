//! # Pricing Configuration
//!
//! Default currency, rounding policy and tax for an application that builds
//! many prices the same way.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     COINAGE_CURRENCY=EUR                                               │
//! │     COINAGE_ROUNDING=half_to_even                                      │
//! │     COINAGE_TAX_PERCENT=21                                             │
//! │     COINAGE_TAX_DESCRIPTION=BTW                                        │
//! │     COINAGE_TAX_MODE=inclusive                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/coinage/pricing.toml (Linux)                             │
//! │     ~/Library/Application Support/com.coinage.coinage/pricing.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     GBP, half_up, no default tax                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pricing.toml
//! [currency]
//! code = "GBP"
//! rounding = "half_up"   # up | down | half_up | half_down | half_to_even
//!
//! [tax]
//! percent = 20.0
//! description = "VAT"
//! mode = "inclusive"     # exclusive | inclusive
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::currency::CurrencyFormat;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::price::Price;
use crate::rounding::Rounding;
use crate::types::TaxMode;
use crate::validation::{validate_description, validate_iso_code, validate_tax_percent};
use crate::DEFAULT_CURRENCY;

// =============================================================================
// Currency Settings
// =============================================================================

/// Which currency new values use and how they round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code.
    #[serde(default = "default_currency_code")]
    pub code: String,

    /// Policy for division, scaling and percentage taxes.
    #[serde(default)]
    pub rounding: Rounding,
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_currency_code(),
            rounding: Rounding::default(),
        }
    }
}

// =============================================================================
// Tax Settings
// =============================================================================

/// A tax applied to every price built through [`PricingConfig::price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSettings {
    /// Percentage, 0 to 100.
    pub percent: f64,

    /// Ledger description, e.g. "VAT".
    #[serde(default = "default_tax_description")]
    pub description: String,

    /// Whether the amount already contains the tax.
    #[serde(default)]
    pub mode: TaxMode,
}

fn default_tax_description() -> String {
    "VAT".to_string()
}

impl TaxSettings {
    fn with_percent(percent: f64) -> Self {
        TaxSettings {
            percent,
            description: default_tax_description(),
            mode: TaxMode::default(),
        }
    }
}

// =============================================================================
// Main Pricing Configuration
// =============================================================================

/// Complete pricing configuration.
///
/// ## Example
/// ```rust
/// use coinage_core::PricingConfig;
///
/// let config = PricingConfig::from_toml_str(r#"
///     [currency]
///     code = "GBP"
///
///     [tax]
///     percent = 20.0
///     mode = "inclusive"
/// "#).unwrap();
///
/// let price = config.price(1099).unwrap();
/// assert_eq!(price.net().to_string(), "£9.16");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    /// No tax is applied when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxSettings>,
}

impl PricingConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pricing.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CoreResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same load order as [`PricingConfig::load`], with overrides read from
    /// `lookup` instead of the process environment.
    pub fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> CoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading pricing config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load pricing config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses and validates a TOML document. Environment is not consulted.
    pub fn from_toml_str(contents: &str) -> CoreResult<Self> {
        let config: PricingConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Pricing config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CoreResult<()> {
        validate_iso_code(&self.currency.code)?;
        if crate::currency::find(&self.currency.code).is_none() {
            return Err(CoreError::InvalidConfig(format!(
                "currency '{}' is not in the currency table",
                self.currency.code
            )));
        }

        if let Some(ref tax) = self.tax {
            validate_tax_percent(tax.percent)?;
            validate_description(&tax.description)?;
        }

        Ok(())
    }

    /// Applies overrides from any key lookup, e.g. the process environment.
    ///
    /// Unparseable values are logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(code) = lookup("COINAGE_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            self.currency.code = code.trim().to_string();
        }

        if let Some(rounding) = lookup("COINAGE_ROUNDING") {
            match rounding.parse::<Rounding>() {
                Ok(parsed) => {
                    debug!(rounding = %parsed, "Overriding rounding from environment");
                    self.currency.rounding = parsed;
                }
                Err(_) => warn!(rounding = %rounding, "Unknown rounding policy in environment"),
            }
        }

        if let Some(percent) = lookup("COINAGE_TAX_PERCENT") {
            match percent.trim().parse::<f64>() {
                Ok(p) => {
                    debug!(percent = p, "Overriding tax percent from environment");
                    match self.tax {
                        Some(ref mut tax) => tax.percent = p,
                        None => self.tax = Some(TaxSettings::with_percent(p)),
                    }
                }
                Err(_) => warn!(percent = %percent, "Tax percent in environment is not a number"),
            }
        }

        if let Some(description) = lookup("COINAGE_TAX_DESCRIPTION") {
            match self.tax {
                Some(ref mut tax) => tax.description = description,
                None => warn!("COINAGE_TAX_DESCRIPTION set without a tax percent, ignoring"),
            }
        }

        if let Some(mode) = lookup("COINAGE_TAX_MODE") {
            match (mode.parse::<TaxMode>(), self.tax.as_mut()) {
                (Ok(parsed), Some(tax)) => tax.mode = parsed,
                (Ok(_), None) => warn!("COINAGE_TAX_MODE set without a tax percent, ignoring"),
                (Err(_), _) => warn!(mode = %mode, "Unknown tax mode in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "coinage", "coinage")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }

    // =========================================================================
    // Factory Methods
    // =========================================================================

    /// The configured currency's format.
    pub fn format(&self) -> CoreResult<&'static CurrencyFormat> {
        CurrencyFormat::lookup(&self.currency.code)
    }

    /// Money in the configured currency and rounding policy.
    pub fn money(&self, value: impl Into<i64>) -> CoreResult<Money> {
        let format = self.format()?;
        Ok(Money::new(format, value.into()).with_rounding(self.currency.rounding))
    }

    /// Parses money in the configured currency.
    pub fn money_from_str(&self, text: &str) -> CoreResult<Money> {
        Ok(Money::from_string(&self.currency.code, text)?.with_rounding(self.currency.rounding))
    }

    /// A price with the configured default tax applied.
    pub fn price(&self, gross: impl Into<i64>) -> CoreResult<Price> {
        self.apply_default_tax(Price::from_money(self.money(gross)?))
    }

    /// Parses a price in the configured currency, then applies the default tax.
    pub fn price_from_str(&self, text: &str) -> CoreResult<Price> {
        self.apply_default_tax(Price::from_money(self.money_from_str(text)?))
    }

    fn apply_default_tax(&self, price: Price) -> CoreResult<Price> {
        match self.tax {
            None => Ok(price),
            Some(ref tax) => match tax.mode {
                TaxMode::Exclusive => price.add_tax_percent(tax.percent, tax.description.clone()),
                TaxMode::Inclusive => {
                    price.include_tax_percent(tax.percent, tax.description.clone())
                }
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
