//! # Rounding Policies
//!
//! Named policies mapping a real number to an integer count of subunits.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Money stores integers. Rounding is only needed when a real number     │
//! │  comes back from floating point:                                       │
//! │                                                                         │
//! │    Money / 1.2          → policy(value / 1.2)                          │
//! │    Money.scale(0.872)   → policy(value × 0.872)                        │
//! │    Price tax percent    → policy(gross / 100 × percent)                │
//! │                                                                         │
//! │  Money::from_float ALWAYS uses half-up: it is a representation         │
//! │  conversion, not a division.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tie Behaviour
//! ```text
//!              10.5   -10.5   11.5   10.25  -10.25
//! Up            11     -10     12     11     -10
//! Down          10     -11     11     10     -11
//! HalfUp        11     -11     12     10     -10
//! HalfDown      10     -10     11     10     -10
//! HalfToEven    10     -10     12     10     -10
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};

/// Anything that can turn a real number into whole subunits.
///
/// `Rounding` is the only implementation shipped; the trait is the seam
/// callers use when they want to accept "any policy".
pub trait RoundingPolicy {
    fn round(&self, value: f64) -> i64;
}

/// Ceiling.
pub fn round_up(value: f64) -> i64 {
    value.ceil() as i64
}

/// Floor (toward negative infinity).
pub fn round_down(value: f64) -> i64 {
    value.floor() as i64
}

/// Nearest, ties away from zero.
pub fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

/// Nearest, ties toward zero.
pub fn round_half_down(value: f64) -> i64 {
    let truncated = value.trunc();
    if (value - truncated).abs() <= 0.5 {
        truncated as i64
    } else {
        (truncated + 1f64.copysign(value)) as i64
    }
}

/// Nearest, ties to the even neighbour (bankers rounding).
pub fn round_half_to_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

// =============================================================================
// Rounding Enum
// =============================================================================

/// The rounding policy carried by every `Money`.
///
/// Stored as a plain enum so `Money` stays `Copy` and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rounding {
    /// Always toward positive infinity.
    Up,
    /// Always toward negative infinity.
    Down,
    /// Ties away from zero.
    #[default]
    HalfUp,
    /// Ties toward zero.
    HalfDown,
    /// Ties to even.
    HalfToEven,
}

impl Rounding {
    /// All policies, in declaration order.
    pub const ALL: [Rounding; 5] = [
        Rounding::Up,
        Rounding::Down,
        Rounding::HalfUp,
        Rounding::HalfDown,
        Rounding::HalfToEven,
    ];

    /// Rounds `value` to a whole number of subunits.
    #[inline]
    pub fn round(self, value: f64) -> i64 {
        match self {
            Rounding::Up => round_up(value),
            Rounding::Down => round_down(value),
            Rounding::HalfUp => round_half_up(value),
            Rounding::HalfDown => round_half_down(value),
            Rounding::HalfToEven => round_half_to_even(value),
        }
    }
}

impl RoundingPolicy for Rounding {
    fn round(&self, value: f64) -> i64 {
        Rounding::round(*self, value)
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::Up => write!(f, "up"),
            Rounding::Down => write!(f, "down"),
            Rounding::HalfUp => write!(f, "half_up"),
            Rounding::HalfDown => write!(f, "half_down"),
            Rounding::HalfToEven => write!(f, "half_to_even"),
        }
    }
}

impl FromStr for Rounding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "up" | "ceil" => Ok(Rounding::Up),
            "down" | "floor" => Ok(Rounding::Down),
            "half_up" => Ok(Rounding::HalfUp),
            "half_down" => Ok(Rounding::HalfDown),
            "half_to_even" | "half_even" | "bankers" => Ok(Rounding::HalfToEven),
            other => Err(ValidationError::InvalidFormat {
                field: "rounding".to_string(),
                reason: format!(
                    "unknown policy '{}'. Valid options: up, down, half_up, half_down, half_to_even",
                    other
                ),
            }
            .into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
