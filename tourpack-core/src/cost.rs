//! Monetary amounts held in integer minor units.
//!
//! Keeping money integral makes budget comparisons and package totals exact,
//! so identical inputs always produce identical packages.

use std::{fmt, iter::Sum, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Quantity;

const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// A non-negative monetary amount in minor units (cents).
///
/// # Examples
/// ```
/// use tourpack_core::Cost;
///
/// let cost: Cost = "12.5".parse().expect("valid amount");
/// assert_eq!(cost.minor_units(), 1250);
/// assert_eq!(cost.to_string(), "12.50");
/// assert_eq!(cost, Cost::from_minor_units(1250));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Cost(u64);

impl Cost {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Construct a cost from minor units.
    #[must_use]
    pub const fn from_minor_units(minor: u64) -> Self {
        Self(minor)
    }

    /// Construct a cost from whole currency units, saturating on overflow.
    #[must_use]
    pub const fn from_major_units(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_UNITS_PER_MAJOR))
    }

    /// Return the amount in minor units.
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Add two amounts, saturating at the numeric bound.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Quantity for Cost {
    fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Self> for Cost {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = self.0.div_euclid(MINOR_UNITS_PER_MAJOR);
        let minor = self.0.rem_euclid(MINOR_UNITS_PER_MAJOR);
        write!(f, "{major}.{minor:02}")
    }
}

/// Errors returned when parsing a [`Cost`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCostError {
    /// The input was empty.
    #[error("amount is empty")]
    Empty,
    /// The input contained something other than digits and one decimal point.
    #[error("amount '{input}' is not a non-negative decimal number")]
    InvalidDigits {
        /// Text that failed to parse.
        input: String,
    },
    /// More than two fractional digits were supplied.
    #[error("amount '{input}' has more than two decimal places")]
    TooPrecise {
        /// Text that failed to parse.
        input: String,
    },
    /// The amount does not fit in the supported range.
    #[error("amount '{input}' is too large")]
    Overflow {
        /// Text that failed to parse.
        input: String,
    },
}

impl FromStr for Cost {
    type Err = ParseCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseCostError::Empty);
        }
        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
            return Err(ParseCostError::InvalidDigits {
                input: input.to_owned(),
            });
        }
        if fraction.len() > 2 {
            return Err(ParseCostError::TooPrecise {
                input: input.to_owned(),
            });
        }

        let overflow = || ParseCostError::Overflow {
            input: input.to_owned(),
        };
        let major: u64 = whole.parse().map_err(|_| overflow())?;
        let minor: u64 = match fraction.len() {
            0 => 0,
            1 => fraction
                .parse::<u64>()
                .map_err(|_| overflow())?
                .saturating_mul(10),
            _ => fraction.parse().map_err(|_| overflow())?,
        };
        major
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|cents| cents.checked_add(minor))
            .map(Self)
            .ok_or_else(overflow)
    }
}
