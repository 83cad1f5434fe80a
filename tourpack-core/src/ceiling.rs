//! Optional upper bounds on package totals.
//!
//! A ceiling is either absent (`Unlimited`) or carries the amount still
//! available. An absent ceiling admits everything and stays absent no matter
//! how much is consumed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amounts that a [`Ceiling`] can bound.
pub trait Quantity: Copy + Ord {
    /// Subtract `other`, stopping at zero.
    #[must_use]
    fn saturating_sub(self, other: Self) -> Self;
}

impl Quantity for u32 {
    fn saturating_sub(self, other: Self) -> Self {
        Self::saturating_sub(self, other)
    }
}

/// An optional upper bound that tracks how much remains.
///
/// # Examples
/// ```
/// use tourpack_core::Ceiling;
///
/// let days = Ceiling::from(Some(5_u32));
/// assert!(days.admits(3));
/// let left = days.after(3);
/// assert_eq!(left, Ceiling::Remaining(2));
/// assert!(!left.admits(3));
///
/// let open: Ceiling<u32> = Ceiling::from(None);
/// assert!(open.admits(u32::MAX));
/// assert_eq!(open.after(10), Ceiling::Unlimited);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ceiling<T> {
    /// No bound applies.
    #[default]
    Unlimited,
    /// At most this much may still be consumed.
    Remaining(T),
}

impl<T: Quantity> Ceiling<T> {
    /// Whether `amount` fits under the ceiling.
    #[must_use]
    pub fn admits(&self, amount: T) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Remaining(left) => amount <= *left,
        }
    }

    /// The ceiling left after consuming `amount`.
    ///
    /// `Unlimited` stays `Unlimited`. Callers check [`Ceiling::admits`] first;
    /// an oversized amount leaves zero remaining.
    #[must_use]
    pub fn after(self, amount: T) -> Self {
        match self {
            Self::Unlimited => Self::Unlimited,
            Self::Remaining(left) => Self::Remaining(left.saturating_sub(amount)),
        }
    }
}

impl<T> From<Option<T>> for Ceiling<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unlimited, Self::Remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cost;
    use rstest::rstest;

    #[rstest]
    #[case(Ceiling::Remaining(4), 4, true)]
    #[case(Ceiling::Remaining(4), 5, false)]
    #[case(Ceiling::Remaining(0), 0, true)]
    #[case(Ceiling::Unlimited, u32::MAX, true)]
    fn admits_against_remaining(
        #[case] ceiling: Ceiling<u32>,
        #[case] amount: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(ceiling.admits(amount), expected);
    }

    #[test]
    fn unlimited_is_never_decremented() {
        let ceiling: Ceiling<Cost> = Ceiling::Unlimited;
        let after = ceiling.after(Cost::from_major_units(1_000));
        assert_eq!(after, Ceiling::Unlimited);
    }

    #[test]
    fn remaining_is_decremented() {
        let ceiling = Ceiling::Remaining(Cost::from_major_units(25));
        let after = ceiling.after(Cost::from_major_units(10));
        assert_eq!(after, Ceiling::Remaining(Cost::from_major_units(15)));
    }
}
