//! Exact money amounts.

use core::fmt;
use core::ops::{Add, AddAssign};

const CENTS_PER_CHIP: u64 = 100;

/// An exact amount of money, stored in cents.
///
/// Bets are always whole chips, so every payout the table makes (including
/// 3:2 on a natural) is a whole number of cents and never drifts.
///
/// ```
/// use bjtable::Chips;
///
/// let balance = Chips::whole(950) + Chips::whole(50).three_to_two();
/// assert_eq!(balance.to_string(), "1025");
/// assert_eq!(Chips::whole(5).three_to_two().to_string(), "7.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Chips(u64);

impl Chips {
    /// Zero chips.
    pub const ZERO: Self = Self(0);

    /// Largest whole-chip amount that fits in cents.
    pub const MAX_WHOLE: u64 = u64::MAX / CENTS_PER_CHIP;

    /// Creates an amount of whole chips.
    ///
    /// # Panics
    ///
    /// Panics if `chips` exceeds [`Chips::MAX_WHOLE`].
    #[must_use]
    pub const fn whole(chips: u64) -> Self {
        match Self::checked_whole(chips) {
            Some(amount) => amount,
            None => panic!("chip amount overflows"),
        }
    }

    /// Creates an amount of whole chips, returning `None` if it does not
    /// fit in cents.
    ///
    /// ```
    /// use bjtable::Chips;
    ///
    /// assert_eq!(Chips::checked_whole(12), Some(Chips::from_cents(1200)));
    /// assert_eq!(Chips::checked_whole(u64::MAX), None);
    /// ```
    #[must_use]
    pub const fn checked_whole(chips: u64) -> Option<Self> {
        match chips.checked_mul(CENTS_PER_CHIP) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts `rhs`, returning `None` when the result would be negative.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Multiplies by a whole factor, saturating at the largest amount.
    #[must_use]
    pub const fn times(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Returns the 3:2 winnings on this stake (one and a half times).
    #[must_use]
    pub const fn three_to_two(self) -> Self {
        Self(self.0.saturating_add(self.0 / 2))
    }
}

impl Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / CENTS_PER_CHIP;
        let cents = self.0 % CENTS_PER_CHIP;
        if cents == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_naturals_stay_exact() {
        let mut balance = Chips::whole(1000);
        for _ in 0..1000 {
            balance += Chips::whole(3).three_to_two();
        }
        assert_eq!(balance, Chips::whole(5500));
    }

    #[test]
    fn whole_chip_conversion_refuses_overflow() {
        assert_eq!(
            Chips::checked_whole(Chips::MAX_WHOLE),
            Some(Chips::from_cents(Chips::MAX_WHOLE * 100))
        );
        assert_eq!(Chips::checked_whole(Chips::MAX_WHOLE + 1), None);
        assert_eq!(Chips::checked_whole(u64::MAX), None);
    }

    #[test]
    #[should_panic(expected = "chip amount overflows")]
    fn whole_panics_past_max() {
        let _ = Chips::whole(u64::MAX);
    }

    #[test]
    fn payouts_saturate_instead_of_wrapping() {
        let big = Chips::from_cents(u64::MAX - 1);
        assert_eq!(big.times(2), Chips::from_cents(u64::MAX));
        assert_eq!(big.three_to_two(), Chips::from_cents(u64::MAX));
        assert_eq!(big + big, Chips::from_cents(u64::MAX));
    }

    #[test]
    fn checked_sub_refuses_overdraw() {
        assert_eq!(Chips::whole(10).checked_sub(Chips::whole(11)), None);
        assert_eq!(
            Chips::whole(10).checked_sub(Chips::whole(4)),
            Some(Chips::whole(6))
        );
    }
}
