//! Settlement result types.

use alloc::vec::Vec;
use core::fmt;

use crate::chips::Chips;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player beat the dealer or the dealer busted; pays 1:1.
    Win,
    /// Dealer finished higher, or held a natural against the hand.
    Lose,
    /// Equal totals or both naturals; the bet is returned.
    Push,
    /// Player natural; pays 3:2.
    Blackjack,
    /// Player went over 21.
    Bust,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Push => "push",
            Self::Blackjack => "blackjack",
            Self::Bust => "bust",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Index of the hand (1 only for the second hand of a split).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Final bet on the hand, in whole chips.
    pub bet: u64,
    /// Amount credited back to the balance (stake included).
    pub credited: Chips,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand, in hand order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Total credited back to the balance across all hands.
    #[must_use]
    pub fn total_credited(&self) -> Chips {
        self.hands
            .iter()
            .fold(Chips::ZERO, |total, hand| total + hand.credited)
    }

    /// Total staked across all hands, in whole chips.
    #[must_use]
    pub fn total_bet(&self) -> u64 {
        self.hands.iter().map(|hand| hand.bet).sum()
    }
}
