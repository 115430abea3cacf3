//! Round phase and action availability types.

use core::fmt;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No round in progress; waiting for a deal.
    #[default]
    Idle,
    /// Waiting for an action on the active player hand.
    PlayerActing,
    /// Dealer is playing out their hand.
    DealerActing,
    /// Round has been settled and its outcomes are final.
    Settled,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::PlayerActing => "player acting",
            Self::DealerActing => "dealer acting",
            Self::Settled => "settled",
        })
    }
}

/// Which player actions are legal right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Actions {
    /// Draw a card onto the active hand.
    pub hit: bool,
    /// Finish the active hand.
    pub stand: bool,
    /// Double the bet for exactly one more card.
    pub double: bool,
    /// Split the opening pair into two hands.
    pub split: bool,
}
