//! Read-only views of the table handed to the presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::chips::Chips;
use crate::game::{Actions, Phase};
use crate::hand::{DealerHand, Hand, evaluate};
use crate::result::RoundResult;

/// A player hand as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Hand total.
    pub value: u8,
    /// Whether the total is soft.
    pub is_soft: bool,
    /// Bet in whole chips.
    pub bet: u64,
    /// Whether the hand was doubled.
    pub doubled: bool,
    /// Whether play on the hand is over.
    pub finished: bool,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        let value = hand.evaluate();
        Self {
            cards: hand.cards().to_vec(),
            value: value.value,
            is_soft: value.is_soft,
            bet: hand.bet(),
            doubled: hand.is_doubled(),
            finished: hand.is_finished(),
        }
    }
}

/// The dealer's hand as seen by the presentation layer.
///
/// All cards are included; `hole_concealed` tells the presenter to draw the
/// second card face down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// Cards in deal order.
    pub cards: Vec<Card>,
    /// Whether the second card should be shown face down.
    pub hole_concealed: bool,
    /// Full hand total.
    pub value: u8,
    /// Whether the full total is soft.
    pub is_soft: bool,
}

impl DealerView {
    pub(crate) fn new(dealer: &DealerHand, hole_concealed: bool) -> Self {
        let value = dealer.evaluate();
        Self {
            cards: dealer.cards().to_vec(),
            hole_concealed,
            value: value.value,
            is_soft: value.is_soft,
        }
    }

    /// Returns the cards the player may see; a concealed hole card is `None`.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Option<Card>> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (!self.hole_concealed || index != 1).then_some(*card))
            .collect()
    }

    /// Returns the total the player may see: only the up card while the hole is concealed.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_concealed {
            evaluate(&self.cards[..self.cards.len().min(1)]).value
        } else {
            self.value
        }
    }
}

/// Everything the presentation layer needs after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current balance.
    pub balance: Chips,
    /// Current phase.
    pub phase: Phase,
    /// The dealer's hand.
    pub dealer: DealerView,
    /// The player's hands, in play order.
    pub hands: Vec<HandView>,
    /// Index of the hand awaiting an action.
    pub active_hand: Option<usize>,
    /// Actions that are legal right now.
    pub actions: Actions,
    /// Per-hand outcomes; present only once the round is settled.
    pub result: Option<RoundResult>,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
}
