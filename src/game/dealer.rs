//! Dealer policy and the dealer's turn.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::evaluate;
use crate::result::RoundResult;
use crate::settlement;

use super::{Phase, RoundController};

/// Dealer draws below 17 and stands on every 17, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must draw to these cards.
///
/// ```
/// use bjtable::{Card, Rank, Suit, should_hit};
///
/// let soft_17 = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Six, Suit::Hearts)];
/// assert!(!should_hit(&soft_17));
/// ```
#[must_use]
pub fn should_hit(cards: &[Card]) -> bool {
    evaluate(cards).value < DEALER_STANDS_ON
}

impl RoundController {
    /// Draws one dealer card if the policy calls for it, otherwise settles.
    ///
    /// Returns the drawn card, or `None` once the dealer stands and the
    /// round has been settled. Lets a presenter pace the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] outside the dealer phase.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ActionError> {
        if self.round.phase != Phase::DealerActing {
            return Err(ActionError::WrongPhase);
        }
        Ok(self.step_dealer())
    }

    /// Plays the dealer's hand to completion and settles the round.
    ///
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] outside the dealer phase.
    pub fn finish_dealer_turn(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.round.phase != Phase::DealerActing {
            return Err(ActionError::WrongPhase);
        }
        Ok(self.run_dealer_turn())
    }

    pub(super) fn run_dealer_turn(&mut self) -> Vec<Card> {
        let mut drawn = Vec::new();
        while let Some(card) = self.step_dealer() {
            drawn.push(card);
        }
        drawn
    }

    fn step_dealer(&mut self) -> Option<Card> {
        if should_hit(self.round.dealer.cards()) {
            let card = self.draw();
            self.round.dealer.add_card(card);
            log::debug!("dealer draws {card}, total {}", self.round.dealer.value());
            return Some(card);
        }

        let result = settlement::settle_hands(&self.round.hands, &self.round.dealer);
        self.apply_result(result);
        None
    }

    /// Credits the settled amounts and closes the round.
    pub(super) fn apply_result(&mut self, result: RoundResult) {
        let credited = result.total_credited();
        self.balance += credited;
        log::debug!(
            "round settled: dealer {}, credited {credited}, balance {}",
            result.dealer_value,
            self.balance
        );
        self.round.result = Some(result);
        self.transition(Phase::Settled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(rank, Suit::Hearts)).collect()
    }

    #[test]
    fn stands_on_soft_17() {
        assert!(!should_hit(&cards(&[Rank::Ace, Rank::Six])));
    }

    #[test]
    fn hits_16_and_stands_on_hard_17() {
        assert!(should_hit(&cards(&[Rank::Ten, Rank::Six])));
        assert!(!should_hit(&cards(&[Rank::Ten, Rank::Seven])));
        assert!(!should_hit(&cards(&[Rank::Ten, Rank::Six, Rank::Nine])));
    }

    #[test]
    fn hits_when_aces_reduce_below_17() {
        assert!(should_hit(&cards(&[Rank::Ace, Rank::Six, Rank::Nine])));
    }
}
