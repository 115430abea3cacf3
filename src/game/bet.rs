use alloc::vec::Vec;

use crate::chips::Chips;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::settlement;

use super::{Phase, Round, RoundController};

impl RoundController {
    /// Places a bet and deals a new round.
    ///
    /// Deals two cards to the player and two to the dealer, in the order
    /// player, player, dealer, dealer. If either side holds a natural the
    /// round is settled immediately; otherwise it waits for player actions.
    /// Returns the phase the round is left in.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] while a round is in progress, and
    /// [`ActionError::InvalidBet`] if the bet is below the table minimum or
    /// exceeds the balance.
    pub fn deal(&mut self, bet: u64) -> Result<Phase, ActionError> {
        if matches!(self.round.phase, Phase::PlayerActing | Phase::DealerActing) {
            return Err(ActionError::WrongPhase);
        }
        if bet < self.options.min_bet {
            return Err(ActionError::InvalidBet);
        }
        let remaining = Chips::checked_whole(bet)
            .and_then(|stake| self.balance.checked_sub(stake))
            .ok_or(ActionError::InvalidBet)?;

        self.balance = remaining;
        log::debug!("dealing round with bet {bet}, balance now {}", self.balance);

        let mut hand = Hand::new(bet);
        hand.add_card(self.draw());
        hand.add_card(self.draw());

        let mut dealer = DealerHand::new();
        dealer.add_card(self.draw());
        dealer.add_card(self.draw());

        let naturals = settlement::settle_naturals(&hand, &dealer);

        let mut hands = Vec::with_capacity(2);
        hands.push(hand);
        self.round = Round {
            dealer,
            hands,
            active: Some(0),
            phase: self.round.phase,
            result: None,
        };

        if let Some(result) = naturals {
            log::debug!("natural dealt, settling immediately");
            self.round.hands[0].finish();
            self.round.active = None;
            self.apply_result(result);
            return Ok(Phase::Settled);
        }

        self.transition(Phase::PlayerActing);
        Ok(Phase::PlayerActing)
    }

    /// Clears a settled round back to idle. The balance is untouched.
    ///
    /// Calling this while already idle does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] while a round is in progress.
    pub fn start_new_round(&mut self) -> Result<(), ActionError> {
        match self.round.phase {
            Phase::Idle => Ok(()),
            Phase::Settled => {
                self.round = Round::default();
                log::debug!("round cleared");
                Ok(())
            }
            Phase::PlayerActing | Phase::DealerActing => Err(ActionError::WrongPhase),
        }
    }
}
