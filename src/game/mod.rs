//! Round engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::chips::Chips;
use crate::error::ConfigError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::snapshot::{DealerView, HandView, RoundSnapshot};

mod actions;
mod bet;
pub mod dealer;
pub mod state;

pub use dealer::should_hit;
pub use state::{Actions, Phase};

/// The state of one round. Replaced wholesale on every deal.
#[derive(Debug, Clone, Default)]
struct Round {
    dealer: DealerHand,
    hands: Vec<Hand>,
    active: Option<usize>,
    phase: Phase,
    result: Option<RoundResult>,
}

/// A single-seat blackjack round engine.
///
/// The controller exclusively owns the shoe, the player's balance and the
/// current round. Every operation either completes its state change or is
/// refused with an [`ActionError`](crate::ActionError) and changes nothing.
/// Observers read state through [`RoundController::snapshot`].
#[derive(Debug, Clone)]
pub struct RoundController {
    options: TableOptions,
    shoe: Shoe,
    balance: Chips,
    round: Round,
}

impl RoundController {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Phase, RoundController, TableOptions};
    ///
    /// let mut table = RoundController::new(TableOptions::default(), 42).unwrap();
    /// table.deal(50).unwrap();
    /// assert_ne!(table.phase(), Phase::Idle);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, seed)?;
        Ok(Self::assemble(options, shoe))
    }

    /// Creates a table that draws from the given shoe.
    ///
    /// The shoe's deck count replaces `options.decks`, so replacement shoes
    /// and [`RoundController::options`] agree with the shoe in play.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_shoe(options: TableOptions, shoe: Shoe) -> Result<Self, ConfigError> {
        let options = options.with_decks(shoe.decks());
        options.validate()?;
        Ok(Self::assemble(options, shoe))
    }

    fn assemble(options: TableOptions, shoe: Shoe) -> Self {
        Self {
            balance: Chips::whole(options.starting_balance),
            options,
            shoe,
            round: Round::default(),
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Card {
        self.shoe.draw()
    }

    fn transition(&mut self, phase: Phase) {
        log::debug!("round phase {} -> {}", self.round.phase, phase);
        self.round.phase = phase;
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> Chips {
        self.balance
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the index of the hand awaiting an action.
    #[must_use]
    pub const fn active_hand_index(&self) -> Option<usize> {
        self.round.active
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.round.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.round.dealer
    }

    /// Returns the settlement of the round, once settled.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.round.result.as_ref()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns whether the dealer's hole card is hidden from the player.
    #[must_use]
    pub fn hole_card_concealed(&self) -> bool {
        self.round.phase == Phase::PlayerActing && !self.round.dealer.is_blackjack()
    }

    /// Returns the player actions that are legal right now.
    #[must_use]
    pub fn available_actions(&self) -> Actions {
        if self.round.phase != Phase::PlayerActing {
            return Actions::default();
        }
        let Some(hand) = self.active_hand() else {
            return Actions::default();
        };
        if hand.is_finished() {
            return Actions::default();
        }

        let covers_bet = self.balance >= hand.stake();
        Actions {
            hit: true,
            stand: true,
            double: hand.len() == 2 && covers_bet,
            split: self.round.hands.len() == 1 && hand.is_pair() && covers_bet,
        }
    }

    fn active_hand(&self) -> Option<&Hand> {
        self.round.active.and_then(|index| self.round.hands.get(index))
    }

    /// Returns a read-only view of the table for presentation.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            balance: self.balance,
            phase: self.round.phase,
            dealer: DealerView::new(&self.round.dealer, self.hole_card_concealed()),
            hands: self.round.hands.iter().map(HandView::from).collect(),
            active_hand: self.round.active,
            actions: self.available_actions(),
            result: self.round.result.clone(),
            cards_remaining: self.shoe.remaining(),
        }
    }
}
