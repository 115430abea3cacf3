use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Phase, RoundController};

impl RoundController {
    /// Returns the index of the active, unfinished hand.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        if self.round.phase != Phase::PlayerActing {
            return Err(ActionError::WrongPhase);
        }

        let index = self.round.active.ok_or(ActionError::WrongPhase)?;
        match self.round.hands.get(index) {
            Some(hand) if !hand.is_finished() => Ok(index),
            _ => Err(ActionError::InvalidAction),
        }
    }

    /// Player action: Hit (draw a card onto the active hand).
    ///
    /// A hand that goes over 21 is finished and play moves on. Otherwise the
    /// hand stays active, and can no longer be doubled.
    ///
    /// # Errors
    ///
    /// Returns an error if no player hand is awaiting an action.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn()?;

        let card = self.draw();
        let hand = &mut self.round.hands[index];
        hand.add_card(card);

        if hand.is_bust() {
            log::debug!("hand {index} busts with {}", hand.value());
            hand.finish();
            self.advance();
        }

        Ok(card)
    }

    /// Player action: Stand (finish the active hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no player hand is awaiting an action.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.ensure_player_turn()?;

        self.round.hands[index].finish();
        self.advance();

        Ok(())
    }

    /// Player action: Double down (double the bet, take exactly one card, finish).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] unless the active hand holds
    /// exactly two cards, and [`ActionError::InsufficientBalance`] if the
    /// balance cannot match the bet.
    pub fn double(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn()?;

        let hand = &self.round.hands[index];
        if hand.len() != 2 {
            return Err(ActionError::InvalidAction);
        }
        let remaining = self
            .balance
            .checked_sub(hand.stake())
            .ok_or(ActionError::InsufficientBalance)?;
        self.balance = remaining;

        let card = self.draw();
        let hand = &mut self.round.hands[index];
        hand.double_bet();
        hand.add_card(card);
        hand.finish();
        log::debug!("hand {index} doubled to {} and drew {card}", hand.bet());

        self.advance();

        Ok(card)
    }

    /// Player action: Split (turn the opening pair into two hands).
    ///
    /// The second card moves to a new hand carrying an equal bet, and each
    /// hand then receives one fresh card. Play continues on the first hand.
    /// Only one split per round is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidAction`] if a split already happened or
    /// the hand does not hold exactly two cards,
    /// [`ActionError::RankMismatch`] if the two cards differ in rank, and
    /// [`ActionError::InsufficientBalance`] if the balance cannot match the bet.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the hand was checked to hold two cards"
    )]
    pub fn split(&mut self) -> Result<(Card, Card), ActionError> {
        let index = self.ensure_player_turn()?;
        if self.round.hands.len() != 1 {
            return Err(ActionError::InvalidAction);
        }

        let hand = &self.round.hands[index];
        if hand.len() != 2 {
            return Err(ActionError::InvalidAction);
        }
        if !hand.is_pair() {
            return Err(ActionError::RankMismatch);
        }
        let bet = hand.bet();
        let remaining = self
            .balance
            .checked_sub(hand.stake())
            .ok_or(ActionError::InsufficientBalance)?;
        self.balance = remaining;

        let split_card = self.round.hands[index]
            .take_split_card()
            .expect("hand was checked to hold two cards");
        let mut second = Hand::from_split(split_card, bet);

        let first_card = self.draw();
        let second_card = self.draw();
        self.round.hands[index].add_card(first_card);
        second.add_card(second_card);
        self.round.hands.push(second);
        log::debug!("split pair of {}, balance now {}", split_card.rank.symbol(), self.balance);

        Ok((first_card, second_card))
    }

    /// Moves play to the next unfinished hand, or on to the dealer.
    fn advance(&mut self) {
        let current = self.round.active.unwrap_or(0);
        let unfinished = |(_, hand): &(usize, &Hand)| !hand.is_finished();

        let next = self
            .round
            .hands
            .iter()
            .enumerate()
            .skip(current + 1)
            .find(unfinished)
            .or_else(|| self.round.hands.iter().enumerate().find(unfinished))
            .map(|(index, _)| index);

        if let Some(index) = next {
            log::debug!("now playing hand {index}");
            self.round.active = Some(index);
            return;
        }

        self.round.active = None;
        self.transition(Phase::DealerActing);
        if self.options.dealer_autoplay {
            self.run_dealer_turn();
        }
    }
}
