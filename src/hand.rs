//! Hand evaluation and player/dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::chips::Chips;

/// The evaluated total of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// Best total: aces count 11 until the hand would bust, then 1.
    pub value: u8,
    /// Whether the hand holds an ace and the total is 21 or less.
    pub is_soft: bool,
}

impl HandValue {
    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.value > 21
    }
}

/// Evaluates a set of cards.
///
/// Aces start at 11 and are reduced to 1 one at a time while the total is
/// over 21. The soft flag is set whenever the hand contains an ace and the
/// final total is 21 or less, regardless of which ace was reduced; with two
/// or more aces this can mark a hand soft even though every ace counts 1.
///
/// ```
/// use bjtable::{Card, Rank, Suit};
/// use bjtable::hand::evaluate;
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(evaluate(&cards).value, 21);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.points());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let has_ace = cards.iter().any(|card| card.is_ace());
    HandValue {
        value,
        is_soft: has_ace && value <= 21,
    }
}

/// Returns whether the cards form a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards).value == 21
}

/// A player's hand and the stake riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    /// Stake in whole chips.
    bet: u64,
    finished: bool,
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet in whole chips.
    #[must_use]
    pub const fn new(bet: u64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            finished: false,
            doubled: false,
        }
    }

    /// Creates the second hand of a split, holding the card moved out of the pair.
    #[must_use]
    pub fn from_split(card: Card, bet: u64) -> Self {
        Self {
            cards: alloc::vec![card],
            bet,
            finished: false,
            doubled: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet in whole chips.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the bet as an exact amount.
    #[must_use]
    pub const fn stake(&self) -> Chips {
        Chips::whole(self.bet)
    }

    /// Returns whether play on this hand is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Marks play on this hand as over.
    pub const fn finish(&mut self) {
        self.finished = true;
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Doubles the bet and flags the hand as doubled.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the hand total.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().value
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.evaluate().is_soft
    }

    /// Returns whether the hand total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.evaluate().is_bust()
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is a pair of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.rank == second.rank)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card of a two-card hand.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the full hand total.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().value
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.evaluate().is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(rank, Suit::Clubs)).collect()
    }

    #[test]
    fn ace_king_is_a_natural() {
        let hand = cards(&[Rank::Ace, Rank::King]);
        assert_eq!(evaluate(&hand).value, 21);
        assert!(is_blackjack(&hand));
        // An unreduced ace in a 21 total keeps the soft flag.
        assert!(evaluate(&hand).is_soft);
    }

    #[test]
    fn two_aces_reduce_once() {
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        let value = evaluate(&hand);
        assert_eq!(value.value, 21);
        assert!(value.is_soft);
        assert!(!is_blackjack(&hand));
    }

    #[test]
    fn hard_total_with_reduced_ace_still_reports_soft() {
        let hand = cards(&[Rank::Ace, Rank::Five, Rank::King]);
        let value = evaluate(&hand);
        assert_eq!(value.value, 16);
        assert!(value.is_soft);
    }

    #[test]
    fn faces_bust_without_aces() {
        let hand = cards(&[Rank::King, Rank::Queen, Rank::Five]);
        let value = evaluate(&hand);
        assert_eq!(value.value, 25);
        assert!(value.is_bust());
        assert!(!value.is_soft);
    }

    #[test]
    fn bust_with_aces_is_not_soft() {
        let hand = cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]);
        let value = evaluate(&hand);
        assert_eq!(value.value, 26);
        assert!(!value.is_soft);
    }

    #[test]
    fn pair_requires_equal_rank() {
        let mut hand = Hand::new(10);
        hand.add_card(Card::new(Rank::Jack, Suit::Hearts));
        hand.add_card(Card::new(Rank::King, Suit::Hearts));
        assert!(!hand.is_pair());

        let mut pair = Hand::new(10);
        pair.add_card(Card::new(Rank::Eight, Suit::Hearts));
        pair.add_card(Card::new(Rank::Eight, Suit::Spades));
        assert!(pair.is_pair());
        assert_eq!(pair.take_split_card(), Some(Card::new(Rank::Eight, Suit::Spades)));
        assert_eq!(pair.take_split_card(), None);
    }

    #[test]
    fn doubling_flags_and_doubles_the_bet() {
        let mut hand = Hand::new(25);
        hand.double_bet();
        assert!(hand.is_doubled());
        assert_eq!(hand.bet(), 50);
        assert_eq!(hand.stake(), Chips::whole(50));
    }
}
