//! The shoe: a pool of shuffled decks that cards are drawn from.

use alloc::vec::Vec;
use core::num::NonZeroU8;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ConfigError;

/// Builds an unshuffled sequence of `decks` full decks.
///
/// Every (rank, suit) pair appears exactly `decks` times.
#[must_use]
pub fn build(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards
}

/// Shuffles `cards` in place with a Fisher-Yates pass.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// A multi-deck shoe.
///
/// Cards are drawn from the end of the sequence. When fewer than one deck
/// remains before a draw, the whole shoe is discarded and replaced by a
/// freshly built and shuffled one.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: NonZeroU8,
    rng: ChaCha8Rng,
    replacements: u32,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` decks, seeded for reproducibility.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Shoe;
    ///
    /// let shoe = Shoe::new(6, 42).unwrap();
    /// assert_eq!(shoe.remaining(), 312);
    /// ```
    pub fn new(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        let decks = NonZeroU8::new(decks).ok_or(ConfigError::ZeroDecks)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::fresh(decks, &mut rng);

        Ok(Self {
            cards,
            decks,
            rng,
            replacements: 0,
        })
    }

    /// Creates a shoe whose next draws come out in the order of `draws`.
    ///
    /// The replacement rule still applies: if fewer than one deck's worth of
    /// cards is left before a draw, the stacked cards are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn stacked(decks: u8, draws: &[Card], seed: u64) -> Result<Self, ConfigError> {
        let decks = NonZeroU8::new(decks).ok_or(ConfigError::ZeroDecks)?;
        let mut cards = draws.to_vec();
        cards.reverse();

        Ok(Self {
            cards,
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
            replacements: 0,
        })
    }

    fn fresh(decks: NonZeroU8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = build(decks.get());
        shuffle(&mut cards, rng);
        cards
    }

    /// Draws one card, replacing the whole shoe first if it runs low.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a replaced shoe always holds at least one deck"
    )]
    pub fn draw(&mut self) -> Card {
        if self.cards.len() < DECK_SIZE {
            log::debug!(
                "replacing shoe with {} fresh decks ({} cards discarded)",
                self.decks,
                self.cards.len()
            );
            self.cards = Self::fresh(self.decks, &mut self.rng);
            self.replacements += 1;
        }

        let card = self
            .cards
            .pop()
            .expect("shoe was refilled with at least one deck");
        log::trace!("drew {card}, {} left in shoe", self.cards.len());
        card
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks a fresh shoe holds.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks.get()
    }

    /// Returns how many times the shoe has been replaced.
    #[must_use]
    pub const fn replacements(&self) -> u32 {
        self.replacements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_key(cards: &[Card]) -> Vec<(usize, usize)> {
        let mut keys: Vec<(usize, usize)> = cards
            .iter()
            .map(|card| {
                let rank = Rank::ALL.iter().position(|r| *r == card.rank).unwrap_or(0);
                let suit = Suit::ALL.iter().position(|s| *s == card.suit).unwrap_or(0);
                (rank, suit)
            })
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn build_has_every_pair_once_per_deck() {
        for decks in 1..=8 {
            let cards = build(decks);
            assert_eq!(cards.len(), DECK_SIZE * decks as usize);
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    let count = cards
                        .iter()
                        .filter(|c| **c == Card::new(rank, suit))
                        .count();
                    assert_eq!(count, decks as usize);
                }
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let original = build(2);
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);

        assert_ne!(original, shuffled);
        assert_eq!(sorted_key(&original), sorted_key(&shuffled));
    }

    #[test]
    fn shuffle_spreads_positions_evenly() {
        // Each of 3! orderings should appear roughly a sixth of the time.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let base = [
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Four, Suit::Spades),
        ];
        let mut seen: Vec<([Card; 3], u32)> = Vec::new();
        for _ in 0..6000 {
            let mut cards = base;
            shuffle(&mut cards, &mut rng);
            match seen.iter_mut().find(|(order, _)| *order == cards) {
                Some((_, count)) => *count += 1,
                None => seen.push((cards, 1)),
            }
        }

        assert_eq!(seen.len(), 6);
        for (_, count) in seen {
            assert!((800..1200).contains(&count), "skewed count {count}");
        }
    }

    #[test]
    fn zero_decks_is_rejected() {
        assert_eq!(Shoe::new(0, 1).unwrap_err(), ConfigError::ZeroDecks);
        assert_eq!(Shoe::stacked(0, &[], 1).unwrap_err(), ConfigError::ZeroDecks);
    }

    #[test]
    fn low_shoe_is_replaced_not_topped_up() {
        let stacked = [Card::new(Rank::Ace, Suit::Spades); 51];
        let mut shoe = Shoe::stacked(2, &stacked, 5).unwrap();
        assert_eq!(shoe.remaining(), 51);

        let _ = shoe.draw();
        assert_eq!(shoe.replacements(), 1);
        assert_eq!(shoe.remaining(), 2 * DECK_SIZE - 1);
    }

    #[test]
    fn stacked_shoe_draws_in_order() {
        let mut draws = alloc::vec![
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        draws.extend(build(1));
        let mut shoe = Shoe::stacked(1, &draws, 5).unwrap();

        assert_eq!(shoe.draw(), Card::new(Rank::King, Suit::Hearts));
        assert_eq!(shoe.draw(), Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(shoe.replacements(), 0);
    }

    #[test]
    fn new_shoe_is_full() {
        let shoe = Shoe::new(6, 42).unwrap();
        assert_eq!(shoe.remaining(), 6 * DECK_SIZE);
        assert_eq!(shoe.decks(), 6);
    }
}
