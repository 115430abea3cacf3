//! Settlement arithmetic: turning finished hands into credits.
//!
//! Every bet has already been deducted from the balance when it was placed,
//! so settlement only ever credits: nothing for a loss, the stake for a
//! push, twice the stake for a win and the stake plus 3:2 for a natural.

use alloc::vec::Vec;

use crate::chips::Chips;
use crate::hand::{DealerHand, Hand};
use crate::result::{HandOutcome, HandResult, RoundResult};

/// Settles a freshly dealt, unsplit hand when either side holds a natural.
///
/// Returns `None` when neither hand is a natural and play should continue.
#[must_use]
pub fn settle_naturals(hand: &Hand, dealer: &DealerHand) -> Option<RoundResult> {
    let player_blackjack = hand.is_blackjack();
    let dealer_blackjack = dealer.is_blackjack();

    let (outcome, credited) = match (player_blackjack, dealer_blackjack) {
        (true, true) => (HandOutcome::Push, hand.stake()),
        (true, false) => (
            HandOutcome::Blackjack,
            hand.stake() + hand.stake().three_to_two(),
        ),
        (false, true) => (HandOutcome::Lose, Chips::ZERO),
        (false, false) => return None,
    };

    let dealer_value = dealer.value();
    Some(RoundResult {
        hands: alloc::vec![HandResult {
            hand_index: 0,
            outcome,
            bet: hand.bet(),
            credited,
            player_value: hand.value(),
            dealer_value,
        }],
        dealer_value,
        dealer_bust: false,
        dealer_blackjack,
    })
}

/// Settles every player hand against the dealer's final hand.
///
/// Any two-card 21 is paid as a natural here, including a hand produced by
/// a split.
#[must_use]
pub fn settle_hands(hands: &[Hand], dealer: &DealerHand) -> RoundResult {
    let dealer_value = dealer.value();
    let dealer_bust = dealer.is_bust();
    let dealer_blackjack = dealer.is_blackjack();

    let results: Vec<HandResult> = hands
        .iter()
        .enumerate()
        .map(|(hand_index, hand)| {
            let stake = hand.stake();
            let player_value = hand.value();

            let (outcome, credited) = if hand.is_blackjack() {
                if dealer_blackjack {
                    (HandOutcome::Push, stake)
                } else {
                    (HandOutcome::Blackjack, stake + stake.three_to_two())
                }
            } else if hand.is_bust() {
                (HandOutcome::Bust, Chips::ZERO)
            } else if dealer_bust || player_value > dealer_value {
                (HandOutcome::Win, stake.times(2))
            } else if player_value == dealer_value {
                (HandOutcome::Push, stake)
            } else {
                (HandOutcome::Lose, Chips::ZERO)
            };

            HandResult {
                hand_index,
                outcome,
                bet: hand.bet(),
                credited,
                player_value,
                dealer_value,
            }
        })
        .collect();

    RoundResult {
        hands: results,
        dealer_value,
        dealer_bust,
        dealer_blackjack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand(bet: u64, ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new(bet);
        for &rank in ranks {
            hand.add_card(Card::new(rank, Suit::Diamonds));
        }
        hand
    }

    fn dealer(ranks: &[Rank]) -> DealerHand {
        let mut dealer = DealerHand::new();
        for &rank in ranks {
            dealer.add_card(Card::new(rank, Suit::Spades));
        }
        dealer
    }

    #[test]
    fn naturals_on_both_sides_push() {
        let result = settle_naturals(
            &hand(50, &[Rank::Ace, Rank::King]),
            &dealer(&[Rank::Queen, Rank::Ace]),
        )
        .unwrap();
        assert_eq!(result.hands[0].outcome, HandOutcome::Push);
        assert_eq!(result.total_credited(), Chips::whole(50));
        assert!(result.dealer_blackjack);
    }

    #[test]
    fn player_natural_pays_three_to_two() {
        let result = settle_naturals(
            &hand(15, &[Rank::Ten, Rank::Ace]),
            &dealer(&[Rank::Nine, Rank::Nine]),
        )
        .unwrap();
        assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
        assert_eq!(result.total_credited(), Chips::from_cents(3750));
    }

    #[test]
    fn dealer_natural_credits_nothing() {
        let result = settle_naturals(
            &hand(15, &[Rank::Ten, Rank::Nine]),
            &dealer(&[Rank::Ace, Rank::Jack]),
        )
        .unwrap();
        assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
        assert_eq!(result.total_credited(), Chips::ZERO);
    }

    #[test]
    fn no_naturals_means_play_continues() {
        assert!(
            settle_naturals(
                &hand(15, &[Rank::Ten, Rank::Nine]),
                &dealer(&[Rank::Ten, Rank::Seven]),
            )
            .is_none()
        );
    }

    #[test]
    fn final_settlement_covers_each_rule() {
        let hands = [
            hand(10, &[Rank::Ten, Rank::Nine]),
            hand(10, &[Rank::Ten, Rank::Seven]),
            hand(10, &[Rank::Ten, Rank::Six]),
            hand(10, &[Rank::Ten, Rank::Five, Rank::Nine]),
            hand(10, &[Rank::Ace, Rank::Jack]),
        ];
        let result = settle_hands(&hands, &dealer(&[Rank::Ten, Rank::Seven]));

        let outcomes: Vec<HandOutcome> = result.hands.iter().map(|h| h.outcome).collect();
        assert_eq!(
            outcomes,
            [
                HandOutcome::Win,
                HandOutcome::Push,
                HandOutcome::Lose,
                HandOutcome::Bust,
                HandOutcome::Blackjack,
            ]
        );
        assert_eq!(result.hands[0].credited, Chips::whole(20));
        assert_eq!(result.hands[1].credited, Chips::whole(10));
        assert_eq!(result.hands[4].credited, Chips::whole(25));
        assert_eq!(result.total_bet(), 50);
    }

    #[test]
    fn dealer_bust_pays_every_standing_hand() {
        let hands = [
            hand(10, &[Rank::Two, Rank::Three]),
            hand(10, &[Rank::King, Rank::Queen, Rank::Two]),
        ];
        let result = settle_hands(&hands, &dealer(&[Rank::Ten, Rank::Six, Rank::Nine]));

        assert!(result.dealer_bust);
        assert_eq!(result.hands[0].outcome, HandOutcome::Win);
        assert_eq!(result.hands[1].outcome, HandOutcome::Bust);
        assert_eq!(result.total_credited(), Chips::whole(20));
    }
}
