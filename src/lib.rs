//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundController`] that owns the shoe, the player's
//! balance and the current round. It deals, enforces the legal actions (hit,
//! stand, double, one split), plays the dealer and settles bets. The
//! presentation layer calls operations and renders the [`RoundSnapshot`]
//! returned by [`RoundController::snapshot`]; it never mutates state itself.
//!
//! # Example
//!
//! ```
//! use bjtable::{Phase, RoundController, TableOptions};
//!
//! let mut table = RoundController::new(TableOptions::default(), 42).unwrap();
//! if table.deal(50).unwrap() == Phase::PlayerActing {
//!     table.stand().unwrap();
//! }
//! assert_eq!(table.phase(), Phase::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chips;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod settlement;
pub mod shoe;
pub mod snapshot;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chips::Chips;
pub use error::{ActionError, ConfigError};
pub use game::{Actions, Phase, RoundController, should_hit};
pub use hand::{DealerHand, Hand, HandValue};
pub use options::TableOptions;
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::Shoe;
pub use snapshot::{DealerView, HandView, RoundSnapshot};
pub use table::Table;
