//! Error types for table construction and round operations.

use thiserror::Error;

/// Reasons a round operation was refused.
///
/// A refused operation leaves the round and the balance untouched; the
/// caller may simply try a different action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ActionError {
    /// Bet is below the table minimum or exceeds the balance.
    #[error("invalid bet amount")]
    InvalidBet,
    /// Balance cannot cover the extra stake for this action.
    #[error("insufficient balance for this action")]
    InsufficientBalance,
    /// The two cards of the hand are not of equal rank.
    #[error("cannot split: ranks differ")]
    RankMismatch,
    /// The action is not legal for the active hand.
    #[error("action not allowed for this hand")]
    InvalidAction,
    /// The round is not in a phase that accepts this operation.
    #[error("operation not allowed in the current phase")]
    WrongPhase,
}

/// Errors raised while constructing a shoe or table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("shoe must contain at least one deck")]
    ZeroDecks,
    /// The starting balance must be positive.
    #[error("starting balance must be positive")]
    ZeroStartingBalance,
    /// The starting balance does not fit the money representation.
    #[error("starting balance exceeds {max} chips", max = crate::Chips::MAX_WHOLE)]
    StartingBalanceTooLarge,
    /// The minimum bet must be at least one chip.
    #[error("minimum bet must be at least one chip")]
    ZeroMinimumBet,
}
