//! Table configuration options.

use crate::chips::Chips;
use crate::error::ConfigError;

/// Configuration for a blackjack table, fixed at construction.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_starting_balance(500)
///     .with_min_bet(5);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in a fresh shoe.
    pub decks: u8,
    /// Balance the player sits down with, in whole chips.
    pub starting_balance: u64,
    /// Smallest accepted bet, in whole chips.
    pub min_bet: u64,
    /// Whether the dealer turn runs to completion as soon as the last
    /// player hand finishes. When disabled, the round pauses in the dealer
    /// phase and the caller steps it.
    pub dealer_autoplay: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_balance: 1000,
            min_bet: 1,
            dealer_autoplay: true,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(10);
    /// assert_eq!(options.min_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets whether the dealer plays out automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_autoplay(false);
    /// assert!(!options.dealer_autoplay);
    /// ```
    #[must_use]
    pub const fn with_dealer_autoplay(mut self, autoplay: bool) -> Self {
        self.dealer_autoplay = autoplay;
        self
    }

    /// Checks the options for configuration errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count, starting balance or minimum bet is
    /// zero, or if the starting balance exceeds [`Chips::MAX_WHOLE`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }
        if self.starting_balance == 0 {
            return Err(ConfigError::ZeroStartingBalance);
        }
        if self.starting_balance > Chips::MAX_WHOLE {
            return Err(ConfigError::StartingBalanceTooLarge);
        }
        if self.min_bet == 0 {
            return Err(ConfigError::ZeroMinimumBet);
        }
        Ok(())
    }
}
