//! A table that can be shared between threads.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, ConfigError};
use crate::game::RoundController;
use crate::options::TableOptions;
use crate::snapshot::RoundSnapshot;
use crate::sync::Mutex;

/// A [`RoundController`] behind a single lock.
///
/// Every operation takes the lock for its whole duration, so operations on
/// one table never interleave. Each returns the snapshot taken under the
/// same lock, right after the operation completed.
///
/// ```
/// use bjtable::{Table, TableOptions};
///
/// let table = Table::new(TableOptions::default(), 7).unwrap();
/// let snapshot = table.deal(25).unwrap();
/// assert_eq!(snapshot.hands.len(), 1);
/// ```
pub struct Table {
    controller: Mutex<RoundController>,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        RoundController::new(options, seed).map(Self::from)
    }

    fn apply<T>(
        &self,
        op: impl FnOnce(&mut RoundController) -> Result<T, ActionError>,
    ) -> Result<RoundSnapshot, ActionError> {
        let mut controller = self.controller.lock();
        op(&mut *controller)?;
        Ok(controller.snapshot())
    }

    /// Places a bet and deals. See [`RoundController::deal`].
    ///
    /// # Errors
    ///
    /// Returns the refusal reason if the deal is not allowed.
    pub fn deal(&self, bet: u64) -> Result<RoundSnapshot, ActionError> {
        self.apply(|controller| controller.deal(bet))
    }

    /// Hits the active hand. See [`RoundController::hit`].
    ///
    /// # Errors
    ///
    /// Returns the refusal reason if the action is not allowed.
    pub fn hit(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(RoundController::hit)
    }

    /// Stands on the active hand. See [`RoundController::stand`].
    ///
    /// # Errors
    ///
    /// Returns the refusal reason if the action is not allowed.
    pub fn stand(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(RoundController::stand)
    }

    /// Doubles the active hand. See [`RoundController::double`].
    ///
    /// # Errors
    ///
    /// Returns the refusal reason if the action is not allowed.
    pub fn double(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(RoundController::double)
    }

    /// Splits the opening pair. See [`RoundController::split`].
    ///
    /// # Errors
    ///
    /// Returns the refusal reason if the action is not allowed.
    pub fn split(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(RoundController::split)
    }

    /// Draws one dealer card or settles. See [`RoundController::dealer_step`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] outside the dealer phase.
    pub fn dealer_step(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(RoundController::dealer_step)
    }

    /// Plays out the dealer. See [`RoundController::finish_dealer_turn`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] outside the dealer phase.
    pub fn finish_dealer_turn(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(|controller| controller.finish_dealer_turn().map(|_: Vec<Card>| ()))
    }

    /// Clears a settled round. See [`RoundController::start_new_round`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::WrongPhase`] while a round is in progress.
    pub fn start_new_round(&self) -> Result<RoundSnapshot, ActionError> {
        self.apply(RoundController::start_new_round)
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> RoundSnapshot {
        self.controller.lock().snapshot()
    }

    /// Consumes the table and returns the controller.
    pub fn into_inner(self) -> RoundController {
        self.controller.into_inner()
    }
}

impl From<RoundController> for Table {
    fn from(controller: RoundController) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }
}
