//! Validation errors for table intents.

use thiserror::Error;

/// Errors that can occur when starting a round with a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BetError {
    /// Bet amount is below the table minimum of 1.
    #[error("bet must be at least 1")]
    BelowMinimum,
    /// Bet amount exceeds the balance.
    #[error("bet exceeds your balance")]
    InsufficientFunds,
}

/// Errors that can occur when doubling down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoubleError {
    /// The balance does not cover twice the bet.
    #[error("not enough balance to double")]
    InsufficientFunds,
}
