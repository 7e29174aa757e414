//! Round phases and the rendering snapshot.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{Message, Settlement};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for a bet and a deal.
    #[default]
    Betting,
    /// Waiting for the player to hit, stand, or double.
    PlayerTurn,
    /// Dealer draws to 17. Resolved within the intent that entered it.
    DealerTurn,
    /// Round has been settled; waiting for a reset.
    Settle,
}

/// An immutable view of the table for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// The dealer's cards. The hole card is `None` during the player's turn.
    pub dealer_hand: Vec<Option<Card>>,
    /// Best total of the player's hand.
    pub player_total: u16,
    /// Total of the dealer's visible cards.
    pub dealer_total: u16,
    /// Current balance.
    pub balance: usize,
    /// Current bet.
    pub bet: usize,
    /// Whether a double down is offered.
    pub can_double: bool,
    /// Latest message for the player.
    pub message: Option<Message>,
    /// Settlement of the finished round, if any.
    pub settlement: Option<Settlement>,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
}
