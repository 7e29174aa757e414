//! Per-session round tallies.

use crate::result::{Outcome, Settlement};

/// Running totals over every round settled at a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    /// Rounds settled.
    pub rounds: usize,
    /// Rounds won, naturals included.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds pushed.
    pub pushes: usize,
    /// Naturals dealt to the player that paid 3:2.
    pub player_blackjacks: usize,
    /// Net balance change over the session.
    pub net: isize,
}

impl SessionStats {
    /// Records a settled round.
    pub const fn record(&mut self, settlement: &Settlement) {
        self.rounds += 1;
        self.net = self.net.saturating_add(settlement.delta);

        if settlement.outcome.is_win() {
            self.wins += 1;
        } else if settlement.outcome.is_loss() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }

        if matches!(settlement.outcome, Outcome::PlayerBlackjack) {
            self.player_blackjacks += 1;
        }
    }
}
