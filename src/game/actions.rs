use rand::RngCore;

use crate::error::DoubleError;
use crate::result::Settlement;

use super::{Phase, Table};

impl<R: RngCore> Table<R> {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 loses the bet and settles the round. Ignored outside the
    /// player's turn.
    pub fn hit(&mut self) {
        if self.phase != Phase::PlayerTurn {
            log::trace!("ignoring hit in {:?}", self.phase);
            return;
        }

        self.can_double = false;
        self.message = None;

        let card = self.shoe.draw_one();
        self.player.add_card(card);

        if self.player.is_bust() {
            let settlement =
                Settlement::player_bust(self.bet, self.player.value(), self.dealer.value());
            self.settle(settlement);
        }
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is settled. Ignored
    /// outside the player's turn.
    pub fn stand(&mut self) {
        if self.phase != Phase::PlayerTurn {
            log::trace!("ignoring stand in {:?}", self.phase);
            return;
        }

        self.can_double = false;
        self.message = None;
        self.dealer_play(self.bet);
    }

    /// Player action: Double down (double the stake, take one card, then
    /// stand).
    ///
    /// Only offered as the first action of a round. Ignored outside the
    /// player's turn or once the offer has lapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance does not cover twice the bet. The error
    /// is also recorded as the table message and the player keeps the turn.
    pub fn double(&mut self) -> Result<(), DoubleError> {
        if self.phase != Phase::PlayerTurn || !self.can_double {
            log::trace!(
                "ignoring double in {:?} (offered: {})",
                self.phase,
                self.can_double
            );
            return Ok(());
        }

        let stake = self.bet.saturating_mul(2);
        if stake > self.balance {
            let err = DoubleError::InsufficientFunds;
            self.message = Some(err.into());
            return Err(err);
        }

        self.can_double = false;
        self.message = None;

        let card = self.shoe.draw_one();
        self.player.add_card(card);

        if self.player.is_bust() {
            let settlement =
                Settlement::player_bust(stake, self.player.value(), self.dealer.value());
            self.settle(settlement);
        } else {
            self.dealer_play(stake);
        }

        Ok(())
    }
}
