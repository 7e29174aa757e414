use rand::RngCore;

use crate::error::BetError;
use crate::result::Settlement;

use super::{Phase, Table};

impl<R: RngCore> Table<R> {
    /// Sets the bet for the next round.
    ///
    /// The amount is floored to whole chips and raised to at least 1; `NaN`
    /// and negative amounts become 1. Ignored outside the betting phase.
    pub fn set_bet(&mut self, amount: f64) {
        if self.phase != Phase::Betting {
            log::trace!("ignoring bet change in {:?}", self.phase);
            return;
        }

        // Float-to-int casts saturate, truncating toward zero.
        self.bet = (amount as usize).max(1);
    }

    /// Deals a new round with the current bet.
    ///
    /// # Errors
    ///
    /// See [`Table::new_round`].
    pub fn deal(&mut self) -> Result<(), BetError> {
        self.new_round(self.bet)
    }

    /// Places `bet` and deals the opening hands.
    ///
    /// Cards are dealt player, dealer, player, dealer. A natural on either
    /// side settles the round immediately; otherwise the player acts next.
    /// Ignored outside the betting phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero or exceeds the balance. The error
    /// is also recorded as the table message and nothing else changes.
    pub fn new_round(&mut self, bet: usize) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            log::trace!("ignoring new round in {:?}", self.phase);
            return Ok(());
        }

        let validation = if bet == 0 {
            Err(BetError::BelowMinimum)
        } else if bet > self.balance {
            Err(BetError::InsufficientFunds)
        } else {
            Ok(())
        };
        if let Err(err) = validation {
            self.message = Some(err.into());
            return Err(err);
        }

        self.bet = bet;
        self.message = None;
        self.last_settlement = None;
        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            let card = self.shoe.draw_one();
            self.player.add_card(card);
            let card = self.shoe.draw_one();
            self.dealer.add_card(card);
        }

        self.can_double = self.balance >= bet;

        log::debug!(
            "dealt round: bet {}, player {}, dealer up {}",
            bet,
            self.player.value(),
            self.dealer.cards().first().map_or(0, |c| c.rank)
        );

        match Settlement::naturals(
            self.player.cards(),
            self.dealer.cards(),
            bet,
            self.options.rounding_blackjack,
        ) {
            Some(settlement) => self.settle(settlement),
            None => self.phase = Phase::PlayerTurn,
        }

        Ok(())
    }
}
