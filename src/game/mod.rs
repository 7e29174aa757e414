//! The round state machine.

use alloc::vec::Vec;
use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::hand::{Hand, card_value};
use crate::options::TableOptions;
use crate::result::{Message, Settlement};
use crate::shoe::Shoe;
use crate::stats::SessionStats;

mod actions;
mod bet;
mod dealer;
mod shared;
pub mod state;

pub use shared::SharedTable;
pub use state::{Phase, TableSnapshot};

/// A single-player blackjack table.
///
/// The table owns the shoe, both hands, and the bankroll. Intents that do not
/// apply to the current [`Phase`] are ignored without touching any state.
#[derive(Debug, Clone)]
pub struct Table<R = ChaCha8Rng> {
    options: TableOptions,
    shoe: Shoe<R>,
    phase: Phase,
    player: Hand,
    dealer: Hand,
    bet: usize,
    balance: usize,
    can_double: bool,
    message: Option<Message>,
    last_settlement: Option<Settlement>,
    stats: SessionStats,
}

impl Table {
    /// Creates a new table whose shoe is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Phase, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.phase(), Phase::Betting);
    /// assert_eq!(table.balance(), 100);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Table<R> {
    /// Creates a new table drawing its randomness from `rng`.
    #[must_use]
    pub fn with_rng(options: TableOptions, rng: R) -> Self {
        let shoe = Shoe::new(options.decks, options.reshuffle_threshold, rng);
        let balance = options.starting_balance;
        let bet = options.default_bet.max(1);

        Self {
            options,
            shoe,
            phase: Phase::Betting,
            player: Hand::new(),
            dealer: Hand::new(),
            bet,
            balance,
            can_double: false,
            message: None,
            last_settlement: None,
            stats: SessionStats::default(),
        }
    }
}

impl<R> Table<R> {
    /// Replaces the balance, typically with a persisted bankroll.
    #[must_use]
    pub fn with_balance(mut self, balance: usize) -> Self {
        self.balance = balance;
        self
    }

    /// Returns the table options.
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current balance.
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the current bet.
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether a double down is offered.
    pub const fn can_double(&self) -> bool {
        self.can_double
    }

    /// Returns the latest message.
    pub const fn message(&self) -> Option<Message> {
        self.message
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the settlement of the finished round, if any.
    pub const fn last_settlement(&self) -> Option<Settlement> {
        self.last_settlement
    }

    /// Returns the session statistics.
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the shoe for scripted deals.
    pub const fn shoe_mut(&mut self) -> &mut Shoe<R> {
        &mut self.shoe
    }

    /// Returns whether the dealer's hole card is hidden.
    fn hole_hidden(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    /// Returns an immutable view of the table for rendering.
    ///
    /// The dealer's hole card is withheld during the player's turn.
    pub fn snapshot(&self) -> TableSnapshot {
        let hidden = self.hole_hidden();
        let dealer_hand: Vec<_> = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!hidden || index != 1).then_some(*card))
            .collect();
        let dealer_total = if hidden {
            self.dealer.cards().first().map_or(0, |c| u16::from(card_value(c.rank)))
        } else {
            self.dealer.value()
        };

        TableSnapshot {
            phase: self.phase,
            player_hand: self.player.cards().to_vec(),
            dealer_hand,
            player_total: self.player.value(),
            dealer_total,
            balance: self.balance,
            bet: self.bet,
            can_double: self.can_double,
            message: self.message,
            settlement: self.last_settlement,
            cards_remaining: self.shoe.remaining(),
        }
    }

    /// Applies a settlement to the balance and ends the round.
    fn settle(&mut self, settlement: Settlement) {
        self.balance = self.balance.saturating_add_signed(settlement.delta);
        self.stats.record(&settlement);
        self.message = Some(Message::Outcome(settlement.outcome));
        self.last_settlement = Some(settlement);
        self.can_double = false;
        self.phase = Phase::Settle;

        log::debug!(
            "round settled: {:?} (player {}, dealer {}), delta {}, balance {}",
            settlement.outcome,
            settlement.player_total,
            settlement.dealer_total,
            settlement.delta,
            self.balance
        );
    }

    /// Ends the round and returns to betting.
    ///
    /// Only applies once the round is settled. The bet is kept for the next
    /// round.
    pub fn reset(&mut self) {
        if self.phase != Phase::Settle {
            log::trace!("ignoring reset in {:?}", self.phase);
            return;
        }

        self.player.clear();
        self.dealer.clear();
        self.message = None;
        self.last_settlement = None;
        self.can_double = false;
        self.phase = Phase::Betting;
    }
}
