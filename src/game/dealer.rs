use rand::RngCore;

use crate::result::Settlement;

use super::{Phase, Table};

/// The dealer stands on any total at or above this, soft totals included.
const DEALER_STANDS_ON: u16 = 17;

impl<R: RngCore> Table<R> {
    /// Dealer plays their hand and the round is settled against `stake`.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. The whole draw resolves before returning.
    pub(super) fn dealer_play(&mut self, stake: usize) {
        self.phase = Phase::DealerTurn;

        let mut drawn = 0_usize;
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.shoe.draw_one();
            self.dealer.add_card(card);
            drawn += 1;
        }
        log::debug!(
            "dealer drew {drawn} card(s), total {}",
            self.dealer.value()
        );

        let settlement = Settlement::showdown(self.player.cards(), self.dealer.cards(), stake);
        self.settle(settlement);
    }
}
