//! Round settlement and table messages.

use core::fmt;

use crate::card::Card;
use crate::error::{BetError, DoubleError};
use crate::hand::{is_blackjack, total_of};
use crate::options::RoundingMode;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Equal totals, or both sides were dealt a natural.
    Push,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished with the higher total.
    PlayerWin,
    /// Dealer finished with the higher total.
    DealerWin,
}

impl Outcome {
    /// Returns whether the player won the stake.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin)
    }

    /// Returns whether the player lost the stake.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::DealerBlackjack | Self::PlayerBust | Self::DealerWin)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBlackjack => "Blackjack! You win 3:2.",
            Self::DealerBlackjack => "Dealer has blackjack. You lose.",
            Self::Push => "Push.",
            Self::PlayerBust => "Bust! You lose.",
            Self::DealerBust => "Dealer busts. You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins.",
        })
    }
}

/// Returns the 3:2 winnings on a natural, rounded to whole chips.
#[must_use]
pub const fn blackjack_winnings(bet: usize, mode: RoundingMode) -> usize {
    let tripled = bet.saturating_mul(3);
    match mode {
        RoundingMode::Down => tripled / 2,
        RoundingMode::Up | RoundingMode::Nearest => tripled.div_ceil(2),
    }
}

fn signed(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}

/// The settled result of a round.
///
/// Settlement is pure arithmetic: `delta` is the signed change to apply to the
/// balance, and nothing here touches the balance itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// How the round ended.
    pub outcome: Outcome,
    /// The amount at risk (the bet, or twice the bet after a double).
    pub stake: usize,
    /// Signed balance change.
    pub delta: isize,
    /// The player's final total.
    pub player_total: u16,
    /// The dealer's final total.
    pub dealer_total: u16,
}

impl Settlement {
    /// Settles an opening deal where either side holds a natural.
    ///
    /// Returns `None` when neither hand is a blackjack and play continues.
    #[must_use]
    pub fn naturals(
        player: &[Card],
        dealer: &[Card],
        bet: usize,
        rounding: RoundingMode,
    ) -> Option<Self> {
        let (outcome, delta) = match (is_blackjack(player), is_blackjack(dealer)) {
            (true, true) => (Outcome::Push, 0),
            (true, false) => (
                Outcome::PlayerBlackjack,
                signed(blackjack_winnings(bet, rounding)),
            ),
            (false, true) => (Outcome::DealerBlackjack, -signed(bet)),
            (false, false) => return None,
        };

        Some(Self {
            outcome,
            stake: bet,
            delta,
            player_total: total_of(player),
            dealer_total: total_of(dealer),
        })
    }

    /// Settles a round the player lost by going over 21.
    #[must_use]
    pub fn player_bust(stake: usize, player_total: u16, dealer_total: u16) -> Self {
        Self {
            outcome: Outcome::PlayerBust,
            stake,
            delta: -signed(stake),
            player_total,
            dealer_total,
        }
    }

    /// Compares final hands once the dealer has finished drawing.
    #[must_use]
    pub fn showdown(player: &[Card], dealer: &[Card], stake: usize) -> Self {
        let player_total = total_of(player);
        let dealer_total = total_of(dealer);

        if player_total > 21 {
            return Self::player_bust(stake, player_total, dealer_total);
        }

        let (outcome, delta) = if dealer_total > 21 {
            (Outcome::DealerBust, signed(stake))
        } else if player_total > dealer_total {
            (Outcome::PlayerWin, signed(stake))
        } else if player_total < dealer_total {
            (Outcome::DealerWin, -signed(stake))
        } else {
            (Outcome::Push, 0)
        };

        Self {
            outcome,
            stake,
            delta,
            player_total,
            dealer_total,
        }
    }
}

/// A human-readable message for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// A bet was rejected.
    Bet(BetError),
    /// A double down was rejected.
    Double(DoubleError),
    /// The round has been settled.
    Outcome(Outcome),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bet(err) => write!(f, "{err}"),
            Self::Double(err) => write!(f, "{err}"),
            Self::Outcome(outcome) => write!(f, "{outcome}"),
        }
    }
}

impl From<BetError> for Message {
    fn from(err: BetError) -> Self {
        Self::Bet(err)
    }
}

impl From<DoubleError> for Message {
    fn from(err: DoubleError) -> Self {
        Self::Double(err)
    }
}
