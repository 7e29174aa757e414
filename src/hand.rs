//! Hand evaluation for player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE, Card};

/// Returns the base value of a rank, counting an Ace as 11.
///
/// Ranks outside 1..=13 are worth nothing.
#[must_use]
pub const fn card_value(rank: u8) -> u8 {
    match rank {
        ACE => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    // Every Ace counts as 1 here; at most one can ever be upgraded to 11.
    let mut hard: u32 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.rank == ACE {
            has_ace = true;
            hard = hard.saturating_add(1);
        } else {
            hard = hard.saturating_add(u32::from(card_value(card.rank)));
        }
    }

    let is_soft = has_ace && hard + 10 <= 21;
    let value = if is_soft { hard + 10 } else { hard };
    (u16::try_from(value).unwrap_or(u16::MAX), is_soft)
}

/// Returns the best total of the cards.
///
/// Aces count as 11 and are downgraded to 1, one at a time, while the total
/// exceeds 21. A hand that still exceeds 21 reports its smallest bust total.
#[must_use]
pub fn total_of(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether an Ace is still counted as 11 in the best total.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the cards form a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && total_of(cards) == 21
}

/// A hand held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the best value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        total_of(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
