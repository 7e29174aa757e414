//! The multi-deck shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// Builds and shuffles a shoe with the specified number of decks.
///
/// Each deck contributes one card of every (suit, rank) pair. The result is
/// then permuted uniformly with a Fisher–Yates shuffle.
pub fn build_shoe<R: RngCore + ?Sized>(num_decks: u8, rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards.shuffle(rng);
    cards
}

/// A shoe that rebuilds itself whenever it runs low.
///
/// Cards are drawn from the end of the underlying buffer. Before every single
/// removal, a shoe that is empty or holds no more than `threshold` cards is
/// replaced by a freshly shuffled one, so drawing never fails.
#[derive(Debug, Clone)]
pub struct Shoe<R> {
    cards: Vec<Card>,
    decks: u8,
    threshold: usize,
    reshuffles: usize,
    rng: R,
}

impl<R: RngCore> Shoe<R> {
    /// Creates a freshly shuffled shoe.
    ///
    /// `decks` is clamped to at least one deck.
    #[must_use]
    pub fn new(decks: u8, threshold: usize, mut rng: R) -> Self {
        let decks = decks.max(1);
        let cards = build_shoe(decks, &mut rng);

        Self {
            cards,
            decks,
            threshold,
            reshuffles: 0,
            rng,
        }
    }

    /// Replaces the shoe with a freshly built and shuffled one.
    pub fn reshuffle(&mut self) {
        self.cards = build_shoe(self.decks, &mut self.rng);
        self.reshuffles += 1;
        log::debug!(
            "reshuffled shoe: {} decks, {} cards",
            self.decks,
            self.cards.len()
        );
    }

    /// Returns whether the next draw will rebuild the shoe first.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.is_empty() || self.cards.len() <= self.threshold
    }

    /// Draws one card from the top of the shoe.
    pub fn draw_one(&mut self) -> Card {
        loop {
            if self.needs_reshuffle() {
                self.reshuffle();
            }
            if let Some(card) = self.cards.pop() {
                return card;
            }
        }
    }

    /// Draws `n` cards from the top of the shoe, in draw order.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.draw_one()).collect()
    }
}

impl<R> Shoe<R> {
    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns how many times the shoe has been rebuilt since creation.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Returns the cards in the shoe, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Places cards on top of the shoe so that they are drawn next, in the
    /// given order.
    ///
    /// The cards are still subject to the reshuffle check: they are only
    /// drawn as stacked while the shoe holds more than `threshold` cards.
    pub fn put_on_top(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev().copied());
    }
}
