//! Property tests for hand totals and the shoe.

use std::collections::HashMap;

use bjtable::hand::{Hand, card_value, is_soft};
use bjtable::{Card, DECK_SIZE, Shoe, Suit, build_shoe, is_blackjack, total_of};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (0..4_usize, 1..=13_u8).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

/// Total with every Ace counted as 1.
fn hard_total(cards: &[Card]) -> u32 {
    cards
        .iter()
        .map(|c| if c.rank == 1 { 1 } else { u32::from(card_value(c.rank)) })
        .sum()
}

proptest! {
    #[test]
    fn total_is_best_available(cards in prop::collection::vec(any_card(), 0..48)) {
        let total = u32::from(total_of(&cards));
        let hard = hard_total(&cards);

        if hard <= 21 {
            prop_assert!(total <= 21);
            prop_assert!(total >= hard);
            prop_assert_eq!((total - hard) % 10, 0);
            // Upgrading one more Ace would bust.
            let aces_as_eleven = (total - hard) / 10;
            let aces = cards.iter().filter(|c| c.rank == 1).count() as u32;
            if aces_as_eleven < aces {
                prop_assert!(total + 10 > 21);
            }
        } else {
            prop_assert_eq!(total, hard);
        }
    }

    #[test]
    fn soft_hands_keep_an_ace_high(cards in prop::collection::vec(any_card(), 0..48)) {
        if is_soft(&cards) {
            prop_assert!(u32::from(total_of(&cards)) >= hard_total(&cards) + 10);
        }
    }

    #[test]
    fn blackjack_needs_exactly_two_cards(cards in prop::collection::vec(any_card(), 0..6)) {
        prop_assert_eq!(
            is_blackjack(&cards),
            cards.len() == 2 && total_of(&cards) == 21
        );
    }

    #[test]
    fn shoe_holds_every_card_once_per_deck(decks in 1..=8_u8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = build_shoe(decks, &mut rng);
        prop_assert_eq!(cards.len(), DECK_SIZE * decks as usize);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in cards {
            *counts.entry(card).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), DECK_SIZE);
        prop_assert!(counts.values().all(|&n| n == decks as usize));
    }

    #[test]
    fn draw_always_returns_n_cards(
        decks in 1..=4_u8,
        threshold in 0..260_usize,
        n in 0..400_usize,
        seed in any::<u64>(),
    ) {
        let mut shoe = Shoe::new(decks, threshold, ChaCha8Rng::seed_from_u64(seed));
        let drawn = shoe.draw(n);
        prop_assert_eq!(drawn.len(), n);
        prop_assert!(shoe.remaining() <= DECK_SIZE * decks as usize);
    }
}

#[test]
fn aces_downgrade_one_at_a_time() {
    let ace = Card::new(Suit::Spades, 1);
    let king = Card::new(Suit::Hearts, 13);
    let nine = Card::new(Suit::Clubs, 9);

    assert_eq!(total_of(&[ace, ace]), 12);
    assert_eq!(total_of(&[ace, ace, nine]), 21);
    assert_eq!(total_of(&[king, king, ace]), 21);
    assert_eq!(total_of(&[ace, ace, ace, ace, king, king]), 24);
    assert_eq!(total_of(&[]), 0);
}

#[test]
fn long_hands_keep_their_true_total() {
    let ace = Card::new(Suit::Spades, 1);
    let king = Card::new(Suit::Hearts, 13);

    assert_eq!(total_of(&[ace; 30]), 30);
    assert!(!is_soft(&[ace; 30]));
    assert_eq!(total_of(&[king; 26]), 260);
    assert_eq!(total_of(&[ace; 11]), 21);
    assert!(is_soft(&[ace; 11]));

    let mut cards = vec![king; 30];
    cards.extend([ace; 4]);
    assert_eq!(total_of(&cards), 304);
}

#[test]
fn hand_from_cards_matches_free_functions() {
    let cards = vec![
        Card::new(Suit::Spades, 1),
        Card::new(Suit::Hearts, 6),
        Card::new(Suit::Clubs, 13),
    ];
    let hand = Hand::from(cards.clone());

    assert_eq!(hand.cards(), cards.as_slice());
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.value(), total_of(&cards));
    assert_eq!(hand.value(), 17);
    assert!(!hand.is_soft());
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
}

#[test]
fn malformed_ranks_count_for_nothing() {
    let junk = Card::new(Suit::Hearts, 0);
    let wild = Card::new(Suit::Hearts, 42);
    let ten = Card::new(Suit::Clubs, 10);

    assert_eq!(total_of(&[junk, ten, wild]), 10);
}

#[test]
fn blackjack_detection() {
    let ace = Card::new(Suit::Spades, 1);
    let king = Card::new(Suit::Hearts, 13);
    let five = Card::new(Suit::Clubs, 5);
    let six = Card::new(Suit::Diamonds, 6);

    assert!(is_blackjack(&[ace, king]));
    assert!(is_blackjack(&[king, ace]));
    assert!(!is_blackjack(&[five, six, king]));
    assert!(!is_blackjack(&[king, king]));
}

#[test]
fn draw_decrements_above_threshold() {
    let mut shoe = Shoe::new(2, 52, ChaCha8Rng::seed_from_u64(11));
    assert_eq!(shoe.remaining(), 104);

    let drawn = shoe.draw(52);
    assert_eq!(drawn.len(), 52);
    assert_eq!(shoe.remaining(), 52);
    assert_eq!(shoe.reshuffles(), 0);
    assert!(shoe.needs_reshuffle());

    shoe.draw_one();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.remaining(), 103);
}

#[test]
fn empty_shoe_rebuilds_before_drawing() {
    let mut shoe = Shoe::new(1, 0, ChaCha8Rng::seed_from_u64(5));
    shoe.draw(52);
    assert_eq!(shoe.remaining(), 0);

    shoe.draw_one();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.remaining(), 51);
}

#[test]
fn zero_decks_is_one_deck() {
    let shoe = Shoe::new(0, 0, ChaCha8Rng::seed_from_u64(5));
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.remaining(), DECK_SIZE);
}

#[test]
fn seeded_shoes_shuffle_identically() {
    let a = build_shoe(2, &mut ChaCha8Rng::seed_from_u64(99));
    let b = build_shoe(2, &mut ChaCha8Rng::seed_from_u64(99));
    let c = build_shoe(2, &mut ChaCha8Rng::seed_from_u64(100));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn stacked_cards_are_drawn_in_order() {
    let mut shoe = Shoe::new(6, 52, ChaCha8Rng::seed_from_u64(3));
    let stacked = [Card::new(Suit::Hearts, 2), Card::new(Suit::Clubs, 3)];
    shoe.put_on_top(&stacked);

    // The top of the shoe is the end of the slice.
    let cards = shoe.cards();
    assert_eq!(cards.len(), 6 * DECK_SIZE + 2);
    assert_eq!(cards[cards.len() - 2..], [stacked[1], stacked[0]]);

    assert_eq!(shoe.draw(2), stacked.to_vec());
    assert_eq!(shoe.cards().len(), shoe.remaining());
}
