//! Snapshot serialization tests.

#![cfg(feature = "serde")]

use bjtable::{Card, Phase, Suit, Table, TableOptions, TableSnapshot};

#[test]
fn snapshot_serializes_hidden_hole_card_as_null() {
    let mut table = Table::new(TableOptions::default(), 8);
    table.shoe_mut().put_on_top(&[
        Card::new(Suit::Hearts, 10),
        Card::new(Suit::Clubs, 9),
        Card::new(Suit::Spades, 8),
        Card::new(Suit::Diamonds, 8),
    ]);
    table.new_round(10).unwrap();

    let json = serde_json::to_value(table.snapshot()).unwrap();
    assert_eq!(json["phase"], "PlayerTurn");
    assert_eq!(json["dealer_hand"][0]["rank"], 9);
    assert!(json["dealer_hand"][1].is_null());
    assert_eq!(json["balance"], 100);

    let back: TableSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back.phase, Phase::PlayerTurn);
    assert_eq!(back, table.snapshot());
}
