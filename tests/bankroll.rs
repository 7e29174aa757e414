//! Bankroll persistence tests.

use bjtable::bankroll::{BANKROLL_KEY, DEFAULT_BANKROLL};
use bjtable::{
    Card, FileStore, KeyValueStore, MemoryStore, Phase, Suit, Table, TableOptions, load_bankroll,
    save_bankroll,
};

fn scratch_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("bjtable-{name}-{}", std::process::id()))
}

#[test]
fn missing_bankroll_defaults_to_one_hundred() {
    let store = MemoryStore::new();
    assert_eq!(load_bankroll(&store), DEFAULT_BANKROLL);
    assert_eq!(DEFAULT_BANKROLL, 100);
}

#[test]
fn saved_bankroll_is_loaded_back() {
    let mut store = MemoryStore::new();
    save_bankroll(&mut store, 275);
    assert_eq!(store.get(BANKROLL_KEY).as_deref(), Some("275"));
    assert_eq!(load_bankroll(&store), 275);
}

#[test]
fn unreadable_bankroll_falls_back_to_default() {
    let mut store = MemoryStore::new();
    store.set(BANKROLL_KEY, "lots");
    assert_eq!(load_bankroll(&store), DEFAULT_BANKROLL);
}

#[test]
fn file_store_round_trips_values() {
    let dir = scratch_dir("roundtrip");
    let _ = std::fs::remove_dir_all(&dir);

    let mut store = FileStore::new(&dir);
    assert_eq!(store.dir(), dir.as_path());
    assert!(!dir.exists());
    assert_eq!(load_bankroll(&store), DEFAULT_BANKROLL);

    save_bankroll(&mut store, 42);
    assert!(store.dir().is_dir());
    let reopened = FileStore::new(&dir);
    assert_eq!(load_bankroll(&reopened), 42);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn host_persists_balance_after_a_round() {
    let mut store = MemoryStore::new();
    save_bankroll(&mut store, 50);

    let mut table = Table::new(TableOptions::default(), 8).with_balance(load_bankroll(&store));
    table.shoe_mut().put_on_top(&[
        Card::new(Suit::Hearts, 10),
        Card::new(Suit::Clubs, 10),
        Card::new(Suit::Spades, 9),
        Card::new(Suit::Diamonds, 8),
    ]);
    table.new_round(20).unwrap();
    table.stand();
    assert_eq!(table.phase(), Phase::Settle);

    save_bankroll(&mut store, table.balance());
    assert_eq!(load_bankroll(&store), 70);
}
