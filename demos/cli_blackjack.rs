//! CLI blackjack table.
//!
//! The bankroll is kept in `.bjtable/` under the current directory. Set
//! `RUST_LOG=debug` to watch reshuffles and settlements.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, FileStore, Phase, Suit, Table, TableOptions, TableSnapshot, load_bankroll,
    save_bankroll,
};

fn main() {
    env_logger::init();
    println!("Blackjack CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut store = FileStore::new(".bjtable");
    let mut table = Table::new(TableOptions::default(), seed).with_balance(load_bankroll(&store));

    loop {
        let balance = table.balance();
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let prompt = format!("Bet (1-{balance}, enter for {}, q to quit): ", table.bet());
        let input = prompt_line(&prompt);
        match input.as_str() {
            "q" | "quit" => break,
            "" => {}
            amount => match amount.parse::<f64>() {
                Ok(value) => table.set_bet(value),
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            },
        }

        if let Err(err) = table.deal() {
            println!("{err}");
            continue;
        }

        while table.phase() == Phase::PlayerTurn {
            print_table(&table.snapshot());
            println!("{}", format_actions(table.can_double()));

            match prompt_line("Action: ").as_str() {
                "h" | "hit" => table.hit(),
                "s" | "stand" => table.stand(),
                "d" | "double" => {
                    if let Err(err) = table.double() {
                        println!("{err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        let snapshot = table.snapshot();
        print_table(&snapshot);
        if let Some(message) = snapshot.message {
            println!("{message}");
        }
        if let Some(settlement) = snapshot.settlement {
            println!("Net {:+}, balance {}", settlement.delta, snapshot.balance);
        }

        save_bankroll(&mut store, table.balance());
        table.reset();
    }

    let stats = table.stats();
    println!(
        "Rounds {} | won {} | lost {} | pushed {} | net {:+}",
        stats.rounds, stats.wins, stats.losses, stats.pushes, stats.net
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &TableSnapshot) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);
    println!(
        "Dealer: {} (value {})",
        format_dealer(&snapshot.dealer_hand),
        snapshot.dealer_total
    );
    println!(
        "You:    {} (value {}) | bet {} | balance {}",
        format_hand(&snapshot.player_hand),
        snapshot.player_total,
        snapshot.bet,
        snapshot.balance
    );
    println!();
}

fn format_actions(can_double: bool) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", can_double),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(cards: &[Option<Card>]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
