//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs the round flow: betting, the
//! player's turn, the dealer drawing to 17, and settlement against a bankroll.
//! Rendering is left to the host, which reads [`TableSnapshot`]s and forwards
//! intents.
//!
//! # Example
//!
//! ```
//! use bjtable::{Phase, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.set_bet(10.0);
//! table.deal().unwrap();
//! if table.phase() == Phase::PlayerTurn {
//!     table.stand();
//! }
//! assert_eq!(table.phase(), Phase::Settle);
//! table.reset();
//! assert_eq!(table.phase(), Phase::Betting);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod stats;
mod sync;

// Re-export main types
pub use bankroll::{KeyValueStore, MemoryStore, load_bankroll, save_bankroll};
#[cfg(feature = "std")]
pub use bankroll::FileStore;
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{BetError, DoubleError};
pub use game::{Phase, SharedTable, Table, TableSnapshot};
pub use hand::{Hand, is_blackjack, total_of};
pub use options::{RoundingMode, TableOptions};
pub use result::{Message, Outcome, Settlement};
pub use shoe::{Shoe, build_shoe};
pub use stats::SessionStats;
