//! A table shared between threads.

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::sync::Exclusive;

use super::{Table, TableSnapshot};

/// A [`Table`] behind a single lock.
///
/// Every intent locks the whole table, so each one still runs to completion
/// before the next begins.
pub struct SharedTable<R = ChaCha8Rng> {
    table: Exclusive<Table<R>>,
}

impl<R: RngCore> SharedTable<R> {
    /// Wraps a table for shared access.
    pub const fn new(table: Table<R>) -> Self {
        Self {
            table: Exclusive::new(table),
        }
    }

    /// Runs `f` with exclusive access to the table.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{SharedTable, Table, TableOptions};
    ///
    /// let shared = SharedTable::new(Table::new(TableOptions::default(), 7));
    /// let balance = shared.with(|table| table.balance());
    /// assert_eq!(balance, 100);
    /// ```
    pub fn with<T>(&self, f: impl FnOnce(&mut Table<R>) -> T) -> T {
        self.table.with(f)
    }

    /// Returns a rendering snapshot of the table.
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.with(|table| table.snapshot())
    }

    /// Unwraps the table.
    pub fn into_inner(self) -> Table<R> {
        self.table.into_inner()
    }
}
