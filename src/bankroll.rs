//! Bankroll persistence.
//!
//! The table never persists anything itself. A host loads the bankroll once
//! at startup, seeds the table with it through [`Table::with_balance`], and
//! saves it again whenever the balance changes.
//!
//! [`Table::with_balance`]: crate::Table::with_balance

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Key the bankroll is stored under.
pub const BANKROLL_KEY: &str = "bj_balance";

/// Bankroll used when nothing has been stored yet.
pub const DEFAULT_BANKROLL: usize = 100;

/// Durable key-value storage provided by the host.
///
/// Writes are fire-and-forget: implementations report failures through the
/// log rather than to the caller.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// Reads the stored bankroll, falling back to [`DEFAULT_BANKROLL`] when it is
/// missing or unreadable.
pub fn load_bankroll<S: KeyValueStore + ?Sized>(store: &S) -> usize {
    match store.get(BANKROLL_KEY) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring unreadable bankroll {raw:?}");
            DEFAULT_BANKROLL
        }),
        None => DEFAULT_BANKROLL,
    }
}

/// Stores the bankroll.
pub fn save_bankroll<S: KeyValueStore + ?Sized>(store: &mut S, balance: usize) {
    store.set(BANKROLL_KEY, &balance.to_string());
}

/// An in-memory store, for tests and hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// A store keeping one file per key inside a directory.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on the first
    /// write.
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the stored values.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[cfg(feature = "std")]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.dir.join(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.dir.join(key);
        let written =
            std::fs::create_dir_all(&self.dir).and_then(|()| std::fs::write(&path, value));
        if let Err(err) = written {
            log::warn!("failed to write {}: {err}", path.display());
        }
    }
}
