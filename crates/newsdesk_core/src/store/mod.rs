//! Key-value persistence port.
//!
//! # Responsibility
//! - Define the `get`/`set`/`remove` contract used for notes and view
//!   preferences.
//! - Own the persisted key layout.
//!
//! # Invariants
//! - Values are opaque strings; callers own (de)serialization.
//! - Implementations never panic on storage failure; they return
//!   [`StoreError`].

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key holding the preferred article view mode.
pub const VIEW_MODE_KEY: &str = "preferred-view-mode";
/// Key holding the preferred article list layout.
pub const LAYOUT_MODE_KEY: &str = "preferred-layout-mode";

const NOTES_KEY_PREFIX: &str = "article-notes-";

/// Returns the key holding the JSON note list for `article_id`.
pub fn notes_key(article_id: &str) -> String {
    format!("{NOTES_KEY_PREFIX}{article_id}")
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure.
#[derive(Debug)]
pub enum StoreError {
    /// Write would exceed the configured capacity.
    QuotaExceeded { key: String, required: usize, quota: usize },
    Db(DbError),
    /// Value could not be encoded for storage.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded {
                key,
                required,
                quota,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required} bytes needed, quota {quota}"
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Process-wide string key-value store (browser local-storage analogue).
pub trait KeyValueStore {
    /// Reads one value. Missing keys yield `Ok(None)`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Inserts or replaces one value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Deletes one value. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
