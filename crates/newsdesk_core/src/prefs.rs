//! Persisted view-mode and layout preferences.
//!
//! # Invariants
//! - Absent, unreadable or unknown stored values fall back to defaults
//!   (`detailed`, `card`).
//! - Setters update memory before writing, so a failed write still changes
//!   the current session.

use crate::model::view::{LayoutMode, ViewMode};
use crate::store::{KeyValueStore, StoreResult, LAYOUT_MODE_KEY, VIEW_MODE_KEY};
use log::warn;
use std::str::FromStr;

/// View preferences backed by a key-value store.
pub struct Preferences<S: KeyValueStore> {
    store: S,
    view_mode: ViewMode,
    layout_mode: LayoutMode,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let view_mode = read_or_default(&store, VIEW_MODE_KEY);
        let layout_mode = read_or_default(&store, LAYOUT_MODE_KEY);
        Self {
            store,
            view_mode,
            layout_mode,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> StoreResult<()> {
        self.view_mode = mode;
        write_logged(&mut self.store, VIEW_MODE_KEY, mode.as_str())
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) -> StoreResult<()> {
        self.layout_mode = mode;
        write_logged(&mut self.store, LAYOUT_MODE_KEY, mode.as_str())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn read_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: FromStr<Err = String> + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|err| {
            warn!("event=prefs_load module=prefs status=error key={key} error={err}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(err) => {
            warn!("event=prefs_load module=prefs status=error key={key} error={err}");
            T::default()
        }
    }
}

fn write_logged<S: KeyValueStore>(store: &mut S, key: &str, value: &str) -> StoreResult<()> {
    store.set(key, value).inspect_err(|err| {
        warn!("event=prefs_save module=prefs status=error key={key} error={err}");
    })
}
