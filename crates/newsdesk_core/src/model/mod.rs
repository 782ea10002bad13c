//! Domain model for the article catalog, per-article notes and view modes.
//!
//! # Responsibility
//! - Define canonical data structures used by the filter engine and notes
//!   store.
//! - Keep the persisted/bundled JSON shape (camelCase) in one place.
//!
//! # Invariants
//! - Articles are read-only once loaded.
//! - Every note keeps `character_count` in sync with `content`.

pub mod article;
pub mod note;
pub mod view;
