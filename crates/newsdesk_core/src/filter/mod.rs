//! Article filter engine.
//!
//! # Responsibility
//! - Evaluate the search, date, topic and importance predicates against a
//!   filter state, preserving input order.
//! - Derive filter-manager statistics, descriptions and the export document.
//! - Provide the optional sort step and the input helpers (presets, clamping,
//!   topic catalog) the filter controls use.
//!
//! # Invariants
//! - Predicates are pure functions of `(article, state)`.
//! - Inactive predicate groups always pass.

pub mod date;
pub mod engine;
pub mod importance;
pub mod sort;
pub mod state;
pub mod stats;
pub mod topics;
