//! Core domain logic for the newsdesk reader.
//! Article filtering, per-article notes and view preferences live here; UI
//! layers only hold handles to these types.

pub mod catalog;
pub mod clock;
pub mod controller;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod notes;
pub mod prefs;
pub mod store;

pub use catalog::{ArticleCatalog, CatalogError, CatalogResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::FilterController;
pub use filter::engine::{filter_articles, filter_refs, matches};
pub use filter::sort::{sort_articles, SortBy, SortOrder};
pub use filter::state::{DateRange, FilterState};
pub use filter::stats::{compute_stats, describe_filters, FilterBreakdown, FilterExport, FilterStats};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::{Article, ArticleContent, ArticleValidationError, Topic};
pub use model::note::{Note, NoteId};
pub use model::view::{LayoutMode, ViewMode};
pub use notes::{AutosaveStatus, Format, NotesEditor, Selection};
pub use prefs::Preferences;
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

/// Minimal health-check API for integration probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
