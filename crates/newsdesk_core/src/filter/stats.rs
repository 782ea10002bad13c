//! Filter-manager statistics, descriptions and export document.

use crate::filter::engine::filter_refs;
use crate::filter::state::FilterState;
use crate::model::article::Article;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Identifies the JSON document produced by [`export_filter_state`].
pub const FILTER_EXPORT_FORMAT: &str = "Current Affairs App Filter State";

/// Which predicate groups are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBreakdown {
    pub search: bool,
    pub date: bool,
    pub topics: bool,
    pub importance: bool,
}

impl FilterBreakdown {
    pub fn of(state: &FilterState) -> Self {
        Self {
            search: state.has_search(),
            date: state.has_date_range(),
            topics: state.has_topic_selection(),
            importance: state.has_importance_range(),
        }
    }

    /// Number of active groups (0..=4).
    pub fn active_count(&self) -> usize {
        [self.search, self.date, self.topics, self.importance]
            .into_iter()
            .filter(|active| *active)
            .count()
    }
}

/// Summary shown by the filter manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    pub total_articles: usize,
    pub filtered_articles: usize,
    pub active_filters: usize,
    pub filter_breakdown: FilterBreakdown,
    /// `filtered / total`, `0.0` for an empty catalog.
    pub match_rate: f64,
}

impl FilterStats {
    /// Match rate as a whole percentage, rounded.
    pub fn match_percent(&self) -> u32 {
        (self.match_rate * 100.0).round() as u32
    }
}

/// Computes statistics for `state` over `articles`.
pub fn compute_stats(articles: &[Article], state: &FilterState) -> FilterStats {
    let breakdown = FilterBreakdown::of(state);
    let total_articles = articles.len();
    let filtered_articles = filter_refs(articles, state).len();
    let match_rate = if total_articles == 0 {
        0.0
    } else {
        filtered_articles as f64 / total_articles as f64
    };

    FilterStats {
        total_articles,
        filtered_articles,
        active_filters: breakdown.active_count(),
        filter_breakdown: breakdown,
        match_rate,
    }
}

/// One human-readable line per active predicate group.
pub fn describe_filters(state: &FilterState) -> Vec<String> {
    let mut descriptions = Vec::new();

    if state.has_search() {
        descriptions.push(format!("Search: \"{}\"", state.search_query));
    }

    if state.has_date_range() {
        let format_bound = |bound: Option<DateTime<Utc>>| {
            bound.map_or_else(|| "Any".to_string(), |at| at.format("%Y-%m-%d").to_string())
        };
        descriptions.push(format!(
            "Date: {} to {}",
            format_bound(state.date_range.start),
            format_bound(state.date_range.end)
        ));
    }

    if state.has_topic_selection() {
        let joined = if state.selected_topics.is_empty() {
            state.selected_sub_topics.join(", ")
        } else {
            state
                .selected_topics
                .iter()
                .map(|topic| topic.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        descriptions.push(format!("Topics: {joined}"));
    }

    if state.has_importance_range() {
        descriptions.push(format!(
            "Importance: {}-{}/5",
            state.min_importance, state.max_importance
        ));
    }

    descriptions
}

/// Downloadable filter-state document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterExport {
    pub filter_state: FilterState,
    pub stats: FilterStats,
    /// ISO-8601 export time.
    pub timestamp: String,
    pub export_format: String,
}

/// Builds the export document for the current selection.
pub fn export_filter_state(
    articles: &[Article],
    state: &FilterState,
    now: DateTime<Utc>,
) -> FilterExport {
    FilterExport {
        filter_state: state.clone(),
        stats: compute_stats(articles, state),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        export_format: FILTER_EXPORT_FORMAT.to_string(),
    }
}

/// Suggested download name, e.g. `filter-state-2024-03-01.json`.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("filter-state-{}.json", now.format("%Y-%m-%d"))
}
