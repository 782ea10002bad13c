//! Filter state owned by the UI layer.
//!
//! # Invariants
//! - `1 <= min_importance <= max_importance <= 5` after every mutator.
//! - Selected topics and sub-topics hold no duplicates and keep selection
//!   order.
//! - `FilterState::default()` selects every article.

use crate::filter::importance::clamp_importance;
use crate::filter::topics::sub_topics_of;
use crate::model::article::{Topic, MAX_IMPORTANCE, MIN_IMPORTANCE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional inclusive date bounds. `None` is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Bounded on both sides.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Inclusive on whichever bounds are set.
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Current article filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_query: String,
    pub date_range: DateRange,
    pub selected_topics: Vec<Topic>,
    pub selected_sub_topics: Vec<String>,
    pub min_importance: u8,
    pub max_importance: u8,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            date_range: DateRange::default(),
            selected_topics: Vec::new(),
            selected_sub_topics: Vec::new(),
            min_importance: MIN_IMPORTANCE,
            max_importance: MAX_IMPORTANCE,
        }
    }
}

impl FilterState {
    /// A blank or whitespace-only query leaves search inactive.
    pub fn has_search(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Lowercased query as typed, `None` when search is inactive.
    ///
    /// Surrounding whitespace is part of the needle.
    pub fn search_needle(&self) -> Option<String> {
        self.has_search().then(|| self.search_query.to_lowercase())
    }

    pub fn has_date_range(&self) -> bool {
        self.date_range.is_active()
    }

    pub fn has_topic_selection(&self) -> bool {
        !self.selected_topics.is_empty() || !self.selected_sub_topics.is_empty()
    }

    /// True when the importance range is narrower than `1..=5`.
    pub fn has_importance_range(&self) -> bool {
        self.min_importance > MIN_IMPORTANCE || self.max_importance < MAX_IMPORTANCE
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    pub fn clear_date_range(&mut self) {
        self.date_range = DateRange::default();
    }

    /// Checks or unchecks a whole topic.
    ///
    /// Checking also selects every catalog sub-topic of `topic`; unchecking
    /// removes them again, except those also listed under a topic that stays
    /// selected.
    pub fn set_topic_selected(&mut self, topic: Topic, selected: bool) {
        let sub_topics = sub_topics_of(topic);
        if selected {
            if !self.selected_topics.contains(&topic) {
                self.selected_topics.push(topic);
            }
            for sub_topic in sub_topics {
                self.set_sub_topic_selected(sub_topic, true);
            }
        } else {
            self.selected_topics.retain(|current| *current != topic);
            let remaining = &self.selected_topics;
            self.selected_sub_topics.retain(|current| {
                let current = current.as_str();
                !sub_topics.contains(&current)
                    || remaining
                        .iter()
                        .any(|other| sub_topics_of(*other).contains(&current))
            });
        }
    }

    pub fn set_sub_topic_selected(&mut self, sub_topic: &str, selected: bool) {
        if selected {
            if !self.selected_sub_topics.iter().any(|s| s == sub_topic) {
                self.selected_sub_topics.push(sub_topic.to_string());
            }
        } else {
            self.selected_sub_topics.retain(|current| current != sub_topic);
        }
    }

    /// Sets both bounds; inverted input collapses `max` onto `min`.
    pub fn set_importance_range(&mut self, min: i64, max: i64) {
        let min = clamp_importance(min);
        self.min_importance = min;
        self.max_importance = clamp_importance(max).max(min);
    }

    /// Moves the lower slider, dragging the upper one along when needed.
    pub fn set_min_importance(&mut self, value: i64) {
        self.min_importance = clamp_importance(value);
        self.max_importance = self.max_importance.max(self.min_importance);
    }

    /// Moves the upper slider, dragging the lower one along when needed.
    pub fn set_max_importance(&mut self, value: i64) {
        self.max_importance = clamp_importance(value);
        self.min_importance = self.min_importance.min(self.max_importance);
    }

    /// Restores the "all articles" defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{DateRange, FilterState};
    use crate::model::article::Topic;
    use chrono::{TimeZone, Utc};

    #[test]
    fn default_state_has_no_active_group() {
        let state = FilterState::default();
        assert!(!state.has_search());
        assert!(!state.has_date_range());
        assert!(!state.has_topic_selection());
        assert!(!state.has_importance_range());
    }

    #[test]
    fn blank_query_is_inactive() {
        let mut state = FilterState::default();
        state.set_search_query("   ");
        assert!(!state.has_search());
        assert_eq!(state.search_needle(), None);
        state.set_search_query("  GDP ");
        assert!(state.has_search());
        assert_eq!(state.search_needle().as_deref(), Some("  gdp "));
    }

    #[test]
    fn importance_sliders_keep_min_below_max() {
        let mut state = FilterState::default();
        state.set_max_importance(2);
        state.set_min_importance(4);
        assert_eq!((state.min_importance, state.max_importance), (4, 4));

        state.set_max_importance(1);
        assert_eq!((state.min_importance, state.max_importance), (1, 1));

        state.set_importance_range(9, -2);
        assert_eq!((state.min_importance, state.max_importance), (5, 5));

        state.set_importance_range(0, 3);
        assert_eq!((state.min_importance, state.max_importance), (1, 3));
    }

    #[test]
    fn topic_toggle_adds_and_removes_catalog_sub_topics() {
        let mut state = FilterState::default();
        state.set_sub_topic_selected("Space", true);
        state.set_topic_selected(Topic::Economy, true);
        state.set_topic_selected(Topic::Economy, true);
        assert_eq!(state.selected_topics, vec![Topic::Economy]);
        assert!(state.selected_sub_topics.iter().any(|s| s == "Taxation"));
        assert_eq!(
            state
                .selected_sub_topics
                .iter()
                .filter(|s| s.as_str() == "Taxation")
                .count(),
            1
        );

        state.set_topic_selected(Topic::Economy, false);
        assert!(state.selected_topics.is_empty());
        assert_eq!(state.selected_sub_topics, vec!["Space".to_string()]);
    }

    #[test]
    fn unchecking_a_topic_keeps_sub_topics_shared_with_selected_topics() {
        let mut state = FilterState::default();
        state.set_topic_selected(Topic::Economy, true);
        state.set_topic_selected(Topic::International, true);
        state.set_topic_selected(Topic::International, false);

        assert_eq!(state.selected_topics, vec![Topic::Economy]);
        assert!(state.selected_sub_topics.iter().any(|s| s == "Trade"));
        assert!(!state.selected_sub_topics.iter().any(|s| s == "Defence"));
        assert!(!state.selected_sub_topics.iter().any(|s| s == "Diplomacy"));

        state.set_topic_selected(Topic::Economy, false);
        assert!(state.selected_sub_topics.is_empty());
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let range = DateRange::between(start, end);
        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(end + chrono::Duration::seconds(1)));
        assert!(DateRange::new(None, Some(end)).contains(start - chrono::Duration::days(900)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::default();
        state.set_search_query("x");
        state.set_importance_range(2, 3);
        state.reset();
        assert_eq!(state, FilterState::default());
    }
}
