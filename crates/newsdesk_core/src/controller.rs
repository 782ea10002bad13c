//! Owner of the shared article list and current filter selection.
//!
//! # Responsibility
//! - Hold the single current [`FilterState`] and sort choice.
//! - Apply UI mutations and notify observers after each one.
//! - Serve filtered/sorted views and statistics computed on demand.
//!
//! # Invariants
//! - Observers run after the state has changed, never before.
//! - Mutations that leave the state unchanged do not notify.

use crate::filter::engine::filter_refs;
use crate::filter::sort::{sort_articles, SortBy, SortOrder};
use crate::filter::state::{DateRange, FilterState};
use crate::filter::stats::{
    compute_stats, describe_filters, export_filter_state, FilterExport, FilterStats,
};
use crate::model::article::{Article, Topic};
use chrono::{DateTime, Utc};

type FilterObserver = Box<dyn FnMut(&FilterState)>;

pub struct FilterController {
    articles: Vec<Article>,
    state: FilterState,
    sort_by: SortBy,
    sort_order: SortOrder,
    observers: Vec<FilterObserver>,
}

impl FilterController {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            state: FilterState::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            observers: Vec::new(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn sort(&self) -> (SortBy, SortOrder) {
        (self.sort_by, self.sort_order)
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&FilterState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the whole state at once.
    pub fn replace_state(&mut self, state: FilterState) {
        self.mutate(|current| *current = state);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.mutate(|state| state.set_search_query(query));
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.mutate(|state| match range {
            Some(range) => state.set_date_range(range),
            None => state.clear_date_range(),
        });
    }

    pub fn set_topic_selected(&mut self, topic: Topic, selected: bool) {
        self.mutate(|state| state.set_topic_selected(topic, selected));
    }

    pub fn set_sub_topic_selected(&mut self, sub_topic: &str, selected: bool) {
        self.mutate(|state| state.set_sub_topic_selected(sub_topic, selected));
    }

    pub fn set_importance_range(&mut self, min: i64, max: i64) {
        self.mutate(|state| state.set_importance_range(min, max));
    }

    /// Clears every filter back to the "all articles" state.
    pub fn reset(&mut self) {
        self.mutate(FilterState::reset);
    }

    pub fn set_sort(&mut self, by: SortBy, order: SortOrder) {
        self.sort_by = by;
        self.sort_order = order;
    }

    /// Matching articles in catalog order.
    pub fn filtered(&self) -> Vec<&Article> {
        filter_refs(&self.articles, &self.state)
    }

    /// Matching articles ordered by the current sort choice.
    pub fn sorted_filtered(&self) -> Vec<&Article> {
        let mut articles = self.filtered();
        sort_articles(&mut articles, self.sort_by, self.sort_order);
        articles
    }

    pub fn stats(&self) -> FilterStats {
        compute_stats(&self.articles, &self.state)
    }

    pub fn descriptions(&self) -> Vec<String> {
        describe_filters(&self.state)
    }

    pub fn export(&self, now: DateTime<Utc>) -> FilterExport {
        export_filter_state(&self.articles, &self.state, now)
    }

    /// Pretty-printed export document.
    pub fn export_json(&self, now: DateTime<Utc>) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.export(now))
    }

    fn mutate(&mut self, change: impl FnOnce(&mut FilterState)) {
        let before = self.state.clone();
        change(&mut self.state);
        if self.state == before {
            return;
        }
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterController;
    use crate::model::article::Topic;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_see_changes_once() {
        let mut controller = FilterController::new(Vec::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |state| sink.borrow_mut().push(state.search_query.clone()));

        controller.set_search_query("rbi");
        controller.set_search_query("rbi");
        controller.set_topic_selected(Topic::Economy, true);
        controller.reset();

        assert_eq!(*seen.borrow(), vec!["rbi", "rbi", ""]);
    }

    #[test]
    fn empty_catalog_stats_do_not_divide_by_zero() {
        let mut controller = FilterController::new(Vec::new());
        controller.set_importance_range(4, 5);
        let stats = controller.stats();
        assert_eq!(stats.match_rate, 0.0);
        assert_eq!(stats.active_filters, 1);
    }
}
