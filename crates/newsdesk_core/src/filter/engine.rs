//! Predicate evaluation over article lists.
//!
//! # Invariants
//! - Output preserves input order; no implicit sort.
//! - Importance bounds are assumed pre-clamped by [`FilterState`] mutators.

use crate::filter::state::FilterState;
use crate::model::article::Article;

/// Returns the articles passing every active predicate, cloned, in input
/// order.
pub fn filter_articles(articles: &[Article], state: &FilterState) -> Vec<Article> {
    filter_refs(articles, state).into_iter().cloned().collect()
}

/// Borrowing variant of [`filter_articles`].
pub fn filter_refs<'a>(articles: &'a [Article], state: &FilterState) -> Vec<&'a Article> {
    let query = state.search_needle();
    articles
        .iter()
        .filter(|article| passes(article, state, query.as_deref()))
        .collect()
}

/// Evaluates all predicates for a single article.
pub fn matches(article: &Article, state: &FilterState) -> bool {
    let query = state.search_needle();
    passes(article, state, query.as_deref())
}

/// Case-insensitive containment against title, every rendition and tags.
///
/// `needle` must already be lowercase.
pub fn matches_search(article: &Article, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(&article.title)
        || article.content.renditions().into_iter().any(contains)
        || article.tags.iter().any(|tag| contains(tag))
}

fn passes(article: &Article, state: &FilterState, lowered_query: Option<&str>) -> bool {
    if let Some(needle) = lowered_query {
        if !matches_search(article, needle) {
            return false;
        }
    }

    if !state.date_range.contains(article.date) {
        return false;
    }

    if !state.selected_topics.is_empty() && !state.selected_topics.contains(&article.topic) {
        return false;
    }
    if !state.selected_sub_topics.is_empty()
        && !state
            .selected_sub_topics
            .iter()
            .any(|sub_topic| *sub_topic == article.sub_topic)
    {
        return false;
    }

    (state.min_importance..=state.max_importance).contains(&article.importance)
}
