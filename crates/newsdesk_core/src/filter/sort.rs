//! Optional sort step applied after filtering.

use crate::model::article::Article;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Importance,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Sorts in place. Stable, so ties keep their filtered order.
pub fn sort_articles<A: AsRef<Article>>(articles: &mut [A], by: SortBy, order: SortOrder) {
    articles.sort_by(|left, right| {
        let ordering = compare(left.as_ref(), right.as_ref(), by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(left: &Article, right: &Article, by: SortBy) -> Ordering {
    match by {
        SortBy::Date => left.date.cmp(&right.date),
        SortBy::Importance => left.importance.cmp(&right.importance),
        SortBy::Title => left
            .title
            .to_lowercase()
            .cmp(&right.title.to_lowercase())
            .then_with(|| left.title.cmp(&right.title)),
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_articles, SortBy, SortOrder};
    use crate::model::article::{Article, ArticleContent, Topic};
    use chrono::{TimeZone, Utc};

    fn article(id: &str, title: &str, importance: u8, day: u32) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap(),
            topic: Topic::National,
            sub_topic: "Health".to_string(),
            importance,
            content: ArticleContent::default(),
            tags: Vec::new(),
            source: String::new(),
        }
    }

    fn ids(articles: &[&Article]) -> Vec<String> {
        articles.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn sorts_by_each_key() {
        let a = article("a", "beta", 3, 2);
        let b = article("b", "Alpha", 5, 1);
        let c = article("c", "gamma", 3, 3);
        let mut refs = vec![&a, &b, &c];

        sort_articles(&mut refs, SortBy::Date, SortOrder::Desc);
        assert_eq!(ids(&refs), ["c", "a", "b"]);

        sort_articles(&mut refs, SortBy::Title, SortOrder::Asc);
        assert_eq!(ids(&refs), ["b", "a", "c"]);

        sort_articles(&mut refs, SortBy::Importance, SortOrder::Desc);
        assert_eq!(ids(&refs), ["b", "a", "c"]);
    }

    #[test]
    fn importance_direction_matches_other_keys() {
        let low = article("low", "x", 1, 1);
        let high = article("high", "y", 5, 2);
        let mut refs = vec![&high, &low];

        sort_articles(&mut refs, SortBy::Importance, SortOrder::Asc);
        assert_eq!(ids(&refs), ["low", "high"]);
        sort_articles(&mut refs, SortBy::Date, SortOrder::Asc);
        assert_eq!(ids(&refs), ["low", "high"]);

        sort_articles(&mut refs, SortBy::Importance, SortOrder::Desc);
        assert_eq!(ids(&refs), ["high", "low"]);
    }

    #[test]
    fn equal_keys_keep_previous_order() {
        let a = article("a", "x", 2, 1);
        let b = article("b", "x", 2, 1);
        let mut owned = vec![b, a];
        sort_articles(&mut owned, SortBy::Importance, SortOrder::Asc);
        assert_eq!(owned[0].id, "b");
    }
}
