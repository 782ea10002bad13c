//! Article domain model.
//!
//! # Responsibility
//! - Define the immutable article record loaded from bundled JSON.
//! - Provide the fixed topic enum and view-mode rendition lookup.
//!
//! # Invariants
//! - `id` is stable and non-empty.
//! - `importance` is always inside `1..=5` (5 = most critical).
//! - Articles are never mutated by the filter engine.

use crate::model::view::ViewMode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Lowest editorial importance.
pub const MIN_IMPORTANCE: u8 = 1;
/// Highest editorial importance.
pub const MAX_IMPORTANCE: u8 = 5;

/// First-level category attached to every article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    Economy,
    #[serde(rename = "Science & Tech")]
    ScienceTech,
    National,
    International,
    Environment,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Economy,
        Topic::ScienceTech,
        Topic::National,
        Topic::International,
        Topic::Environment,
    ];

    /// Display name, identical to the serialized value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::ScienceTech => "Science & Tech",
            Self::National => "National",
            Self::International => "International",
            Self::Environment => "Environment",
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = String;

    /// Parses a topic name case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown topic `{value}`"))
    }
}

/// Four parallel text renditions of one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContent {
    pub detailed: String,
    pub prelims: String,
    pub mains: String,
    pub one_liner: String,
}

impl ArticleContent {
    /// Iterates all renditions in `detailed, prelims, mains, one_liner` order.
    pub fn renditions(&self) -> [&str; 4] {
        [
            self.detailed.as_str(),
            self.prelims.as_str(),
            self.mains.as_str(),
            self.one_liner.as_str(),
        ]
    }
}

/// Immutable news article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Opaque stable identifier.
    pub id: String,
    pub title: String,
    /// Publication timestamp. Bundled data may carry a bare `YYYY-MM-DD`.
    #[serde(deserialize_with = "deserialize_article_date")]
    pub date: DateTime<Utc>,
    pub topic: Topic,
    /// Free-form second-level category within `topic`.
    pub sub_topic: String,
    /// Editorial priority, 1 (minimal) to 5 (critical).
    pub importance: u8,
    pub content: ArticleContent,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub source: String,
}

impl Article {
    /// Returns the text rendition shown for `mode`.
    pub fn rendition(&self, mode: ViewMode) -> &str {
        match mode {
            ViewMode::Detailed => &self.content.detailed,
            ViewMode::Prelims => &self.content.prelims,
            ViewMode::Mains => &self.content.mains,
            ViewMode::OneLiner => &self.content.one_liner,
        }
    }

    /// Validates load-time invariants.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.id.trim().is_empty() {
            return Err(ArticleValidationError::EmptyId);
        }
        if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&self.importance) {
            return Err(ArticleValidationError::ImportanceOutOfRange {
                id: self.id.clone(),
                importance: self.importance,
            });
        }
        Ok(())
    }
}

impl AsRef<Article> for Article {
    fn as_ref(&self) -> &Article {
        self
    }
}

/// Validation errors raised while loading articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyId,
    ImportanceOutOfRange { id: String, importance: u8 },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "article id cannot be empty"),
            Self::ImportanceOutOfRange { id, importance } => write!(
                f,
                "article `{id}` has importance {importance}; expected {MIN_IMPORTANCE}..={MAX_IMPORTANCE}"
            ),
        }
    }
}

impl Error for ArticleValidationError {}

/// Parses an article date from RFC 3339 or `YYYY-MM-DD` (midnight UTC).
pub fn parse_article_date(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_article_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_article_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid article date `{raw}`")))
}

#[cfg(test)]
mod tests {
    use super::{parse_article_date, Article, ArticleValidationError, Topic};
    use crate::model::view::ViewMode;

    const SAMPLE: &str = r#"{
        "id": "a-1",
        "title": "Budget unveiled",
        "date": "2024-01-10",
        "topic": "Science & Tech",
        "subTopic": "Space",
        "importance": 4,
        "content": {
            "detailed": "long",
            "prelims": "facts",
            "mains": "analysis",
            "oneLiner": "short"
        },
        "tags": ["budget"],
        "source": "PIB"
    }"#;

    #[test]
    fn deserializes_bundled_shape() {
        let article: Article = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(article.topic, Topic::ScienceTech);
        assert_eq!(article.sub_topic, "Space");
        assert_eq!(article.date.to_rfc3339(), "2024-01-10T00:00:00+00:00");
        assert_eq!(article.rendition(ViewMode::OneLiner), "short");
        assert!(article.validate().is_ok());
    }

    #[test]
    fn parse_article_date_accepts_rfc3339() {
        let parsed = parse_article_date("2024-03-01T12:30:00+05:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T07:00:00+00:00");
        assert!(parse_article_date("01/03/2024").is_none());
    }

    #[test]
    fn validate_rejects_importance_outside_range() {
        let mut article: Article = serde_json::from_str(SAMPLE).unwrap();
        article.importance = 6;
        assert!(matches!(
            article.validate(),
            Err(ArticleValidationError::ImportanceOutOfRange { importance: 6, .. })
        ));
    }

    #[test]
    fn topic_parses_case_insensitively() {
        assert_eq!("science & tech".parse::<Topic>(), Ok(Topic::ScienceTech));
        assert!("Sports".parse::<Topic>().is_err());
    }
}
