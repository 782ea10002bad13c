//! Article catalog loaded once from bundled JSON.
//!
//! # Responsibility
//! - Parse and validate the static article collection.
//! - Answer read-only lookups (by id, topic, importance, date window) and
//!   the home-page selections (featured, latest).
//!
//! # Invariants
//! - Every article passed `Article::validate()` and ids are unique.
//! - Lookups never mutate or reorder the loaded collection.

use crate::filter::state::DateRange;
use crate::model::article::{Article, ArticleValidationError, Topic, MAX_IMPORTANCE};
use log::{error, info};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const FEATURED_MIN_IMPORTANCE: u8 = 4;
const FEATURED_LIMIT: usize = 6;
const LATEST_LIMIT: usize = 12;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure while loading the article collection.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(ArticleValidationError),
    DuplicateId(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read article data: {err}"),
            Self::Json(err) => write!(f, "malformed article data: {err}"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate article id `{id}`"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ArticleValidationError> for CatalogError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Immutable, validated article collection.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Validates and wraps an already-parsed article list.
    pub fn new(articles: Vec<Article>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for article in &articles {
            article.validate()?;
            if !seen.insert(article.id.as_str()) {
                return Err(CatalogError::DuplicateId(article.id.clone()));
            }
        }
        Ok(Self { articles })
    }

    /// Parses a JSON array of articles.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Self::new(articles)
    }

    /// Reads and parses a JSON article file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(CatalogError::from)
            .and_then(|json| Self::from_json_str(&json));
        match &loaded {
            Ok(catalog) => info!(
                "event=catalog_load module=catalog status=ok articles={}",
                catalog.len()
            ),
            Err(err) => error!(
                "event=catalog_load module=catalog status=error path={} error={}",
                path.display(),
                err
            ),
        }
        loaded
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Missing ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Articles whose topic name matches case-insensitively.
    pub fn by_topic(&self, topic_name: &str) -> Vec<&Article> {
        match topic_name.parse::<Topic>() {
            Ok(topic) => self
                .articles
                .iter()
                .filter(|article| article.topic == topic)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn by_importance(&self, importance: u8) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.importance == importance)
            .collect()
    }

    pub fn in_date_range(&self, range: &DateRange) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| range.contains(article.date))
            .collect()
    }

    /// Up to six high-importance articles, newest first.
    pub fn featured(&self) -> Vec<&Article> {
        let mut featured: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| article.importance >= FEATURED_MIN_IMPORTANCE)
            .collect();
        newest_first(&mut featured);
        featured.truncate(FEATURED_LIMIT);
        featured
    }

    /// Up to twelve articles, newest first.
    pub fn latest(&self) -> Vec<&Article> {
        let mut latest: Vec<&Article> = self.articles.iter().collect();
        newest_first(&mut latest);
        latest.truncate(LATEST_LIMIT);
        latest
    }

    /// Article count per topic; topics without articles report zero.
    pub fn topic_counts(&self) -> BTreeMap<Topic, usize> {
        let mut counts: BTreeMap<Topic, usize> =
            Topic::ALL.into_iter().map(|topic| (topic, 0)).collect();
        for article in &self.articles {
            *counts.entry(article.topic).or_default() += 1;
        }
        counts
    }

    /// Article count per importance level, indexed `1..=5`.
    pub fn importance_counts(&self) -> BTreeMap<u8, usize> {
        let mut counts: BTreeMap<u8, usize> = (1..=MAX_IMPORTANCE).map(|level| (level, 0)).collect();
        for article in &self.articles {
            *counts.entry(article.importance).or_default() += 1;
        }
        counts
    }
}

fn newest_first(articles: &mut [&Article]) {
    articles.sort_by(|left, right| right.date.cmp(&left.date));
}
