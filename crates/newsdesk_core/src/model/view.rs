//! View and layout mode enums shared by article rendering and preferences.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which abridged rendition of an article is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Full write-up.
    #[default]
    Detailed,
    /// Fact-oriented summary.
    Prelims,
    /// Analysis-oriented summary.
    Mains,
    /// Single sentence.
    OneLiner,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Detailed,
        ViewMode::Prelims,
        ViewMode::Mains,
        ViewMode::OneLiner,
    ];

    /// Stable storage value (`detailed|prelims|mains|one-liner`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Prelims => "prelims",
            Self::Mains => "mains",
            Self::OneLiner => "one-liner",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value.trim())
            .ok_or_else(|| format!("unknown view mode `{value}`"))
    }
}

/// Presentation density for a list of articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Card,
    List,
    Table,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Card, LayoutMode::List, LayoutMode::Table];

    /// Stable storage value (`card|list|table`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
            Self::Table => "table",
        }
    }
}

impl Display for LayoutMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value.trim())
            .ok_or_else(|| format!("unknown layout mode `{value}`"))
    }
}
