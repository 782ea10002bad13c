//! Fixed topic to sub-topic catalog.

use crate::model::article::Topic;

/// Sub-topics offered under `topic` by the topic selector.
///
/// Sub-topic names may repeat across topics (`Trade`, `Defence`, `Energy`).
pub fn sub_topics_of(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Economy => &[
            "Monetary Policy",
            "Taxation",
            "Growth",
            "Trade",
            "Employment",
            "Digital Currency",
        ],
        Topic::ScienceTech => &[
            "Space",
            "Innovation",
            "Telecom",
            "Transport",
            "Entrepreneurship",
        ],
        Topic::National => &["Judiciary", "Defence", "Health", "Education"],
        Topic::International => &["Trade", "Defence", "Energy", "Diplomacy"],
        Topic::Environment => &[
            "Weather",
            "Air Quality",
            "Wildlife",
            "Renewable Energy",
            "Energy",
        ],
    }
}
