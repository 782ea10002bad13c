//! Importance range helpers used at the input boundary.

use crate::model::article::{MAX_IMPORTANCE, MIN_IMPORTANCE};

/// Clamps any slider/text input into `1..=5`.
pub fn clamp_importance(value: i64) -> u8 {
    // Lossless: the clamped value always fits `u8`.
    value.clamp(i64::from(MIN_IMPORTANCE), i64::from(MAX_IMPORTANCE)) as u8
}

/// Human label for one importance level.
pub fn importance_label(level: u8) -> &'static str {
    match level {
        5 => "Critical",
        4 => "High",
        3 => "Medium",
        2 => "Low",
        1 => "Minimal",
        _ => "Unknown",
    }
}

/// Named quick-select importance range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportancePreset {
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
}

pub const IMPORTANCE_PRESETS: [ImportancePreset; 3] = [
    ImportancePreset {
        label: "High Priority",
        min: 4,
        max: 5,
    },
    ImportancePreset {
        label: "Medium",
        min: 2,
        max: 3,
    },
    ImportancePreset {
        label: "All",
        min: MIN_IMPORTANCE,
        max: MAX_IMPORTANCE,
    },
];
