//! Date-range presets relative to an injected "now".

use crate::filter::state::DateRange;
use chrono::{DateTime, Duration, Months, NaiveTime, Utc};

/// Quick-select date windows offered next to the custom range inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
    Last7Days,
    Last30Days,
    Last3Months,
    /// The full browsable window, which is the last three months of news.
    AllTime,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::Last3Months,
        DatePreset::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last3Months => "Last 3 months",
            Self::AllTime => "All time",
        }
    }

    /// Start-of-day of the window start through end-of-day of `now`.
    pub fn range(self, now: DateTime<Utc>) -> DateRange {
        let start = match self {
            Self::Last7Days => now - Duration::days(7),
            Self::Last30Days => now - Duration::days(30),
            Self::Last3Months | Self::AllTime => three_months_before(now),
        };
        DateRange::between(start_of_day(start), end_of_day(now))
    }
}

/// Range covering exactly the calendar day of `day`.
pub fn single_day(day: DateTime<Utc>) -> DateRange {
    DateRange::between(start_of_day(day), end_of_day(day))
}

pub fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

pub fn end_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(at) + Duration::days(1) - Duration::milliseconds(1)
}

fn three_months_before(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(3)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::{end_of_day, single_day, DatePreset};
    use chrono::{TimeZone, Timelike, Utc};

    #[test]
    fn last_seven_days_spans_whole_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        let range = DatePreset::Last7Days.range(now);
        assert_eq!(range.start, Some(Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap()));
        let end = range.end.unwrap();
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert!(range.contains(now));
    }

    #[test]
    fn three_month_window_clamps_to_month_end() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 8, 0, 0).unwrap();
        let range = DatePreset::Last3Months.range(now);
        assert_eq!(range.start, Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()));
    }

    #[test]
    fn single_day_contains_only_that_day() {
        let day = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let range = single_day(day);
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()));
        assert!(range.contains(end_of_day(day)));
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap()));
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = DatePreset::ALL.iter().map(|p| p.label()).collect();
        labels.dedup();
        assert_eq!(labels.len(), 4);
    }
}
