use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::DailyStat;

/// Days covered by the `all` timeframe.
pub const ALL_TIME_DAYS: i64 = 365 * 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Timeframe {
    SevenDays,
    FifteenDays,
    ThirtyDays,
    #[default]
    All,
    Custom,
}

impl Timeframe {
    pub fn all_variants() -> Vec<Self> {
        vec![
            Timeframe::SevenDays,
            Timeframe::FifteenDays,
            Timeframe::ThirtyDays,
            Timeframe::All,
            Timeframe::Custom,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Timeframe::SevenDays => "7d",
            Timeframe::FifteenDays => "15d",
            Timeframe::ThirtyDays => "30d",
            Timeframe::All => "all",
            Timeframe::Custom => "custom",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        match key {
            "7d" => Ok(Timeframe::SevenDays),
            "15d" => Ok(Timeframe::FifteenDays),
            "30d" => Ok(Timeframe::ThirtyDays),
            "all" => Ok(Timeframe::All),
            "custom" => Ok(Timeframe::Custom),
            other => Err(CoreError::UnknownKey {
                kind: "timeframe",
                value: other.to_string(),
            }),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Timeframe::SevenDays => "7d",
            Timeframe::FifteenDays => "15d",
            Timeframe::ThirtyDays => "30d",
            Timeframe::All => "All",
            Timeframe::Custom => "Custom",
        }
    }

    /// Length of the relative window. `Custom` falls back to 30 days when
    /// its range is incomplete.
    pub fn window_days(&self) -> i64 {
        match self {
            Timeframe::SevenDays => 7,
            Timeframe::FifteenDays => 15,
            Timeframe::ThirtyDays | Timeframe::Custom => 30,
            Timeframe::All => ALL_TIME_DAYS,
        }
    }

    /// Period-over-period deltas are meaningless when everything is in range.
    pub fn shows_deltas(&self) -> bool {
        !matches!(self, Timeframe::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both ends, ordered. `None` unless the range is complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(a), Some(b)) if a <= b => Some((a, b)),
            (Some(a), Some(b)) => Some((b, a)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Metric {
    #[default]
    Views,
    Likes,
    Comments,
    Subscribers,
}

impl Metric {
    pub fn all_variants() -> Vec<Self> {
        vec![
            Metric::Views,
            Metric::Likes,
            Metric::Comments,
            Metric::Subscribers,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Views => "views",
            Metric::Likes => "likes",
            Metric::Comments => "comments",
            Metric::Subscribers => "subscribers",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        match key {
            "views" => Ok(Metric::Views),
            "likes" => Ok(Metric::Likes),
            "comments" => Ok(Metric::Comments),
            "subscribers" => Ok(Metric::Subscribers),
            other => Err(CoreError::UnknownKey {
                kind: "metric",
                value: other.to_string(),
            }),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Views => "Views",
            Metric::Likes => "Likes",
            Metric::Comments => "Comments",
            Metric::Subscribers => "Subs",
        }
    }

    pub fn value_of(&self, stat: &DailyStat) -> i64 {
        match self {
            Metric::Views => stat.views,
            Metric::Likes => stat.likes,
            Metric::Comments => stat.comments,
            Metric::Subscribers => stat.subscribers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(Timeframe::SevenDays, 7)]
    #[case(Timeframe::FifteenDays, 15)]
    #[case(Timeframe::ThirtyDays, 30)]
    #[case(Timeframe::All, 3650)]
    #[case(Timeframe::Custom, 30)]
    fn window_lengths(#[case] timeframe: Timeframe, #[case] days: i64) {
        assert_eq!(timeframe.window_days(), days);
    }

    #[test]
    fn timeframe_keys_map_back() {
        for timeframe in Timeframe::all_variants() {
            assert_eq!(Timeframe::from_key(timeframe.key()), Ok(timeframe));
        }
        assert!(Timeframe::from_key("90d").is_err());
    }

    #[test]
    fn metric_keys_map_back() {
        for metric in Metric::all_variants() {
            assert_eq!(Metric::from_key(metric.key()), Ok(metric));
        }
        assert!(matches!(
            Metric::from_key("shares"),
            Err(CoreError::UnknownKey { kind: "metric", .. })
        ));
    }

    #[test]
    fn date_range_orders_reversed_bounds() {
        let range = DateRange::new(Some(day(2024, 2, 10)), Some(day(2024, 2, 1)));
        assert_eq!(range.bounds(), Some((day(2024, 2, 1), day(2024, 2, 10))));
    }

    #[test]
    fn half_open_range_is_incomplete() {
        let range = DateRange::new(Some(day(2024, 2, 10)), None);
        assert!(!range.is_complete());
        assert_eq!(range.bounds(), None);
    }

    #[test]
    fn metric_reads_matching_field() {
        let stat = DailyStat {
            day: day(2024, 1, 1),
            views: 1,
            likes: 2,
            comments: 3,
            subscribers: 4,
        };
        let values: Vec<i64> = Metric::all_variants()
            .iter()
            .map(|m| m.value_of(&stat))
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }
}
