//! Current-vs-previous period filtering.
//!
//! The current window is whatever the user picked; the previous window has
//! the same length and ends right before the current one starts. Summing
//! both gives the KPI values and their period-over-period deltas.

use chrono::{Days, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::DailyStat;
use crate::timeframe::{DateRange, Metric, Timeframe};

/// Inclusive date window. An open `end` means "up to the latest record".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Window {
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && self.end.map_or(true, |end| day <= end)
    }
}

fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_days(Days::new(days.max(0) as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Resolves the current and previous windows for a timeframe as seen on `today`.
pub fn period_windows(
    timeframe: Timeframe,
    custom: &DateRange,
    today: NaiveDate,
) -> (Window, Window) {
    if timeframe == Timeframe::Custom {
        if let Some((start, end)) = custom.bounds() {
            let length = (end - start).num_days() + 1;
            let previous = Window {
                start: days_before(start, length),
                end: Some(days_before(start, 1)),
            };
            return (Window { start, end: Some(end) }, previous);
        }
    }

    let days = timeframe.window_days();
    let cutoff = days_before(today, days);
    let current_end = match timeframe {
        // an incomplete custom range still stops at today
        Timeframe::Custom => Some(today),
        _ => None,
    };

    let current = Window {
        start: cutoff,
        end: current_end,
    };
    let previous = Window {
        start: days_before(cutoff, days),
        end: Some(days_before(cutoff, 1)),
    };
    (current, previous)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodSplit {
    /// Sorted ascending by day.
    pub current: Vec<DailyStat>,
    pub previous: Vec<DailyStat>,
}

pub fn split_periods(
    stats: &[DailyStat],
    timeframe: Timeframe,
    custom: &DateRange,
    today: NaiveDate,
) -> PeriodSplit {
    if stats.is_empty() {
        return PeriodSplit::default();
    }

    let (current_window, previous_window) = period_windows(timeframe, custom, today);

    let mut current: Vec<DailyStat> = stats
        .iter()
        .filter(|d| current_window.contains(d.day))
        .cloned()
        .collect();
    current.sort_by_key(|d| d.day);

    let previous: Vec<DailyStat> = stats
        .iter()
        .filter(|d| previous_window.contains(d.day))
        .cloned()
        .collect();

    debug!(
        "Split {} daily stats for '{}': {} current, {} previous",
        stats.len(),
        timeframe.key(),
        current.len(),
        previous.len()
    );

    PeriodSplit { current, previous }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricTotals {
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub subscribers: i64,
}

impl MetricTotals {
    pub fn sum(stats: &[DailyStat]) -> Self {
        stats.iter().fold(Self::default(), |acc, d| Self {
            views: acc.views.saturating_add(d.views),
            likes: acc.likes.saturating_add(d.likes),
            comments: acc.comments.saturating_add(d.comments),
            subscribers: acc.subscribers.saturating_add(d.subscribers),
        })
    }

    pub fn get(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Views => self.views,
            Metric::Likes => self.likes,
            Metric::Comments => self.comments,
            Metric::Subscribers => self.subscribers,
        }
    }
}

/// Percentage deltas, current over previous.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricDeltas {
    pub views: f64,
    pub likes: f64,
    pub comments: f64,
    pub subscribers: f64,
}

impl MetricDeltas {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Views => self.views,
            Metric::Likes => self.likes,
            Metric::Comments => self.comments,
            Metric::Subscribers => self.subscribers,
        }
    }
}

/// Reported as 0 when there is nothing to compare against.
pub fn percent_change(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodStats {
    pub current: MetricTotals,
    pub previous: MetricTotals,
    pub diffs: MetricDeltas,
}

impl PeriodStats {
    pub fn from_split(split: &PeriodSplit) -> Self {
        let current = MetricTotals::sum(&split.current);
        let previous = MetricTotals::sum(&split.previous);
        let diffs = MetricDeltas {
            views: percent_change(current.views, previous.views),
            likes: percent_change(current.likes, previous.likes),
            comments: percent_change(current.comments, previous.comments),
            subscribers: percent_change(current.subscribers, previous.subscribers),
        };

        Self {
            current,
            previous,
            diffs,
        }
    }
}
