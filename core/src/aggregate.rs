use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::day_label;
use crate::models::DailyStat;
use crate::timeframe::Metric;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStat {
    /// `YYYY-MM`
    pub month: String,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub subscribers: i64,
}

impl MonthlyStat {
    fn empty(month: String) -> Self {
        Self {
            month,
            views: 0,
            likes: 0,
            comments: 0,
            subscribers: 0,
        }
    }

    pub fn get(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Views => self.views,
            Metric::Likes => self.likes,
            Metric::Comments => self.comments,
            Metric::Subscribers => self.subscribers,
        }
    }

    pub fn engagement(&self) -> f64 {
        if self.views == 0 {
            return 0.0;
        }
        self.likes.saturating_add(self.comments) as f64 / self.views as f64 * 100.0
    }
}

/// Sums daily stats per calendar month, busiest month (by views) first.
pub fn monthly_stats(stats: &[DailyStat]) -> Vec<MonthlyStat> {
    let mut months: BTreeMap<String, MonthlyStat> = BTreeMap::new();

    for d in stats {
        let key = d.month_key();
        let entry = months
            .entry(key.clone())
            .or_insert_with(|| MonthlyStat::empty(key));
        entry.views = entry.views.saturating_add(d.views);
        entry.likes = entry.likes.saturating_add(d.likes);
        entry.comments = entry.comments.saturating_add(d.comments);
        entry.subscribers = entry.subscribers.saturating_add(d.subscribers);
    }

    let mut result: Vec<MonthlyStat> = months.into_values().collect();
    result.sort_by(|a, b| b.views.cmp(&a.views));
    result
}

pub fn top_months(monthly: &[MonthlyStat], metric: Metric, limit: usize) -> Vec<MonthlyStat> {
    let mut sorted = monthly.to_vec();
    sorted.sort_by(|a, b| b.get(metric).cmp(&a.get(metric)));
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: i64,
    pub date: NaiveDate,
}

pub fn chart_points(current: &[DailyStat], metric: Metric) -> Vec<ChartPoint> {
    current
        .iter()
        .map(|d| ChartPoint {
            label: day_label(d.day),
            value: metric.value_of(d),
            date: d.day,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestDay {
    pub date: NaiveDate,
    pub value: i64,
    pub metric: Metric,
}

/// Day with the highest value for `metric`; the later day wins a tie.
pub fn best_day(current: &[DailyStat], metric: Metric) -> Option<BestDay> {
    let mut best: Option<&DailyStat> = None;
    for d in current {
        match best {
            Some(b) if metric.value_of(b) > metric.value_of(d) => {}
            _ => best = Some(d),
        }
    }

    best.map(|d| BestDay {
        date: d.day,
        value: metric.value_of(d),
        metric,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stat(y: i32, m: u32, d: u32, views: i64, likes: i64) -> DailyStat {
        DailyStat {
            day: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            views,
            likes,
            comments: 1,
            subscribers: 2,
        }
    }

    #[test]
    fn groups_by_month_and_sorts_by_views() {
        let stats = vec![
            stat(2024, 1, 3, 100, 5),
            stat(2024, 2, 1, 900, 10),
            stat(2024, 1, 20, 50, 5),
            stat(2023, 12, 31, 400, 40),
        ];

        let monthly = monthly_stats(&stats);
        let months: Vec<&str> = monthly.iter().map(|m| m.month.as_str()).collect();

        assert_eq!(months, vec!["2024-02", "2023-12", "2024-01"]);
        assert_eq!(
            monthly[2],
            MonthlyStat {
                month: "2024-01".to_string(),
                views: 150,
                likes: 10,
                comments: 2,
                subscribers: 4,
            }
        );
    }

    #[test]
    fn top_months_by_other_metric() {
        let monthly = monthly_stats(&[
            stat(2024, 1, 1, 100, 90),
            stat(2024, 2, 1, 900, 10),
            stat(2024, 3, 1, 500, 50),
        ]);

        let top = top_months(&monthly, Metric::Likes, 2);
        let months: Vec<&str> = top.iter().map(|m| m.month.as_str()).collect();

        assert_eq!(months, vec!["2024-01", "2024-03"]);
    }

    #[test]
    fn engagement_guards_zero_views() {
        let month = MonthlyStat::empty("2024-01".to_string());
        assert_eq!(month.engagement(), 0.0);

        let month = MonthlyStat {
            views: 200,
            likes: 15,
            comments: 5,
            ..MonthlyStat::empty("2024-01".to_string())
        };
        assert_eq!(month.engagement(), 10.0);
    }

    #[test]
    fn chart_points_follow_metric() {
        let points = chart_points(&[stat(2024, 1, 5, 100, 7)], Metric::Likes);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "5 Jan");
        assert_eq!(points[0].value, 7);
    }

    #[test]
    fn best_day_prefers_later_on_tie() {
        let current = vec![
            stat(2024, 1, 1, 300, 1),
            stat(2024, 1, 2, 100, 1),
            stat(2024, 1, 3, 300, 1),
        ];

        let best = best_day(&current, Metric::Views).unwrap();
        assert_eq!(best.date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(best.value, 300);
        assert_eq!(best.metric, Metric::Views);
    }

    #[test]
    fn monthly_totals_saturate() {
        let stats = vec![stat(2024, 1, 3, i64::MAX, 0), stat(2024, 1, 4, 10, 0)];
        let monthly = monthly_stats(&stats);

        assert_eq!(monthly[0].views, i64::MAX);
        assert_eq!(monthly[0].comments, 2);
    }

    #[test]
    fn best_day_of_empty_window_is_none() {
        assert_eq!(best_day(&[], Metric::Views), None);
    }
}
