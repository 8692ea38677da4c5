use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

pub const UNKNOWN_CHANNEL_TITLE: &str = "Unknown channel";

/// A single uploaded video, keyed the way the backend's CSV export names its columns.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Video {
    #[serde(rename = "Video ID", default)]
    pub id: String,
    #[serde(rename = "Titulo", default)]
    pub title: String,
    #[serde(rename = "Publicado", default)]
    pub published: String,
    #[serde(rename = "Miniatura", default)]
    pub thumbnail: String,
    #[serde(rename = "Vistas", default, deserialize_with = "lenient_count")]
    pub views: i64,
    #[serde(rename = "Likes", default, deserialize_with = "lenient_count")]
    pub likes: i64,
    #[serde(rename = "Comentarios", default, deserialize_with = "lenient_count")]
    pub comments: i64,
}

impl Video {
    pub fn interactions(&self) -> i64 {
        self.likes.saturating_add(self.comments)
    }

    /// Likes plus comments per view, as a percentage. Zero for unviewed videos.
    pub fn engagement(&self) -> f64 {
        if self.views == 0 {
            return 0.0;
        }
        self.interactions() as f64 / self.views as f64 * 100.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// Per-day deltas reported by the analytics endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyStat {
    #[serde(deserialize_with = "day_key")]
    pub day: NaiveDate,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comments: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscribers: i64,
}

impl DailyStat {
    pub fn month_key(&self) -> String {
        self.day.format("%Y-%m").to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ChannelTotals {
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscribers: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub videos: i64,
}

/// Raw payload of `GET /channel`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub stats: Option<ChannelTotals>,
}

/// Channel totals as the dashboard displays them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChannelStats {
    pub subscribers: i64,
    pub views: i64,
    pub videos: i64,
    pub title: String,
    pub avatar: String,
}

impl From<ChannelInfo> for ChannelStats {
    fn from(info: ChannelInfo) -> Self {
        let totals = info.stats.unwrap_or_default();
        let title = info
            .channel_title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_CHANNEL_TITLE.to_string());

        Self {
            subscribers: totals.subscribers,
            views: totals.views,
            videos: totals.videos,
            title,
            avatar: info.avatar.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RefreshResponse {
    #[serde(default)]
    pub message: String,
}

/// Parses the leading `YYYY-MM-DD` of a day key, ignoring any time suffix.
pub fn parse_day(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
    })
}

/// Decodes an analytics payload row by row, dropping rows that do not parse.
pub fn decode_daily_stats(rows: Vec<serde_json::Value>) -> Vec<DailyStat> {
    let total = rows.len();
    let stats: Vec<DailyStat> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<DailyStat>(row) {
            Ok(stat) => Some(stat),
            Err(e) => {
                log::warn!("Skipping analytics row: {e}");
                None
            }
        })
        .collect();

    if stats.len() < total {
        log::warn!("Dropped {} of {} analytics rows", total - stats.len(), total);
    }
    stats
}

fn day_key<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw).map_err(serde::de::Error::custom)
}

// pandas exports counts as ints, floats or null depending on the column
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().map_or(0, |f| f as i64),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn video_reads_backend_column_names() {
        let video: Video = serde_json::from_value(json!({
            "Video ID": "abc123",
            "Titulo": "Speedrun",
            "Publicado": "2024-03-01T12:00:00Z",
            "Miniatura": "https://i.ytimg.com/vi/abc123/default.jpg",
            "Vistas": 1500,
            "Likes": 120,
            "Comentarios": 30
        }))
        .unwrap();

        assert_eq!(video.id, "abc123");
        assert_eq!(video.views, 1500);
        assert_eq!(video.interactions(), 150);
        assert_eq!(video.engagement(), 10.0);
    }

    #[test]
    fn missing_and_null_counts_default_to_zero() {
        let video: Video = serde_json::from_value(json!({
            "Video ID": "x",
            "Vistas": null,
            "Likes": 4.0
        }))
        .unwrap();

        assert_eq!(video.views, 0);
        assert_eq!(video.likes, 4);
        assert_eq!(video.comments, 0);
        assert_eq!(video.engagement(), 0.0);
    }

    #[test]
    fn daily_stat_truncates_time_suffix() {
        let stat: DailyStat = serde_json::from_value(json!({
            "day": "2024-01-05T00:00:00",
            "views": 10,
            "likes": 2,
            "comments": 1
        }))
        .unwrap();

        assert_eq!(stat.day, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(stat.subscribers, 0);
        assert_eq!(stat.month_key(), "2024-01");
    }

    #[test]
    fn daily_stat_rejects_garbage_day() {
        let result = serde_json::from_value::<DailyStat>(json!({ "day": "yesterday" }));
        assert!(result.is_err());
    }

    #[test]
    fn bad_analytics_rows_are_skipped_not_fatal() {
        let rows = vec![
            json!({ "day": "2024-06-29", "views": 10 }),
            json!({ "day": "", "views": 5 }),
            json!({ "views": 7 }),
            json!({ "day": "2024-06-30", "views": 3 }),
        ];

        let stats = decode_daily_stats(rows);
        let days: Vec<NaiveDate> = stats.iter().map(|d| d.day).collect();

        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            ]
        );
        assert_eq!(stats[0].views, 10);
    }

    #[test]
    fn huge_counts_clamp_instead_of_failing() {
        let stats = decode_daily_stats(vec![json!({ "day": "2024-06-29", "views": 1e19 })]);
        assert_eq!(stats[0].views, i64::MAX);
    }

    #[test]
    fn interactions_saturate_on_extreme_counts() {
        let video = Video {
            likes: i64::MAX,
            comments: 10,
            ..Video::default()
        };
        assert_eq!(video.interactions(), i64::MAX);
    }

    #[test]
    fn channel_stats_fall_back_when_fields_are_missing() {
        let info: ChannelInfo = serde_json::from_value(json!({ "channelId": "demo" })).unwrap();
        let stats = ChannelStats::from(info);

        assert_eq!(stats.title, UNKNOWN_CHANNEL_TITLE);
        assert_eq!(stats.subscribers, 0);
        assert_eq!(stats.avatar, "");
    }

    #[test]
    fn channel_stats_from_full_payload() {
        let info: ChannelInfo = serde_json::from_value(json!({
            "channelTitle": "Gameplays",
            "channelId": "UC123",
            "theme": "Gamer Green",
            "avatar": "https://yt3.ggpht.com/a.jpg",
            "stats": { "subscribers": 1200, "views": 98000, "videos": 42 }
        }))
        .unwrap();
        let stats = ChannelStats::from(info);

        assert_eq!(
            stats,
            ChannelStats {
                subscribers: 1200,
                views: 98000,
                videos: 42,
                title: "Gameplays".to_string(),
                avatar: "https://yt3.ggpht.com/a.jpg".to_string(),
            }
        );
    }
}
