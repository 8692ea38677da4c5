use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::Video;

pub const SIDEBAR_VIDEO_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoSortKey {
    Published,
    Views,
    Likes,
    Comments,
    Engagement,
}

impl VideoSortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            VideoSortKey::Published => "Published",
            VideoSortKey::Views => "Views",
            VideoSortKey::Likes => "Likes",
            VideoSortKey::Comments => "Comments",
            VideoSortKey::Engagement => "Engagement",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            VideoSortKey::Published,
            VideoSortKey::Views,
            VideoSortKey::Likes,
            VideoSortKey::Comments,
            VideoSortKey::Engagement,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            VideoSortKey::Published => "published",
            VideoSortKey::Views => "views",
            VideoSortKey::Likes => "likes",
            VideoSortKey::Comments => "comments",
            VideoSortKey::Engagement => "engagement",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, CoreError> {
        match key {
            "published" => Ok(VideoSortKey::Published),
            "views" => Ok(VideoSortKey::Views),
            "likes" => Ok(VideoSortKey::Likes),
            "comments" => Ok(VideoSortKey::Comments),
            "engagement" => Ok(VideoSortKey::Engagement),
            other => Err(CoreError::UnknownKey {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: VideoSortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: VideoSortKey::Views,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Clicking the active descending column flips it; anything else starts descending.
    pub fn toggle(&self, key: VideoSortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Desc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self { key, direction }
    }
}

/// Milliseconds since the epoch, `i64::MIN` when the date can't be read.
pub fn published_timestamp(published: &str) -> i64 {
    let value = published.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.timestamp_millis();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return dt.and_utc().timestamp_millis();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return dt.and_utc().timestamp_millis();
    }
    value
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(i64::MIN, |dt| dt.and_utc().timestamp_millis())
}

fn compare_by(a: &Video, b: &Video, key: VideoSortKey) -> Ordering {
    match key {
        VideoSortKey::Published => {
            published_timestamp(&a.published).cmp(&published_timestamp(&b.published))
        }
        VideoSortKey::Views => a.views.cmp(&b.views),
        VideoSortKey::Likes => a.likes.cmp(&b.likes),
        VideoSortKey::Comments => a.comments.cmp(&b.comments),
        VideoSortKey::Engagement => a
            .engagement()
            .partial_cmp(&b.engagement())
            .unwrap_or(Ordering::Equal),
    }
}

pub fn sort_videos(videos: &[Video], config: SortConfig) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, config.key);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Most viewed first.
pub fn top_videos(videos: &[Video]) -> Vec<Video> {
    sort_videos(videos, SortConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn video(id: &str, published: &str, views: i64, likes: i64, comments: i64) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {id}"),
            published: published.to_string(),
            views,
            likes,
            comments,
            ..Video::default()
        }
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    fn sample() -> Vec<Video> {
        vec![
            video("a", "2024-03-01T10:00:00Z", 1000, 50, 10),
            video("b", "2024-01-15", 5000, 100, 0),
            video("c", "not a date", 200, 30, 10),
            video("d", "2024-02-10 08:00:00", 0, 0, 0),
        ]
    }

    #[rstest]
    #[case(VideoSortKey::Views, SortDirection::Desc, vec!["b", "a", "c", "d"])]
    #[case(VideoSortKey::Views, SortDirection::Asc, vec!["d", "c", "a", "b"])]
    #[case(VideoSortKey::Likes, SortDirection::Desc, vec!["b", "a", "c", "d"])]
    #[case(VideoSortKey::Comments, SortDirection::Desc, vec!["a", "c", "b", "d"])]
    #[case(VideoSortKey::Published, SortDirection::Desc, vec!["a", "d", "b", "c"])]
    #[case(VideoSortKey::Engagement, SortDirection::Desc, vec!["c", "a", "b", "d"])]
    fn sorts_by_key(
        #[case] key: VideoSortKey,
        #[case] direction: SortDirection,
        #[case] expected: Vec<&str>,
    ) {
        let sorted = sort_videos(&sample(), SortConfig { key, direction });
        assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn toggle_flips_active_descending_column() {
        let config = SortConfig::default();

        let flipped = config.toggle(VideoSortKey::Views);
        assert_eq!(flipped.direction, SortDirection::Asc);

        let back = flipped.toggle(VideoSortKey::Views);
        assert_eq!(back.direction, SortDirection::Desc);

        let other = flipped.toggle(VideoSortKey::Likes);
        assert_eq!(
            other,
            SortConfig {
                key: VideoSortKey::Likes,
                direction: SortDirection::Desc,
            }
        );
    }

    #[test]
    fn top_videos_leaves_input_untouched() {
        let videos = sample();
        let top = top_videos(&videos);

        assert_eq!(ids(&top)[0], "b");
        assert_eq!(ids(&videos)[0], "a");
    }

    #[test]
    fn unreadable_publish_date_sorts_first_ascending() {
        assert_eq!(published_timestamp("garbage"), i64::MIN);
        assert!(published_timestamp("2024-01-15") < published_timestamp("2024-01-15T00:00:01Z"));
    }

    #[test]
    fn sort_key_round_trips_through_key() {
        for key in VideoSortKey::all_variants() {
            assert_eq!(VideoSortKey::from_key(key.key()), Ok(key));
        }
    }
}
