use serde::{Deserialize, Serialize};

use crate::models::Video;

/// Videos considered "recent" for the media kit, taken from the head of the list.
pub const RECENT_VIDEO_COUNT: usize = 10;
pub const HIGHLIGHT_COUNT: usize = 3;

pub const SHARE_PITCH: &str =
    "Check out my channel's official metrics, live. Verified data, no screenshots.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaKitHighlight {
    pub title: String,
    pub thumbnail: String,
    pub views: i64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaKitSummary {
    pub channel_name: String,
    pub total_subscribers: i64,
    pub average_views: f64,
    pub engagement_rate: f64,
    pub highlights: Vec<MediaKitHighlight>,
}

impl MediaKitSummary {
    pub fn from_videos(videos: &[Video], total_subscribers: i64, channel_name: &str) -> Self {
        let recent = &videos[..videos.len().min(RECENT_VIDEO_COUNT)];

        let total_views = recent.iter().fold(0i64, |acc, v| acc.saturating_add(v.views));
        let total_interactions = recent
            .iter()
            .fold(0i64, |acc, v| acc.saturating_add(v.interactions()));

        let average_views = total_views as f64 / recent.len().max(1) as f64;
        let engagement_rate = if total_views > 0 {
            total_interactions as f64 / total_views as f64 * 100.0
        } else {
            0.0
        };

        let highlights = recent
            .iter()
            .take(HIGHLIGHT_COUNT)
            .map(|v| MediaKitHighlight {
                title: v.title.clone(),
                thumbnail: v.thumbnail.clone(),
                views: v.views,
                engagement: v.engagement(),
            })
            .collect();

        Self {
            channel_name: channel_name.to_string(),
            total_subscribers,
            average_views,
            engagement_rate,
            highlights,
        }
    }

    pub fn share_title(&self) -> String {
        format!("Media Kit: {}", self.channel_name)
    }

    pub fn share_text(&self, url: &str) -> String {
        format!("{SHARE_PITCH}\n{url}")
    }
}

/// Channel total when the channel endpoint answered, otherwise the period's new subscribers.
pub fn media_kit_subscribers(channel_total: Option<i64>, period_subscribers: i64) -> i64 {
    channel_total.unwrap_or(period_subscribers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn video(title: &str, views: i64, likes: i64, comments: i64) -> Video {
        Video {
            title: title.to_string(),
            views,
            likes,
            comments,
            ..Video::default()
        }
    }

    #[test]
    fn summarises_only_the_ten_most_recent() {
        let mut videos: Vec<Video> = (0..10).map(|i| video(&format!("v{i}"), 100, 8, 2)).collect();
        videos.push(video("old hit", 1_000_000, 0, 0));

        let kit = MediaKitSummary::from_videos(&videos, 5000, "Gameplays");

        assert_eq!(kit.average_views, 100.0);
        assert_eq!(kit.engagement_rate, 10.0);
        assert_eq!(kit.highlights.len(), 3);
        assert_eq!(kit.highlights[0].title, "v0");
        assert_eq!(kit.total_subscribers, 5000);
    }

    #[test]
    fn empty_channel_yields_zeroes() {
        let kit = MediaKitSummary::from_videos(&[], 0, "Nobody");

        assert_eq!(kit.average_views, 0.0);
        assert_eq!(kit.engagement_rate, 0.0);
        assert!(kit.highlights.is_empty());
    }

    #[test]
    fn share_text_includes_title_and_url() {
        let kit = MediaKitSummary::from_videos(&[], 0, "Gameplays");

        assert_eq!(kit.share_title(), "Media Kit: Gameplays");
        assert!(kit
            .share_text("https://example.com/dashboard/UC1")
            .ends_with("\nhttps://example.com/dashboard/UC1"));
    }

    #[test]
    fn extreme_view_counts_do_not_overflow() {
        let videos = vec![video("a", i64::MAX, 1, 0), video("b", 10, 1, 0)];
        let kit = MediaKitSummary::from_videos(&videos, 0, "Channel");

        assert!(kit.average_views.is_finite());
        assert!(kit.engagement_rate >= 0.0);
    }

    #[test]
    fn subscribers_fall_back_to_period_sum() {
        assert_eq!(media_kit_subscribers(Some(1200), 15), 1200);
        assert_eq!(media_kit_subscribers(None, 15), 15);
    }
}
