use crate::env_variable_utils::API_BASE_URL;
use crate::utils::{get_stored, API_KEY_KEY, CHANNEL_ID_KEY, VIEWING_ID_KEY};
use dashboard_core::models::decode_daily_stats;
use dashboard_core::{ChannelInfo, ChannelStats, DailyStat, RefreshResponse, Video};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const CHANNEL_ID_HEADER: &str = "x-youtube-channel-id";
pub const API_KEY_HEADER: &str = "x-youtube-api-key";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(String),
}

/// Channel and API key held by the browser, forwarded to the backend as headers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Credentials {
    pub channel_id: Option<String>,
    pub api_key: Option<String>,
}

impl Credentials {
    /// A channel being viewed through a shared link takes precedence over the logged-in one.
    pub fn resolve(
        viewing_id: Option<String>,
        logged_in_id: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            channel_id: viewing_id.or(logged_in_id),
            api_key,
        }
    }

    pub fn from_storage() -> Self {
        Self::resolve(
            get_stored(VIEWING_ID_KEY),
            get_stored(CHANNEL_ID_KEY),
            get_stored(API_KEY_KEY),
        )
    }

    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if let Some(id) = self.channel_id.as_deref().filter(|v| !v.is_empty()) {
            headers.push((CHANNEL_ID_HEADER, id.to_string()));
        }
        if let Some(key) = self.api_key.as_deref().filter(|v| !v.is_empty()) {
            headers.push((API_KEY_HEADER, key.to_string()));
        }
        headers
    }

    fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.headers() {
            builder = builder.header(name, &value);
        }
        builder
    }
}

pub fn endpoint(path: &str) -> String {
    format!("{}/{}", &*API_BASE_URL, path.trim_start_matches('/'))
}

async fn get_json<T: DeserializeOwned>(path: &str, credentials: &Credentials) -> Result<T, ApiError> {
    let url = endpoint(path);
    log::debug!("GET {url}");

    let response = credentials
        .apply(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http { status, body })
    }
}

pub async fn fetch_videos(credentials: &Credentials) -> Result<Vec<Video>, ApiError> {
    get_json("videos", credentials).await
}

pub async fn fetch_analytics(credentials: &Credentials) -> Result<Vec<DailyStat>, ApiError> {
    get_json::<Vec<serde_json::Value>>("analytics", credentials)
        .await
        .map(decode_daily_stats)
}

pub async fn fetch_channel(credentials: &Credentials) -> Result<ChannelStats, ApiError> {
    get_json::<ChannelInfo>("channel", credentials)
        .await
        .map(ChannelStats::from)
}

pub async fn refresh(credentials: &Credentials) -> Result<RefreshResponse, ApiError> {
    let url = endpoint("refresh");
    log::info!("POST {url}");

    let response = credentials
        .apply(Request::post(&url))
        .json(&serde_json::json!({}))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<RefreshResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http { status, body })
    }
}

/// Everything the dashboard loads on mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub videos: Vec<Video>,
    pub analytics: Vec<DailyStat>,
    pub channel: Option<ChannelStats>,
    /// No daily stats came back, usually because the channel never went through OAuth.
    pub analytics_missing: bool,
    /// Set only when none of the endpoints could be reached.
    pub error: Option<String>,
}

impl DashboardData {
    pub fn from_results(
        videos: Result<Vec<Video>, ApiError>,
        analytics: Result<Vec<DailyStat>, ApiError>,
        channel: Result<ChannelStats, ApiError>,
    ) -> Self {
        let mut data = DashboardData::default();
        let mut failures = Vec::new();

        match videos {
            Ok(videos) => data.videos = videos,
            Err(e) => {
                log::warn!("Videos fetch failed: {e}");
                failures.push(e);
            }
        }

        match analytics {
            Ok(analytics) if !analytics.is_empty() => data.analytics = analytics,
            Ok(_) => {
                log::warn!("Analytics came back empty (likely no OAuth)");
                data.analytics_missing = true;
            }
            Err(e) => {
                log::warn!("Analytics fetch failed (likely no OAuth): {e}");
                data.analytics_missing = true;
                failures.push(e);
            }
        }

        match channel {
            Ok(channel) => data.channel = Some(channel),
            Err(e) => {
                log::warn!("Channel fetch failed: {e}");
                failures.push(e);
            }
        }

        if failures.len() == 3 {
            data.error = Some(format!(
                "Connection error: could not reach the backend. ({})",
                failures[0]
            ));
        }

        data
    }
}

/// Fires the three requests together and waits for all of them; each may fail on its own.
pub async fn load_dashboard(credentials: &Credentials) -> DashboardData {
    let (videos, analytics, channel) = futures::join!(
        fetch_videos(credentials),
        fetch_analytics(credentials),
        fetch_channel(credentials)
    );

    let data = DashboardData::from_results(videos, analytics, channel);
    log::info!(
        "Loaded {} videos, {} daily stats, channel: {}",
        data.videos.len(),
        data.analytics.len(),
        data.channel.as_ref().map_or("unavailable", |c| c.title.as_str())
    );
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stat() -> DailyStat {
        DailyStat {
            day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            views: 1,
            likes: 0,
            comments: 0,
            subscribers: 0,
        }
    }

    fn channel() -> ChannelStats {
        ChannelStats::from(ChannelInfo::default())
    }

    #[test]
    fn viewing_id_wins_over_logged_in_id() {
        let creds = Credentials::resolve(Some("UCview".into()), Some("UCme".into()), None);
        assert_eq!(
            creds.headers(),
            vec![(CHANNEL_ID_HEADER, "UCview".to_string())]
        );
    }

    #[test]
    fn absent_credentials_send_no_headers() {
        assert!(Credentials::default().headers().is_empty());

        let creds = Credentials::resolve(None, Some("UCme".into()), Some("AIza".into()));
        assert_eq!(
            creds.headers(),
            vec![
                (CHANNEL_ID_HEADER, "UCme".to_string()),
                (API_KEY_HEADER, "AIza".to_string()),
            ]
        );
    }

    #[test]
    fn partial_failure_degrades_only_that_part() {
        let data = DashboardData::from_results(
            Err(ApiError::Http {
                status: 500,
                body: "boom".into(),
            }),
            Ok(vec![stat()]),
            Ok(channel()),
        );

        assert!(data.videos.is_empty());
        assert_eq!(data.analytics.len(), 1);
        assert!(!data.analytics_missing);
        assert!(data.channel.is_some());
        assert_eq!(data.error, None);
    }

    #[test]
    fn empty_analytics_are_flagged_missing() {
        let data = DashboardData::from_results(Ok(vec![]), Ok(vec![]), Ok(channel()));

        assert!(data.analytics_missing);
        assert_eq!(data.error, None);
    }

    #[test]
    fn total_failure_sets_error() {
        let down = || ApiError::Network("connection refused".into());
        let data = DashboardData::from_results(Err(down()), Err(down()), Err(down()));

        assert!(data.analytics_missing);
        assert_eq!(
            data.error.as_deref(),
            Some("Connection error: could not reach the backend. (Network error: connection refused)")
        );
    }
}
