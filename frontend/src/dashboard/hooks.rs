use std::rc::Rc;

use crate::auth::consume_auth_redirect;
use crate::dashboard::api::{load_dashboard, Credentials, DashboardData};
use crate::utils::{get_stored, store, today, CHANNEL_ID_KEY, VIEWING_ID_KEY};
use dashboard_core::aggregate::{best_day, chart_points, monthly_stats, BestDay, ChartPoint, MonthlyStat};
use dashboard_core::period::{split_periods, PeriodSplit, PeriodStats};
use dashboard_core::videos::top_videos;
use dashboard_core::{ChannelStats, DateRange, Metric, Timeframe, Video};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardHandle {
    pub videos: Rc<Vec<Video>>,
    pub top_videos: Rc<Vec<Video>>,
    pub channel: Option<ChannelStats>,
    pub loading: bool,
    pub error: Option<String>,
    pub analytics_missing: bool,
    pub stats: PeriodStats,
    pub monthly: Rc<Vec<MonthlyStat>>,
    pub chart: Rc<Vec<ChartPoint>>,
    pub best_day: Option<BestDay>,
    pub active_channel_id: String,
}

/// Loads the dashboard once per `viewing_id` and derives everything the view
/// shows from the raw arrays whenever the filters change.
#[hook]
pub fn use_dashboard_data(
    viewing_id: Option<String>,
    timeframe: Timeframe,
    metric: Metric,
    custom_range: DateRange,
) -> DashboardHandle {
    let data = use_state(|| Rc::new(DashboardData::default()));
    let loading = use_state(|| true);

    {
        let data = data.clone();
        let loading = loading.clone();

        use_effect_with(viewing_id, move |viewing_id| {
            consume_auth_redirect();
            if let Some(id) = viewing_id {
                if let Err(e) = store(VIEWING_ID_KEY, id) {
                    log::error!("{e}");
                }
            }

            let credentials = Credentials::from_storage();
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let loaded = load_dashboard(&credentials).await;
                data.set(Rc::new(loaded));
                loading.set(false);
            });
        });
    }

    let split = use_memo(
        ((*data).clone(), timeframe, custom_range),
        |(data, timeframe, custom_range)| {
            split_periods(&data.analytics, *timeframe, custom_range, today())
        },
    );

    let stats = use_memo(split.clone(), |split: &Rc<PeriodSplit>| {
        PeriodStats::from_split(split)
    });

    let monthly = use_memo((*data).clone(), |data| monthly_stats(&data.analytics));

    let chart = use_memo((split.clone(), metric), |(split, metric)| {
        chart_points(&split.current, *metric)
    });

    let best = use_memo((split.clone(), metric), |(split, metric)| {
        best_day(&split.current, *metric)
    });

    let videos = use_memo((*data).clone(), |data| data.videos.clone());
    let top = use_memo(videos.clone(), |videos: &Rc<Vec<Video>>| top_videos(videos));

    DashboardHandle {
        videos,
        top_videos: top,
        channel: data.channel.clone(),
        loading: *loading,
        error: data.error.clone(),
        analytics_missing: data.analytics_missing,
        stats: *stats,
        monthly,
        chart,
        best_day: (*best).clone(),
        active_channel_id: get_stored(CHANNEL_ID_KEY).unwrap_or_else(|| "Main channel".to_string()),
    }
}
