use crate::dashboard::api::{refresh, Credentials};
use crate::dashboard::components::{
    ErrorMessage, GrowthChart, Header, KpiCard, MetricSwitcher, MonthChart, MonthTable,
    StatusBar, TimeframeBar,
};
use crate::dashboard::hooks::use_dashboard_data;
use crate::dashboard::media_kit::MediaKit;
use crate::dashboard::settings::SettingsModal;
use crate::dashboard::video_list::VideoList;
use crate::env_variable_utils::AUTH_LOGIN_URL;
use crate::utils::{alert, reload_page};
use dashboard_core::format::format_number;
use dashboard_core::media_kit::media_kit_subscribers;
use dashboard_core::{DateRange, Metric, Timeframe};
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod hooks;
pub mod media_kit;
pub mod settings;
pub mod video_list;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub channel_id: String,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let timeframe = use_state(|| Timeframe::All);
    let custom_range = use_state(DateRange::default);
    let metric = use_state(|| Metric::Views);
    let expand_content = use_state(|| false);
    let show_media_kit = use_state(|| false);
    let show_settings = use_state(|| false);
    let refreshing = use_state(|| false);

    let viewing_id = Some(props.channel_id.clone()).filter(|id| !id.is_empty());
    let data = use_dashboard_data(viewing_id, *timeframe, *metric, *custom_range);

    let on_timeframe_change = {
        let timeframe = timeframe.clone();
        Callback::from(move |t: Timeframe| timeframe.set(t))
    };

    let on_custom_range_change = {
        let custom_range = custom_range.clone();
        Callback::from(move |range: DateRange| custom_range.set(range))
    };

    let on_metric_change = {
        let metric = metric.clone();
        Callback::from(move |m: Metric| metric.set(m))
    };

    let on_toggle_expand = {
        let expand_content = expand_content.clone();
        Callback::from(move |_: MouseEvent| expand_content.set(!*expand_content))
    };

    let on_open_media_kit = {
        let show_media_kit = show_media_kit.clone();
        Callback::from(move |_: MouseEvent| show_media_kit.set(true))
    };

    let on_close_media_kit = {
        let show_media_kit = show_media_kit.clone();
        Callback::from(move |_: MouseEvent| show_media_kit.set(false))
    };

    let on_open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(true))
    };

    let on_close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(false))
    };

    let on_refresh = {
        let refreshing = refreshing.clone();
        Callback::from(move |_: MouseEvent| {
            let refreshing = refreshing.clone();
            refreshing.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match refresh(&Credentials::from_storage()).await {
                    Ok(response) => {
                        log::info!("Refresh: {}", response.message);
                        reload_page();
                    }
                    Err(e) => {
                        log::error!("Refresh failed: {e}");
                        alert("Failed to refresh data.");
                    }
                }
                refreshing.set(false);
            });
        })
    };

    let on_retry = Callback::from(|_: MouseEvent| reload_page());

    let show_deltas = timeframe.shows_deltas();
    let diff = |value: f64| show_deltas.then_some(value);
    let current = data.stats.current;
    let subscribers_value = if show_deltas {
        current.subscribers
    } else {
        data.channel.as_ref().map_or(0, |c| c.subscribers)
    };
    let channel_title = data.channel.as_ref().map(|c| c.title.clone());

    html! {
        <div class="min-h-screen bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto p-4 md:p-8">
                <Header
                    channel_name={channel_title.clone()}
                    channel_avatar={data.channel.as_ref().map(|c| c.avatar.clone())}
                    login_url={AUTH_LOGIN_URL.clone()}
                    on_open_media_kit={on_open_media_kit}
                    on_open_settings={on_open_settings}
                />

                <SettingsModal is_open={*show_settings} on_close={on_close_settings} />

                <StatusBar
                    loading={data.loading}
                    error={data.error.clone()}
                    analytics_missing={data.analytics_missing}
                    channel_title={channel_title.clone()}
                    login_url={AUTH_LOGIN_URL.clone()}
                    refreshing={*refreshing}
                    on_refresh={on_refresh}
                />

                <TimeframeBar
                    timeframe={*timeframe}
                    custom_range={*custom_range}
                    on_timeframe_change={on_timeframe_change}
                    on_custom_range_change={on_custom_range_change}
                />

                <MediaKit
                    is_open={*show_media_kit}
                    on_close={on_close_media_kit}
                    total_subscribers={media_kit_subscribers(data.channel.as_ref().map(|c| c.subscribers), current.subscribers)}
                    videos={(*data.videos).clone()}
                    channel_name={channel_title.clone().unwrap_or_else(|| data.active_channel_id.clone())}
                />

                <ErrorMessage error_message={data.error.clone()} on_retry={on_retry} />

                <main>
                    <section class="grid grid-cols-2 lg:grid-cols-4 gap-3 md:gap-5 mb-10">
                        <KpiCard
                            label="Total videos"
                            value={format_number(data.videos.len() as i64)}
                            loading={data.loading}
                        />
                        <KpiCard
                            label="Views (period)"
                            value={format_number(current.views)}
                            diff={diff(data.stats.diffs.views)}
                            loading={data.loading}
                            highlight={true}
                        />
                        <KpiCard
                            label={if show_deltas { "New subs" } else { "Total subs" }}
                            value={format_number(subscribers_value)}
                            diff={diff(data.stats.diffs.subscribers)}
                            loading={data.loading}
                        />
                        <KpiCard
                            label="Likes"
                            value={format_number(current.likes)}
                            diff={diff(data.stats.diffs.likes)}
                            loading={data.loading}
                        />
                    </section>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 items-start">
                        if !*expand_content {
                            <div class="lg:col-span-2 space-y-8">
                                <MetricSwitcher active={*metric} on_change={on_metric_change} />
                                <GrowthChart
                                    points={(*data.chart).clone()}
                                    loading={data.loading}
                                    best_day={data.best_day.clone()}
                                />
                                <MonthChart data={(*data.monthly).clone()} />
                                <MonthTable data={(*data.monthly).clone()} />
                            </div>
                        }
                        <VideoList
                            videos={if *expand_content { (*data.videos).clone() } else { (*data.top_videos).clone() }}
                            loading={data.loading}
                            expanded={*expand_content}
                            on_toggle_expand={on_toggle_expand}
                        />
                    </div>
                </main>
            </div>
        </div>
    }
}
