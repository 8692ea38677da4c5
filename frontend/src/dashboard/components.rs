use crate::utils::event_value;
use dashboard_core::aggregate::{top_months, BestDay, ChartPoint, MonthlyStat};
use dashboard_core::format::{
    day_label, format_compact, format_delta, format_number, format_percent, month_label,
    short_month_label,
};
use dashboard_core::{DateRange, Metric, Timeframe};
use yew::prelude::*;

const MONTH_CHART_LIMIT: usize = 12;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub channel_name: Option<String>,
    pub channel_avatar: Option<String>,
    pub login_url: String,
    pub on_open_media_kit: Callback<MouseEvent>,
    pub on_open_settings: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let display_name = props
        .channel_name
        .clone()
        .unwrap_or_else(|| "Your channel".to_string());

    html! {
        <header class="flex justify-between items-center mb-6">
            <div class="flex items-center gap-3">
                {
                    match props.channel_avatar.as_deref().filter(|a| !a.is_empty()) {
                        Some(avatar) => html! {
                            <img src={avatar.to_string()} alt={display_name.clone()} class="w-12 h-12 rounded-full" />
                        },
                        None => html! {
                            <div class="w-12 h-12 rounded-full bg-green-600 flex items-center justify-center font-bold">
                                { display_name.chars().next().unwrap_or('?').to_string() }
                            </div>
                        },
                    }
                }
                <h1 class="text-3xl font-bold">{ display_name }</h1>
            </div>
            <div class="flex items-center gap-2">
                <a href={props.login_url.clone()} target="_blank" class="text-sm text-gray-300 hover:text-white px-3 py-2">
                    {"Connect channel"}
                </a>
                <button onclick={props.on_open_media_kit.clone()} title="Media Kit" class="bg-gray-800 px-3 py-2 rounded hover:bg-gray-700">
                    {"Media Kit"}
                </button>
                <button onclick={props.on_open_settings.clone()} title="Configure API keys" class="bg-gray-800 px-3 py-2 rounded hover:bg-gray-700">
                    {"Settings"}
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub loading: bool,
    pub error: Option<String>,
    pub analytics_missing: bool,
    pub channel_title: Option<String>,
    pub login_url: String,
    pub refreshing: bool,
    pub on_refresh: Callback<MouseEvent>,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    let (dot, label) = if props.loading {
        ("bg-yellow-500 animate-pulse", "Syncing data...")
    } else if props.error.is_some() {
        ("bg-red-500", "Connection error")
    } else {
        ("bg-green-500", "Online")
    };
    let idle = !props.loading && props.error.is_none();

    html! {
        <div class="mb-6 flex flex-col md:flex-row gap-4 justify-between items-center bg-gray-800 p-4 rounded-lg">
            <div class="flex items-center gap-3">
                <div class={classes!("w-3", "h-3", "rounded-full", dot)} />
                <span class="text-sm font-bold text-gray-400 uppercase">{ label }</span>
                if idle {
                    <button
                        onclick={props.on_refresh.clone()}
                        disabled={props.refreshing}
                        title="Force data refresh"
                        class="ml-2 text-gray-500 hover:text-white disabled:opacity-50"
                    >
                        { if props.refreshing { "Refreshing..." } else { "Refresh" } }
                    </button>
                }
            </div>
            {
                match (&props.channel_title, props.analytics_missing) {
                    (Some(title), false) => html! {
                        <span class="text-xs text-green-500 font-bold uppercase">
                            { format!("Connected: {title}") }
                        </span>
                    },
                    (_, true) if idle => html! {
                        <a href={props.login_url.clone()} class="px-4 py-2 bg-yellow-500 text-black rounded font-bold text-xs uppercase">
                            {"Connect YouTube channel"}
                        </a>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
    pub on_retry: Callback<MouseEvent>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4 flex justify-between items-center">
                <div>
                    <p class="font-bold text-xs uppercase">{"Connection failed"}</p>
                    <p>{ msg }</p>
                </div>
                <button onclick={props.on_retry.clone()} class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700">
                    {"Retry"}
                </button>
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeframeBarProps {
    pub timeframe: Timeframe,
    pub custom_range: DateRange,
    pub on_timeframe_change: Callback<Timeframe>,
    pub on_custom_range_change: Callback<DateRange>,
}

fn parse_input_date(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn input_date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[function_component(TimeframeBar)]
pub fn timeframe_bar(props: &TimeframeBarProps) -> Html {
    let on_start_change = {
        let range = props.custom_range;
        let cb = props.on_custom_range_change.clone();
        Callback::from(move |e: Event| {
            let start = event_value(&e).as_deref().and_then(parse_input_date);
            cb.emit(DateRange { start, ..range });
        })
    };

    let on_end_change = {
        let range = props.custom_range;
        let cb = props.on_custom_range_change.clone();
        Callback::from(move |e: Event| {
            let end = event_value(&e).as_deref().and_then(parse_input_date);
            cb.emit(DateRange { end, ..range });
        })
    };

    html! {
        <div class="mb-8 flex flex-wrap justify-center items-center gap-2 bg-gray-800 p-2 rounded-lg">
            {
                for Timeframe::all_variants().into_iter()
                    // the custom button turns into the date pickers once chosen
                    .filter(|t| !(*t == Timeframe::Custom && props.timeframe == Timeframe::Custom))
                    .map(|t| {
                        let cb = props.on_timeframe_change.clone();
                        let active = t == props.timeframe;
                        html! {
                            <button
                                key={t.key()}
                                onclick={Callback::from(move |_| cb.emit(t))}
                                class={classes!(
                                    "px-4", "py-2", "rounded", "text-xs", "font-bold", "uppercase",
                                    if active { "bg-green-500 text-black" } else { "text-gray-400 hover:text-white" }
                                )}
                            >
                                { t.display_name() }
                            </button>
                        }
                    })
            }
            if props.timeframe == Timeframe::Custom {
                <div class="flex items-center gap-3 px-3 py-1">
                    <label class="flex flex-col text-xs text-gray-400">
                        {"From"}
                        <input
                            type="date"
                            value={input_date_value(props.custom_range.start)}
                            onchange={on_start_change}
                            class="bg-gray-900 rounded px-2 py-1 text-white"
                        />
                    </label>
                    <label class="flex flex-col text-xs text-gray-400">
                        {"To"}
                        <input
                            type="date"
                            value={input_date_value(props.custom_range.end)}
                            onchange={on_end_change}
                            class="bg-gray-900 rounded px-2 py-1 text-white"
                        />
                    </label>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricSwitcherProps {
    pub active: Metric,
    pub on_change: Callback<Metric>,
    /// Hide the active metric's button instead of highlighting it.
    #[prop_or_default]
    pub hide_active: bool,
}

#[function_component(MetricSwitcher)]
pub fn metric_switcher(props: &MetricSwitcherProps) -> Html {
    html! {
        <div class="flex gap-2 mb-4 overflow-x-auto">
            {
                for Metric::all_variants().into_iter()
                    .filter(|m| !(props.hide_active && *m == props.active))
                    .map(|m| {
                        let cb = props.on_change.clone();
                        let active = m == props.active;
                        html! {
                            <button
                                key={m.key()}
                                onclick={Callback::from(move |_| cb.emit(m))}
                                class={classes!(
                                    "px-4", "py-2", "rounded", "text-xs", "font-bold", "uppercase", "border",
                                    if active { "bg-green-500 text-black border-green-500" } else { "text-gray-400 border-gray-600 hover:text-white" }
                                )}
                            >
                                { m.display_name() }
                            </button>
                        }
                    })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub diff: Option<f64>,
    pub loading: bool,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let delta = props
        .diff
        .filter(|_| !props.loading)
        .and_then(|d| format_delta(d).map(|text| (d > 0.0, text)));

    html! {
        <div class={classes!(
            "bg-gray-800", "p-4", "rounded-lg", "border",
            if props.highlight { "border-green-500" } else { "border-gray-700" }
        )}>
            <div class="flex justify-end h-6">
                {
                    match delta {
                        Some((positive, text)) => html! {
                            <span class={classes!(
                                "px-2", "rounded", "text-xs", "font-bold",
                                if positive { "text-green-400 bg-green-900" } else { "text-red-400 bg-red-900" }
                            )}>
                                { text }
                            </span>
                        },
                        None => html! {},
                    }
                }
            </div>
            if props.loading {
                <div class="h-8 w-24 bg-gray-700 animate-pulse rounded" />
            } else {
                <p class={classes!(
                    "text-3xl", "font-bold", "truncate",
                    if props.highlight { "text-green-400" } else { "text-white" }
                )}>
                    { &props.value }
                </p>
            }
            <p class="text-gray-500 text-xs font-bold uppercase mt-1 truncate">{ &props.label }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GrowthChartProps {
    pub points: Vec<ChartPoint>,
    pub loading: bool,
    pub best_day: Option<BestDay>,
}

/// Per-day bars for the current period, scaled against the busiest day.
#[function_component(GrowthChart)]
pub fn growth_chart(props: &GrowthChartProps) -> Html {
    let max = props.points.iter().map(|p| p.value).max().unwrap_or(0).max(1);

    html! {
        <div class="bg-gray-800 p-6 rounded-lg">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold">{"Channel performance"}</h3>
                {
                    match (&props.best_day, props.loading) {
                        (Some(best), false) => html! {
                            <div class="text-right">
                                <span class="text-xs text-gray-400 uppercase">{"Best day"}</span>
                                <p class="font-bold">
                                    { format!("{} · {} {}", day_label(best.date), format_number(best.value), best.metric.display_name().to_lowercase()) }
                                </p>
                            </div>
                        },
                        _ => html! {},
                    }
                }
            </div>
            if props.loading {
                <div class="h-48 bg-gray-700 animate-pulse rounded" />
            } else if props.points.is_empty() {
                <p class="h-48 flex items-center justify-center text-gray-500">{"No data for this period"}</p>
            } else {
                <div class="h-48 flex items-end gap-px">
                    {
                        for props.points.iter().map(|p| {
                            let height = (p.value.max(0) as f64 / max as f64 * 100.0).round();
                            html! {
                                <div
                                    key={p.date.to_string()}
                                    class="flex-1 bg-green-500 hover:bg-green-300"
                                    style={format!("height: {height}%")}
                                    title={format!("{}: {}", p.label, format_number(p.value))}
                                />
                            }
                        })
                    }
                </div>
                <div class="flex justify-between text-xs text-gray-500 mt-2">
                    <span>{ props.points.first().map(|p| p.label.clone()).unwrap_or_default() }</span>
                    <span>{ format_compact(max) }</span>
                    <span>{ props.points.last().map(|p| p.label.clone()).unwrap_or_default() }</span>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthChartProps {
    pub data: Vec<MonthlyStat>,
}

#[function_component(MonthChart)]
pub fn month_chart(props: &MonthChartProps) -> Html {
    let metric = use_state(|| Metric::Views);

    let rows = {
        let data = props.data.clone();
        use_memo((data, *metric), |(data, metric)| {
            top_months(data, *metric, MONTH_CHART_LIMIT)
        })
    };
    let max = rows.iter().map(|m| m.get(*metric)).max().unwrap_or(0).max(1);

    let on_metric_change = {
        let metric = metric.clone();
        Callback::from(move |m: Metric| metric.set(m))
    };

    html! {
        <div class="bg-gray-800 p-6 rounded-lg">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold">{ format!("Top months · {}", metric.display_name()) }</h3>
                <MetricSwitcher active={*metric} on_change={on_metric_change} hide_active={true} />
            </div>
            <div class="space-y-2">
                {
                    for rows.iter().enumerate().map(|(i, m)| {
                        let value = m.get(*metric);
                        let width = (value.max(0) as f64 / max as f64 * 100.0).round();
                        html! {
                            <div key={m.month.clone()} class="flex items-center gap-3" title={month_label(&m.month)}>
                                <span class="w-16 text-xs font-bold">{ short_month_label(&m.month) }</span>
                                <div class="flex-1 bg-gray-900 rounded h-5">
                                    <div
                                        class={classes!("h-5", "rounded", if i == 0 { "bg-green-500" } else { "bg-green-800" })}
                                        style={format!("width: {width}%")}
                                    />
                                </div>
                                <span class="w-16 text-right text-xs">{ format_compact(value) }</span>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthTableProps {
    pub data: Vec<MonthlyStat>,
}

#[function_component(MonthTable)]
pub fn month_table(props: &MonthTableProps) -> Html {
    html! {
        <div class="bg-gray-800 p-6 rounded-lg overflow-x-auto">
            <h3 class="text-lg font-semibold mb-4">{"Historical top months"}</h3>
            <table class="w-full text-left">
                <thead>
                    <tr class="text-gray-500 text-xs uppercase border-b border-gray-700">
                        <th class="p-3">{"Month"}</th>
                        <th class="p-3 text-right">{"Views"}</th>
                        <th class="p-3 text-right">{"Likes"}</th>
                        <th class="p-3 text-right">{"Comments"}</th>
                        <th class="p-3 text-right">{"Engagement"}</th>
                    </tr>
                </thead>
                <tbody class="text-sm">
                    {
                        for props.data.iter().map(|m| html! {
                            <tr key={m.month.clone()} class="border-b border-gray-700 hover:bg-gray-700">
                                <td class="p-3 font-bold">{ month_label(&m.month) }</td>
                                <td class="p-3 text-right font-mono">{ format_number(m.views) }</td>
                                <td class="p-3 text-right font-mono">{ format_number(m.likes) }</td>
                                <td class="p-3 text-right font-mono">{ format_number(m.comments) }</td>
                                <td class="p-3 text-right text-green-400">{ format_percent(m.engagement(), 2) }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_inputs_round_trip() {
        let date = parse_input_date("2024-02-29");
        assert_eq!(input_date_value(date), "2024-02-29");
        assert_eq!(parse_input_date(""), None);
        assert_eq!(input_date_value(None), "");
    }
}
