use dashboard_core::format::{format_iso8601_date, format_number, format_percent};
use dashboard_core::videos::{
    sort_videos, SortConfig, SortDirection, VideoSortKey, SIDEBAR_VIDEO_COUNT,
};
use dashboard_core::Video;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<Video>,
    pub loading: bool,
    pub expanded: bool,
    pub on_toggle_expand: Callback<MouseEvent>,
}

fn sort_indicator(config: &SortConfig, column: VideoSortKey) -> &'static str {
    if config.key != column {
        return "↕";
    }
    match config.direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    }
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    let sort_config = use_state(SortConfig::default);

    let on_sort = {
        let sort_config = sort_config.clone();
        Callback::from(move |key: VideoSortKey| {
            sort_config.set(sort_config.toggle(key));
        })
    };

    if props.expanded {
        let sorted = sort_videos(&props.videos, *sort_config);

        html! {
            <div class="lg:col-span-3 bg-gray-800 p-6 rounded-lg">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold">
                        { format!("All content ({})", props.videos.len()) }
                    </h3>
                    <button onclick={props.on_toggle_expand.clone()} class="text-blue-400 hover:underline text-sm">
                        {"Back to top 5"}
                    </button>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full text-left">
                        <thead>
                            <tr class="text-gray-500 text-xs uppercase border-b border-gray-700">
                                <th class="p-3">{"Video"}</th>
                                {
                                    for VideoSortKey::all_variants().into_iter().map(|key| {
                                        let on_sort = on_sort.clone();
                                        html! {
                                            <th key={key.key()} class="p-3 text-right cursor-pointer select-none"
                                                onclick={Callback::from(move |_| on_sort.emit(key))}>
                                                { format!("{} {}", key.display_name(), sort_indicator(&sort_config, key)) }
                                            </th>
                                        }
                                    })
                                }
                            </tr>
                        </thead>
                        <tbody class="text-sm">
                            {
                                for sorted.iter().map(|v| html! {
                                    <tr key={v.id.clone()} class="border-b border-gray-700 hover:bg-gray-700">
                                        <td class="p-3">
                                            <a href={v.watch_url()} target="_blank" class="flex items-center gap-3 hover:underline">
                                                <img src={v.thumbnail.clone()} alt="" class="w-20 rounded" />
                                                <span class="line-clamp-2">{ &v.title }</span>
                                            </a>
                                        </td>
                                        <td class="p-3 text-right">{ format_iso8601_date(&v.published) }</td>
                                        <td class="p-3 text-right font-mono">{ format_number(v.views) }</td>
                                        <td class="p-3 text-right font-mono">{ format_number(v.likes) }</td>
                                        <td class="p-3 text-right font-mono">{ format_number(v.comments) }</td>
                                        <td class="p-3 text-right text-green-400">{ format_percent(v.engagement(), 2) }</td>
                                    </tr>
                                })
                            }
                        </tbody>
                    </table>
                </div>
            </div>
        }
    } else {
        html! {
            <aside class="bg-gray-800 p-6 rounded-lg">
                <h3 class="text-lg font-semibold mb-4">{"Top videos"}</h3>
                <div class="space-y-3">
                    {
                        for props.videos.iter().take(SIDEBAR_VIDEO_COUNT).map(|v| html! {
                            <a key={v.id.clone()} href={v.watch_url()} target="_blank" class="flex gap-3 hover:bg-gray-700 rounded p-1">
                                <img src={v.thumbnail.clone()} alt="" class="w-24 rounded" />
                                <div class="min-w-0">
                                    <p class="text-sm font-semibold truncate">{ &v.title }</p>
                                    <p class="text-xs text-gray-400">
                                        { format!("{} views · {} likes", format_number(v.views), format_number(v.likes)) }
                                    </p>
                                </div>
                            </a>
                        })
                    }
                    if props.loading {
                        { for (0..SIDEBAR_VIDEO_COUNT).map(|i| html! {
                            <div key={i.to_string()} class="h-16 bg-gray-700 animate-pulse rounded" />
                        }) }
                    }
                </div>
                <button onclick={props.on_toggle_expand.clone()} class="w-full mt-4 bg-gray-700 p-2 rounded hover:bg-gray-600 text-sm">
                    {"View all content"}
                </button>
            </aside>
        }
    }
}
