use crate::utils::{alert, current_href, print_page};
use dashboard_core::format::{format_number, format_percent};
use dashboard_core::media_kit::{MediaKitSummary, SHARE_PITCH};
use dashboard_core::Video;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MediaKitProps {
    pub is_open: bool,
    pub on_close: Callback<MouseEvent>,
    pub total_subscribers: i64,
    pub videos: Vec<Video>,
    pub channel_name: String,
}

fn call_method(target: &JsValue, name: &str, arg: &JsValue) -> Option<Promise> {
    let method = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    let method = method.dyn_into::<Function>().ok()?;
    method.call1(target, arg).ok()?.dyn_into::<Promise>().ok()
}

/// Uses the Web Share API when the browser has it, the clipboard otherwise.
async fn share(title: String, text: String, url: String, clipboard_text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator: JsValue = window.navigator().into();

    let data = Object::new();
    let _ = Reflect::set(&data, &"title".into(), &title.into());
    let _ = Reflect::set(&data, &"text".into(), &text.into());
    let _ = Reflect::set(&data, &"url".into(), &url.into());

    if let Some(promise) = call_method(&navigator, "share", &data) {
        if let Err(e) = JsFuture::from(promise).await {
            log::info!("Share dismissed: {:?}", e);
        }
        return;
    }

    let clipboard = Reflect::get(&navigator, &"clipboard".into()).unwrap_or(JsValue::UNDEFINED);
    let payload = JsValue::from_str(&clipboard_text);
    match call_method(&clipboard, "writeText", &payload) {
        Some(promise) if JsFuture::from(promise.clone()).await.is_ok() => alert("Link copied to clipboard!"),
        _ => log::warn!("Clipboard unavailable, nothing shared"),
    }
}

#[function_component(MediaKit)]
pub fn media_kit(props: &MediaKitProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let kit = MediaKitSummary::from_videos(&props.videos, props.total_subscribers, &props.channel_name);

    let on_share = {
        let kit = kit.clone();
        Callback::from(move |_: MouseEvent| {
            let url = current_href();
            let clipboard_text = kit.share_text(&url);
            wasm_bindgen_futures::spawn_local(share(
                kit.share_title(),
                SHARE_PITCH.to_string(),
                url,
                clipboard_text,
            ));
        })
    };

    let on_print = Callback::from(|_: MouseEvent| print_page());

    html! {
        <div class="fixed inset-0 bg-black/80 flex items-center justify-center p-4 z-50">
            <div id="media-kit-content" class="bg-white text-gray-900 rounded-lg shadow-lg w-full max-w-3xl max-h-[90vh] overflow-y-auto p-8">
                <div class="flex justify-end gap-2 mb-4 print:hidden">
                    <button onclick={on_share} class="bg-gray-200 px-3 py-2 rounded hover:bg-gray-300">{"Share"}</button>
                    <button onclick={on_print} class="bg-gray-200 px-3 py-2 rounded hover:bg-gray-300">{"Print"}</button>
                    <button onclick={props.on_close.clone()} class="bg-gray-200 px-3 py-2 rounded hover:bg-gray-300">{"Close"}</button>
                </div>

                <header class="mb-8">
                    <p class="text-xs uppercase font-bold text-gray-500">{"Media Kit"}</p>
                    <h2 class="text-4xl font-bold">{ &kit.channel_name }</h2>
                </header>

                <section class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                    <div class="bg-blue-100 p-4 rounded-lg">
                        <h3 class="text-sm font-semibold text-blue-800">{"Subscribers"}</h3>
                        <p class="text-2xl font-bold text-blue-600">{ format_number(kit.total_subscribers) }</p>
                    </div>
                    <div class="bg-green-100 p-4 rounded-lg">
                        <h3 class="text-sm font-semibold text-green-800">{"Average views"}</h3>
                        <p class="text-2xl font-bold text-green-600">{ format_number(kit.average_views.round() as i64) }</p>
                    </div>
                    <div class="bg-purple-100 p-4 rounded-lg">
                        <h3 class="text-sm font-semibold text-purple-800">{"Engagement rate"}</h3>
                        <p class="text-2xl font-bold text-purple-600">{ format_percent(kit.engagement_rate, 1) }</p>
                    </div>
                </section>

                <section>
                    <h4 class="text-lg font-semibold mb-3">{"Top performing content"}</h4>
                    <div class="space-y-3">
                        {
                            for kit.highlights.iter().enumerate().map(|(i, h)| html! {
                                <div key={i.to_string()} class="flex items-center gap-3">
                                    <img src={h.thumbnail.clone()} alt="" class="w-24 rounded" />
                                    <div>
                                        <p class="font-semibold">{ &h.title }</p>
                                        <p class="text-sm text-gray-500">
                                            { format!("{} views · {} eng.", format_number(h.views), format_percent(h.engagement, 1)) }
                                        </p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </section>

                <footer class="mt-8 text-xs text-gray-500">
                    {"Metrics verified directly from the YouTube API."}
                </footer>
            </div>
        </div>
    }
}
