use crate::utils::{
    get_stored, reload_page, remove_stored, store_or_remove, API_KEY_KEY, CHANNEL_ID_KEY,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let channel_id = use_state(String::new);
    let api_key = use_state(String::new);
    let error_message = use_state(|| None::<String>);

    // Re-read storage every time the modal opens
    {
        let channel_id = channel_id.clone();
        let api_key = api_key.clone();
        use_effect_with(props.is_open, move |is_open| {
            if *is_open {
                channel_id.set(get_stored(CHANNEL_ID_KEY).unwrap_or_default());
                api_key.set(get_stored(API_KEY_KEY).unwrap_or_default());
            }
        });
    }

    let on_channel_input = {
        let channel_id = channel_id.clone();
        Callback::from(move |e: InputEvent| {
            channel_id.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_api_key_input = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            api_key.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_save = {
        let channel_id = channel_id.clone();
        let api_key = api_key.clone();
        let error_message = error_message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let result = store_or_remove(CHANNEL_ID_KEY, &channel_id)
                .and_then(|_| store_or_remove(API_KEY_KEY, &api_key));
            match result {
                Ok(()) => {
                    on_close.emit(());
                    reload_page();
                }
                Err(e) => error_message.set(Some(e)),
            }
        })
    };

    let on_reset = {
        let channel_id = channel_id.clone();
        let api_key = api_key.clone();
        let error_message = error_message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let result = remove_stored(CHANNEL_ID_KEY).and_then(|_| remove_stored(API_KEY_KEY));
            if let Err(e) = result {
                error_message.set(Some(e));
                return;
            }
            channel_id.set(String::new());
            api_key.set(String::new());
            on_close.emit(());
            reload_page();
        })
    };

    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 bg-black/80 flex items-center justify-center p-4 z-50">
            <div class="bg-white text-gray-900 p-8 rounded-lg shadow-lg w-full max-w-md">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-semibold">{"API settings"}</h2>
                    <button onclick={on_dismiss} class="text-gray-500 hover:text-gray-800">{"✕"}</button>
                </div>

                {
                    if let Some(msg) = &*error_message {
                        html! {
                            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                                { msg }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="mb-4">
                    <label class="block text-gray-700 text-sm font-bold mb-2">{"Channel ID"}</label>
                    <input
                        type="text"
                        class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="e.g. UC1234567890..."
                        value={(*channel_id).clone()}
                        oninput={on_channel_input}
                    />
                </div>

                <div class="mb-6">
                    <label class="block text-gray-700 text-sm font-bold mb-2">{"Google API key"}</label>
                    <input
                        type="password"
                        class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="AIzaSy..."
                        value={(*api_key).clone()}
                        oninput={on_api_key_input}
                    />
                    <p class="text-xs text-gray-500 mt-2">
                        {"Your API key is stored locally in this browser. It is needed to download data for new channels."}
                    </p>
                </div>

                <div class="flex justify-between">
                    <button onclick={on_reset} class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700">
                        {"Reset"}
                    </button>
                    <button onclick={on_save} class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700">
                        {"Save"}
                    </button>
                </div>
            </div>
        </div>
    }
}
