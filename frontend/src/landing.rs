use crate::auth::consume_auth_redirect;
use crate::env_variable_utils::{get_app_name, AUTH_LOGIN_URL};
use crate::router::Route;
use crate::utils::{get_stored, CHANNEL_ID_KEY};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let navigator = use_navigator();

    // OAuth callback lands here with ?auth_success=true&channel_id=...
    {
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            if let Some(channel_id) = consume_auth_redirect() {
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard { channel_id });
                }
            }
        });
    }

    let returning_channel = get_stored(CHANNEL_ID_KEY);

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white p-4">
            <div class="max-w-2xl text-center space-y-8">
                <h1 class="text-5xl md:text-7xl font-black uppercase">
                    { get_app_name() }
                </h1>

                <p class="text-gray-400 text-lg md:text-xl max-w-lg mx-auto">
                    {"Show your channel metrics to sponsors and partners, straight from YouTube. Verified live data, no screenshots."}
                </p>

                <div class="pt-8 space-y-4">
                    <a
                        href={AUTH_LOGIN_URL.clone()}
                        class="inline-block px-8 py-4 bg-green-500 text-black font-black text-lg uppercase rounded-lg hover:bg-green-400"
                    >
                        {"Connect with YouTube"}
                    </a>

                    {
                        if let Some(channel_id) = returning_channel {
                            html! {
                                <div>
                                    <Link<Route> to={Route::Dashboard { channel_id }} classes="text-blue-400 hover:underline text-sm">
                                        {"Open my dashboard"}
                                    </Link<Route>>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <p class="text-xs text-gray-600 font-bold uppercase">
                        {"Secure · Read only · No subscription"}
                    </p>
                </div>
            </div>
        </div>
    }
}
