mod auth;
mod dashboard;
mod env_variable_utils;
mod landing;
mod router;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, API_BASE_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if is_debug_mode() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*API_BASE_URL,
        is_debug_mode()
    );

    yew::Renderer::<App>::new().render();
}
