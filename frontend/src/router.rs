use crate::dashboard::DashboardPage;
use crate::landing::LandingPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard/:channel_id")]
    Dashboard { channel_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <LandingPage /> },
        Route::Dashboard { channel_id } => html! { <DashboardPage {channel_id} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_route_carries_channel_id() {
        assert_eq!(
            Route::recognize("/dashboard/UC123"),
            Some(Route::Dashboard {
                channel_id: "UC123".to_string()
            })
        );
        assert_eq!(
            Route::Dashboard {
                channel_id: "UC123".to_string()
            }
            .to_path(),
            "/dashboard/UC123"
        );
    }
}
