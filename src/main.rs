mod components;
mod nav;

use components::page_frame::PageFrame;
use components::pages::{DashboardPage, HomePage, MapPage, NotFoundPage, SurveyPage};
use nav::{follow_window_scroll, ScrollFeed};

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageFrame)]
        #[route("/")]
        HomePage {},
        #[route("/dashboard")]
        DashboardPage {},
        #[route("/map")]
        MapPage {},
        #[route("/survey")]
        SurveyPage {},
        #[route("/:..segments")]
        NotFoundPage { segments: Vec<String> },
}

fn main() {
    // dioxus::launch installs its own tracing subscriber
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let feed = use_context_provider(ScrollFeed::new);
    use_future(move || follow_window_scroll(feed.clone()));

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NAV_ITEMS;

    #[test]
    fn test_every_nav_item_has_a_route() {
        for item in NAV_ITEMS {
            let route = item.path.parse::<Route>().unwrap_or_else(|_| panic!("unparseable path {}", item.path));
            assert!(!matches!(route, Route::NotFoundPage { .. }), "{} has no page", item.path);
            assert_eq!(route.to_string(), item.path);
        }
    }

    #[test]
    fn test_unknown_path_falls_through_to_not_found() {
        let route = "/unknown".parse::<Route>().unwrap_or_else(|_| panic!("catch-all should match"));
        match route {
            Route::NotFoundPage { segments } => assert_eq!(segments, vec!["unknown".to_string()]),
            _ => panic!("expected NotFoundPage"),
        }
    }
}
