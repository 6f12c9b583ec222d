use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn HomePage() -> Element {
    page_intro("AquaSurveyor", "Collect, map and review water quality surveys in one place.")
}

#[component]
pub fn DashboardPage() -> Element {
    page_intro("Dashboard", "Summary of recent survey activity.")
}

#[component]
pub fn MapPage() -> Element {
    page_intro("Map", "Survey sites plotted by location.")
}

#[component]
pub fn SurveyPage() -> Element {
    page_intro("Survey", "Record a new field survey.")
}

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no page for route");

    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-blurb", "Nothing lives at {path}." }
            Link { to: Route::HomePage {}, class: "btn btn-primary", "Back home" }
        }
    }
}

fn page_intro(title: &str, blurb: &str) -> Element {
    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            p { class: "page-blurb", "{blurb}" }
        }
    }
}
