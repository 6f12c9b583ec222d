use chrono::Datelike;
use dioxus::prelude::*;
use crate::Route;
use crate::components::nav_bar::NavigationBar;
use crate::nav::state::BRAND_NAME;

/// Layout shared by every route: navigation bar, routed content, footer.
#[component]
pub fn PageFrame() -> Element {
    let copyright = copyright_line(current_year());

    rsx! {
        div { class: "min-h-screen flex flex-col",
            NavigationBar {}

            main { class: "page-container page-content flex-1 animate-fade-in",
                Outlet::<Route> {}
            }

            footer { class: "page-footer",
                div { class: "page-container text-center",
                    p { "{copyright}" }
                }
            }
        }
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND_NAME)
}
