use dioxus::prelude::*;
use crate::Route;
use crate::nav::view::{LinkView, ToggleIcon};
use crate::nav::{render, NavEvent, NavState, ScrollFeed, ScrollMode, NAV_ITEMS};

#[component]
pub fn NavigationBar() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let feed = use_context::<ScrollFeed>();

    let initial_path = path.clone();
    let mut nav_state = use_signal(move || NavState::new(initial_path));

    // Subscription lives as long as this component; unmount drops the future and releases it
    use_future(move || {
        let mut subscription = feed.subscribe();
        async move {
            nav_state.write().apply(NavEvent::Scrolled(subscription.current()));
            while let Some(offset) = subscription.next().await {
                nav_state.write().apply(NavEvent::Scrolled(offset));
            }
        }
    });

    use_effect(use_reactive((&path,), move |(path,)| {
        nav_state.write().apply(NavEvent::RouteChanged(path));
    }));

    let view = render(&nav_state.read(), NAV_ITEMS);

    let header_class = match view.mode {
        ScrollMode::Compact => "nav-header nav-header-compact",
        ScrollMode::Transparent => "nav-header nav-header-transparent",
    };

    let brand_href = view.brand.href;

    rsx! {
        header { class: "{header_class}",
            div { class: "page-container",
                div { class: "nav-row",
                    // Brand
                    Link {
                        to: brand_href,
                        class: "nav-logo",
                        onclick: move |_| nav_state.write().apply(NavEvent::RouteChanged(brand_href.to_string())),
                        div { class: "logo-icon" }
                        span { class: "logo-text", "{view.brand.label}" }
                    }

                    // Desktop navigation
                    nav { class: "nav-links",
                        for link in view.links.iter() {
                            DesktopLink { key: "{link.href}", link: link.clone(), nav_state }
                        }
                        button { class: "btn btn-primary nav-cta", "{view.cta_label}" }
                    }

                    // Mobile menu button
                    div { class: "nav-toggle-wrap",
                        button {
                            class: "nav-toggle",
                            "aria-label": "Toggle navigation menu",
                            "aria-expanded": "{view.toggle.expanded}",
                            onclick: move |_| nav_state.write().apply(NavEvent::ToggleMenu),
                            match view.toggle.icon {
                                ToggleIcon::Close => rsx! { span { class: "toggle-icon", "✕" } },
                                ToggleIcon::Menu => rsx! { span { class: "toggle-icon", "☰" } },
                            }
                        }
                    }
                }
            }

            // Mobile menu
            if let Some(panel) = view.mobile_panel.as_ref() {
                div { class: "mobile-panel animate-fade-in",
                    for link in panel.links.iter() {
                        MobileLink { key: "{link.href}", link: link.clone(), nav_state }
                    }
                    button { class: "btn btn-primary w-full mt-2", "{panel.cta_label}" }
                }
            }
        }
    }
}

#[component]
fn DesktopLink(link: LinkView, nav_state: Signal<NavState>) -> Element {
    let mut nav_state = nav_state;
    let class = if link.active { "nav-link active" } else { "nav-link" };
    let href = link.href;

    rsx! {
        Link {
            to: href,
            class: "{class}",
            onclick: move |_| nav_state.write().apply(NavEvent::RouteChanged(href.to_string())),
            "{link.label}"
            if link.active {
                span { class: "nav-indicator" }
            }
        }
    }
}

#[component]
fn MobileLink(link: LinkView, nav_state: Signal<NavState>) -> Element {
    let mut nav_state = nav_state;
    let class = if link.active { "mobile-link active" } else { "mobile-link" };
    let href = link.href;

    rsx! {
        Link {
            to: href,
            class: "{class}",
            onclick: move |_| nav_state.write().apply(NavEvent::RouteChanged(href.to_string())),
            "{link.label}"
        }
    }
}
