use serde::Serialize;

use super::state::{NavItem, NavState, ScrollMode, BRAND_NAME, CTA_LABEL};

/// Plain description of what the navigation bar shows for a given state.
/// The Dioxus component turns this into elements; tests compare it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavView {
    pub mode: ScrollMode,
    pub brand: LinkView,
    pub links: Vec<LinkView>,
    pub cta_label: &'static str,
    pub toggle: ToggleView,
    pub mobile_panel: Option<MobilePanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIcon {
    Menu,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToggleView {
    pub expanded: bool,
    pub icon: ToggleIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobilePanel {
    pub links: Vec<LinkView>,
    pub cta_label: &'static str,
}

pub fn render(state: &NavState, items: &[NavItem]) -> NavView {
    let links: Vec<LinkView> = items
        .iter()
        .map(|item| LinkView {
            href: item.path,
            label: item.label,
            active: state.is_active(item),
        })
        .collect();

    let expanded = state.menu().is_open();
    let toggle = ToggleView {
        expanded,
        icon: if expanded { ToggleIcon::Close } else { ToggleIcon::Menu },
    };
    // Absent rather than hidden while the menu is closed
    let mobile_panel = expanded.then(|| MobilePanel { links: links.clone(), cta_label: CTA_LABEL });

    NavView {
        mode: state.scroll_mode(),
        brand: LinkView {
            href: "/",
            label: BRAND_NAME,
            // The brand mark is never highlighted as a nav entry
            active: false,
        },
        links,
        cta_label: CTA_LABEL,
        toggle,
        mobile_panel,
    }
}
