use serde::Serialize;

pub const BRAND_NAME: &str = "AquaSurveyor";
pub const CTA_LABEL: &str = "Sign In";

/// Scroll offsets strictly above this switch the header to its compact look.
pub const COMPACT_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/dashboard", label: "Dashboard" },
    NavItem { path: "/map", label: "Map" },
    NavItem { path: "/survey", label: "Survey" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    Transparent,
    Compact,
}

impl ScrollMode {
    pub fn from_offset(offset: f64) -> Self {
        // NaN compares false and lands on Transparent
        if offset > COMPACT_THRESHOLD {
            ScrollMode::Compact
        } else {
            ScrollMode::Transparent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Scrolled(f64),
    RouteChanged(String),
    ToggleMenu,
}

/// Everything the navigation bar renders from, besides the static item list.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    scroll_mode: ScrollMode,
    active_route: String,
    menu: MenuState,
}

impl NavState {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            scroll_mode: ScrollMode::Transparent,
            active_route: route.into(),
            menu: MenuState::Closed,
        }
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll_mode
    }

    pub fn active_route(&self) -> &str {
        &self.active_route
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.active_route == item.path
    }

    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Scrolled(offset) => {
                let mode = ScrollMode::from_offset(offset);
                if mode != self.scroll_mode {
                    tracing::debug!(offset, ?mode, "header scroll mode changed");
                }
                self.scroll_mode = mode;
            }
            NavEvent::RouteChanged(path) => {
                // Every route notification closes the menu, even when the path is unchanged.
                tracing::debug!(from = %self.active_route, to = %path, "route changed");
                self.active_route = path;
                self.menu = MenuState::Closed;
            }
            NavEvent::ToggleMenu => {
                self.menu = self.menu.toggled();
                tracing::debug!(menu = ?self.menu, "mobile menu toggled");
            }
        }
    }
}
