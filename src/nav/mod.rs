pub mod scroll;
pub mod state;
pub mod view;

pub use scroll::{follow_window_scroll, ScrollFeed};
pub use state::{NavEvent, NavState, ScrollMode, NAV_ITEMS};
pub use view::render;
