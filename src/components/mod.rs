pub mod nav_bar;
pub mod page_frame;
pub mod pages;
