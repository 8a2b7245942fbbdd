//! Mouse interaction: clickable regions and their handler.
//!
//! Render code registers hit areas each frame; the event loop hit-tests
//! clicks against them and passes the action to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
