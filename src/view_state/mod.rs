//! View-only state that render code reads and updates.

mod scroll_state;

pub use scroll_state::{ScrollState, WHEEL_STEP};
