//! Command handlers for executing commands.
//!
//! - [`navigation`] - Sheet/section switching and scrolling
//! - [`content`] - Cursor movement and card toggles
//! - [`overlay`] - Help and sheet menu

pub mod content;
pub mod navigation;
pub mod overlay;

pub use content::*;
pub use navigation::*;
pub use overlay::*;
