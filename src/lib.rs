//! sdprep - a terminal viewer for system-design interview cheat sheets
//!
//! This library exposes modules for use by the binary, integration tests and
//! benchmarks.

pub mod app;
pub mod cli;
pub mod content;
pub mod error;
pub mod event_loop;
pub mod input;
pub mod logging;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod view_state;
