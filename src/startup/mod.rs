//! Startup: configuration and preflight for the TUI.
//!
//! # Components
//!
//! - [`config`] - [`StartupConfig`] built from the environment and CLI flags
//! - [`preflight`] - Content loading and selection checks
//!
//! # Usage
//!
//! ```ignore
//! use sdprep::startup::{run_preflight_checks, StartupConfig};
//!
//! let result = run_preflight_checks(StartupConfig::from_env())?;
//! let app = App::from_config(result.store, &result.config);
//! ```

pub mod config;
pub mod preflight;

pub use config::StartupConfig;
pub use preflight::{run_preflight_checks, StartupResult};
