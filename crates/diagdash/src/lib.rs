//! Disease prediction metrics dashboard
//!
//! Renders model accuracy and dataset sizes as a dual-axis bar chart with a
//! grid of detail cards underneath. Runs in a terminal, or in a browser page
//! with the `web` feature.
//!
//! The data model lives in `diagdash_core`; this crate holds the ratatui
//! components, key handling, configuration files and entry points.

pub mod app;
pub mod components;
pub mod config;
pub mod event;
pub mod logging;
pub mod snapshot;
pub mod state;
pub mod util;

#[cfg(feature = "web")]
mod web;

pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
pub use state::{DashboardState, DataSource};
