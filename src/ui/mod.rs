//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: control loop state, key mapping, frame pacing
//! - **[`render`]**: full-frame and chart-only bar chart drawing
//! - **[`surface`]**: persistent cell buffer that virtual-pixel shapes are rasterized onto
//! - **[`theme`]**: color palette
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`VisualizerConfig`] and call [`App::run`] to start the event loop.
//!
//! [`VisualizerConfig`]: crate::config::VisualizerConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod render;
pub mod surface;
pub mod theme;

pub use app::{App, Command};
