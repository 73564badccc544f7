//! # Introduction
//!
//! sortviz animates bubble sort and insertion sort as a bar chart in the
//! terminal, one swap per frame.
//!
//! ## Pipeline
//!
//! ```text
//! Random list → ListModel → SortSession (one step per frame) → Renderer → Surface → Terminal
//! ```
//!
//! 1. [`config`]: command-line options and the immutable
//!    [`config::VisualizerConfig`] shared by every component.
//! 2. [`list`]: the values under sort and their cached bar layout.
//! 3. [`sort`]: resumable sort cursors that stop after each swap and report
//!    the swapped pair.
//! 4. [`ui`]: ratatui-based control loop and renderer; not part of the stable
//!    library API.
//!
//! ## Controls
//!
//! `R` reset, `SPACE` start, `A`/`D` ascending/descending, `I`/`B` insertion or
//! bubble sort, `Q`/`Esc` quit. Selection keys are ignored while sorting.

pub mod config;
pub mod list;
pub mod sort;
pub mod ui;
