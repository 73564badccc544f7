//! Visualizer configuration
//!
//! All tunables live in one immutable [`VisualizerConfig`] value that is handed
//! to the list model, the renderer and the control loop. [`Cli`] is the
//! command-line front end that produces it.

use crate::list::errors::ListError;
use crate::ui::theme::{Theme, DEFAULT_THEME};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Title shown on the terminal window
pub const WINDOW_TITLE: &str = "Sorting Algorithm Visualizer";

/// A rectangle in virtual pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl VirtualRect {
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

/// Fixed virtual window the chart is laid out in.
///
/// The terminal surface scales these coordinates onto cells, so the layout is
/// the same regardless of terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    /// Combined left and right padding around the chart
    pub side_pad: u32,
    /// Height of the header band holding the title and key legend
    pub top_pad: u32,
}

impl Geometry {
    /// The region below the header that holds only the bars
    pub fn chart_area(&self) -> VirtualRect {
        VirtualRect {
            x: self.side_pad / 2,
            y: self.top_pad,
            width: self.width.saturating_sub(self.side_pad),
            height: self.height.saturating_sub(self.top_pad),
        }
    }

    pub fn full_area(&self) -> VirtualRect {
        VirtualRect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            width: 800,
            height: 600,
            side_pad: 100,
            top_pad: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    pub geometry: Geometry,
    pub theme: Theme,
    /// Number of values in each generated list
    pub count: usize,
    /// Inclusive bounds for generated values
    pub min_value: i64,
    pub max_value: i64,
    /// Frame rate cap of the control loop
    pub fps: u32,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl VisualizerConfig {
    /// Check the list parameters before any terminal state is touched
    pub fn validate(&self) -> Result<(), ListError> {
        if self.count == 0 {
            return Err(ListError::Empty);
        }
        if self.min_value > self.max_value {
            return Err(ListError::InvalidBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        let chart = self.geometry.chart_area();
        if self.count > chart.width as usize {
            return Err(ListError::TooManyValues {
                count: self.count,
                max: chart.width as usize,
            });
        }
        let range = (self.max_value as i128 - self.min_value as i128) as u64;
        if range > chart.height as u64 {
            return Err(ListError::RangeTooTall {
                range,
                max: chart.height,
            });
        }
        Ok(())
    }

    /// Time budget of a single frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            geometry: Geometry::default(),
            theme: DEFAULT_THEME,
            count: 50,
            min_value: 0,
            max_value: 100,
            fps: 120,
            seed: None,
        }
    }
}

/// Animate bubble sort and insertion sort as a terminal bar chart
#[derive(Debug, Parser)]
#[command(name = "sortviz", version, about, long_about = None)]
pub struct Cli {
    /// Number of values to sort
    #[arg(long, default_value_t = 50)]
    pub count: usize,

    /// Smallest value that can be generated
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest value that can be generated
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    /// Maximum frames per second; one sort step is taken per frame
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Seed for list generation, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> VisualizerConfig {
        VisualizerConfig {
            count: self.count,
            min_value: self.min,
            max_value: self.max,
            fps: self.fps,
            seed: self.seed,
            ..VisualizerConfig::default()
        }
    }
}
