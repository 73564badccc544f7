//! Bar chart rendering
//!
//! Two paths share the bar drawing code:
//!
//! - [`Renderer::render_frame`] repaints everything (header text and bars) and
//!   leaves flushing to the caller. Used while idle.
//! - [`Renderer::render_chart`] clears only the chart region, draws the bars
//!   with the swapped pair highlighted, and presents immediately. Used once
//!   per sort step, so the static header is never redrawn mid-sort.

use crate::config::{Geometry, VisualizerConfig};
use crate::list::ListModel;
use crate::sort::{Algorithm, Highlight, SortOrder};
use crate::ui::surface::Surface;
use crate::ui::theme::Theme;
use ratatui::{
    backend::Backend,
    style::{Color, Modifier, Style},
    Terminal,
};
use std::io;

/// Virtual y coordinates of the header lines
const TITLE_Y: u32 = 5;
const CONTROLS_Y: u32 = 45;
const ALGORITHMS_Y: u32 = 75;

pub const CONTROLS_LEGEND: &str =
    "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending";
pub const ALGORITHMS_LEGEND: &str = "I - Insertion Sort | B - Bubble Sort";

/// Something that can show a finished surface, usually the terminal
pub trait Present {
    fn present(&mut self, surface: &Surface) -> io::Result<()>;
}

impl<B: Backend> Present for Terminal<B> {
    fn present(&mut self, surface: &Surface) -> io::Result<()> {
        self.draw(|frame| {
            let area = frame.area();
            frame.render_widget(surface, area);
        })?;
        Ok(())
    }
}

/// Header title for the current selection, e.g. "Bubble Sort - Ascending"
pub fn title(algorithm: Algorithm, order: SortOrder) -> String {
    format!("{} - {}", algorithm, order)
}

#[derive(Debug, Clone)]
pub struct Renderer {
    geometry: Geometry,
    theme: Theme,
}

impl Renderer {
    pub fn new(config: &VisualizerConfig) -> Self {
        Renderer {
            geometry: config.geometry,
            theme: config.theme,
        }
    }

    /// Full repaint: background, title, key legend and unhighlighted bars
    pub fn render_frame(
        &self,
        surface: &mut Surface,
        list: &ListModel,
        algorithm: Algorithm,
        order: SortOrder,
    ) {
        let background = self.theme.background;
        surface.clear(self.geometry.full_area(), background);

        surface.draw_text_centered(
            &title(algorithm, order),
            TITLE_Y,
            Style::default()
                .fg(self.theme.title)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        );
        let legend = Style::default().fg(self.theme.text).bg(background);
        surface.draw_text_centered(CONTROLS_LEGEND, CONTROLS_Y, legend);
        surface.draw_text_centered(ALGORITHMS_LEGEND, ALGORITHMS_Y, legend);

        self.draw_bars(surface, list, None);
    }

    /// Clear the chart region, redraw the bars and present at once
    pub fn render_chart<P: Present>(
        &self,
        surface: &mut Surface,
        list: &ListModel,
        highlight: Option<Highlight>,
        presenter: &mut P,
    ) -> io::Result<()> {
        surface.clear(self.geometry.chart_area(), self.theme.background);
        self.draw_bars(surface, list, highlight);
        presenter.present(surface)
    }

    /// Draw every bar over whatever is already on the surface
    pub fn draw_bars(&self, surface: &mut Surface, list: &ListModel, highlight: Option<Highlight>) {
        for index in 0..list.len() {
            if let Some(rect) = list.bar_rect(index) {
                let color = self.bar_color(index, highlight);
                surface.fill_rect(rect, color, self.theme.background);
            }
        }
    }

    /// Gradient color, overridden for the two highlighted bars
    pub fn bar_color(&self, index: usize, highlight: Option<Highlight>) -> Color {
        match highlight {
            Some(pair) if pair.left == index => self.theme.highlight_left,
            Some(pair) if pair.right == index => self.theme.highlight_right,
            _ => self.theme.bar_color(index),
        }
    }
}
