//! Persistent drawing surface
//!
//! The chart is laid out in the fixed virtual pixel space of [`Geometry`]. A
//! [`Surface`] keeps a cell buffer the size of the terminal and rasterizes
//! virtual rectangles onto it: horizontal edges snap to cell columns, while
//! vertical edges use lower eighth-block glyphs so bar heights keep sub-cell
//! precision.
//!
//! The buffer persists between frames. Clearing part of it leaves the rest
//! intact, which is what lets the chart be redrawn on its own during sorting.

use crate::config::{Geometry, VirtualRect};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Sub-rows per terminal cell
const EIGHTHS: u32 = 8;

/// Lower block glyphs, indexed by filled eighths minus one
const LOWER_BLOCKS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

#[derive(Debug, Clone)]
pub struct Surface {
    geometry: Geometry,
    buffer: Buffer,
}

impl Surface {
    pub fn new(geometry: Geometry, area: Rect) -> Self {
        Surface {
            geometry,
            buffer: Buffer::empty(area),
        }
    }

    /// Match the terminal size. Returns true if the contents were discarded.
    pub fn resize(&mut self, area: Rect) -> bool {
        if self.buffer.area == area {
            return false;
        }
        self.buffer = Buffer::empty(area);
        true
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Cell column holding virtual x coordinate `x`
    fn column(&self, x: u32) -> u16 {
        let area = self.buffer.area;
        let scaled = x as u64 * area.width as u64 / self.geometry.width.max(1) as u64;
        area.x + scaled.min(area.width as u64) as u16
    }

    /// Cell row holding virtual y coordinate `y`
    fn row(&self, y: u32) -> u16 {
        let area = self.buffer.area;
        let scaled = y as u64 * area.height as u64 / self.geometry.height.max(1) as u64;
        area.y + scaled.min(area.height as u64) as u16
    }

    /// Eighth-cell sub-row nearest to virtual y coordinate `y`, relative to
    /// the top of the surface
    fn sub_row(&self, y: u32) -> u32 {
        let total = self.buffer.area.height as u64 * EIGHTHS as u64;
        let height = self.geometry.height.max(1) as u64;
        let scaled = (y as u64 * total + height / 2) / height;
        scaled.min(total) as u32
    }

    /// Blank every cell touched by `rect` with `color`
    pub fn clear(&mut self, rect: VirtualRect, color: Color) {
        let style = Style::default().bg(color).fg(color);
        let (left, right) = (self.column(rect.x), self.column(rect.right()));
        let (top, bottom) = (self.row(rect.y), self.row(rect.bottom()));
        for y in top..bottom {
            for x in left..right {
                self.buffer.set_string(x, y, " ", style);
            }
        }
    }

    /// Fill `rect` with `color`.
    ///
    /// A top edge falling inside a cell is drawn with a partial block on
    /// `background`. The bottom edge snaps to the nearest cell boundary.
    pub fn fill_rect(&mut self, rect: VirtualRect, color: Color, background: Color) {
        let area = self.buffer.area;
        let (left, right) = (self.column(rect.x), self.column(rect.right()));
        let top = self.sub_row(rect.y);
        let bottom = self.sub_row(rect.bottom());
        if left >= right || top >= bottom {
            return;
        }

        let style = Style::default().fg(color).bg(background);
        let first_row = top / EIGHTHS;
        let last_row = bottom.div_ceil(EIGHTHS);
        for row in first_row..last_row {
            let cell_top = row * EIGHTHS;
            let filled = (cell_top + EIGHTHS).min(bottom) - cell_top.max(top);
            if filled == 0 {
                continue;
            }
            let glyph = LOWER_BLOCKS[filled as usize - 1];
            let y = area.y + row as u16;
            for x in left..right {
                self.buffer.set_string(x, y, glyph, style);
            }
        }
    }

    /// Write `text` centered horizontally on the row holding virtual `y`
    pub fn draw_text_centered(&mut self, text: &str, y: u32, style: Style) {
        let area = self.buffer.area;
        let row = self.row(y);
        if row >= area.bottom() {
            return;
        }
        let width = text.chars().count().min(area.width as usize) as u16;
        let x = area.x + (area.width - width) / 2;
        self.buffer.set_stringn(x, row, text, area.width as usize, style);
    }
}

impl Widget for &Surface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(self.buffer.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &self.buffer.content[self.buffer.index_of(x, y)];
                let index = buf.index_of(x, y);
                buf.content[index] = cell.clone();
            }
        }
    }
}
