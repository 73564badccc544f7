use ratatui::style::Color;

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,           // Purple
    pub highlight_left: Color,  // Purple, left bar of a swapped pair
    pub highlight_right: Color, // Powder blue, right bar of a swapped pair
    pub gradient: [Color; 3],   // Bars cycle through these by index
}

impl Theme {
    /// Gradient color for the bar at `index`
    pub fn bar_color(&self, index: usize) -> Color {
        self.gradient[index % self.gradient.len()]
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    background: Color::Rgb(255, 255, 255),
    text: Color::Rgb(0, 0, 0),
    title: Color::Rgb(238, 174, 238),
    highlight_left: Color::Rgb(238, 174, 238),
    highlight_right: Color::Rgb(176, 224, 230),
    gradient: [
        Color::Rgb(224, 255, 255), // Light cyan
        Color::Rgb(209, 238, 238),
        Color::Rgb(180, 205, 205),
    ],
};
