use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,      // Window background
    pub fg: Color,      // Title and body text
    pub input_bg: Color,
    pub input_fg: Color,
    pub marker: Color, // Dot drawn on whitespace blocks
    pub comment: Color,
    pub primary: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(240, 240, 240),
    fg: Color::Rgb(30, 30, 46),
    input_bg: Color::Rgb(255, 255, 255),
    input_fg: Color::Rgb(30, 30, 46),
    marker: Color::Rgb(255, 255, 255),
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),        // Blue
    border_focused: Color::Rgb(137, 180, 250), // Blue border for the input
    border_normal: Color::Rgb(188, 188, 196),  // Light grey around the grid
    status_bg: Color::Rgb(220, 220, 226),
};
