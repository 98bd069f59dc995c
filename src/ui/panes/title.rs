//! Title label above the grid

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)))
        .style(
            Style::default()
                .bg(DEFAULT_THEME.bg)
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(paragraph, area);
}
