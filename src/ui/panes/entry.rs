//! Text entry pane rendering
//!
//! Draws the single-line input inside a bordered box and places the terminal
//! cursor at the edit position. Content wider than the box scrolls
//! horizontally so the cursor always stays visible.

use crate::ui::input::TextInput;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters typed into the entry, made printable
fn display_text(chars: &[char]) -> String {
    chars
        .iter()
        .map(|&c| match c {
            '\t' => '→',
            c if c.is_control() => '␣',
            c => c,
        })
        .collect()
}

/// Horizontal scroll keeping a cursor at `cursor_col` inside `width` cells
fn scroll_offset(cursor_col: usize, width: usize) -> usize {
    cursor_col.saturating_sub(width.saturating_sub(1))
}

pub fn render_entry_pane(frame: &mut Frame, area: Rect, input: &TextInput) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(DEFAULT_THEME.input_bg));
    let inner = block.inner(area);

    let text = input.text().chars().collect::<Vec<_>>();
    let cursor_col = Span::raw(display_text(input.before_cursor())).width();
    let offset = scroll_offset(cursor_col, inner.width as usize);

    let paragraph = Paragraph::new(display_text(&text))
        .block(block)
        .style(
            Style::default()
                .bg(DEFAULT_THEME.input_bg)
                .fg(DEFAULT_THEME.input_fg),
        )
        .scroll((0, u16::try_from(offset).unwrap_or(u16::MAX)));
    frame.render_widget(paragraph, area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + (cursor_col - offset) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(display_text(&['a', '\t', 'b', '\u{7}']), "a→b␣");
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(5, 40), 0);
        assert_eq!(scroll_offset(39, 40), 0);
        assert_eq!(scroll_offset(40, 40), 1);
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
