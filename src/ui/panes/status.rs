//! Status bar rendering with grid counts and keybindings

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Figures shown on the left side of the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRenderData {
    pub blocks: usize,
    pub rows: usize,
    /// Blocks that did not fit in the grid pane
    pub hidden: usize,
    pub passes: u64,
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let text_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let mut left_spans = vec![
        Span::styled(
            format!(" {} ", plural(data.blocks, "block")),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(plural(data.rows, "row"), text_style),
    ];

    if data.hidden > 0 {
        left_spans.push(Span::styled(" | ", sep_style));
        left_spans.push(Span::styled(
            format!("{} hidden", data.hidden),
            text_style.add_modifier(Modifier::ITALIC),
        ));
    }

    left_spans.push(Span::styled(" | ", sep_style));
    left_spans.push(Span::styled(format!("pass {}", data.passes), sep_style));

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::White);
    let desc_style = text_style;

    let right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ^U ", key_style),
        Span::styled(" clear ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}

#[cfg(test)]
mod tests {
    use super::plural;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "block"), "0 blocks");
        assert_eq!(plural(1, "row"), "1 row");
        assert_eq!(plural(28, "block"), "28 blocks");
    }
}
