//! Main TUI application state and logic

use crate::config::{Config, DEFAULT_TEXT, TITLE};
use crate::grid::{Block, GridRenderer};
use crate::ui::input::TextInput;
use crate::ui::panes::{self, blocks::Projection, StatusRenderData};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::Block as Background,
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::Receiver;

/// Width of the text entry, in characters
const ENTRY_WIDTH: u16 = 40;

/// The main application state
pub struct App {
    config: Config,

    /// The single-line text being visualized
    input: TextInput,

    /// Content changes published by `input`
    changes: Receiver<String>,

    renderer: GridRenderer,

    /// Blocks that did not fit in the grid pane on the last draw
    hidden_blocks: usize,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create the app with the default text already rendered
    pub fn with_config(config: Config) -> Self {
        let mut input = TextInput::new();
        let changes = input.subscribe();

        let mut app = App {
            config,
            input,
            changes,
            renderer: GridRenderer::new(config.grid),
            hidden_blocks: 0,
            should_quit: false,
        };
        app.input.set_text(DEFAULT_TEXT);
        app.apply_changes();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("event loop started");
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            // Blocks until the next key, paste or resize
            let event = event::read()?;
            self.handle_event(event);
        }
        info!("event loop finished after {} render passes", self.renderer.passes());
        Ok(())
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;
        Ok(())
    }

    /// Dispatch one terminal event, then bring the grid up to date
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.input.insert_str(&text),
            Event::Resize(width, height) => debug!("resized to {}x{}", width, height),
            _ => {}
        }
        self.apply_changes();
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.should_quit = true,
            _ => {
                self.input.handle_key(key);
            }
        }
    }

    /// Render once per published change, in order
    fn apply_changes(&mut self) {
        while let Ok(text) = self.changes.try_recv() {
            self.renderer.render(&text);
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        frame.render_widget(
            Background::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            size,
        );

        let grid = &self.config.grid;
        let grid_rows = grid.rows_within(self.config.window.container_height) as u16;

        let [title_area, grid_area, _, entry_area, _, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(grid_rows + 2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(size);

        panes::render_title(frame, title_area, TITLE);

        let grid_width = Projection::row_width(grid, panes::blocks::BLOCK_CELLS + 1) as u16 + 2;
        let grid_area = centered(grid_area, grid_width);
        self.hidden_blocks =
            panes::render_blocks_pane(frame, grid_area, self.renderer.blocks(), grid);

        panes::render_entry_pane(frame, centered(entry_area, ENTRY_WIDTH + 2), &self.input);

        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                blocks: self.renderer.blocks().len(),
                rows: self.renderer.row_count(),
                hidden: self.hidden_blocks,
                passes: self.renderer.passes(),
            },
        );
    }

    pub fn text(&self) -> String {
        self.input.text()
    }

    pub fn blocks(&self) -> &[Block] {
        self.renderer.blocks()
    }

    pub fn renderer(&self) -> &GridRenderer {
        &self.renderer
    }

    pub fn hidden_blocks(&self) -> usize {
        self.hidden_blocks
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// A horizontally centered slice of `area`, at most `width` cells wide
fn centered(area: Rect, width: u16) -> Rect {
    let [slice] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    slice
}
