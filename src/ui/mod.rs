//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]** — application context, event loop, wiring from the input to the grid
//! - **[`input`]** — single-line text buffer that publishes every content change
//! - **[`panes`]** — stateless render functions for each visible pane (title, blocks,
//!   entry, status bar)
//! - **[`session`]** — raw-mode / alternate-screen guard around the real terminal
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it and call [`App::run`]
//! with a terminal, usually the one owned by a [`TerminalSession`].
//!
//! [`App::run`]: app::App::run
//! [`TerminalSession`]: session::TerminalSession

pub mod app;
pub mod input;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
