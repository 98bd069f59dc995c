//! TUI pane rendering modules
//!
//! Each pane is a stateless render function taking the frame, its area, and
//! the data it shows.
//!
//! # Pane Modules
//!
//! - [`title`]: Title label across the top
//! - [`blocks`]: The block grid container and its cell projection
//! - [`entry`]: Single-line text entry with cursor placement
//! - [`status`]: Status bar with block counts and keybindings

pub mod blocks;
pub mod entry;
pub mod status;
pub mod title;

pub use blocks::{render_blocks_pane, BlockGrid, Projection};
pub use entry::render_entry_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use title::render_title;
