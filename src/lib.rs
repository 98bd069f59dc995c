//! # Introduction
//!
//! Code Blocks turns a line of text into a wrapped grid of colored squares,
//! one per character, and redraws the grid on every keystroke. Colors come
//! from the character's class: each letter has its own color, and brackets,
//! operators, digits, whitespace and everything else share one color per
//! class.
//!
//! ## Pipeline
//!
//! ```text
//! Keystroke → TextInput → change channel → GridRenderer → Blocks → TUI
//! ```
//!
//! 1. [`palette`] — classifies a character and looks up its color.
//! 2. [`grid`] — lays characters out on a wrapped grid, in logical pixels,
//!    rebuilding every block from scratch on each render pass.
//! 3. [`config`] — block size, spacing, wrap width and window geometry.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod grid;
pub mod palette;
pub mod ui;
