//! Block grid model and the renderer that rebuilds it
//!
//! [`GridRenderer::render`] is the only way blocks come into existence. Each
//! call throws away the whole previous set and lays out a fresh one from the
//! input text; nothing is diffed or reused between passes.

pub mod layout;

use crate::config::GridConfig;
use crate::palette::{CharacterClass, Rgb};
use log::debug;

/// One rendered square standing for one input character
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Position of the character in the input, counted in chars
    pub index: usize,
    pub ch: char,
    pub class: CharacterClass,
    pub row: usize,
    pub col: usize,
    /// Top-left corner in logical pixels, wave offset included
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: Rgb,
    /// Whitespace blocks carry a centered dot
    pub marker: bool,
}

impl Block {
    fn layout(index: usize, ch: char, config: &GridConfig) -> Self {
        let class = CharacterClass::of(ch);
        let (row, col) = layout::cell_of(index, config);
        let (x, y) = layout::pixel_origin(index, config);
        Block {
            index,
            ch,
            class,
            row,
            col,
            x,
            y,
            size: config.block_size,
            fill: class.color(),
            marker: class == CharacterClass::Whitespace,
        }
    }
}

/// Keeps the on-screen block set in step with the input text
#[derive(Debug)]
pub struct GridRenderer {
    config: GridConfig,
    current: Vec<Block>,
    passes: u64,
}

impl GridRenderer {
    /// A zero column count is treated as one column per row.
    pub fn new(mut config: GridConfig) -> Self {
        config.columns_per_row = config.columns_per_row.max(1);
        GridRenderer {
            config,
            current: Vec::new(),
            passes: 0,
        }
    }

    /// Fill color for one character
    pub fn classify(&self, c: char) -> Rgb {
        crate::palette::classify(c)
    }

    /// Replace the displayed blocks with a fresh layout of `text`
    pub fn render(&mut self, text: &str) -> &[Block] {
        let discarded = self.clear();

        let blocks: Vec<Block> = text
            .chars()
            .enumerate()
            .map(|(i, c)| Block::layout(i, c, &self.config))
            .collect();

        self.current = blocks;
        self.passes += 1;

        debug!(
            "render pass {}: discarded {} blocks, built {} in {} rows",
            self.passes,
            discarded,
            self.current.len(),
            self.row_count()
        );

        &self.current
    }

    /// Drop every displayed block, returning how many there were
    fn clear(&mut self) -> usize {
        let count = self.current.len();
        self.current.clear();
        count
    }

    pub fn blocks(&self) -> &[Block] {
        &self.current
    }

    pub fn row_count(&self) -> usize {
        layout::rows_for(self.current.len(), &self.config)
    }

    /// Number of completed render passes
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        GridRenderer::new(GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{classify, BRACKET_COLOR, DIGIT_COLOR, WHITESPACE_COLOR};

    #[test]
    fn test_empty_text_has_no_blocks() {
        let mut renderer = GridRenderer::default();
        assert!(renderer.render("").is_empty());
        assert_eq!(renderer.row_count(), 0);
        assert_eq!(renderer.passes(), 1);
    }

    #[test]
    fn test_mixed_classes() {
        let mut renderer = GridRenderer::default();
        let blocks = renderer.render("ab 1(");

        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0].fill, classify('a'));
        assert_eq!(blocks[1].fill, classify('b'));
        assert_eq!(blocks[2].fill, WHITESPACE_COLOR);
        assert_eq!(blocks[3].fill, DIGIT_COLOR);
        assert_eq!(blocks[4].fill, BRACKET_COLOR);

        let markers: Vec<bool> = blocks.iter().map(|b| b.marker).collect();
        assert_eq!(markers, [false, false, true, false, false]);

        for (i, block) in blocks.iter().enumerate() {
            assert_eq!((block.row, block.col), (0, i));
        }
    }

    #[test]
    fn test_wraps_after_thirty() {
        let mut renderer = GridRenderer::default();
        let text = "x".repeat(35);
        let blocks = renderer.render(&text);

        assert_eq!(blocks.len(), 35);
        assert!(blocks[..30].iter().enumerate().all(|(i, b)| b.row == 0 && b.col == i));
        assert!(blocks[30..].iter().enumerate().all(|(i, b)| b.row == 1 && b.col == i));
        assert_eq!(renderer.row_count(), 2);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut renderer = GridRenderer::default();
        assert_eq!(renderer.render("héllo🦀").len(), 6);
    }

    #[test]
    fn test_rerender_is_identical() {
        let mut renderer = GridRenderer::default();
        let first = renderer.render("console.log('Hello World!');").to_vec();
        let second = renderer.render("console.log('Hello World!');").to_vec();
        assert_eq!(first, second);
        assert_eq!(renderer.passes(), 2);
    }

    #[test]
    fn test_shrinking_text_drops_stale_blocks() {
        let mut renderer = GridRenderer::default();
        renderer.render("ab");
        renderer.render("a");
        assert_eq!(renderer.blocks().len(), 1);
        assert_eq!(renderer.blocks()[0].ch, 'a');
    }
}
