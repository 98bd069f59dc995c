//! Block grid pane rendering
//!
//! Blocks are laid out in logical pixels by [`crate::grid`]; this pane maps
//! that geometry onto terminal cells. A block is two cells wide and one cell
//! tall, which is roughly square in most terminal fonts.
//!
//! # Projection
//!
//! The cell of a block is recovered from its pixel origin by dividing the
//! offset from the margin by the pixel stride and rounding. The decorative
//! wave never moves a block by more than a fraction of a stride, so it rounds
//! away and each block lands exactly on its `(row, col)` cell. Columns are
//! separated by a blank cell when the pane is wide enough for a full row with
//! gaps; otherwise blocks are packed edge to edge.
//!
//! A two-cell block has no middle cell, so the whitespace dot is drawn in
//! the block's left cell and the right cell stays blank.

use crate::config::GridConfig;
use crate::grid::Block as GridBlock;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

/// Terminal cells per block, horizontally
pub const BLOCK_CELLS: u16 = 2;

/// Whitespace dot in the left cell, right cell blank
const MARKER: &str = "· ";
const FILL: &str = "  ";

/// Maps block pixel geometry to cell offsets inside the grid pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Cells between the left edges of adjacent columns
    pub column_stride: u16,
}

impl Projection {
    /// Pick the widest layout whose full row fits in `width` cells
    pub fn fit(width: u16, config: &GridConfig) -> Self {
        let spaced = Self::row_width(config, BLOCK_CELLS + 1);
        let column_stride = if width as usize >= spaced {
            BLOCK_CELLS + 1
        } else {
            BLOCK_CELLS
        };
        Projection { column_stride }
    }

    /// Width in cells of one full row at the given stride
    pub fn row_width(config: &GridConfig, column_stride: u16) -> usize {
        let columns = config.columns_per_row.max(1);
        (columns - 1) * column_stride as usize + BLOCK_CELLS as usize
    }

    /// Offset of a block's left cell from the pane origin, as (x, y)
    pub fn cell(&self, block: &GridBlock, config: &GridConfig) -> (u16, u16) {
        let stride = config.stride();
        // `as u16` saturates, so absurdly long inputs clip instead of wrapping
        let col = ((block.x - config.margin) / stride).round().max(0.0) as u16;
        let row = ((block.y - config.margin) / stride).round().max(0.0) as u16;
        (col.saturating_mul(self.column_stride), row)
    }
}

/// Widget drawing a slice of blocks into a buffer area
pub struct BlockGrid<'a> {
    blocks: &'a [GridBlock],
    config: &'a GridConfig,
}

impl<'a> BlockGrid<'a> {
    pub fn new(blocks: &'a [GridBlock], config: &'a GridConfig) -> Self {
        BlockGrid { blocks, config }
    }
}

impl Widget for BlockGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let projection = Projection::fit(area.width, self.config);

        for block in self.blocks {
            let (dx, dy) = projection.cell(block, self.config);
            if dy >= area.height || dx.saturating_add(BLOCK_CELLS) > area.width {
                continue;
            }

            let style = Style::default().bg(block.fill.into()).fg(DEFAULT_THEME.marker);
            let glyphs = if block.marker { MARKER } else { FILL };
            buf.set_string(area.x + dx, area.y + dy, glyphs, style);
        }
    }
}

/// Number of blocks that fall outside an area of the given size
pub fn clipped_count(blocks: &[GridBlock], config: &GridConfig, area: Rect) -> usize {
    let projection = Projection::fit(area.width, config);
    blocks
        .iter()
        .filter(|block| {
            let (dx, dy) = projection.cell(block, config);
            dy >= area.height || dx.saturating_add(BLOCK_CELLS) > area.width
        })
        .count()
}

/// Render the bordered grid container, returning how many blocks were clipped
pub fn render_blocks_pane(
    frame: &mut Frame,
    area: Rect,
    blocks: &[GridBlock],
    config: &GridConfig,
) -> usize {
    let container = Block::default()
        .title(" Blocks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let inner = container.inner(area);
    frame.render_widget(container, area);
    frame.render_widget(BlockGrid::new(blocks, config), inner);
    clipped_count(blocks, config, inner)
}
