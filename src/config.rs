//! Visual constants for the block grid and the host window.
//!
//! Nothing here is read from disk or the environment; the defaults are the
//! values the visualizer has always used, and callers embedding the grid can
//! override individual fields with struct update syntax:
//!
//! ```
//! use code_blocks::config::GridConfig;
//!
//! let narrow = GridConfig { columns_per_row: 10, ..GridConfig::default() };
//! assert_eq!(narrow.stride(), 24.0);
//! ```

/// Text shown in the input when the program starts
pub const DEFAULT_TEXT: &str = "console.log('Hello World!');";

/// Title label above the grid
pub const TITLE: &str = "Code Blocks Visualizer";

/// Geometry of the block grid, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Edge length of one square block.
    pub block_size: f64,
    /// Space between neighbouring blocks, both axes.
    pub gap: f64,
    /// Offset of the first block from the container's top-left corner.
    pub margin: f64,
    /// Blocks per row before wrapping. Must be non-zero.
    pub columns_per_row: usize,
    /// Peak vertical offset of the decorative wave.
    pub jitter_amplitude: f64,
    /// Radians advanced per character index.
    pub jitter_step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            block_size: 20.0,
            gap: 4.0,
            margin: 10.0,
            columns_per_row: 30,
            jitter_amplitude: 2.0,
            jitter_step: 0.2,
        }
    }
}

impl GridConfig {
    /// Distance between the origins of two adjacent blocks
    pub fn stride(&self) -> f64 {
        self.block_size + self.gap
    }

    /// Number of block rows whose top edge lies inside a container of the given height
    pub fn rows_within(&self, height: f64) -> usize {
        let usable = height - self.margin;
        if usable <= 0.0 {
            return 0;
        }
        (usable / self.stride()).ceil() as usize
    }
}

/// Size of the top-level window and the grid container, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800.0,
            height: 600.0,
            container_width: 700.0,
            container_height: 300.0,
        }
    }
}

/// Everything the application needs to lay itself out
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub grid: GridConfig,
    pub window: WindowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_rows() {
        let grid = GridConfig::default();
        // Row 12 starts at y = 298, still inside a 300px container
        assert_eq!(grid.rows_within(300.0), 13);
        assert_eq!(grid.rows_within(10.0), 0);
        assert_eq!(grid.rows_within(34.0), 1);
        assert_eq!(grid.rows_within(35.0), 2);
    }
}
