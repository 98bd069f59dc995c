//! Index-to-position arithmetic for the wrapped block grid

use crate::config::GridConfig;

/// Grid cell of the character at `index`
pub fn cell_of(index: usize, config: &GridConfig) -> (usize, usize) {
    (index / config.columns_per_row, index % config.columns_per_row)
}

/// Decorative vertical offset for the character at `index`
pub fn jitter(index: usize, config: &GridConfig) -> f64 {
    (index as f64 * config.jitter_step).sin() * config.jitter_amplitude
}

/// Top-left pixel corner of a block, wave offset included
pub fn pixel_origin(index: usize, config: &GridConfig) -> (f64, f64) {
    let (row, col) = cell_of(index, config);
    let stride = config.stride();
    let x = col as f64 * stride + config.margin;
    let y = row as f64 * stride + config.margin + jitter(index, config);
    (x, y)
}

/// Rows needed to hold `len` characters
pub fn rows_for(len: usize, config: &GridConfig) -> usize {
    len.div_ceil(config.columns_per_row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping() {
        let config = GridConfig::default();
        assert_eq!(cell_of(0, &config), (0, 0));
        assert_eq!(cell_of(29, &config), (0, 29));
        assert_eq!(cell_of(30, &config), (1, 0));
        assert_eq!(cell_of(64, &config), (2, 4));
    }

    #[test]
    fn test_pixel_origin() {
        let config = GridConfig::default();
        assert_eq!(pixel_origin(0, &config), (10.0, 10.0));

        let (x, y) = pixel_origin(31, &config);
        assert_eq!(x, 34.0);
        let expected = 34.0 + (31.0f64 * 0.2).sin() * 2.0;
        assert!((y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_jitter_stays_within_amplitude() {
        let config = GridConfig::default();
        for i in 0..500 {
            assert!(jitter(i, &config).abs() <= config.jitter_amplitude);
        }
    }

    #[test]
    fn test_rows_for() {
        let config = GridConfig::default();
        assert_eq!(rows_for(0, &config), 0);
        assert_eq!(rows_for(30, &config), 1);
        assert_eq!(rows_for(35, &config), 2);
    }
}
