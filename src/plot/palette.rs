//! Series color palette.
//!
//! A fixed 14-entry palette shared by both plot backends. Series colors are
//! assigned by group index and wrap modulo the palette length, so any number
//! of color groups renders without exhausting the palette.

use ratatui::style::Color;

/// RGB palette for plotted series, indexed by group order.
pub const SERIES_PALETTE: [(u8, u8, u8); 14] = [
    (69, 133, 136),  // teal
    (214, 93, 14),   // orange
    (152, 151, 26),  // green
    (177, 98, 134),  // magenta
    (215, 153, 33),  // yellow
    (204, 36, 29),   // red
    (131, 165, 152), // aqua
    (254, 128, 25),  // bright orange
    (184, 187, 38),  // bright green
    (211, 134, 155), // pink
    (250, 189, 47),  // bright yellow
    (251, 73, 52),   // bright red
    (142, 192, 124), // light green
    (168, 153, 132), // gray
];

/// RGB triple for a series index, wrapping through the palette.
pub fn series_rgb(index: usize) -> (u8, u8, u8) {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Terminal color for a series index, wrapping through the palette.
pub fn series_color(index: usize) -> Color {
    let (r, g, b) = series_rgb(index);
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_fourteen_entries() {
        assert_eq!(SERIES_PALETTE.len(), 14);
    }

    #[test]
    fn series_colors_wrap_modulo_palette() {
        assert_eq!(series_rgb(14), series_rgb(0));
        assert_eq!(series_color(15), series_color(1));
        assert_ne!(series_rgb(0), series_rgb(1));
    }
}
