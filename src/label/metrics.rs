/// Interface bounds for the label font size, screen units
pub const FONT_SIZE_MIN: f64 = 12.0;
pub const FONT_SIZE_MAX: f64 = 80.0;

/// Fixed-width text metrics
///
/// The label box is a heuristic, not a measured glyph extent: every
/// character is assumed to occupy the same fraction of an em, and the line
/// height is one em. Good enough for a safety box around short uppercase
/// river names; it will over-report narrow text like "III".
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Assumed advance per character as a fraction of the font size
    pub char_width_em: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { char_width_em: 0.6 }
    }
}

impl TextMetrics {
    /// Heuristic width of `text` at `font_size`, screen units
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * self.char_width_em * font_size
    }

    /// One em tall regardless of content
    pub fn text_height(&self, font_size: f64) -> f64 {
        font_size
    }
}

/// Clamp a requested font size to the interface bounds
pub fn clamp_font_size(requested: f64) -> f64 {
    requested.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}
