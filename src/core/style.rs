use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Color token used for both line and fill colors.
pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDotDot,
    LongDash,
    LongDot,
}

/// Visual description of a chart element as resolved by the charting library.
///
/// Backends decide how much of it they honor. The text backend only looks at
/// `symbol`, `line_width` and `fill_color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub symbol: char,
    pub symbol_color: String,
    pub symbol_size: f64,
    pub line_color: String,
    pub line_width: u32,
    pub line_style: LineStyle,
    #[serde(default)]
    pub fill_color: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            symbol: 'o',
            symbol_color: BLACK.to_owned(),
            symbol_size: 1.0,
            line_color: BLACK.to_owned(),
            line_width: 1,
            line_style: LineStyle::Solid,
            fill_color: None,
        }
    }
}

impl Style {
    #[must_use]
    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = Some(fill_color.into());
        self
    }

    /// Symbol if it is printable ASCII, `fallback` otherwise.
    #[must_use]
    pub fn glyph_or(&self, fallback: char) -> char {
        if is_printable_ascii(self.symbol) {
            self.symbol
        } else {
            fallback
        }
    }
}

#[must_use]
pub fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSize {
    Tiny,
    Small,
    #[default]
    Normal,
    Large,
    Huge,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Font {
    pub name: String,
    pub size: FontSize,
    pub color: String,
}

/// Font measurements reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Average glyph width in screen units.
    pub char_width: f32,
    /// Line height in screen units.
    pub line_height: i32,
    pub monospaced: bool,
}

bitflags! {
    /// How a data series is drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PlotStyle: u8 {
        const POINTS = 1;
        const LINES = 1 << 1;
        const LINES_POINTS = Self::POINTS.bits() | Self::LINES.bits();
        const BOX = 1 << 2;
        const FILLED = 1 << 3;
    }
}
