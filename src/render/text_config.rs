use serde::{Deserialize, Serialize};

use crate::core::is_printable_ascii;
use crate::error::{ChartError, ChartResult};

/// Horizontal stretch of circles on a typical terminal font, whose cells are
/// roughly twice as tall as they are wide.
pub const DEFAULT_CIRCLE_STRETCH_FACTOR: f64 = 1.85;
pub const DEFAULT_FALLBACK_SYMBOL: char = 'x';
pub const DEFAULT_BOX_SYMBOL: char = '*';

/// Setup of a text graphics backend.
///
/// Serializable so hosts can keep the canvas size and glyph choices next to
/// the rest of their chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextGraphicsConfig {
    pub width: usize,
    pub height: usize,
    /// Horizontal correction applied to radial shapes; depends on the font.
    #[serde(default = "default_circle_stretch_factor")]
    pub circle_stretch_factor: f64,
    /// Glyph used when a style symbol is not printable ASCII.
    #[serde(default = "default_fallback_symbol")]
    pub fallback_symbol: char,
    /// Glyph for box-plot means and outliers when the style has none.
    #[serde(default = "default_box_symbol")]
    pub box_symbol: char,
}

impl TextGraphicsConfig {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            circle_stretch_factor: default_circle_stretch_factor(),
            fallback_symbol: default_fallback_symbol(),
            box_symbol: default_box_symbol(),
        }
    }

    #[must_use]
    pub fn with_circle_stretch_factor(mut self, factor: f64) -> Self {
        self.circle_stretch_factor = factor;
        self
    }

    #[must_use]
    pub fn with_fallback_symbol(mut self, symbol: char) -> Self {
        self.fallback_symbol = symbol;
        self
    }

    #[must_use]
    pub fn with_box_symbol(mut self, symbol: char) -> Self {
        self.box_symbol = symbol;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidCanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.circle_stretch_factor.is_finite() || self.circle_stretch_factor < 1.0 {
            return Err(ChartError::InvalidConfig(
                "circle stretch factor must be finite and >= 1".to_owned(),
            ));
        }
        for (name, symbol) in [
            ("fallback_symbol", self.fallback_symbol),
            ("box_symbol", self.box_symbol),
        ] {
            if !is_printable_ascii(symbol) {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be printable ascii"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("malformed json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("cannot serialize: {e}"))
        })
    }
}

fn default_circle_stretch_factor() -> f64 {
    DEFAULT_CIRCLE_STRETCH_FACTOR
}

fn default_fallback_symbol() -> char {
    DEFAULT_FALLBACK_SYMBOL
}

fn default_box_symbol() -> char {
    DEFAULT_BOX_SYMBOL
}
