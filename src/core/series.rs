use serde::{Deserialize, Serialize};

use crate::core::Style;

/// Data point in screen space with optional error extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorPoint {
    pub x: f64,
    pub y: f64,
    /// Full width of the horizontal error bar.
    #[serde(default)]
    pub delta_x: Option<f64>,
    /// Full height of the vertical error bar.
    #[serde(default)]
    pub delta_y: Option<f64>,
    /// Offset of the error bar center from the point.
    #[serde(default)]
    pub off_x: f64,
    #[serde(default)]
    pub off_y: f64,
}

impl ErrorPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            delta_x: None,
            delta_y: None,
            off_x: 0.0,
            off_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_delta_x(mut self, delta_x: f64) -> Self {
        self.delta_x = Some(delta_x);
        self
    }

    #[must_use]
    pub fn with_delta_y(mut self, delta_y: f64) -> Self {
        self.delta_y = Some(delta_y);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, off_x: f64, off_y: f64) -> Self {
        self.off_x = off_x;
        self.off_y = off_y;
        self
    }

    /// Returns `(x_low, y_low, x_high, y_high)` covering the point and its
    /// error bars.
    #[must_use]
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let (mut xl, mut xh) = (self.x, self.x);
        let (mut yl, mut yh) = (self.y, self.y);
        if let Some(dx) = self.delta_x {
            xl = self.x + self.off_x - dx / 2.0;
            xh = self.x + self.off_x + dx / 2.0;
        }
        if let Some(dy) = self.delta_y {
            yl = self.y + self.off_y - dy / 2.0;
            yh = self.y + self.off_y + dy / 2.0;
        }
        (xl, yl, xh, yh)
    }
}

/// Five-number summary of one box-plot entry in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub x: f64,
    pub q1: f64,
    pub q3: f64,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub outliers: Vec<f64>,
}

impl BoxStats {
    #[must_use]
    pub fn new(x: f64, q1: f64, q3: f64) -> Self {
        Self {
            x,
            q1,
            q3,
            median: None,
            mean: None,
            low: None,
            high: None,
            outliers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_median(mut self, median: f64) -> Self {
        self.median = Some(median);
        self
    }

    #[must_use]
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    #[must_use]
    pub fn with_whiskers(mut self, low: f64, high: f64) -> Self {
        self.low = Some(low);
        self.high = Some(high);
        self
    }

    #[must_use]
    pub fn with_outliers(mut self, outliers: Vec<f64>) -> Self {
        self.outliers = outliers;
        self
    }
}

/// Where a bar label sits relative to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelPlacement {
    /// Above the bar top.
    #[default]
    Outside,
    /// Just inside the bar top.
    Inside,
    /// Middle of the bar.
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLabel {
    pub text: String,
    #[serde(default)]
    pub placement: LabelPlacement,
}

/// One bar in screen space; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarInfo {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// Overrides the series style for this bar.
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub label: Option<BarLabel>,
}

impl BarInfo {
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            style: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_label(mut self, text: impl Into<String>, placement: LabelPlacement) -> Self {
        self.label = Some(BarLabel {
            text: text.into(),
            placement,
        });
        self
    }
}

/// One pie/ring segment between angles `phi` and `psi` (radians,
/// counter-clockwise from the positive x axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub phi: f64,
    pub psi: f64,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub label: String,
    /// Outward displacement of the wedge, in outer-radius units.
    #[serde(default)]
    pub shift: f64,
}

impl Wedge {
    #[must_use]
    pub fn new(phi: f64, psi: f64) -> Self {
        Self {
            phi,
            psi,
            style: Style::default(),
            label: String::new(),
            shift: 0.0,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    #[must_use]
    pub fn bisector(&self) -> f64 {
        (self.phi + self.psi) / 2.0
    }
}
