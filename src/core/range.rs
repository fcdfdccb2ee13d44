use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Horizontal placement of a tic label relative to its label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TicAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// One axis graduation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tic {
    /// Data position of the mark; `None` for label-only tics.
    pub pos: Option<f64>,
    /// Data position of the label.
    pub label_pos: f64,
    pub label: String,
    #[serde(default)]
    pub align: TicAlign,
}

impl Tic {
    #[must_use]
    pub fn new(pos: f64, label: impl Into<String>) -> Self {
        Self {
            pos: Some(pos),
            label_pos: pos,
            label: label.into(),
            align: TicAlign::Center,
        }
    }

    /// Label without a mark, as used between two time tics.
    #[must_use]
    pub fn label_only(label_pos: f64, label: impl Into<String>) -> Self {
        Self {
            pos: None,
            label_pos,
            label: label.into(),
            align: TicAlign::Center,
        }
    }

    #[must_use]
    pub fn with_align(mut self, align: TicAlign) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicSetting {
    pub hide: bool,
    /// 0: no mirror axis, 1: mirrored baseline, 2: mirrored baseline and tics.
    pub mirror: u8,
}

/// Axis range as computed by the charting library.
///
/// Holds the data extent, the screen extent it maps to and the tics already
/// placed by the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub screen_min: i32,
    pub screen_max: i32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub time: bool,
    #[serde(default)]
    pub t_min: Option<DateTime<Utc>>,
    #[serde(default)]
    pub t_max: Option<DateTime<Utc>>,
    #[serde(default)]
    pub show_zero: bool,
    #[serde(default)]
    pub show_limits: bool,
    #[serde(default)]
    pub tics: Vec<Tic>,
    #[serde(default)]
    pub tic_setting: TicSetting,
}

impl Range {
    /// Creates a range mapping `[min, max]` onto `[screen_min, screen_max]`.
    ///
    /// Vertical ranges usually pass `screen_min > screen_max` because screen
    /// rows grow downward.
    #[must_use]
    pub fn new(min: f64, max: f64, screen_min: i32, screen_max: i32) -> Self {
        Self {
            min,
            max,
            screen_min,
            screen_max,
            label: String::new(),
            time: false,
            t_min: None,
            t_max: None,
            show_zero: false,
            show_limits: false,
            tics: Vec::new(),
            tic_setting: TicSetting::default(),
        }
    }

    /// Creates a time range; data values are unix seconds.
    #[must_use]
    pub fn time(
        t_min: DateTime<Utc>,
        t_max: DateTime<Utc>,
        screen_min: i32,
        screen_max: i32,
    ) -> Self {
        let mut range = Self::new(
            t_min.timestamp() as f64,
            t_max.timestamp() as f64,
            screen_min,
            screen_max,
        );
        range.time = true;
        range.t_min = Some(t_min);
        range.t_max = Some(t_max);
        range
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_tics(mut self, tics: Vec<Tic>) -> Self {
        self.tics = tics;
        self
    }

    #[must_use]
    pub fn with_tic_setting(mut self, tic_setting: TicSetting) -> Self {
        self.tic_setting = tic_setting;
        self
    }

    #[must_use]
    pub fn with_show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    #[must_use]
    pub fn with_show_limits(mut self, show_limits: bool) -> Self {
        self.show_limits = show_limits;
        self
    }

    /// Maps a data value to its screen coordinate.
    ///
    /// Degenerate ranges map every value to `screen_min`.
    #[must_use]
    pub fn data_to_screen(&self, value: f64) -> i32 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() || !value.is_finite() {
            return self.screen_min;
        }
        let normalized = (value - self.min) / span;
        let screen_span = f64::from(self.screen_max) - f64::from(self.screen_min);
        (f64::from(self.screen_min) + normalized * screen_span).round() as i32
    }

    /// Maps a screen coordinate back to data space.
    #[must_use]
    pub fn screen_to_data(&self, screen: i32) -> f64 {
        let screen_span = f64::from(self.screen_max) - f64::from(self.screen_min);
        if screen_span == 0.0 {
            return self.min;
        }
        let normalized = (f64::from(screen) - f64::from(self.screen_min)) / screen_span;
        self.min + normalized * (self.max - self.min)
    }

    /// Whether the data range strictly straddles zero.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}
