use serde::{Deserialize, Serialize};

use crate::core::{Font, PlotStyle, Style};
use crate::render::Graphics;

/// Spacing of key (legend) elements in units of one character width or one
/// line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySpacing {
    /// Space between the key border and the first column.
    pub hor_sep: f32,
    /// Space between the key border and the first row.
    pub vert_sep: f32,
    pub col_sep: f32,
    pub row_sep: f32,
    /// Width of the line/symbol sample.
    pub symbol_width: f32,
    /// Gap between the sample and the entry text.
    pub symbol_sep: f32,
}

impl Default for KeySpacing {
    fn default() -> Self {
        Self {
            hor_sep: 1.5,
            vert_sep: 0.5,
            col_sep: 2.0,
            row_sep: 0.75,
            symbol_width: 5.0,
            symbol_sep: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub text: String,
    #[serde(default)]
    pub style: Style,
    /// `None` marks a heading entry without a sample.
    #[serde(default)]
    pub plot_style: Option<PlotStyle>,
}

impl KeyEntry {
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style, plot_style: PlotStyle) -> Self {
        Self {
            text: text.into(),
            style,
            plot_style: Some(plot_style),
        }
    }

    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            plot_style: None,
        }
    }
}

/// Entries arranged into columns; `None` cells are gaps.
pub type KeyPlacement<'a> = Vec<Vec<Option<&'a KeyEntry>>>;

/// Measured size of a placed key in screen units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLayout {
    pub width: i32,
    pub height: i32,
    pub column_widths: Vec<i32>,
    pub row_heights: Vec<i32>,
}

/// Chart key (legend).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Key {
    pub entries: Vec<KeyEntry>,
    /// Number of columns; 0 is treated as 1.
    #[serde(default)]
    pub columns: usize,
    /// Fill entries row by row instead of column by column.
    #[serde(default)]
    pub row_major: bool,
    #[serde(default)]
    pub hide: bool,
    #[serde(default)]
    pub spacing: KeySpacing,
}

impl Key {
    #[must_use]
    pub fn new(entries: Vec<KeyEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_row_major(mut self, row_major: bool) -> Self {
        self.row_major = row_major;
        self
    }

    /// Arranges visible entries into columns.
    ///
    /// Returns an empty placement when the key is hidden or has nothing to
    /// show.
    #[must_use]
    pub fn place(&self) -> KeyPlacement<'_> {
        let visible: Vec<&KeyEntry> = self
            .entries
            .iter()
            .filter(|entry| !entry.text.is_empty())
            .collect();
        if self.hide || visible.is_empty() {
            return Vec::new();
        }

        let columns = self.columns.clamp(1, visible.len());
        let rows = visible.len().div_ceil(columns);
        let mut placement: KeyPlacement<'_> = vec![vec![None; rows]; columns];
        for (i, entry) in visible.into_iter().enumerate() {
            let (col, row) = if self.row_major {
                (i % columns, i / columns)
            } else {
                (i / rows, i % rows)
            };
            placement[col][row] = Some(entry);
        }
        placement.retain(|col| col.iter().any(Option::is_some));
        placement
    }

    /// Measures a placement with the metrics of `graphics`.
    pub fn layout<G: Graphics + ?Sized>(
        &self,
        graphics: &G,
        placement: &KeyPlacement<'_>,
    ) -> KeyLayout {
        let font = graphics.font("key");
        let metrics = graphics.font_metrics(&font);
        let fw = metrics.char_width;
        let fh = metrics.line_height;
        let rows = placement.iter().map(Vec::len).max().unwrap_or(0);

        let mut column_widths = vec![0; placement.len()];
        let mut row_heights = vec![0; rows];
        for (ci, col) in placement.iter().enumerate() {
            for (ri, entry) in col.iter().enumerate() {
                let Some(entry) = entry else {
                    continue;
                };
                let (width, lines) = measure(graphics, &entry.text, &font);
                column_widths[ci] = column_widths[ci].max(width);
                row_heights[ri] = row_heights[ri].max(lines * fh);
            }
        }

        let s = self.spacing;
        let n_cols = placement.len() as f32;
        let n_rows = rows as f32;
        let width = column_widths.iter().sum::<i32>() as f32
            + n_cols * (s.symbol_width + s.symbol_sep) * fw
            + (n_cols - 1.0).max(0.0) * s.col_sep * fw
            + 2.0 * s.hor_sep * fw;
        let height = row_heights.iter().sum::<i32>() as f32
            + (n_rows - 1.0).max(0.0) * s.row_sep * fh as f32
            + 2.0 * s.vert_sep * fh as f32;

        KeyLayout {
            width: width.ceil() as i32,
            height: height.ceil() as i32,
            column_widths,
            row_heights,
        }
    }
}

fn measure<G: Graphics + ?Sized>(graphics: &G, text: &str, font: &Font) -> (i32, i32) {
    let mut width = 0;
    let mut lines = 0;
    for line in text.split('\n') {
        width = width.max(graphics.text_len(line, font));
        lines += 1;
    }
    (width, lines)
}
