use std::fmt::{self, Write as _};

use crate::error::{ChartError, ChartResult};

/// Anchor of a text run relative to its reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// First character at the reference position.
    #[default]
    Start,
    /// Centered on the reference position, ties toward start.
    Center,
    /// Last character at the reference position.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Horizontal,
    /// One character per row, top to bottom.
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextAlign {
    pub anchor: TextAnchor,
    pub direction: TextDirection,
}

impl TextAlign {
    pub const START: Self = Self::horizontal(TextAnchor::Start);
    pub const CENTER: Self = Self::horizontal(TextAnchor::Center);
    pub const END: Self = Self::horizontal(TextAnchor::End);

    #[must_use]
    pub const fn horizontal(anchor: TextAnchor) -> Self {
        Self {
            anchor,
            direction: TextDirection::Horizontal,
        }
    }

    #[must_use]
    pub const fn vertical(anchor: TextAnchor) -> Self {
        Self {
            anchor,
            direction: TextDirection::Vertical,
        }
    }
}

/// Fixed-size character grid.
///
/// Every drawing operation is total: cells outside the grid and control
/// characters are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    pub fn new(width: usize, height: usize) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidCanvasSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![' '; width * height],
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn last_column(&self) -> i64 {
        i64::try_from(self.width).unwrap_or(i64::MAX) - 1
    }

    fn last_row(&self) -> i64 {
        i64::try_from(self.height).unwrap_or(i64::MAX) - 1
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x.into(), y.into()).map(|i| self.cells[i])
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        self.put_at(x.into(), y.into(), ch);
    }

    pub(crate) fn put_at(&mut self, x: i64, y: i64, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Row segment between two inclusive columns, clipped to the grid.
    pub(crate) fn hline_at(&mut self, x0: i64, x1: i64, y: i64, ch: char) {
        if !(0..=self.last_row()).contains(&y) {
            return;
        }
        for x in x0.min(x1).max(0)..=x0.max(x1).min(self.last_column()) {
            self.put_at(x, y, ch);
        }
    }

    /// Column segment between two inclusive rows, clipped to the grid.
    pub(crate) fn vline_at(&mut self, x: i64, y0: i64, y1: i64, ch: char) {
        if !(0..=self.last_column()).contains(&x) {
            return;
        }
        for y in y0.min(y1).max(0)..=y0.max(y1).min(self.last_row()) {
            self.put_at(x, y, ch);
        }
    }

    /// Every second cell of a row segment, starting at `x0`.
    pub(crate) fn dotted_hline_at(&mut self, x0: i64, x1: i64, y: i64, ch: char) {
        if x1 < x0 || !(0..=self.last_row()).contains(&y) {
            return;
        }
        let skipped = (-x0).max(0);
        let first = x0 + skipped + skipped % 2;
        let last = x1.min(self.last_column());
        let mut x = first;
        while x <= last {
            self.put_at(x, y, ch);
            x += 2;
        }
    }

    /// Line from `(x0, y0)` to `(x1, y1)`, both ends included.
    ///
    /// Writes one cell per step along the major axis, with the minor
    /// coordinate rounded to the nearest cell. Only the steps that fall
    /// inside the grid are visited.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char) {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let (dx, dy) = (x1 - x0, y1 - y0);
        if dx == 0 {
            self.vline_at(x0, y0, y1, ch);
            return;
        }
        if dy == 0 {
            self.hline_at(x0, x1, y0, ch);
            return;
        }

        if dx.abs() >= dy.abs() {
            for x in x0.min(x1).max(0)..=x0.max(x1).min(self.last_column()) {
                let y = y0 + scaled_round(x - x0, dy, dx);
                self.put_at(x, y, ch);
            }
        } else {
            for y in y0.min(y1).max(0)..=y0.max(y1).min(self.last_row()) {
                let x = x0 + scaled_round(y - y0, dx, dy);
                self.put_at(x, y, ch);
            }
        }
    }

    /// Single-glyph frame between two inclusive corners.
    pub fn outline(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char) {
        self.outline_at(x0.into(), y0.into(), x1.into(), y1.into(), ch);
    }

    pub(crate) fn outline_at(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, ch: char) {
        self.hline_at(x0, x1, y0, ch);
        self.hline_at(x0, x1, y1, ch);
        self.vline_at(x0, y0, y1, ch);
        self.vline_at(x1, y0, y1, ch);
    }

    /// Fills the area between two inclusive corners.
    pub fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char) {
        self.fill_at(x0.into(), y0.into(), x1.into(), y1.into(), ch);
    }

    pub(crate) fn fill_at(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, ch: char) {
        let (left, right) = (x0.min(x1).max(0), x0.max(x1).min(self.last_column()));
        let (top, bottom) = (y0.min(y1).max(0), y0.max(y1).min(self.last_row()));
        for y in top..=bottom {
            for x in left..=right {
                self.put_at(x, y, ch);
            }
        }
    }

    /// Rectangle with corners `(x, y)` and `(x + w, y + h)`.
    ///
    /// Negative sizes flip the origin. See [`TextCanvas::frame`] for the
    /// border and fill glyphs.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, border_width: u32, fill: Option<char>) {
        let (x, y) = (i64::from(x), i64::from(y));
        self.frame_at(x, y, x + i64::from(w), y + i64::from(h), border_width, fill);
    }

    /// Rectangle between two inclusive corners given in any order.
    ///
    /// A border width of 1 uses `-`/`|` edges, 2 and more use `=`/`"`;
    /// corners are always `+`. The fill only covers the interior and does
    /// not depend on the border.
    pub fn frame(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        border_width: u32,
        fill: Option<char>,
    ) {
        self.frame_at(x0.into(), y0.into(), x1.into(), y1.into(), border_width, fill);
    }

    fn frame_at(
        &mut self,
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
        border_width: u32,
        fill: Option<char>,
    ) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        if let Some(fill) = fill {
            if right - left >= 2 && bottom - top >= 2 {
                self.fill_at(left + 1, top + 1, right - 1, bottom - 1, fill);
            }
        }

        if border_width > 0 {
            let (horizontal, vertical) = if border_width == 1 {
                ('-', '|')
            } else {
                ('=', '"')
            };
            self.hline_at(left, right, top, horizontal);
            self.hline_at(left, right, bottom, horizontal);
            self.vline_at(left, top, bottom, vertical);
            self.vline_at(right, top, bottom, vertical);
            for (cx, cy) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
                self.put_at(cx, cy, '+');
            }
        }
    }

    /// Writes `text` anchored at `(x, y)`.
    ///
    /// Characters falling outside the grid are skipped.
    pub fn text(&mut self, x: i32, y: i32, text: &str, align: TextAlign) {
        let len = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
        let shift = match align.anchor {
            TextAnchor::Start => 0,
            TextAnchor::Center => len / 2,
            TextAnchor::End => len - 1,
        };
        let (x, y) = (i64::from(x), i64::from(y));
        let (start, last) = match align.direction {
            TextDirection::Horizontal => (x - shift, self.last_column()),
            TextDirection::Vertical => (y - shift, self.last_row()),
        };
        for (pos, ch) in (start..).zip(text.chars()) {
            if pos > last {
                break;
            }
            match align.direction {
                TextDirection::Horizontal => self.put_at(pos, y, ch),
                TextDirection::Vertical => self.put_at(x, pos, ch),
            }
        }
    }

    /// Grid as `height` rows of exactly `width` characters, each terminated
    /// by a newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// One row without its terminator.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<String> {
        (y < self.height).then(|| {
            self.cells[y * self.width..(y + 1) * self.width]
                .iter()
                .collect()
        })
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for ch in row {
                f.write_char(*ch)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// `round(t * num / den)` with ties rounded up, without intermediate overflow.
fn scaled_round(t: i64, num: i64, den: i64) -> i64 {
    let (mut p, mut d) = (i128::from(t) * i128::from(num), i128::from(den));
    if d < 0 {
        p = -p;
        d = -d;
    }
    let rounded = (2 * p + d).div_euclid(2 * d);
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

/// Narrows a coordinate computed in `i64`, saturating at the `i32` range.
pub(crate) fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
