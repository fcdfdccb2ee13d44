use std::fmt;

use tracing::{debug, trace};

use crate::core::{
    BLACK, BarInfo, BoxStats, ErrorPoint, Font, FontMetrics, Key, PlotStyle, Range, Style,
    TicAlign, WHITE, Wedge, is_printable_ascii,
};
use crate::error::ChartResult;
use crate::render::canvas::saturate_i32;
use crate::render::generic::{generic_bars, generic_rings};
use crate::render::{Graphics, TextAlign, TextAnchor, TextCanvas, TextGraphicsConfig};

const LIMIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Graphics backend drawing onto a character grid.
///
/// One instance serves any number of render passes; `begin` wipes the
/// canvas and the cached pie offset.
#[derive(Debug, Clone)]
pub struct TextGraphics {
    config: TextGraphicsConfig,
    canvas: TextCanvas,
    /// Horizontal pie center shift, fixed by the first `rings` call of a pass.
    stretch_offset: Option<i32>,
}

impl TextGraphics {
    pub fn new(width: usize, height: usize) -> ChartResult<Self> {
        Self::with_config(TextGraphicsConfig::new(width, height))
    }

    pub fn with_config(config: TextGraphicsConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            canvas: TextCanvas::new(config.width, config.height)?,
            config,
            stretch_offset: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TextGraphicsConfig {
        &self.config
    }

    #[must_use]
    pub fn canvas(&self) -> &TextCanvas {
        &self.canvas
    }

    /// Direct canvas access for decorations the chart library does not know.
    pub fn canvas_mut(&mut self) -> &mut TextCanvas {
        &mut self.canvas
    }

    #[must_use]
    pub fn stretch_offset(&self) -> Option<i32> {
        self.stretch_offset
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.canvas.render()
    }

    fn glyph(&self, style: &Style) -> char {
        style.glyph_or(self.config.fallback_symbol)
    }

    fn fill_glyph(&self, style: &Style, fill_color: &str) -> char {
        if fill_color.eq_ignore_ascii_case(BLACK) {
            '#'
        } else if fill_color.eq_ignore_ascii_case(WHITE) {
            ' '
        } else {
            self.glyph(style)
        }
    }

    fn multiline_text(&mut self, x: i32, y: i32, text: &str) {
        for (dy, line) in (0..).zip(text.split('\n')) {
            self.canvas
                .text(x, y.saturating_add(dy), line, TextAlign::START);
        }
    }
}

impl fmt::Display for TextGraphics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.canvas, f)
    }
}

/// Maps a `"tl"`-style code onto a canvas alignment.
///
/// Only the horizontal letter matters. A known letter with a non-zero
/// rotation writes vertically; unknown codes always center horizontally.
fn parse_align(align: &str, rot: i32) -> TextAlign {
    let anchor = match align.chars().last() {
        Some('l') => TextAnchor::Start,
        Some('c') => TextAnchor::Center,
        Some('r') => TextAnchor::End,
        _ => return TextAlign::CENTER,
    };
    if rot == 0 {
        TextAlign::horizontal(anchor)
    } else {
        TextAlign::vertical(anchor)
    }
}

/// Shortest decimal form, switching to `1.5e+07` style for exponents below
/// -4 or from 6 on.
fn format_limit(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };
    if (-4..6).contains(&exponent) {
        format!("{value}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    saturate_i32((i64::from(a) + i64::from(b)) / 2)
}

impl Graphics for TextGraphics {
    fn begin(&mut self) {
        trace!(
            width = self.config.width,
            height = self.config.height,
            "text render pass begin"
        );
        self.canvas.clear();
        self.stretch_offset = None;
    }

    fn end(&mut self) {
        trace!("text render pass end");
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.config.width, self.config.height)
    }

    fn font_metrics(&self, _font: &Font) -> FontMetrics {
        FontMetrics {
            char_width: 1.0,
            line_height: 1,
            monospaced: true,
        }
    }

    fn text_len(&self, text: &str, _font: &Font) -> i32 {
        i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
    }

    fn style(&self, _element: &str) -> Style {
        Style::default()
    }

    fn font(&self, _element: &str) -> Font {
        Font::default()
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: &Style) {
        let glyph = self.glyph(style);
        self.canvas.line(x0, y0, x1, y1, glyph);
    }

    fn text(&mut self, x: i32, y: i32, text: &str, align: &str, rot: i32, _font: &Font) {
        self.canvas.text(x, y, text, parse_align(align, rot));
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &Style) {
        let (x, w) = (i64::from(x), i64::from(w));
        let (y, h) = (i64::from(y), i64::from(h));
        let (x, w) = if w < 0 { (x + w, -w) } else { (x, w) };
        let (y, h) = if h < 0 { (y + h, -h) } else { (y, h) };
        if w == 0 || h == 0 {
            return;
        }
        let (x1, y1) = (x + w - 1, y + h - 1);

        if style.line_width > 0 {
            let glyph = self.glyph(style);
            self.canvas.outline_at(x, y, x1, y1, glyph);
        }

        if let Some(fill_color) = &style.fill_color {
            if w > 2 && h > 2 {
                let fill = self.fill_glyph(style, fill_color);
                self.canvas.fill_at(x + 1, y + 1, x1 - 1, y1 - 1, fill);
            }
        }
    }

    fn symbol(&mut self, x: i32, y: i32, style: &Style) {
        let glyph = self.glyph(style);
        self.canvas.put(x, y, glyph);
    }

    fn title(&mut self, text: &str) {
        let x = i32::try_from(self.config.width / 2).unwrap_or(i32::MAX);
        self.text(x, 1, text, "tc", 0, &Font::default());
    }

    fn x_axis(&mut self, range: &Range, y: i32, y1: i32) {
        let mirror = range.tic_setting.mirror;
        let xa = range.data_to_screen(range.min);
        let xe = range.data_to_screen(range.max);
        let below = y.saturating_add(1);
        let below2 = y.saturating_add(2);
        self.canvas.line(xa, y, xe, y, '-');
        if mirror >= 1 {
            self.canvas.line(xa, y1, xe, y1, '-');
        }

        if range.show_zero && range.contains_zero() {
            let z = range.data_to_screen(0.0);
            let (top, bottom) = (i64::from(y1) + 2, i64::from(y) - 1);
            if top <= bottom {
                self.canvas.vline_at(z.into(), top, bottom, ':');
            }
        }

        if !range.label.is_empty() {
            let yy = if range.tic_setting.hide { below } else { below2 };
            self.canvas
                .text(midpoint(xa, xe), yy, &range.label, TextAlign::CENTER);
        }

        for tic in &range.tics {
            let mark = tic.pos.map(|pos| range.data_to_screen(pos));
            let lx = range.data_to_screen(tic.label_pos);
            if range.time {
                if let Some(x) = mark {
                    self.canvas.put(x, y, '|');
                    if mirror >= 2 {
                        self.canvas.put(x, y1, '|');
                    }
                    self.canvas.put(x, below, '|');
                }
                if tic.align == TicAlign::Left {
                    self.canvas
                        .text(lx.saturating_add(1), below, &tic.label, TextAlign::START);
                } else {
                    self.canvas.text(lx, below, &tic.label, TextAlign::CENTER);
                }
            } else {
                if let Some(x) = mark {
                    self.canvas.put(x, y, '+');
                    if mirror >= 2 {
                        self.canvas.put(x, y1, '+');
                    }
                }
                self.canvas.text(lx, below, &tic.label, TextAlign::CENTER);
            }
        }

        if range.show_limits {
            let (low, high) = if range.time {
                (
                    range
                        .t_min
                        .map(|t| t.format(LIMIT_TIME_FORMAT).to_string())
                        .unwrap_or_default(),
                    range
                        .t_max
                        .map(|t| t.format(LIMIT_TIME_FORMAT).to_string())
                        .unwrap_or_default(),
                )
            } else {
                (format_limit(range.min), format_limit(range.max))
            };
            self.canvas.text(xa, below2, &low, TextAlign::START);
            self.canvas.text(xe, below2, &high, TextAlign::END);
        }
    }

    fn y_axis(&mut self, range: &Range, x: i32, x1: i32) {
        let mirror = range.tic_setting.mirror;
        let ya = range.data_to_screen(range.min);
        let ye = range.data_to_screen(range.max);
        self.canvas.line(x, ya, x, ye, '|');
        if mirror >= 1 {
            self.canvas.line(x1, ya, x1, ye, '|');
        }

        if range.show_zero && range.contains_zero() {
            let z = range.data_to_screen(0.0);
            self.canvas
                .dotted_hline_at(i64::from(x) + 1, i64::from(x1) - 1, z.into(), '-');
        }

        if !range.label.is_empty() {
            self.canvas.text(
                1,
                midpoint(ya, ye),
                &range.label,
                TextAlign::vertical(TextAnchor::Center),
            );
        }

        for tic in &range.tics {
            let ly = range.data_to_screen(tic.label_pos);
            if let Some(pos) = tic.pos {
                let y = range.data_to_screen(pos);
                self.canvas.put(x, y, '+');
                if mirror >= 2 {
                    self.canvas.put(x1, y, '+');
                }
                if range.time && tic.align == TicAlign::Center {
                    self.canvas.line(x.saturating_sub(2), y, x.saturating_sub(1), y, '-');
                }
            }
            if range.time {
                let label = format!("{} ", tic.label);
                self.canvas
                    .text(x.saturating_sub(1), ly, &label, TextAlign::END);
            } else {
                self.canvas
                    .text(x.saturating_sub(2), ly, &tic.label, TextAlign::END);
            }
        }
    }

    fn scatter(&mut self, points: &[ErrorPoint], plot_style: PlotStyle, style: &Style) {
        // Off-screen coordinates saturate at the i32 range; the canvas clips them.
        for point in points {
            let (xl, yl, xh, yh) = point.bounding_box();
            if point.delta_x.is_some() {
                let y = point.y as i32;
                self.canvas.line(xl as i32, y, xh as i32, y, '-');
            }
            if point.delta_y.is_some() {
                let x = point.x as i32;
                self.canvas.line(x, yl as i32, x, yh as i32, '|');
            }
        }

        let glyph = self.glyph(style);
        if plot_style.contains(PlotStyle::LINES) {
            for pair in points.windows(2) {
                self.canvas.line(
                    pair[0].x as i32,
                    pair[0].y as i32,
                    pair[1].x as i32,
                    pair[1].y as i32,
                    glyph,
                );
            }
        }

        if plot_style.contains(PlotStyle::POINTS) {
            for point in points {
                self.canvas.put(point.x as i32, point.y as i32, glyph);
            }
        }
    }

    fn boxes(&mut self, boxes: &[BoxStats], width: i32, style: &Style) {
        let width = width.max(1);
        let width = if width % 2 == 0 { width + 1 } else { width };
        let hbw = (width - 1) / 2;
        let glyph = if is_printable_ascii(style.symbol) {
            style.symbol
        } else {
            self.config.box_symbol
        };

        for stats in boxes {
            let x = stats.x as i32;
            let (q1, q3) = (stats.q1 as i32, stats.q3 as i32);
            let (left, right) = (x.saturating_sub(hbw), x.saturating_add(hbw));
            self.canvas.frame(left, q1, right, q3, 1, Some(' '));

            if let Some(median) = stats.median {
                let med = median as i32;
                self.canvas.line(left, med, right, med, '-');
                self.canvas.put(left, med, '+');
                self.canvas.put(right, med, '+');
            }

            if let Some(mean) = stats.mean {
                self.canvas.put(x, mean as i32, glyph);
            }

            if let Some(high) = stats.high {
                let high = high as i32;
                if high < q3 {
                    self.canvas.line(x, high, x, q3 - 1, '|');
                }
            }

            if let Some(low) = stats.low {
                let low = low as i32;
                if low > q1 {
                    self.canvas.line(x, q1 + 1, x, low, '|');
                }
            }

            for outlier in &stats.outliers {
                self.canvas.put(x, *outlier as i32, glyph);
            }
        }
    }

    fn bars(&mut self, bars: &[BarInfo], style: &Style) {
        generic_bars(self, bars, style);
    }

    fn key(&mut self, x: i32, y: i32, key: &Key) {
        let placement = key.place();
        if placement.is_empty() {
            return;
        }
        let layout = key.layout(&*self, &placement);

        let style = self.style("key");
        if style.line_width > 0 || style.fill_color.is_some() {
            self.canvas
                .rect(x, y, layout.width, layout.height, 1, Some(' '));
        }

        let spacing = key.spacing;
        let symbol_width = spacing.symbol_width as i32;
        let text_offset = (spacing.symbol_width + spacing.symbol_sep) as i32;
        let row_sep = spacing.row_sep as i32;
        let mut x = x.saturating_add(spacing.hor_sep as i32);
        let y = y.saturating_add((spacing.vert_sep as i32).max(1));

        for (ci, column) in placement.iter().enumerate() {
            let mut yy = y;
            for (ri, entry) in column.iter().enumerate() {
                let Some(entry) = entry else {
                    continue;
                };
                let sample_x = x.saturating_add(symbol_width / 2);
                match entry.plot_style {
                    None => self.multiline_text(x, yy, &entry.text),
                    Some(plot_style) => {
                        if plot_style.contains(PlotStyle::LINES) {
                            let end = x.saturating_add(symbol_width);
                            self.line(x, yy, end, yy, &entry.style);
                        }
                        if plot_style.contains(PlotStyle::POINTS) {
                            self.symbol(sample_x, yy, &entry.style);
                        }
                        if plot_style.contains(PlotStyle::BOX) {
                            let glyph = self.glyph(&entry.style);
                            self.canvas.put(sample_x, yy, glyph);
                        }
                        self.multiline_text(x.saturating_add(text_offset), yy, &entry.text);
                    }
                }
                yy = yy.saturating_add(layout.row_heights[ri].saturating_add(row_sep));
            }
            x = x.saturating_add(
                (spacing.symbol_width
                    + spacing.symbol_sep
                    + spacing.col_sep
                    + layout.column_widths[ci] as f32) as i32,
            );
        }
    }

    fn rings(&mut self, wedges: &[Wedge], x: i32, y: i32, ro: i32, ri: i32) {
        let factor = self.config.circle_stretch_factor;
        let offset = match self.stretch_offset {
            Some(offset) => offset,
            None => {
                let offset = (f64::from(ro) * (factor - 1.0)) as i32;
                debug!(offset, ro, factor, "shifting pie center for cell aspect");
                self.stretch_offset = Some(offset);
                offset
            }
        };

        let wedges: Vec<Wedge> = wedges
            .iter()
            .cloned()
            .map(|mut wedge| {
                wedge.style.line_width = 1;
                wedge
            })
            .collect();
        generic_rings(self, &wedges, x.saturating_add(offset), y, ro, ri, factor);
    }
}
