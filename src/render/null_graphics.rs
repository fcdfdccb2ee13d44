use crate::core::{
    BarInfo, BoxStats, ErrorPoint, Font, FontMetrics, Key, PlotStyle, Range, Style, Wedge,
};
use crate::render::Graphics;
use crate::render::generic::{generic_bars, generic_rings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullGraphicsStats {
    pub lines: usize,
    pub texts: usize,
    pub rects: usize,
    pub symbols: usize,
    pub axes: usize,
    pub series: usize,
}

/// Graphics backend that draws nothing and only counts calls.
///
/// Bars and rings still go through the generic decompositions so their
/// primitive counts are observable in headless runs and tests.
#[derive(Debug, Clone)]
pub struct NullGraphics {
    pub width: usize,
    pub height: usize,
    pub stats: NullGraphicsStats,
    pub passes: usize,
}

impl NullGraphics {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stats: NullGraphicsStats::default(),
            passes: 0,
        }
    }
}

impl Graphics for NullGraphics {
    fn begin(&mut self) {
        self.stats = NullGraphicsStats::default();
    }

    fn end(&mut self) {
        self.passes += 1;
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
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

    fn line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _style: &Style) {
        self.stats.lines += 1;
    }

    fn text(&mut self, _x: i32, _y: i32, _text: &str, _align: &str, _rot: i32, _font: &Font) {
        self.stats.texts += 1;
    }

    fn rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _style: &Style) {
        self.stats.rects += 1;
    }

    fn symbol(&mut self, _x: i32, _y: i32, _style: &Style) {
        self.stats.symbols += 1;
    }

    fn title(&mut self, _text: &str) {
        self.stats.texts += 1;
    }

    fn x_axis(&mut self, _range: &Range, _y: i32, _y1: i32) {
        self.stats.axes += 1;
    }

    fn y_axis(&mut self, _range: &Range, _x: i32, _x1: i32) {
        self.stats.axes += 1;
    }

    fn scatter(&mut self, _points: &[ErrorPoint], _plot_style: PlotStyle, _style: &Style) {
        self.stats.series += 1;
    }

    fn boxes(&mut self, _boxes: &[BoxStats], _width: i32, _style: &Style) {
        self.stats.series += 1;
    }

    fn bars(&mut self, bars: &[BarInfo], style: &Style) {
        generic_bars(self, bars, style);
    }

    fn key(&mut self, _x: i32, _y: i32, _key: &Key) {}

    fn rings(&mut self, wedges: &[Wedge], x: i32, y: i32, ro: i32, ri: i32) {
        generic_rings(self, wedges, x, y, ro, ri, 1.0);
    }
}
