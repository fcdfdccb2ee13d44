mod canvas;
pub mod generic;
mod null_graphics;
mod text_config;
mod text_graphics;

pub use canvas::{TextAlign, TextAnchor, TextCanvas, TextDirection};
pub use null_graphics::{NullGraphics, NullGraphicsStats};
pub use text_config::{
    DEFAULT_BOX_SYMBOL, DEFAULT_CIRCLE_STRETCH_FACTOR, DEFAULT_FALLBACK_SYMBOL,
    TextGraphicsConfig,
};
pub use text_graphics::TextGraphics;

use crate::core::{
    BarInfo, BoxStats, ErrorPoint, Font, FontMetrics, Key, PlotStyle, Range, Style, Wedge,
};

/// Contract a backend fulfills for the charting library.
///
/// The library computes every coordinate, tic and style up front; a backend
/// only turns each call into output. Calls between `begin` and `end` form one
/// render pass.
pub trait Graphics {
    fn begin(&mut self);
    fn end(&mut self);

    fn dimensions(&self) -> (usize, usize);
    fn font_metrics(&self, font: &Font) -> FontMetrics;
    fn text_len(&self, text: &str, font: &Font) -> i32;
    /// Default style for a chart element such as `"key"` or `"title"`.
    fn style(&self, element: &str) -> Style;
    fn font(&self, element: &str) -> Font;

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, style: &Style);
    /// `align` is a vertical/horizontal code pair such as `"tl"` or `"cc"`;
    /// `rot` is the text rotation in degrees.
    fn text(&mut self, x: i32, y: i32, text: &str, align: &str, rot: i32, font: &Font);
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, style: &Style);
    fn symbol(&mut self, x: i32, y: i32, style: &Style);
    fn title(&mut self, text: &str);

    fn x_axis(&mut self, range: &Range, y: i32, y1: i32);
    fn y_axis(&mut self, range: &Range, x: i32, x1: i32);

    fn scatter(&mut self, points: &[ErrorPoint], plot_style: PlotStyle, style: &Style);
    fn boxes(&mut self, boxes: &[BoxStats], width: i32, style: &Style);
    fn bars(&mut self, bars: &[BarInfo], style: &Style);
    fn key(&mut self, x: i32, y: i32, key: &Key);
    fn rings(&mut self, wedges: &[Wedge], x: i32, y: i32, ro: i32, ri: i32);
}
