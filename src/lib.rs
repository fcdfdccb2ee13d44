//! chart-txt: plain-text rendering backend for charts.
//!
//! The charting library computes ranges, tics, layout and styles and hands
//! the resulting primitives to a [`render::Graphics`] backend. This crate
//! provides [`render::TextGraphics`], which draws them onto a character grid
//! that prints as-is in a terminal or text file.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use render::{Graphics, TextCanvas, TextGraphics, TextGraphicsConfig};
