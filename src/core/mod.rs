//! Data handed to a backend by the charting library.

pub mod key;
pub mod range;
pub mod series;
pub mod style;

pub use key::{Key, KeyEntry, KeyLayout, KeyPlacement, KeySpacing};
pub use range::{Range, Tic, TicAlign, TicSetting};
pub use series::{BarInfo, BarLabel, BoxStats, ErrorPoint, LabelPlacement, Wedge};
pub use style::{
    BLACK, Font, FontMetrics, FontSize, LineStyle, PlotStyle, Style, WHITE, is_printable_ascii,
};
