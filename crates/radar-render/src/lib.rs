//! Presentation for the risk radar: theme palettes, the SVG chart, and the
//! report formats built on them.

pub mod reporters;
pub mod svg;
pub mod theme;
pub mod view;

pub use reporters::{available_formats, create_reporter, Reporter};
pub use svg::{ChartColors, RadarChartSvg};
pub use theme::Palette;
pub use view::{ChartOptions, RadarView};
