pub mod series;
pub mod types;

pub use series::{CategoryAxis, MarkLine, MarkLineItem, MarkLineKind, SeriesDescriptor};
pub use types::{ChartKind, Theme, Viewport};
