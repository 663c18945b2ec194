//! Renderer-agnostic view models for the map, charts and table.
//!
//! Every builder here returns a complete replacement for the previous output;
//! renderers never patch what they drew before.

pub mod charts;
pub mod map;
pub mod table;

pub use charts::{ChartKind, ChartSpec, Charts, Legend, TickFormat};
pub use map::{MapMarker, MapView, MarkerStyle, Popup, markers};
pub use table::{COLUMNS, TableRow, rows};
