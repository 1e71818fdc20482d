pub mod metrics;
pub mod placement;

pub use metrics::{FONT_SIZE_MAX, FONT_SIZE_MIN, TextMetrics, clamp_font_size};
pub use placement::{LabelPlacement, PlacementKind, place_label};
