pub mod river;

pub use river::{GeometryError, RiverPolygon};
