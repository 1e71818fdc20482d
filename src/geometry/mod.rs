pub mod bounds;
pub mod centroid;
pub mod containment;
pub mod viewport;

pub use bounds::Bounds;
pub use centroid::vertex_mean;
pub use containment::{ring_contains_box, ring_contains_point};
pub use viewport::ViewTransform;
