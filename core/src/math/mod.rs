pub mod geometry;

pub use geometry::{planar_distance, GeometryHelper};
