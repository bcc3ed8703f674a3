use crate::prelude::Sample;

/// Euclidean distance between two samples in the x/y plane; z is ignored.
pub fn planar_distance(a: &Sample, b: &Sample) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

pub struct GeometryHelper;

impl GeometryHelper {
    pub fn radial_distance(x: f64, y: f64, z: f64) -> f64 {
        (x * x + y * y + z * z).sqrt()
    }

    pub fn planar_radius(x: f64, y: f64) -> f64 {
        x.hypot(y)
    }
}
