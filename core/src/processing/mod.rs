pub mod decimation;
pub mod projection;

pub use decimation::{DecimationConfig, Decimator};
pub use projection::{
    AffineConfig, AffineProjection, GeoReference, ScaleConfig, SphericalProjection,
    DEFAULT_SCALE_DENOMINATOR, METERS_PER_AU,
};
