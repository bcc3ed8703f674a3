use crate::math::geometry::GeometryHelper;
use crate::prelude::{ProjectedPoint, Projection, Sample};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCALE_DENOMINATOR: u64 = 174_000_000;
pub const METERS_PER_AU: f64 = 149_597_870_000.0;

/// Linear scale applied to radial distances.
///
/// `meters_per_unit` is always `meters_per_au / scale_denominator`; the
/// fields are private so the derived value cannot drift from its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    scale_denominator: u64,
    meters_per_au: f64,
    meters_per_unit: f64,
}

impl ScaleConfig {
    /// A zero denominator is treated as 1:1.
    pub fn new(scale_denominator: u64, meters_per_au: f64) -> Self {
        let scale_denominator = scale_denominator.max(1);
        Self {
            scale_denominator,
            meters_per_au,
            meters_per_unit: meters_per_au / scale_denominator as f64,
        }
    }

    pub fn with_denominator(scale_denominator: u64) -> Self {
        Self::new(scale_denominator, METERS_PER_AU)
    }

    pub fn scale_denominator(&self) -> u64 {
        self.scale_denominator
    }

    pub fn meters_per_au(&self) -> f64 {
        self.meters_per_au
    }

    pub fn meters_per_unit(&self) -> f64 {
        self.meters_per_unit
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::with_denominator(DEFAULT_SCALE_DENOMINATOR)
    }
}

/// Nominal position of the Sun on the output globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoReference {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffineConfig {
    pub reference: GeoReference,
    pub scale_factor: f64,
}

impl Default for AffineConfig {
    fn default() -> Self {
        Self {
            reference: GeoReference {
                lon: -57.609083,
                lat: -25.280945,
            },
            scale_factor: DEFAULT_SCALE_DENOMINATOR as f64,
        }
    }
}

/// Planar offset around a reference point.
///
/// Degrees are added linearly with no correction for map distortion, so the
/// result is only meaningful while `x` and `y` are small next to the scale
/// factor.
pub struct AffineProjection {
    config: AffineConfig,
}

impl AffineProjection {
    pub fn new(config: AffineConfig) -> Self {
        Self { config }
    }
}

impl Projection for AffineProjection {
    fn project(&self, sample: &Sample) -> ProjectedPoint {
        let AffineConfig {
            reference,
            scale_factor,
        } = self.config;
        ProjectedPoint {
            lon: reference.lon + sample.x / scale_factor,
            lat: reference.lat + sample.y / scale_factor,
            altitude: 0.0,
        }
    }
}

/// Heliocentric AU vectors to longitude, latitude and scaled altitude.
pub struct SphericalProjection {
    scale: ScaleConfig,
}

impl SphericalProjection {
    pub fn new(scale: ScaleConfig) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    /// Rebuilds the AU vector a point was projected from.
    pub fn to_cartesian(&self, point: &ProjectedPoint) -> [f64; 3] {
        let r = point.altitude / self.scale.meters_per_unit();
        let (lon, lat) = (point.lon.to_radians(), point.lat.to_radians());
        [
            r * lat.cos() * lon.cos(),
            r * lat.cos() * lon.sin(),
            r * lat.sin(),
        ]
    }
}

impl Projection for SphericalProjection {
    fn project(&self, sample: &Sample) -> ProjectedPoint {
        let (x, y, z) = (sample.x, sample.y, sample.z);
        let r_xy = GeometryHelper::planar_radius(x, y);
        let r = GeometryHelper::radial_distance(x, y, z);

        let lon = y.atan2(x).to_degrees();
        // On the polar axis the sign of z picks the pole; z == 0 lands on -90.
        let lat = if r_xy != 0.0 {
            z.atan2(r_xy).to_degrees()
        } else if z > 0.0 {
            90.0
        } else {
            -90.0
        };

        ProjectedPoint {
            lon,
            lat,
            altitude: r * self.scale.meters_per_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, z: f64) -> Sample {
        Sample::new(crate::prelude::SampleTime::Index(0), x, y, z)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{} differs from {} by more than {}",
            actual,
            expected,
            tolerance
        );
    }

    #[test]
    fn scale_config_derives_meters_per_unit() {
        let scale = ScaleConfig::default();
        assert_eq!(scale.scale_denominator(), 174_000_000);
        assert_close(scale.meters_per_unit(), 859.757_873_563, 1e-6);
    }

    #[test]
    fn scale_config_never_divides_by_zero() {
        let scale = ScaleConfig::with_denominator(0);
        assert_eq!(scale.scale_denominator(), 1);
        assert_eq!(scale.meters_per_unit(), METERS_PER_AU);
    }

    #[test]
    fn affine_shifts_by_one_degree_per_scale_factor() {
        let projection = AffineProjection::new(AffineConfig::default());
        let point = projection.project(&Sample::planar(0, 174_000_000.0, 0.0));
        assert_close(point.lon, -56.609083, 1e-9);
        assert_close(point.lat, -25.280945, 1e-9);
        assert_eq!(point.altitude, 0.0);
    }

    #[test]
    fn spherical_handles_poles() {
        let projection = SphericalProjection::new(ScaleConfig::default());

        let north = projection.project(&sample(0.0, 0.0, 5.0));
        assert_eq!(north.lon, 0.0);
        assert_eq!(north.lat, 90.0);

        let south = projection.project(&sample(0.0, 0.0, -5.0));
        assert_eq!(south.lat, -90.0);
    }

    #[test]
    fn spherical_origin_maps_to_south_pole() {
        let projection = SphericalProjection::new(ScaleConfig::default());
        let point = projection.project(&sample(0.0, 0.0, 0.0));
        assert_eq!(point.lon, 0.0);
        assert_eq!(point.lat, -90.0);
        assert_eq!(point.altitude, 0.0);
    }

    #[test]
    fn spherical_equator_and_quadrants() {
        let projection = SphericalProjection::new(ScaleConfig::default());

        let point = projection.project(&sample(0.0, 1.0, 0.0));
        assert_close(point.lon, 90.0, 1e-12);
        assert_close(point.lat, 0.0, 1e-12);
        assert_close(point.altitude, projection.scale().meters_per_unit(), 1e-9);

        let point = projection.project(&sample(-1.0, -1.0, 2f64.sqrt()));
        assert_close(point.lon, -135.0, 1e-12);
        assert_close(point.lat, 45.0, 1e-12);
    }

    #[test]
    fn spherical_round_trip_recovers_vector() {
        let projection = SphericalProjection::new(ScaleConfig::default());
        let vectors = [
            [1.0, 0.0, 0.0],
            [-5.2, 0.3, 0.11],
            [95.4, -120.7, 33.2],
            [0.0, 0.0, 4.0],
            [-0.39, -0.01, -0.04],
        ];

        for vector in vectors {
            let point = projection.project(&sample(vector[0], vector[1], vector[2]));
            let rebuilt = projection.to_cartesian(&point);
            let norm = GeometryHelper::radial_distance(vector[0], vector[1], vector[2]);
            for axis in 0..3 {
                assert_close(rebuilt[axis], vector[axis], norm * 1e-6);
            }
        }
    }
}
