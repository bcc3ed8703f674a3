//! Core pipeline for turning heliocentric trajectory samples into KML trails.
//!
//! Data flows once through loader, optional decimation, projection and the
//! KML emitter. All configuration is explicit and immutable once built.

pub mod ingest;
pub mod kml;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{
    ProjectedPoint, ProjectedSeries, Projection, Sample, SampleTime, Series, TrailError,
    TrailResult,
};
