//! Drivers for the two conversion pipelines.
//!
//! * `vectors-to-kml` — one `gx:Track` per HORIZONS vector table.
//! * `trail-to-kml` — a decimated planar trail around a fixed reference point.

pub mod cli;
pub mod workflow;
