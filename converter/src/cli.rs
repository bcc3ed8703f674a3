use crate::workflow::config::{TrackConfig, TrailConfig};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use trailcore::processing::DEFAULT_SCALE_DENOMINATOR;
use trailcore::TrailResult;

/// Printed when `vectors-to-kml` is started without any argument.
pub const USAGE: &str = "\
Usage:
  vectors-to-kml --inputs voyager1.csv voyager2.csv jupiter.csv saturn.csv uranus.csv neptune.csv ceres.csv pluto.csv \\
                 --names \"Voyager 1\" \"Voyager 2\" \"Jupiter\" \"Saturn\" \"Uranus\" \"Neptune\" \"Ceres\" \"Pluto\" \\
                 --output solar_trajectories.kml

Expected CSV (HORIZONS heliocentric vectors, no header): index, date, X, Y, Z in AU.
Lines starting with '#' are ignored.
Recommended HORIZONS options:
- Target: Voyager 1, Voyager 2, Mercury..Neptune, Ceres, Pluto system barycenter.
- Center: Sun (body center)
- Coordinates: Ecliptic & Mean Equinox of Reference Epoch (or Equatorial J2000).
- Output: Vector Table, CSV, 1 day step.

Note: the KML is non-geographic. The Earth globe stands in for a solar globe;
relative geometry and distances are correct at the chosen scale.
";

/// True when the process received nothing beyond its own name, in which
/// case `USAGE` is printed and the process exits successfully.
pub fn wants_usage<I: ExactSizeIterator>(args: I) -> bool {
    args.len() <= 1
}

#[derive(Parser, Debug)]
#[command(
    name = "vectors-to-kml",
    author,
    version,
    about = "Convert HORIZONS heliocentric vectors (AU) to non-geographic KML tracks"
)]
pub struct TrackArgs {
    /// CSV vector tables exported from HORIZONS
    #[arg(long, num_args = 1.., required = true)]
    pub inputs: Vec<PathBuf>,
    /// Display names, one per input and in the same order
    #[arg(long, num_args = 1.., required = true)]
    pub names: Vec<String>,
    /// Destination KML path
    #[arg(long)]
    pub output: PathBuf,
    /// Linear scale as 1:N
    #[arg(long, default_value_t = DEFAULT_SCALE_DENOMINATOR)]
    pub scale_denominator: u64,
}

impl TrackArgs {
    pub fn into_config(self) -> TrailResult<TrackConfig> {
        TrackConfig::from_args(self.inputs, self.names, self.output, self.scale_denominator)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "trail-to-kml",
    author,
    version,
    about = "Decimate a planar trajectory and emit it as a KML line"
)]
pub struct TrailArgs {
    /// Load trail settings from YAML instead of the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl TrailArgs {
    pub fn into_config(self) -> anyhow::Result<TrailConfig> {
        match self.config {
            Some(path) => {
                info!("loading trail config from {}", path.display());
                TrailConfig::load(path)
            }
            None => {
                info!("no --config given, using built-in trail settings");
                Ok(TrailConfig::default())
            }
        }
    }
}
