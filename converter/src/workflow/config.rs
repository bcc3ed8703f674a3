use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use trailcore::kml::TrailStyle;
use trailcore::processing::{AffineConfig, DecimationConfig, ScaleConfig};
use trailcore::{TrailError, TrailResult};

/// Settings for the planar trail run. Keys absent from a YAML file keep
/// their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub decimation: DecimationConfig,
    pub affine: AffineConfig,
    pub style: TrailStyle,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("voyager1.txt"),
            output: PathBuf::from("voyager1.kml"),
            decimation: DecimationConfig::default(),
            affine: AffineConfig::default(),
            style: TrailStyle::default(),
        }
    }
}

impl TrailConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading trail config {}", path_ref.display()))?;
        let config: TrailConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing trail config {}", path_ref.display()))?;
        Ok(config)
    }
}

/// Settings for the multi-series track run.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackConfig {
    pub inputs: Vec<PathBuf>,
    pub names: Vec<String>,
    pub output: PathBuf,
    pub scale: ScaleConfig,
}

impl TrackConfig {
    /// Pairs every input with its display name. Fails before touching the
    /// filesystem when the counts differ.
    pub fn from_args(
        inputs: Vec<PathBuf>,
        names: Vec<String>,
        output: PathBuf,
        scale_denominator: u64,
    ) -> TrailResult<Self> {
        if inputs.len() != names.len() {
            return Err(TrailError::ArgumentMismatch {
                inputs: inputs.len(),
                names: names.len(),
            });
        }
        Ok(Self {
            inputs,
            names,
            output,
            scale: ScaleConfig::with_denominator(scale_denominator),
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &String)> {
        self.inputs.iter().zip(&self.names)
    }
}
