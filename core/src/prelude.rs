use std::fmt;
use std::path::PathBuf;

/// Time tag attached to a sample: either a row index or the literal date
/// string read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleTime {
    Index(usize),
    Stamp(String),
}

impl fmt::Display for SampleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleTime::Index(index) => write!(f, "{}", index),
            SampleTime::Stamp(stamp) => f.write_str(stamp),
        }
    }
}

/// One heliocentric position read from a single input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: SampleTime,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(time: SampleTime, x: f64, y: f64, z: f64) -> Self {
        Self { time, x, y, z }
    }

    /// Planar sample with no altitude component.
    pub fn planar(index: usize, x: f64, y: f64) -> Self {
        Self::new(SampleTime::Index(index), x, y, 0.0)
    }
}

/// Output coordinate triple. `altitude` is zero for planar projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub lon: f64,
    pub lat: f64,
    pub altitude: f64,
}

/// Named, ordered samples loaded from one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A series after projection; `times[i]` belongs to `points[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedSeries {
    pub name: String,
    pub times: Vec<SampleTime>,
    pub points: Vec<ProjectedPoint>,
}

impl ProjectedSeries {
    pub fn from_series<P: Projection + ?Sized>(series: &Series, projection: &P) -> Self {
        Self {
            name: series.name.clone(),
            times: series.samples.iter().map(|s| s.time.clone()).collect(),
            points: projection.project_all(&series.samples),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Errors raised anywhere in the pipeline. Every variant aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum TrailError {
    #[error("{}:{}: field {} is not a number: {:?}", .path.display(), .line, .column, .value)]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        value: String,
    },
    #[error(
        "{}:{}: expected at least {} columns, found {}",
        .path.display(),
        .line,
        .required,
        .found
    )]
    MissingColumn {
        path: PathBuf,
        line: usize,
        found: usize,
        required: usize,
    },
    #[error("--inputs and --names must have the same length ({inputs} inputs, {names} names)")]
    ArgumentMismatch { inputs: usize, names: usize },
    #[error("{}: no data rows", .path.display())]
    EmptyInput { path: PathBuf },
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type TrailResult<T> = Result<T, TrailError>;

/// Maps a sample's spatial coordinates onto the output globe.
pub trait Projection {
    fn project(&self, sample: &Sample) -> ProjectedPoint;

    fn project_all(&self, samples: &[Sample]) -> Vec<ProjectedPoint> {
        samples.iter().map(|sample| self.project(sample)).collect()
    }
}
