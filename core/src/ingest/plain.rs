use crate::prelude::{Sample, TrailError, TrailResult};
use crate::telemetry::log::LogManager;
use std::fs;
use std::path::Path;

const X_FIELD: usize = 2;
const Y_FIELD: usize = 3;

/// Reads a comma-separated trajectory where every line carries x at field 2
/// and y at field 3. Only every `stride`-th raw line is parsed; any bad line
/// among those aborts the whole load.
pub fn load_plain(path: &Path, stride: usize) -> TrailResult<Vec<Sample>> {
    let text = fs::read_to_string(path).map_err(|source| TrailError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_plain(&text, stride, path)?;
    LogManager::for_stage("loader").record(&format!(
        "{}: {} planar samples",
        path.display(),
        samples.len()
    ));
    Ok(samples)
}

/// Lines skipped by the stride are never parsed. A stride of 0 reads every
/// line. `origin` is only used to label errors.
pub fn parse_plain(text: &str, stride: usize, origin: &Path) -> TrailResult<Vec<Sample>> {
    text.lines()
        .enumerate()
        .step_by(stride.max(1))
        .map(|(index, line)| {
            let fields: Vec<&str> = line.split(',').collect();
            let x = parse_field(&fields, X_FIELD, index, origin)?;
            let y = parse_field(&fields, Y_FIELD, index, origin)?;
            Ok(Sample::planar(index, x, y))
        })
        .collect()
}

fn parse_field(fields: &[&str], column: usize, index: usize, origin: &Path) -> TrailResult<f64> {
    let raw = fields.get(column).map(|f| f.trim()).unwrap_or("");
    raw.parse::<f64>().map_err(|_| TrailError::Parse {
        path: origin.to_path_buf(),
        line: index + 1,
        column,
        value: raw.to_string(),
    })
}
