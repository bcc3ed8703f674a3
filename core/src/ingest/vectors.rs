use crate::prelude::{Sample, SampleTime, TrailError, TrailResult};
use crate::telemetry::log::LogManager;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lines starting with this byte are skipped.
pub const COMMENT_MARKER: u8 = b'#';

const DATE_COLUMN: usize = 1;
const XYZ_COLUMNS: [usize; 3] = [2, 3, 4];
const REQUIRED_COLUMNS: usize = 5;

/// Loads a headerless vector table laid out as `index, date, x, y, z`
/// (extra trailing columns are ignored). Coordinates are in AU.
pub fn load_vectors(path: &Path) -> TrailResult<Vec<Sample>> {
    let file = File::open(path).map_err(|source| TrailError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = read_vectors(file, path)?;
    LogManager::for_stage("loader").record(&format!(
        "{}: {} vector samples",
        path.display(),
        samples.len()
    ));
    Ok(samples)
}

/// `origin` labels errors; nothing is read from it.
pub fn read_vectors<R: Read>(input: R, origin: &Path) -> TrailResult<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(COMMENT_MARKER))
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut samples = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| TrailError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(samples.len() + 1);

        if record.len() < REQUIRED_COLUMNS {
            return Err(TrailError::MissingColumn {
                path: origin.to_path_buf(),
                line,
                found: record.len(),
                required: REQUIRED_COLUMNS,
            });
        }

        let [x, y, z] = XYZ_COLUMNS.map(|column| parse_column(&record, column, line, origin));
        let time = SampleTime::Stamp(record[DATE_COLUMN].to_string());
        samples.push(Sample::new(time, x?, y?, z?));
    }

    if samples.is_empty() {
        return Err(TrailError::EmptyInput {
            path: origin.to_path_buf(),
        });
    }
    Ok(samples)
}

fn parse_column(
    record: &StringRecord,
    column: usize,
    line: usize,
    origin: &Path,
) -> TrailResult<f64> {
    let raw = &record[column];
    raw.parse::<f64>().map_err(|_| TrailError::Parse {
        path: origin.to_path_buf(),
        line,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HORIZONS_ROWS: &str = "\
# Voyager 1 heliocentric vectors
2443391.500000000, A.D. 1977-Sep-06 00:00:00.0000, 9.90e-01, 1.20e-01, -2.0e-04, 1.0e-03,
2443392.500000000, A.D. 1977-Sep-07 00:00:00.0000, 9.88e-01, 1.30e-01, -1.9e-04, 1.0e-03,
# trailing note
2443393.500000000, A.D. 1977-Sep-08 00:00:00.0000, 9.86e-01, 1.40e-01, -1.8e-04, 1.0e-03,
";

    #[test]
    fn reads_positional_columns_and_skips_comments() {
        let samples = read_vectors(HORIZONS_ROWS.as_bytes(), Path::new("mem")).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[0].time,
            SampleTime::Stamp("A.D. 1977-Sep-06 00:00:00.0000".into())
        );
        assert_eq!(samples[0].x, 0.99);
        assert_eq!(samples[1].y, 0.13);
        assert_eq!(samples[2].z, -1.8e-4);
    }

    #[test]
    fn short_row_is_missing_column() {
        let text = "1, A.D. 2000, 1.0, 2.0, 3.0\n2, A.D. 2000, 1.0, 2.0\n";
        let err = read_vectors(text.as_bytes(), Path::new("mem")).unwrap_err();
        match err {
            TrailError::MissingColumn {
                line,
                found,
                required,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(found, 4);
                assert_eq!(required, 5);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_numeric_coordinate_is_parse_error() {
        let text = "1, A.D. 2000, 1.0, two, 3.0\n";
        let err = read_vectors(text.as_bytes(), Path::new("mem")).unwrap_err();
        assert!(matches!(err, TrailError::Parse { column: 3, ref value, .. } if value == "two"));
    }

    #[test]
    fn only_comments_is_empty_input() {
        let text = "# nothing here\n# still nothing\n";
        let err = read_vectors(text.as_bytes(), Path::new("mem")).unwrap_err();
        assert!(matches!(err, TrailError::EmptyInput { .. }));
    }

    #[test]
    fn load_vectors_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(HORIZONS_ROWS.as_bytes()).unwrap();
        let samples = load_vectors(file.path()).unwrap();
        assert_eq!(samples.len(), 3);
    }
}
