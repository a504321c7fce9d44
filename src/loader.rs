use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{InvalidRecord, Sighting};

// ---------------------------------------------------------------------------
// LoadError – the loader's failure surface
// ---------------------------------------------------------------------------

/// Why a source file could not be turned into sightings.
///
/// Loading is all-or-nothing: any error means the caller receives no records
/// and ingests nothing. `row` values are 1-based data rows (the CSV header
/// line is not counted).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file extension is not a supported format.
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    /// The source could not be opened or read.
    #[error("failed to read {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required CSV column is absent from the header row.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row could not be decoded into the expected fields.
    #[error("row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// A JSON document could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded row failed sighting validation.
    #[error("row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: InvalidRecord,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load sighting records from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `animal`, `spotter`, `area`, `count` columns
/// * `.json` – `[{ "animal": ..., "spotter": ..., "area": ..., "count": ... }, ...]`
pub fn load_file(path: &Path) -> Result<Vec<Sighting>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the columns; `animal`, `spotter`, `area`
/// and `count` are required, in any order. Extra columns are ignored.
fn load_csv(path: &Path) -> Result<Vec<Sighting>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::MalformedRecord {
            row: 0,
            reason: format!("unreadable header row: {e}"),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let animal_idx = column_index(&headers, "animal")?;
    let spotter_idx = column_index(&headers, "spotter")?;
    let area_idx = column_index(&headers, "area")?;
    let count_idx = column_index(&headers, "count")?;

    let mut sightings = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| LoadError::MalformedRecord {
            row,
            reason: e.to_string(),
        })?;

        let animal = record.get(animal_idx).unwrap_or("").to_string();
        let spotter = parse_int::<i32>(record.get(spotter_idx), row, "spotter")?;
        let area = parse_int::<i32>(record.get(area_idx), row, "area")?;
        let count = parse_int::<i64>(record.get(count_idx), row, "count")?;

        let sighting = Sighting::new(animal, spotter, area, count)
            .map_err(|source| LoadError::InvalidRecord { row, source })?;
        sightings.push(sighting);
    }

    debug!(
        "loaded {} sightings from {}",
        sightings.len(),
        path.display()
    );
    Ok(sightings)
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn parse_int<T: std::str::FromStr>(
    cell: Option<&str>,
    row: usize,
    col: &str,
) -> Result<T, LoadError> {
    let cell = cell.unwrap_or("");
    cell.trim()
        .parse::<T>()
        .map_err(|_| LoadError::MalformedRecord {
            row,
            reason: format!("{col}: '{cell}' is not an integer"),
        })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Raw shape of one JSON record, before validation.
#[derive(Debug, Deserialize)]
struct RawSighting {
    animal: String,
    spotter: i32,
    area: i32,
    count: i64,
}

/// Expected JSON schema: a top-level array of records.
///
/// ```json
/// [
///   { "animal": "Fox", "spotter": 1, "area": 2, "count": 3 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Sighting>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<RawSighting> = serde_json::from_str(&text)?;

    let mut sightings = Vec::with_capacity(raw.len());
    for (i, rec) in raw.into_iter().enumerate() {
        let sighting = Sighting::new(rec.animal, rec.spotter, rec.area, rec.count)
            .map_err(|source| LoadError::InvalidRecord { row: i + 1, source })?;
        sightings.push(sighting);
    }

    debug!(
        "loaded {} sightings from {}",
        sightings.len(),
        path.display()
    );
    Ok(sightings)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn loads_valid_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.csv",
            "animal,spotter,area,count\nFox,1,1,1\nOwl,2,1,5\n",
        );

        let sightings = load_file(&path).unwrap();
        assert_eq!(sightings.len(), 2);
        assert_eq!(sightings[0], Sighting::new("Fox", 1, 1, 1).unwrap());
        assert_eq!(sightings[1], Sighting::new("Owl", 2, 1, 5).unwrap());
    }

    #[test]
    fn csv_columns_may_be_reordered_and_extras_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.csv",
            "count,area,animal,spotter,notes\n4,2,Wolf,3,seen at dusk\n",
        );

        let sightings = load_file(&path).unwrap();
        assert_eq!(sightings, vec![Sighting::new("Wolf", 3, 2, 4).unwrap()]);
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "sightings.csv", "animal,spotter,count\nFox,1,1\n");

        match load_file(&path) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "area"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn csv_non_integer_cell_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.csv",
            "animal,spotter,area,count\nFox,1,1,many\n",
        );

        match load_file(&path) {
            Err(LoadError::MalformedRecord { row, reason }) => {
                assert_eq!(row, 1);
                assert!(reason.contains("many"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn csv_negative_count_fails_validation_with_row() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.csv",
            "animal,spotter,area,count\nFox,1,1,1\nOwl,2,1,-5\n",
        );

        match load_file(&path) {
            Err(LoadError::InvalidRecord { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(
                    source,
                    InvalidRecord::Negative {
                        field: "count",
                        value: -5
                    }
                );
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn csv_empty_animal_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.csv",
            "animal,spotter,area,count\n,1,1,1\n",
        );

        match load_file(&path) {
            Err(LoadError::InvalidRecord { row, source }) => {
                assert_eq!(row, 1);
                assert_eq!(source, InvalidRecord::EmptyAnimal);
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_source_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        match load_file(&path) {
            Err(LoadError::SourceUnreadable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected SourceUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        match load_file(Path::new("sightings.parquet")) {
            Err(LoadError::UnsupportedFormat(ext)) => assert_eq!(ext, "parquet"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn loads_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.json",
            r#"[
                { "animal": "Fox", "spotter": 1, "area": 2, "count": 3 },
                { "animal": "Owl", "spotter": 2, "area": 1, "count": 0 }
            ]"#,
        );

        let sightings = load_file(&path).unwrap();
        assert_eq!(sightings.len(), 2);
        assert_eq!(sightings[1], Sighting::new("Owl", 2, 1, 0).unwrap());
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "sightings.json", "{not valid json{{");

        assert!(matches!(load_file(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn json_negative_field_fails_validation() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sightings.json",
            r#"[{ "animal": "Fox", "spotter": -1, "area": 2, "count": 3 }]"#,
        );

        match load_file(&path) {
            Err(LoadError::InvalidRecord { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }
}
