//! Record input source.
//!
//! Loads arbitrary records from a JSONL file for the "records" tab. Each
//! non-blank line must be a JSON object with an `id` that is a string or a
//! non-negative integer. Bad lines are non-fatal: they are logged, reported
//! in [`LoadedRecords::skipped`] and left out of the list.

use crate::model::error::{InputError, RecordError};
use crate::model::{ItemId, RecordItem};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Field names tried, in order, for a record's label.
const LABEL_FIELDS: [&str; 3] = ["name", "title", "label"];

/// Result of loading a record file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    /// Records in file order.
    pub records: Vec<RecordItem>,
    /// Lines that were skipped.
    pub skipped: Vec<RecordError>,
}

/// Load records from a JSONL file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors.
pub fn load_records(path: &Path) -> Result<LoadedRecords, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let loaded = parse_records(BufReader::new(file)).map_err(io_error)?;

    info!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped.len(),
        "Loaded record file"
    );

    Ok(loaded)
}

/// Parse JSONL records from any buffered reader.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails; malformed lines are
/// not errors.
pub fn parse_records<R: BufRead>(reader: R) -> std::io::Result<LoadedRecords> {
    let mut loaded = LoadedRecords::default();
    let mut seen = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_record(&line, line_number) {
            Ok(record) if !seen.insert(record.id.clone()) => {
                skip(
                    &mut loaded,
                    RecordError::DuplicateId {
                        line: line_number,
                        id: record.id.to_string(),
                    },
                );
            }
            Ok(record) => loaded.records.push(record),
            Err(err) => skip(&mut loaded, err),
        }
    }

    Ok(loaded)
}

fn skip(loaded: &mut LoadedRecords, err: RecordError) {
    warn!(line = err.line(), "Skipping record: {}", err);
    loaded.skipped.push(err);
}

fn parse_record(line: &str, line_number: usize) -> Result<RecordItem, RecordError> {
    let value: Value = serde_json::from_str(line).map_err(|e| RecordError::Malformed {
        line: line_number,
        message: e.to_string(),
    })?;

    let Value::Object(mut fields) = value else {
        return Err(RecordError::Malformed {
            line: line_number,
            message: "expected a JSON object".to_string(),
        });
    };

    let id = fields
        .remove("id")
        .and_then(|raw| serde_json::from_value::<ItemId>(raw).ok())
        .ok_or(RecordError::MissingId { line: line_number })?;

    let label = record_label(&fields);

    Ok(RecordItem { id, label, fields })
}

fn record_label(fields: &Map<String, Value>) -> String {
    LABEL_FIELDS
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| Value::Object(fields.clone()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(input: &str) -> LoadedRecords {
        parse_records(input.as_bytes()).expect("in-memory read")
    }

    #[test]
    fn parses_integer_and_string_ids() {
        let loaded = parse("{\"id\":1,\"name\":\"Alpha\"}\n{\"id\":\"b\",\"title\":\"Beta\"}\n");
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[0].id, ItemId::Int(1));
        assert_eq!(loaded.records[0].label, "Alpha");
        assert_eq!(loaded.records[1].id, ItemId::Str("b".to_string()));
        assert_eq!(loaded.records[1].label, "Beta");
    }

    #[test]
    fn id_is_removed_from_fields() {
        let loaded = parse("{\"id\":1,\"name\":\"Alpha\",\"stock\":3}");
        let fields = &loaded.records[0].fields;
        assert!(!fields.contains_key("id"));
        assert_eq!(fields.get("stock"), Some(&Value::from(3)));
    }

    #[test]
    fn label_falls_back_to_compact_json() {
        let loaded = parse("{\"id\":7,\"price\":12}");
        assert_eq!(loaded.records[0].label, "{\"price\":12}");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let loaded = parse("\n{\"id\":1}\n   \n{\"id\":2}\n");
        assert_eq!(loaded.records.len(), 2);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped_with_line_numbers() {
        let loaded = parse("{\"id\":1}\nnot json\n[1,2]\n{\"id\":2}");
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.skipped.len(), 2);
        assert_eq!(loaded.skipped[0].line(), 2);
        assert_eq!(loaded.skipped[1].line(), 3);
        assert!(matches!(loaded.skipped[1], RecordError::Malformed { .. }));
    }

    #[test]
    fn missing_or_invalid_id_is_skipped() {
        let loaded = parse("{\"name\":\"x\"}\n{\"id\":null}\n{\"id\":-1}\n{\"id\":2.5}");
        assert!(loaded.records.is_empty());
        assert_eq!(
            loaded.skipped,
            vec![
                RecordError::MissingId { line: 1 },
                RecordError::MissingId { line: 2 },
                RecordError::MissingId { line: 3 },
                RecordError::MissingId { line: 4 },
            ]
        );
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let loaded = parse("{\"id\":1,\"name\":\"first\"}\n{\"id\":1,\"name\":\"second\"}");
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].label, "first");
        assert_eq!(
            loaded.skipped,
            vec![RecordError::DuplicateId {
                line: 2,
                id: "1".to_string()
            }]
        );
    }

    #[test]
    fn integer_and_string_ids_are_distinct() {
        let loaded = parse("{\"id\":1}\n{\"id\":\"1\"}");
        assert_eq!(loaded.records.len(), 2);
    }

    #[test]
    fn load_records_reports_missing_file() {
        let path = std::env::temp_dir().join("vscroll_missing_records.jsonl");
        let _ = fs::remove_file(&path);
        let result = load_records(&path);
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn load_records_reads_file() {
        let path = std::env::temp_dir().join("vscroll_load_records_test.jsonl");
        fs::write(&path, "{\"id\":\"a\",\"name\":\"A\"}\n{\"id\":\"b\",\"name\":\"B\"}\n")
            .expect("write fixture");

        let loaded = load_records(&path);
        let _ = fs::remove_file(&path);

        let loaded = loaded.expect("file should load");
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1].label, "B");
    }
}
