//! JSON → CSV conversion
//!
//! Project data arrives as JSON exports; renderers read the CSV conversion
//! next to each export. Conversion runs on demand, never from the graph
//! builder.

use crate::error::ConversionError;
use indexmap::IndexSet;
use serde_json::{Map, Value};
use std::path::Path;

/// Converter from a JSON export to a CSV file
#[cfg_attr(test, mockall::automock)]
pub trait JsonConverter {
    /// Convert `json_path` into `csv_path`
    ///
    /// # Errors
    /// Returns [`ConversionError`] if the input cannot be read, parsed or
    /// flattened, or the output cannot be written.
    fn convert(&self, json_path: &Path, csv_path: &Path) -> Result<(), ConversionError>;
}

/// Flattening converter
///
/// Understands two shapes:
/// - SPARQL JSON results: `head.vars` names the columns, each entry of
///   `results.bindings` is a row of `{ "value": ... }` cells
/// - an array of flat objects, columns in first-seen key order
///
/// Unbound or `null` cells are written empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonToCsv;

impl JsonToCsv {
    /// Create converter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Flatten a parsed export into a header and rows
    ///
    /// # Errors
    /// Returns [`ConversionError::UnsupportedShape`] for any other shape.
    pub fn flatten(
        value: &Value,
        origin: &Path,
    ) -> Result<(Vec<String>, Vec<Vec<String>>), ConversionError> {
        match value {
            Value::Object(root) if root.contains_key("results") => flatten_sparql(root, origin),
            Value::Array(items) => flatten_objects(items, origin),
            _ => Err(ConversionError::unsupported(
                origin,
                "expected SPARQL results or an array of objects",
            )),
        }
    }
}

impl JsonConverter for JsonToCsv {
    fn convert(&self, json_path: &Path, csv_path: &Path) -> Result<(), ConversionError> {
        let text = std::fs::read_to_string(json_path)
            .map_err(|e| ConversionError::io_error(json_path, e))?;
        let value: Value = serde_json::from_str(&text).map_err(|e| ConversionError::Json {
            path: json_path.to_path_buf(),
            source: e,
        })?;
        let (header, rows) = Self::flatten(&value, json_path)?;

        // Buffer first so a failed conversion leaves no partial CSV behind
        let csv_error = |e: csv::Error| ConversionError::Csv {
            path: csv_path.to_path_buf(),
            message: e.to_string(),
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&header).map_err(csv_error)?;
        for row in &rows {
            writer.write_record(row).map_err(csv_error)?;
        }
        let bytes = writer.into_inner().map_err(|e| ConversionError::Csv {
            path: csv_path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(csv_path, bytes).map_err(|e| ConversionError::io_error(csv_path, e))?;

        tracing::info!(
            json = %json_path.display(),
            csv = %csv_path.display(),
            rows = rows.len(),
            "converted json export"
        );
        Ok(())
    }
}

fn flatten_sparql(
    root: &Map<String, Value>,
    origin: &Path,
) -> Result<(Vec<String>, Vec<Vec<String>>), ConversionError> {
    let bindings = root
        .get("results")
        .and_then(|results| results.get("bindings"))
        .and_then(Value::as_array)
        .ok_or_else(|| ConversionError::unsupported(origin, "missing results.bindings array"))?;

    let header: Vec<String> = match root
        .get("head")
        .and_then(|head| head.get("vars"))
        .and_then(Value::as_array)
    {
        Some(vars) => vars
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => collect_keys(bindings, origin)?,
    };

    let rows = bindings
        .iter()
        .map(|binding| {
            header
                .iter()
                .map(|var| binding.get(var).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();
    Ok((header, rows))
}

fn flatten_objects(
    items: &[Value],
    origin: &Path,
) -> Result<(Vec<String>, Vec<Vec<String>>), ConversionError> {
    let header = collect_keys(items, origin)?;
    let rows = items
        .iter()
        .map(|item| {
            header
                .iter()
                .map(|key| item.get(key).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();
    Ok((header, rows))
}

fn collect_keys(items: &[Value], origin: &Path) -> Result<Vec<String>, ConversionError> {
    let mut keys = IndexSet::new();
    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| {
            ConversionError::unsupported(origin, format!("row {index} is not an object"))
        })?;
        keys.extend(object.keys().cloned());
    }
    Ok(keys.into_iter().collect())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(cell) if cell.contains_key("value") => {
            cell.get("value").map(cell_text).unwrap_or_default()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn flattens_sparql_results() {
        let value = json!({
            "head": { "vars": ["SOI", "Subsystem"] },
            "results": { "bindings": [
                { "SOI": { "type": "literal", "value": "Rover" },
                  "Subsystem": { "type": "literal", "value": "Drive" } },
                { "SOI": { "type": "literal", "value": "Rover" } }
            ] }
        });

        let (header, rows) = JsonToCsv::flatten(&value, Path::new("x.json")).unwrap();
        assert_eq!(header, vec!["SOI", "Subsystem"]);
        assert_eq!(rows, vec![vec!["Rover", "Drive"], vec!["Rover", ""]]);
    }

    #[test]
    fn flattens_object_arrays_in_key_order() {
        let value = json!([
            { "Tab": "Home Page", "Count": 3 },
            { "Tab": "Requirements", "Note": null, "Count": 1 }
        ]);

        let (header, rows) = JsonToCsv::flatten(&value, Path::new("x.json")).unwrap();
        assert_eq!(header, vec!["Tab", "Count", "Note"]);
        assert_eq!(rows[0], vec!["Home Page", "3", ""]);
        assert_eq!(rows[1], vec!["Requirements", "1", ""]);
    }

    #[test]
    fn rejects_unknown_shapes() {
        let err = JsonToCsv::flatten(&json!({ "a": 1 }), Path::new("x.json")).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedShape { .. }));

        let err = JsonToCsv::flatten(&json!([1, 2]), Path::new("x.json")).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedShape { .. }));
    }

    #[test]
    fn convert_writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("TripleCount.json");
        let csv_path = dir.path().join("TripleCount.csv");
        std::fs::write(
            &json_path,
            r#"{"head":{"vars":["tripleCount"]},"results":{"bindings":[{"tripleCount":{"value":"42"}}]}}"#,
        )
        .unwrap();

        JsonToCsv::new().convert(&json_path, &csv_path).unwrap();
        assert_eq!(std::fs::read_to_string(&csv_path).unwrap(), "tripleCount\n42\n");
    }

    #[test]
    fn invalid_json_leaves_no_csv() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("Broken.json");
        let csv_path = dir.path().join("Broken.csv");
        std::fs::write(&json_path, "{ not json").unwrap();

        let err = JsonToCsv::new().convert(&json_path, &csv_path).unwrap_err();
        assert!(matches!(err, ConversionError::Json { .. }));
        assert!(!csv_path.exists());
    }
}
