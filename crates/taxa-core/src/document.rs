//! Loading JSON documents from disk.

use std::path::Path;

use serde_json::Value;

use crate::error::DataError;

/// Read and parse a JSON document.
///
/// The result is untyped: callers hand it to a schema before assuming
/// any structure.
pub fn read_json(path: &Path) -> Result<Value, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded JSON document");
    Ok(value)
}

/// Read a JSON document whose top level must be an array.
pub fn read_json_array(path: &Path) -> Result<Vec<Value>, DataError> {
    match read_json(path)? {
        Value::Array(items) => Ok(items),
        _ => Err(DataError::Shape {
            path: path.to_path_buf(),
            expected: "a JSON array",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{"id": "fox"}"#).unwrap();

        assert_eq!(read_json(&path).unwrap(), json!({"id": "fox"}));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }), "got: {err}");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[{\"id\": ").unwrap();

        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn array_reader_rejects_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obj.json");
        std::fs::write(&path, "{}").unwrap();

        let err = read_json_array(&path).unwrap_err();
        assert!(matches!(err, DataError::Shape { .. }), "got: {err}");
    }

    #[test]
    fn array_reader_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, r#"[{"id": "owl"}, {"id": "fox"}]"#).unwrap();

        let items = read_json_array(&path).unwrap();
        assert_eq!(items, vec![json!({"id": "owl"}), json!({"id": "fox"})]);
    }
}
