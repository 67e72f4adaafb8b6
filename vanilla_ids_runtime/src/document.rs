//! Registry-data document codec.
//!
//! A registry-data document is a JSON object holding one record per
//! category (`{"tiles": {...}, "items": {...}}`), each mapping id strings to
//! opaque values. Key order is preserved through decode and encode.
//!
//! - `decode_document` / `encode_document`: pure codec
//! - `read_document` / `write_document`: file I/O, fsync on write

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document root must be a JSON object")]
    NotAnObject,
    #[error("section {0:?} must be a JSON object")]
    SectionNotObject(String),
}

/// Parse a document. The root must be an object.
pub fn decode_document(json: &str) -> Result<Map<String, Value>, DocumentError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        _ => Err(DocumentError::NotAnObject),
    }
}

/// Pretty-printed JSON with a trailing newline.
pub fn encode_document(document: &Map<String, Value>) -> Result<String, DocumentError> {
    let mut out = serde_json::to_string_pretty(document)?;
    out.push('\n');
    Ok(out)
}

pub fn read_document(path: &Path) -> Result<Map<String, Value>, DocumentError> {
    let content = fs::read_to_string(path)?;
    decode_document(&content)
}

/// Write a document, creating parent directories as needed.
pub fn write_document(path: &Path, document: &Map<String, Value>) -> Result<(), DocumentError> {
    let content = encode_document(document)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_keeps_key_order() {
        let doc = decode_document(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = doc.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn decode_rejects_non_object_root() {
        assert!(matches!(
            decode_document("[1, 2]"),
            Err(DocumentError::NotAnObject)
        ));
        assert!(matches!(
            decode_document("{ nope"),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn encode_then_decode_is_stable() {
        let doc = decode_document(r#"{"tiles": {"stone_1": 1}, "items": {}}"#).unwrap();
        let text = encode_document(&doc).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(decode_document(&text).unwrap(), doc);
        assert_eq!(encode_document(&decode_document(&text).unwrap()).unwrap(), text);
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("registry.json");
        let doc = match json!({"tiles": {"minecraft:stone": 1}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        write_document(&path, &doc).unwrap();
        assert_eq!(read_document(&path).unwrap(), doc);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_document(&dir.path().join("absent.json")),
            Err(DocumentError::Io(_))
        ));
    }
}
