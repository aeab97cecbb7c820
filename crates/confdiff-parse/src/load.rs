//! Parsing and file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use confdiff_types::{ConfigValue, Document};

use crate::error::{ParseError, ParseResult};
use crate::format::SourceFormat;

/// Parse source text in the given format into a document.
///
/// The top level must be a mapping. An empty (or explicit-`null`) YAML
/// document counts as an empty mapping so comparisons against empty files
/// work.
pub fn parse_str(text: &str, format: SourceFormat) -> ParseResult<Document> {
    let value: ConfigValue = match format {
        SourceFormat::Json => serde_json::from_str(text)?,
        SourceFormat::Yaml => {
            if text.trim().is_empty() {
                ConfigValue::Object(Document::new())
            } else {
                serde_yaml::from_str(text)?
            }
        }
    };

    match value {
        ConfigValue::Object(map) => Ok(map),
        ConfigValue::Null => Ok(Document::new()),
        other => Err(ParseError::NotAMapping {
            found: other.kind(),
        }),
    }
}

/// Read a file, detect its format from the extension, and parse it.
pub fn load_document(path: &Path) -> ParseResult<Document> {
    let format = SourceFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_str(&text, format)?;
    debug!(path = %path.display(), ?format, keys = document.len(), "loaded document");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_json_object() {
        let doc = parse_str(r#"{"host": "web", "port": 8080}"#, SourceFormat::Json).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["host"], ConfigValue::from("web"));
    }

    #[test]
    fn parses_yaml_mapping() {
        let doc = parse_str("host: web\nport: 8080\n", SourceFormat::Yaml).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["port"], ConfigValue::from(8080));
    }

    #[test]
    fn json_and_yaml_yield_identical_documents() {
        let from_json = parse_str(
            r#"{"a": {"b": true, "c": null}}"#,
            SourceFormat::Json,
        )
        .unwrap();
        let from_yaml = parse_str("a:\n  b: true\n  c: null\n", SourceFormat::Yaml).unwrap();
        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn key_order_is_preserved() {
        let doc = parse_str("zebra: 1\napple: 2\nmango: 3\n", SourceFormat::Yaml).unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn empty_yaml_is_empty_document() {
        assert!(parse_str("", SourceFormat::Yaml).unwrap().is_empty());
        assert!(parse_str("null", SourceFormat::Yaml).unwrap().is_empty());
    }

    #[test]
    fn scalar_top_level_rejected() {
        let err = parse_str("just a string", SourceFormat::Yaml).unwrap_err();
        assert!(matches!(err, ParseError::NotAMapping { found: "string" }));

        let err = parse_str("[1, 2]", SourceFormat::Json).unwrap_err();
        assert!(matches!(err, ParseError::NotAMapping { found: "array" }));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            parse_str("{not json", SourceFormat::Json),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn load_document_roundtrip() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(file, r#"{{"timeout": 50, "verbose": true}}"#).unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc["timeout"], ConfigValue::from(50));
        assert_eq!(doc["verbose"], ConfigValue::from(true));
    }

    #[test]
    fn load_document_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            load_document(file.path()),
            Err(ParseError::UnsupportedExtension { extension }) if extension == "ini"
        ));
    }

    #[test]
    fn load_document_missing_file() {
        let err = load_document(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
