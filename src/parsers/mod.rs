//! Variant document loading.
//!
//! Documents are JSON or YAML and hold either a top-level list of records or
//! an object with the list under `variants`, `comparisons` or `screenshots`.
//! Each record becomes a typed [`VariantRecord`] here, once; nothing
//! downstream looks at raw JSON again.
//!
//! ```no_run
//! use variant_engine::parsers::parse_variants;
//! use std::path::Path;
//!
//! let records = parse_variants(Path::new("variants.json")).unwrap();
//! println!("{} variants", records.len());
//! ```

mod detection;

pub use detection::DocumentFormat;

use crate::error::{ErrorContext, Result, VariantError};
use crate::model::VariantRecord;
use std::path::Path;

/// Object keys that may hold the variant list, in lookup order.
pub const LIST_KEYS: &[&str] = &["variants", "comparisons", "screenshots"];

/// Maximum document size (64 MB).
const MAX_DOCUMENT_SIZE: u64 = 64 * 1024 * 1024;

/// Read and parse a variant document, detecting its format.
pub fn parse_variants(path: &Path) -> Result<Vec<VariantRecord>> {
    let metadata = std::fs::metadata(path).map_err(|e| VariantError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(VariantError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_DOCUMENT_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| VariantError::io(path, e))?;
    let format = DocumentFormat::detect(path, &content);
    parse_variants_str(&content, format).with_context(|| format!("in {}", path.display()))
}

/// Parse variant records from document text.
pub fn parse_variants_str(content: &str, format: DocumentFormat) -> Result<Vec<VariantRecord>> {
    let document: serde_json::Value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    let records: Vec<VariantRecord> = variant_list(&document)?
        .iter()
        .map(VariantRecord::from_value)
        .collect();
    tracing::debug!(format = %format, records = records.len(), "parsed variant document");
    Ok(records)
}

fn variant_list(document: &serde_json::Value) -> Result<&[serde_json::Value]> {
    match document {
        serde_json::Value::Array(items) => Ok(items),
        serde_json::Value::Object(obj) => LIST_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(serde_json::Value::as_array))
            .map(Vec::as_slice)
            .ok_or_else(|| VariantError::unexpected_shape(expected_keys(), "an object without one")),
        other => Err(VariantError::unexpected_shape(expected_keys(), kind_name(other))),
    }
}

fn expected_keys() -> String {
    LIST_KEYS
        .iter()
        .map(|k| format!("`{k}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

const fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_top_level_array() {
        let records = parse_variants_str(
            r#"[{"id": 1, "browser": "chrome"}, {"id": 2, "browser": "firefox"}]"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].browser.as_deref(), Some("firefox"));
    }

    #[test]
    fn test_wrapped_list() {
        let records = parse_variants_str(
            r#"{"build": 42, "comparisons": [{"id": "a"}]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_yaml_document() {
        let yaml = "variants:\n  - id: home-dark\n    browser: safari\n    metadata:\n      theme: dark\n";
        let records = parse_variants_str(yaml, DocumentFormat::Yaml).unwrap();
        assert_eq!(records[0].browser.as_deref(), Some("safari"));
        assert_eq!(records[0].metadata.values.len(), 1);
    }

    #[test]
    fn test_wrong_shape() {
        let err = parse_variants_str(r#""hello""#, DocumentFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            VariantError::Parse {
                source: ParseErrorKind::UnexpectedShape { .. },
                ..
            }
        ));

        let err = parse_variants_str(r#"{"items": []}"#, DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("variant document"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_variants_str("[{", DocumentFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            VariantError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}
