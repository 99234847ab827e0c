//! Variant document loading stage.

use crate::model::VariantSet;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a variant document and build its normalized set.
pub fn load_variant_set(path: &Path, quiet: bool) -> Result<VariantSet> {
    if !quiet {
        tracing::info!("Loading variants: {}", path.display());
    }

    let records = crate::parsers::parse_variants(path)
        .with_context(|| format!("Failed to load variants from {}", path.display()))?;
    let set = VariantSet::build(&records);

    if !quiet {
        tracing::info!("Loaded {} variants", set.len());
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_variant_set() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("variants.json");
        std::fs::write(
            &path,
            r#"{"variants": [{"id": 1, "browser": "chrome"}, {"id": 2, "browser": "firefox"}]}"#,
        )
        .unwrap();

        let set = load_variant_set(&path, true).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_variant_set(Path::new("/nonexistent/variants.json"), true).unwrap_err();
        assert!(err.to_string().contains("Failed to load variants"));
    }
}
