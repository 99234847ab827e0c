//! Error types for variant-engine.
//!
//! The engine itself never fails: malformed records normalize to empty maps
//! and "no match" is `None`. Errors only arise at the edges, when reading
//! variant documents or configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for variant-engine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VariantError {
    /// Errors while reading a variant document
    #[error("Failed to parse variant document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Expected a list of variants or an object with {expected}, found {found}")]
    UnexpectedShape { expected: String, found: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for variant-engine operations
pub type Result<T> = std::result::Result<T, VariantError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl VariantError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a document that holds no variant list
    pub fn unexpected_shape(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::parse(
            "locating variant list",
            ParseErrorKind::UnexpectedShape {
                expected: expected.into(),
                found: found.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for VariantError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for VariantError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for VariantError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended, so nested calls read outermost first:
/// `"loading fixtures: reading variants.json: ..."`.
///
/// ```ignore
/// use variant_engine::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<VariantError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: VariantError, new_ctx: &str) -> VariantError {
    match err {
        VariantError::Parse {
            context: existing,
            source,
        } => VariantError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VariantError::Io {
            path,
            message,
            source,
        } => VariantError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        VariantError::Config(msg) => VariantError::Config(chain_context(new_ctx, &msg)),
        VariantError::Validation(msg) => VariantError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// `"new: existing"`, or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to a validation error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| VariantError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| VariantError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_shape_display() {
        let err = VariantError::unexpected_shape("`variants`", "a string");
        let display = err.to_string();
        assert!(display.contains("variant document"), "{display}");
        assert!(display.contains("locating variant list"), "{display}");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = VariantError::io("/tmp/variants.json", io_err);
        assert!(err.to_string().contains("/tmp/variants.json"));
    }

    #[test]
    fn test_context_chains_outermost_first() {
        fn inner() -> Result<()> {
            Err(VariantError::parse(
                "base",
                ParseErrorKind::InvalidJson("eof".into()),
            ))
        }

        match inner().context("middle").context("outer") {
            Err(VariantError::Parse { context, .. }) => {
                assert_eq!(context, "outer: middle: base");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let ok: Result<i32> = Ok(1);
        let _ = ok.with_context(|| {
            called = true;
            "unused"
        });
        assert!(!called);
    }

    #[test]
    fn test_serde_errors_convert() {
        let err: VariantError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            VariantError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));

        let err: VariantError = serde_yaml::from_str::<serde_json::Value>("a: [")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            VariantError::Parse {
                source: ParseErrorKind::InvalidYaml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_option_context() {
        let none: Option<i32> = None;
        match none.context_none("no variants") {
            Err(VariantError::Validation(msg)) => assert_eq!(msg, "no variants"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(Some(3).context_none("unused").ok(), Some(3));
    }
}
