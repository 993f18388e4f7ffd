//! Error types for the tidyline crate.

use thiserror::Error;

/// Errors that can occur when registering message templates or rendering
/// lines.
///
/// All failures are synchronous and caller-facing: correcting the input
/// makes the operation succeed. A failed operation leaves the writer
/// unchanged.
#[derive(Debug, Error)]
pub enum WriterError {
    /// A template supplied through a JSON map was not a string.
    #[error("message template must be a string, got {found}")]
    NotString { found: &'static str },

    /// No substitution site was found in a message template.
    #[error("could not find a pattern in message '{message}'")]
    NoPattern { message: String },

    /// More than one substitution site was found in a message template.
    /// Only a single value per message is supported.
    #[error("found multiple patterns in '{message}' (patterns: {patterns})")]
    MultiplePatterns { message: String, patterns: String },

    /// The pattern's trailing type tag is not one of the supported kinds.
    #[error("pattern type '{tag}' is not supported; use 'd' or 'f'")]
    UnsupportedType { tag: String },

    /// A precision was given for a pattern that is not a float.
    #[error("precision specified for non-float pattern type '{tag}'")]
    PrecisionOnNonFloat { tag: String },

    /// A render call omitted one or more registered fields.
    #[error("missing values for fields: {}", .names.join(", "))]
    MissingFields { names: Vec<String> },

    /// A value of the wrong numeric kind was supplied for a field.
    #[error("field '{name}' expects {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Positional (unnamed) field definitions are reserved and rejected.
    #[error("unnamed field definitions are not supported; name every field")]
    UnnamedFields,
}

/// Result type for tidyline operations.
pub type Result<T> = std::result::Result<T, WriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_display_joins_names() {
        let err = WriterError::MissingFields {
            names: vec!["loss".to_string(), "delta".to_string()],
        };
        assert_eq!(err.to_string(), "missing values for fields: loss, delta");
    }

    #[test]
    fn type_mismatch_display_names_the_field() {
        let err = WriterError::TypeMismatch {
            name: "count".to_string(),
            expected: "integer",
            actual: "float",
        };
        assert!(err.to_string().contains("count"));
        assert!(err.to_string().contains("integer"));
    }
}
