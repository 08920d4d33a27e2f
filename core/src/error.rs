//! Error types for schema compilation and declaration loading.
//!
//! [`SchemaError`] is the single error family raised by the compiler. Every
//! variant is fatal to the compilation call that produced it; the compiler
//! never aggregates errors or returns a partial map.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural problems found while compiling option declarations.
///
/// The `Display` impl gives a message suitable for the schema author. Use
/// [`kind`](SchemaError::kind) to branch on the variant without its payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Declaration has neither a short nor a long name.
    #[error("option must have a name or a long name defined")]
    MissingName,
    /// A filter was supplied for an option that takes no argument.
    #[error(
        "optArgFilter provided but \"{0}\" does not accept an argument; \
         set the \"arg\" property too"
    )]
    UnusedFilter(String),
    /// An optional-argument option has no long name.
    #[error(
        "arguments are optional for \"{0}\", so a long option must also be \
         defined because only long options can accept optional arguments"
    )]
    OptionalArgNeedsLongName(String),
    /// Short name does not match `-X` with a single alphanumeric `X`.
    #[error("\"{0}\" is an invalid name for an option")]
    InvalidShortName(String),
    /// Long name does not match `--word(-word)*`.
    #[error("\"{0}\" is an invalid name for a long option")]
    InvalidLongName(String),
    /// Short name is already registered in this compilation.
    #[error("\"{0}\" is a duplicate option")]
    DuplicateShortName(String),
    /// Long name is already registered in this compilation.
    #[error("\"{0}\" is a duplicate long option")]
    DuplicateLongName(String),
}

/// Payload-free tag for [`SchemaError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaErrorKind {
    MissingName,
    UnusedFilter,
    OptionalArgNeedsLongName,
    InvalidShortName,
    InvalidLongName,
    DuplicateShortName,
    DuplicateLongName,
}

impl SchemaError {
    /// Returns the kind tag of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_schema_core::{SchemaError, SchemaErrorKind};
    ///
    /// let err = SchemaError::InvalidShortName("-ab".into());
    /// assert_eq!(err.kind(), SchemaErrorKind::InvalidShortName);
    /// ```
    pub fn kind(&self) -> SchemaErrorKind {
        match self {
            Self::MissingName => SchemaErrorKind::MissingName,
            Self::UnusedFilter(_) => SchemaErrorKind::UnusedFilter,
            Self::OptionalArgNeedsLongName(_) => SchemaErrorKind::OptionalArgNeedsLongName,
            Self::InvalidShortName(_) => SchemaErrorKind::InvalidShortName,
            Self::InvalidLongName(_) => SchemaErrorKind::InvalidLongName,
            Self::DuplicateShortName(_) => SchemaErrorKind::DuplicateShortName,
            Self::DuplicateLongName(_) => SchemaErrorKind::DuplicateLongName,
        }
    }
}

/// Errors raised while loading declaration files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported declaration file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Declarations loaded but failed to compile.
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Convenience alias for results with [`SchemaError`].
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_token() {
        assert_eq!(
            SchemaError::DuplicateLongName("--help".into()).to_string(),
            "\"--help\" is a duplicate long option"
        );
        assert_eq!(
            SchemaError::InvalidShortName("-ab".into()).to_string(),
            "\"-ab\" is an invalid name for an option"
        );
        assert!(SchemaError::UnusedFilter("-x".into())
            .to_string()
            .contains("\"-x\" does not accept an argument"));
    }

    #[test]
    fn test_load_error_wraps_schema_error() {
        let err: LoadError = SchemaError::MissingName.into();
        assert!(matches!(err, LoadError::Schema(SchemaError::MissingName)));
        assert_eq!(
            err.to_string(),
            "invalid schema: option must have a name or a long name defined"
        );
    }
}
