//! Declaration files.
//!
//! Option declarations can live in a JSON or YAML file:
//!
//! ```yaml
//! options:
//!   - name: "-h"
//!     long_name: "--help"
//!   - longName: "--show-hidden"
//!     arg: optional
//! ```
//!
//! Files cannot carry filters, so every loaded declaration has
//! `opt_arg_filter == None`.

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::{OptSchema, SchemaMap, compile_schema};

/// Ordered option declarations read from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    #[serde(default)]
    pub options: Vec<OptSchema>,
}

impl SchemaFile {
    /// Loads declarations, picking the parser from the file extension
    /// (`.json`, `.yml`, `.yaml`).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedFormat`] for other extensions, and
    /// I/O or parse errors otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let reader = || -> Result<BufReader<std::fs::File>, LoadError> {
            Ok(BufReader::new(std::fs::File::open(path)?))
        };

        match extension.as_deref() {
            Some("json") => Ok(serde_json::from_reader(reader()?)?),
            Some("yml" | "yaml") => Ok(serde_yaml::from_reader(reader()?)?),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Compiles the loaded declarations.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_schema_core::SchemaFile;
    ///
    /// let file = SchemaFile::from_json_str(
    ///     r#"{"options": [{"name": "-h", "longName": "--help"}]}"#,
    /// )
    /// .unwrap();
    /// let map = file.compile().unwrap();
    /// assert!(map.contains("-h") && map.contains("--help"));
    /// ```
    pub fn compile(&self) -> Result<SchemaMap, LoadError> {
        Ok(compile_schema(&self.options)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArgMode, SchemaError};

    use super::*;

    #[test]
    fn test_from_yaml_str() {
        let file = SchemaFile::from_yaml_str(
            "options:\n  - name: \"-h\"\n    long_name: \"--help\"\n  - longName: \"--show-hidden\"\n    arg: optional\n",
        )
        .unwrap();
        assert_eq!(file.options.len(), 2);
        assert_eq!(file.options[1].arg, ArgMode::Optional);
        assert_eq!(file.compile().unwrap().len(), 3);
    }

    #[test]
    fn test_compile_reports_schema_error() {
        let file =
            SchemaFile::from_json_str(r#"{"options": [{"name": "-x", "arg": "optional"}]}"#).unwrap();
        let err = file.compile().unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::OptionalArgNeedsLongName(ref name)) if name == "-x"
        ));
    }

    #[test]
    fn test_unknown_arg_mode_is_a_parse_error() {
        let err = SchemaFile::from_json_str(r#"{"options": [{"name": "-x", "arg": "maybe"}]}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = SchemaFile::load("options.toml").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("opt_schema_missing_declarations.json");
        let err = SchemaFile::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
