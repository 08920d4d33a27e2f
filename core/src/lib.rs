//! Validation and compilation of command-line option schemas.
//!
//! Schema authors declare options as [`OptSchema`] values: a short token
//! (`-v`), a long token (`--verbose`), or both, plus an [`ArgMode`] and an
//! optional [`OptArgFilter`]. [`compile_schema`] checks every declaration and
//! produces a [`SchemaMap`] from each token to a shared [`ParsedOpt`]
//! descriptor, which an argument parser then queries while scanning argv.
//!
//! - [`OptSchema`] / [`ArgMode`] — declaration input.
//! - [`ParsedOpt`] — compiled descriptor with parse-time slots.
//! - [`SchemaMap`] — token → descriptor lookup; short and long tokens of one
//!   declaration resolve to the same `Rc<ParsedOpt>`.
//! - [`SchemaError`] — the first structural problem found.
//! - [`SchemaFile`] — declarations loaded from JSON or YAML.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use opt_schema_core::*;
//!
//! let map = compile_schema(&[
//!     OptSchema::new(Some("-v"), Some("--verbose")),
//!     OptSchema::new(Some("-o"), Some("--output"))
//!         .with_arg(ArgMode::Required)
//!         .with_filter(|raw| raw.trim().to_string()),
//! ])
//! .unwrap();
//!
//! let verbose = map.get("-v").unwrap();
//! verbose.set_parsed_name("-v");
//! assert_eq!(map.get("--verbose").unwrap().parsed_name().as_deref(), Some("-v"));
//! assert!(Rc::ptr_eq(verbose, map.get("--verbose").unwrap()));
//!
//! assert_eq!(map.get("--output").unwrap().apply_filter(" out.txt "), "out.txt");
//! ```

mod compile;
mod error;
mod file;
mod parsed;
mod syntax;
mod types;

pub use compile::{OptSummary, SchemaMap, SchemaSummary, compile_schema};
pub use error::{LoadError, Result, SchemaError, SchemaErrorKind};
pub use file::SchemaFile;
pub use parsed::ParsedOpt;
pub use syntax::{is_valid_long_name, is_valid_short_name};
pub use types::{ArgMode, OptArgFilter, OptSchema, identity_filter};
