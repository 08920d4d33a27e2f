//! Schema compilation.
//!
//! [`compile_schema`] turns an ordered list of [`OptSchema`] declarations into
//! a [`SchemaMap`] from every declared token to its descriptor. Each
//! declaration passes through the same ordered guards; the first failing
//! guard aborts the whole compilation:
//!
//! 1. at least one name ([`SchemaError::MissingName`])
//! 2. a filter implies an accepted argument ([`SchemaError::UnusedFilter`])
//! 3. an optional argument implies a long name
//!    ([`SchemaError::OptionalArgNeedsLongName`])
//! 4. short-name syntax and uniqueness
//! 5. long-name syntax and uniqueness
//!
//! Short and long tokens share one key space, so `-v` declared twice and a
//! long token colliding with an earlier long token are both duplicates.

use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::{OptSchema, ParsedOpt, is_valid_long_name, is_valid_short_name};

/// Compiled lookup from option token to shared descriptor.
///
/// Keys are kept in declaration order. The key set is fixed once compiled;
/// only the descriptors' parse-time slots change afterwards.
#[derive(Debug, Default)]
pub struct SchemaMap {
    opts: IndexMap<String, Rc<ParsedOpt>>,
}

impl SchemaMap {
    /// Looks up a token exactly as declared.
    pub fn get(&self, token: &str) -> Option<&Rc<ParsedOpt>> {
        self.opts.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.opts.contains_key(token)
    }

    /// Number of registered tokens (not options).
    pub fn len(&self) -> usize {
        self.opts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.opts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<ParsedOpt>)> {
        self.opts.iter().map(|(token, opt)| (token.as_str(), opt))
    }

    /// Distinct descriptors in declaration order, aliases collapsed.
    pub fn descriptors(&self) -> Vec<&Rc<ParsedOpt>> {
        let mut unique: Vec<&Rc<ParsedOpt>> = Vec::new();
        for opt in self.opts.values() {
            if !unique.iter().any(|seen| Rc::ptr_eq(*seen, opt)) {
                unique.push(opt);
            }
        }
        unique
    }

    /// All tokens bound to the same descriptor as `token`, including itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_schema_core::{OptSchema, compile_schema};
    ///
    /// let map = compile_schema(&[OptSchema::new(Some("-v"), Some("--verbose"))]).unwrap();
    /// assert_eq!(map.aliases("--verbose"), vec!["-v", "--verbose"]);
    /// assert!(map.aliases("--quiet").is_empty());
    /// ```
    pub fn aliases(&self, token: &str) -> Vec<&str> {
        let Some(target) = self.opts.get(token) else {
            return Vec::new();
        };
        self.iter()
            .filter(|(_, opt)| Rc::ptr_eq(*opt, target))
            .map(|(name, _)| name)
            .collect()
    }

    /// Clears parse-time state on every descriptor.
    pub fn reset(&self) {
        for opt in self.opts.values() {
            opt.reset();
        }
    }

    /// Serializable overview, one entry per option.
    pub fn summary(&self) -> SchemaSummary {
        let options = self
            .descriptors()
            .into_iter()
            .map(|opt| OptSummary {
                names: self
                    .iter()
                    .filter(|(_, other)| Rc::ptr_eq(*other, opt))
                    .map(|(name, _)| name.to_string())
                    .collect(),
                arg_accepted: opt.arg_accepted(),
                arg_required: opt.arg_required(),
                has_filter: opt.has_custom_filter(),
            })
            .collect();
        SchemaSummary { options }
    }
}

/// Overview of a compiled map, suitable for JSON/YAML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSummary {
    pub options: Vec<OptSummary>,
}

/// One compiled option in a [`SchemaSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptSummary {
    /// Tokens bound to this option, in registration order
    pub names: Vec<String>,
    pub arg_accepted: bool,
    pub arg_required: bool,
    /// Whether a custom filter was declared
    pub has_filter: bool,
}

/// Compiles option declarations into a [`SchemaMap`].
///
/// # Errors
///
/// Returns the first [`SchemaError`] hit, in declaration order. No partial
/// map is returned.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use opt_schema_core::{ArgMode, OptSchema, SchemaErrorKind, compile_schema};
///
/// let map = compile_schema(&[
///     OptSchema::new(Some("-h"), Some("--help")),
///     OptSchema::long("--show-hidden").with_arg(ArgMode::Optional),
/// ])
/// .unwrap();
/// assert_eq!(map.len(), 3);
/// assert!(Rc::ptr_eq(map.get("-h").unwrap(), map.get("--help").unwrap()));
///
/// let err = compile_schema(&[OptSchema::short("-x").with_arg(ArgMode::Optional)]).unwrap_err();
/// assert_eq!(err.kind(), SchemaErrorKind::OptionalArgNeedsLongName);
/// ```
pub fn compile_schema(schemas: &[OptSchema]) -> Result<SchemaMap> {
    let mut map = SchemaMap::default();

    for (index, schema) in schemas.iter().enumerate() {
        if let Err(err) = register(&mut map, schema) {
            debug!(index, error = %err, "Rejected option declaration");
            return Err(err);
        }
    }

    debug!(tokens = map.len(), options = schemas.len(), "Compiled option schema");
    Ok(map)
}

fn register(map: &mut SchemaMap, schema: &OptSchema) -> Result<()> {
    let short = schema.short_name();
    let long = schema.long_token();
    let opt = Rc::new(ParsedOpt::new(schema.arg, schema.opt_arg_filter.clone()));

    if short.is_none() && long.is_none() {
        return Err(SchemaError::MissingName);
    }

    if !opt.arg_accepted() && schema.opt_arg_filter.is_some() {
        return Err(SchemaError::UnusedFilter(schema.display_name().to_string()));
    }

    if opt.arg_accepted() && !opt.arg_required() && long.is_none() {
        return Err(SchemaError::OptionalArgNeedsLongName(
            schema.display_name().to_string(),
        ));
    }

    if let Some(name) = short {
        if !is_valid_short_name(name) {
            return Err(SchemaError::InvalidShortName(name.to_string()));
        }
        if map.contains(name) {
            return Err(SchemaError::DuplicateShortName(name.to_string()));
        }
        insert(map, name, &opt);
    }

    if let Some(name) = long {
        if !is_valid_long_name(name) {
            return Err(SchemaError::InvalidLongName(name.to_string()));
        }
        if map.contains(name) {
            return Err(SchemaError::DuplicateLongName(name.to_string()));
        }
        insert(map, name, &opt);
    }

    Ok(())
}

fn insert(map: &mut SchemaMap, token: &str, opt: &Rc<ParsedOpt>) {
    debug!(
        token,
        arg_accepted = opt.arg_accepted(),
        arg_required = opt.arg_required(),
        "Registered option token"
    );
    map.opts.insert(token.to_string(), Rc::clone(opt));
}
