//! Option declaration types.
//!
//! An [`OptSchema`] is what a schema author writes: the option's short and/or
//! long token, whether it takes an argument, and an optional filter applied
//! to that argument. Declarations are plain data and can be loaded from JSON
//! or YAML (filters excepted).

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Whether an option accepts an argument value.
///
/// # Examples
///
/// ```
/// use opt_schema_core::ArgMode;
///
/// assert_eq!(ArgMode::default(), ArgMode::None);
/// assert!(ArgMode::Optional.accepts());
/// assert!(!ArgMode::Optional.requires());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArgMode {
    /// Plain flag, never takes a value (the default).
    #[default]
    None,
    /// May be followed by a value; only long tokens can signal one.
    Optional,
    /// Must be followed by a value.
    Required,
}

impl ArgMode {
    /// Whether any argument value is accepted.
    pub fn accepts(self) -> bool {
        matches!(self, Self::Optional | Self::Required)
    }

    /// Whether an argument value is mandatory.
    pub fn requires(self) -> bool {
        self == Self::Required
    }
}

/// Default pass-through filter: returns the raw argument unchanged.
pub fn identity_filter(arg: &str) -> String {
    arg.to_string()
}

/// Transform applied to a raw option argument by the parsing consumer.
///
/// Cheap to clone; clones share the same underlying closure, which
/// [`ptr_eq`](OptArgFilter::ptr_eq) can detect.
#[derive(Clone)]
pub struct OptArgFilter(Rc<dyn Fn(&str) -> String>);

impl OptArgFilter {
    /// Wraps a closure as a filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_schema_core::OptArgFilter;
    ///
    /// let upper = OptArgFilter::new(|raw| raw.to_uppercase());
    /// assert_eq!(upper.apply("json"), "JSON");
    /// ```
    pub fn new(filter: impl Fn(&str) -> String + 'static) -> Self {
        Self(Rc::new(filter))
    }

    /// The identity filter.
    pub fn identity() -> Self {
        Self::new(identity_filter)
    }

    /// Applies the filter to a raw argument string.
    pub fn apply(&self, raw: &str) -> String {
        (self.0)(raw)
    }

    /// Whether both handles refer to the same closure.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Default for OptArgFilter {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for OptArgFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OptArgFilter(..)")
    }
}

/// Declaration of a single option.
///
/// At least one of `name` / `long_name` must be set for the declaration to
/// compile. Empty strings count as unset.
///
/// # Examples
///
/// ```
/// use opt_schema_core::{ArgMode, OptSchema};
///
/// let verbose = OptSchema::new(Some("-v"), Some("--verbose"));
/// assert_eq!(verbose.display_name(), "-v");
///
/// let level = OptSchema::long("--level")
///     .with_arg(ArgMode::Required)
///     .with_filter(|raw| raw.trim().to_string());
/// assert!(level.opt_arg_filter.is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptSchema {
    /// Short token (e.g. "-v")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Long token (e.g. "--verbose")
    #[serde(default, alias = "longName", skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    /// Argument acceptance mode
    #[serde(default)]
    pub arg: ArgMode,
    /// User transform for the raw argument; never (de)serialized
    #[serde(skip)]
    pub opt_arg_filter: Option<OptArgFilter>,
}

impl OptSchema {
    /// Creates a flag declaration with the given tokens and no argument.
    pub fn new(name: Option<&str>, long_name: Option<&str>) -> Self {
        Self {
            name: name.map(String::from),
            long_name: long_name.map(String::from),
            arg: ArgMode::None,
            opt_arg_filter: None,
        }
    }

    /// Declaration with only a short token.
    pub fn short(name: &str) -> Self {
        Self::new(Some(name), None)
    }

    /// Declaration with only a long token.
    pub fn long(long_name: &str) -> Self {
        Self::new(None, Some(long_name))
    }

    /// Sets the argument mode.
    pub fn with_arg(mut self, arg: ArgMode) -> Self {
        self.arg = arg;
        self
    }

    /// Sets the argument filter.
    pub fn with_filter(mut self, filter: impl Fn(&str) -> String + 'static) -> Self {
        self.opt_arg_filter = Some(OptArgFilter::new(filter));
        self
    }

    /// Short token, if set and non-empty.
    pub fn short_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Long token, if set and non-empty.
    pub fn long_token(&self) -> Option<&str> {
        self.long_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Name used in diagnostics (short preferred, falls back to long).
    pub fn display_name(&self) -> &str {
        self.short_name().or(self.long_token()).unwrap_or_default()
    }
}
