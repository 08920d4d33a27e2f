//! Compiled option descriptors.
//!
//! A [`ParsedOpt`] is built once per declaration and handed out as an
//! `Rc<ParsedOpt>`. When a declaration has both a short and a long token,
//! both map keys hold the same `Rc`, so parse-time bookkeeping written
//! through one token is visible through the other.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::{ArgMode, OptArgFilter};

/// Resolved behavior of one declared option plus parse-time slots.
///
/// The argument fields are fixed at compile time. `parsed_name` and
/// `parsed_duplicates` start empty and are written by the parsing consumer.
#[derive(Debug)]
pub struct ParsedOpt {
    arg_accepted: bool,
    arg_required: bool,
    has_custom_filter: bool,
    opt_arg_filter: OptArgFilter,
    parsed_duplicates: RefCell<BTreeSet<String>>,
    parsed_name: RefCell<Option<String>>,
}

impl ParsedOpt {
    /// Builds a descriptor, falling back to the identity filter.
    pub(crate) fn new(arg: ArgMode, filter: Option<OptArgFilter>) -> Self {
        Self {
            arg_accepted: arg.accepts(),
            arg_required: arg.requires(),
            has_custom_filter: filter.is_some(),
            opt_arg_filter: filter.unwrap_or_default(),
            parsed_duplicates: RefCell::new(BTreeSet::new()),
            parsed_name: RefCell::new(None),
        }
    }

    pub fn arg_accepted(&self) -> bool {
        self.arg_accepted
    }

    pub fn arg_required(&self) -> bool {
        self.arg_required
    }

    /// Whether the declaration supplied its own filter.
    pub fn has_custom_filter(&self) -> bool {
        self.has_custom_filter
    }

    /// The resolved filter (identity when none was declared).
    pub fn opt_arg_filter(&self) -> &OptArgFilter {
        &self.opt_arg_filter
    }

    /// Runs the resolved filter over a raw argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_schema_core::{ArgMode, OptSchema, compile_schema};
    ///
    /// let map = compile_schema(&[OptSchema::long("--out").with_arg(ArgMode::Required)]).unwrap();
    /// assert_eq!(map.get("--out").unwrap().apply_filter("a.txt"), "a.txt");
    /// ```
    pub fn apply_filter(&self, raw: &str) -> String {
        self.opt_arg_filter.apply(raw)
    }

    /// Token recorded by the consumer for this option, if any.
    pub fn parsed_name(&self) -> Option<String> {
        self.parsed_name.borrow().clone()
    }

    /// Records the literal token that matched this option.
    pub fn set_parsed_name(&self, token: impl Into<String>) {
        *self.parsed_name.borrow_mut() = Some(token.into());
    }

    pub fn clear_parsed_name(&self) {
        self.parsed_name.borrow_mut().take();
    }

    /// Records a repeated occurrence. Returns `false` if `token` was
    /// already recorded.
    pub fn record_duplicate(&self, token: impl Into<String>) -> bool {
        self.parsed_duplicates.borrow_mut().insert(token.into())
    }

    /// Snapshot of recorded duplicates, sorted.
    pub fn parsed_duplicates(&self) -> Vec<String> {
        self.parsed_duplicates.borrow().iter().cloned().collect()
    }

    /// Clears both parse-time slots.
    pub fn reset(&self) {
        self.clear_parsed_name();
        self.parsed_duplicates.borrow_mut().clear();
    }
}
