//! Declarative attribute-equality conditions for the simple named filters.
//!
//! Each registry entry is either a fixed set of constraints or a function that
//! builds the constraints from the call-time [`FilterOptions`]. The registry
//! only supplies data; [`Condition::matches`] is what the dispatcher applies.

use crate::{FieldValue, FilterOptions, Record};

/// A flat conjunction of `field == value` constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    constraints: Vec<(&'static str, FieldValue<'static>)>,
}

impl Condition {
    pub fn new(constraints: Vec<(&'static str, FieldValue<'static>)>) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &[(&'static str, FieldValue<'static>)] {
        &self.constraints
    }

    /// Returns `true` if every constraint equals the record's attribute.
    ///
    /// Numeric kinds are compared by value, so a record reporting `trash` as
    /// `Boolean(false)` or `Number(0.0)` satisfies `trash = 0`.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.constraints
            .iter()
            .all(|(field, value)| record.get(field).loose_eq(value))
    }
}

/// A registry entry: static constraints, or constraints derived from options.
#[derive(Debug, Clone)]
pub enum ConditionEntry {
    Static(Condition),
    Parametrized(fn(&FilterOptions) -> Condition),
}

impl ConditionEntry {
    /// Produces the concrete constraints for one filter invocation.
    pub fn resolve(&self, options: &FilterOptions) -> Condition {
        match self {
            Self::Static(condition) => condition.clone(),
            Self::Parametrized(build) => build(options),
        }
    }
}

const CONDITION_NAMES: [&str; 4] = ["active", "favorite", "trashed", "notebook"];

/// Names of every registered condition.
pub fn condition_names() -> &'static [&'static str] {
    &CONDITION_NAMES
}

fn notebook_condition(options: &FilterOptions) -> Condition {
    Condition::new(vec![
        ("notebookId", options.query.clone().into()),
        ("trash", FieldValue::Integer(0)),
    ])
}

/// Looks up the condition registered under `name`.
pub fn conditions(name: &str) -> Option<ConditionEntry> {
    let entry = match name {
        "active" => ConditionEntry::Static(Condition::new(vec![("trash", FieldValue::Integer(0))])),
        "favorite" => ConditionEntry::Static(Condition::new(vec![
            ("isFavorite", FieldValue::Integer(1)),
            ("trash", FieldValue::Integer(0)),
        ])),
        "trashed" => ConditionEntry::Static(Condition::new(vec![("trash", FieldValue::Integer(1))])),
        "notebook" => ConditionEntry::Parametrized(notebook_condition),
        _ => return None,
    };
    Some(entry)
}
