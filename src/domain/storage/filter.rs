//! Field predicates for storage lookups

use serde::Serialize;
use serde_json::Value;

/// Comparison applied to a single top-level field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOperator {
    /// Case-insensitive substring match
    ContainsIgnoreCase,
}

/// Predicate over one named field of a stored entity's JSON form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub operator: FieldOperator,
    pub value: String,
}

impl FieldFilter {
    pub fn contains_ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FieldOperator::ContainsIgnoreCase,
            value: value.into(),
        }
    }

    /// Evaluates the filter against the serialized entity.
    /// Missing or non-string fields never match.
    pub fn matches<E: Serialize>(&self, entity: &E) -> bool {
        let Ok(json) = serde_json::to_value(entity) else {
            return false;
        };

        match json.get(&self.field) {
            Some(Value::String(actual)) => self.matches_str(actual),
            _ => false,
        }
    }

    fn matches_str(&self, actual: &str) -> bool {
        match self.operator {
            FieldOperator::ContainsIgnoreCase => actual
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
        }
    }
}
