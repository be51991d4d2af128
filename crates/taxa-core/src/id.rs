//! # Species Id Keys
//!
//! Species ids are whatever JSON value the record's `id` field carries;
//! the schema decides whether that is a string or a number. For the
//! referential check the raw value is reduced to a [`SpeciesKey`] with
//! these equality rules:
//!
//! - strings compare by content, numbers by numeric value (`1 == 1.0`);
//! - a string never equals a number (`"1" != 1`);
//! - `true`/`false`/`null` compare by value;
//! - objects and arrays have no key and therefore never resolve.
//!
//! Duplicate ids in the species collection collapse into one key and are
//! not reported.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;

/// Hashable identity of a species id value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpeciesKey {
    /// String id.
    Text(String),
    /// Numeric id, stored as the bit pattern of its `f64` value.
    Number(u64),
    /// Boolean id.
    Bool(bool),
    /// Explicit `null` id.
    Null,
}

impl SpeciesKey {
    /// Derive the key for a JSON value, if it has one.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(|f| {
                // -0.0 and 0.0 are the same id.
                let f = if f == 0.0 { 0.0 } else { f };
                Self::Number(f.to_bits())
            }),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Null => Some(Self::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// The set of ids present in the species collection.
#[derive(Debug, Clone, Default)]
pub struct SpeciesIdSet {
    keys: HashSet<SpeciesKey>,
}

impl SpeciesIdSet {
    /// Collect the `id` of every record that has one.
    ///
    /// Records that failed schema validation still contribute their id.
    pub fn from_records(records: &[Value]) -> Self {
        let keys = records
            .iter()
            .filter_map(|record| record.get("id"))
            .filter_map(SpeciesKey::from_value)
            .collect();
        Self { keys }
    }

    /// Whether `id` resolves to a species in the collection.
    pub fn contains(&self, id: &Value) -> bool {
        SpeciesKey::from_value(id).is_some_and(|key| self.keys.contains(&key))
    }

    /// Ids from `references` that do not resolve, in their original order.
    ///
    /// Repeated unresolved ids are kept as often as they occur.
    pub fn missing<'a>(&self, references: &'a [Value]) -> Vec<&'a Value> {
        references.iter().filter(|id| !self.contains(id)).collect()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no record carried a usable id.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Renders an id for human-readable reports.
///
/// Strings print raw, numbers in decimal, an absent id as `undefined`,
/// anything else as compact JSON.
#[derive(Debug, Clone, Copy)]
pub struct IdLabel<'a>(pub Option<&'a Value>);

impl fmt::Display for IdLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("undefined"),
            Some(Value::String(s)) => f.write_str(s),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{i}")
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{u}")
                } else if let Some(x) = n.as_f64() {
                    write!(f, "{x}")
                } else {
                    write!(f, "{n}")
                }
            }
            Some(other) => write!(f, "{other}"),
        }
    }
}
