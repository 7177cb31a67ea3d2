//! The catalogue schema
//!
//! The schema is the fixed, program-wide mapping from attribute key to the
//! single [`ValueKind`] that key accepts. It is expressed as an exhaustive
//! match over [`Key`], so extending either enum forces the mapping to be
//! revisited at compile time.

use crate::key::Key;
use crate::value::{Value, ValueKind};

/// The fixed Key -> ValueKind mapping
///
/// Immutable for the lifetime of the process; defines the only valid
/// (key, value-variant) pairings.
#[derive(Debug, Clone, Copy)]
pub struct Schema;

impl Schema {
    /// The value kind registered for `key`
    pub fn kind_of(key: Key) -> ValueKind {
        match key {
            Key::Kind => ValueKind::Kind,
            Key::Title | Key::Last | Key::First => ValueKind::Text,
            Key::Year => ValueKind::Int,
            Key::Genre => ValueKind::Genre,
            Key::Region => ValueKind::Region,
            Key::Subject => ValueKind::Subject,
        }
    }

    /// Whether `value`'s variant matches the variant registered for `key`
    ///
    /// Pure predicate with no failure mode; construction-time validation of
    /// attribute bags is built on this.
    pub fn validate(key: Key, value: &Value) -> bool {
        Self::kind_of(key) == value.kind()
    }
}
