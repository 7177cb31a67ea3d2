//! Schema-validated attribute bags and the match predicate
//!
//! ## Design
//!
//! An [`AttributeBag`] maps [`Key`] to [`Value`] with two invariants:
//! - every pair satisfies the schema (enforced all-or-nothing at
//!   construction, never by coercion)
//! - iteration order is key-ordinal order (the bag is backed by a
//!   `BTreeMap` keyed on the ordinal-ordered `Key`), which makes rendering
//!   deterministic regardless of construction order
//!
//! ## Match modes
//!
//! Two query policies coexist in this design and are selected explicitly
//! per catalogue instance:
//! - [`MatchMode::Presence`]: a key absent from the query imposes no
//!   constraint; a present key requires the record to carry the key with an
//!   equal value (text compares case-insensitively, everything else
//!   structurally)
//! - [`MatchMode::Sentinel`]: every query value has a designated wildcard
//!   (empty text, integer zero, an `Unspecified` enum member); constrained
//!   text matches by case-insensitive prefix, constrained non-text values
//!   by equality
//!
//! Both predicates are total, pure, and side-effect free.

use folio_core::{Error, Key, Result, Schema, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Query matching policy, fixed per catalogue instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Wildcard-by-absence, exact-on-presence
    ///
    /// Keys absent from the query impose no constraint; an empty query
    /// matches every record. Text compares case-insensitively for full
    /// equality.
    Presence,
    /// Wildcard-by-sentinel, prefix-on-text
    ///
    /// Sentinel query values (see [`Value::is_wildcard`]) impose no
    /// constraint. Constrained text matches when the record's text starts
    /// with the query text, compared case-insensitively; a query longer
    /// than the record's text fails immediately.
    Sentinel,
}

/// Schema-validated mapping from attribute key to typed value
///
/// Keys are unique; insertion order is irrelevant for matching and never
/// observable in rendering (keys render in ordinal order).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeBag {
    attrs: BTreeMap<Key, Value>,
}

impl AttributeBag {
    /// The empty bag
    ///
    /// As a presence-mode query it matches every record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bag from key/value pairs, validating each against the schema
    ///
    /// All-or-nothing: the first violating pair fails the whole
    /// construction with [`Error::SchemaViolation`] and no partial bag is
    /// produced. A later duplicate of a key overwrites the earlier value
    /// (map semantics).
    ///
    /// # Errors
    /// Returns `Error::SchemaViolation` carrying the key, the offending
    /// value, and the kind the schema registers for the key.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut attrs = BTreeMap::new();
        for (key, value) in pairs {
            if !Schema::validate(key, &value) {
                return Err(Error::SchemaViolation {
                    key,
                    expected: Schema::kind_of(key),
                    value,
                });
            }
            attrs.insert(key, value);
        }
        Ok(Self { attrs })
    }

    /// Construction bypassing validation, for pairs known schema-correct
    ///
    /// Used by the typed record family, whose field types make violations
    /// unrepresentable.
    pub(crate) fn from_validated<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        Self {
            attrs: pairs.into_iter().collect(),
        }
    }

    /// The value stored for `key`, if any
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.attrs.get(&key)
    }

    /// Number of attributes in the bag
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the bag holds no attributes
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate pairs in key-ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.attrs.iter().map(|(k, v)| (*k, v))
    }

    /// Whether this bag satisfies `query` under the given mode
    ///
    /// `self` is the record's bag, `query` the constraint set. Total and
    /// pure: defined for every input, no side effects.
    pub fn matches(&self, query: &AttributeBag, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Presence => self.matches_presence(query),
            MatchMode::Sentinel => self.matches_sentinel(query),
        }
    }

    fn matches_presence(&self, query: &AttributeBag) -> bool {
        query.iter().all(|(key, want)| match self.attrs.get(&key) {
            None => false,
            Some(have) => match (want, have) {
                (Value::Text(w), Value::Text(h)) => text_eq_fold(w, h),
                _ => want == have,
            },
        })
    }

    fn matches_sentinel(&self, query: &AttributeBag) -> bool {
        query.iter().all(|(key, want)| {
            if want.is_wildcard() {
                return true;
            }
            match self.attrs.get(&key) {
                None => false,
                Some(have) => match (want, have) {
                    (Value::Text(w), Value::Text(h)) => text_prefix_fold(w, h),
                    _ => want == have,
                },
            }
        })
    }
}

impl fmt::Display for AttributeBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// Case-insensitive full equality on text
pub(crate) fn text_eq_fold(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive prefix test: does `source` start with `target`?
///
/// A target longer than the source fails without comparing.
pub(crate) fn text_prefix_fold(target: &str, source: &str) -> bool {
    if target.chars().count() > source.chars().count() {
        return false;
    }
    source.to_lowercase().starts_with(&target.to_lowercase())
}
