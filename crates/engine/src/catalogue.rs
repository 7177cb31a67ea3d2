//! Ordered record collections with linear-scan queries
//!
//! ## Design
//!
//! Both catalogue shapes are append-only `Vec`-backed sequences: insertion
//! order is preserved, duplicates are permitted, and nothing is ever
//! removed or mutated in place. A query is a linear scan over the full
//! sequence; results are the matching subsequence in insertion order,
//! borrowed from the catalogue. O(n·k) per query with n records and k
//! constrained fields — intentionally a scan-based reference design, not an
//! indexed one.
//!
//! ## Concurrency
//!
//! No internal synchronization. The owner mutates via `add` and reads via
//! `find` within one thread of control; callers that share a catalogue
//! across threads must add their own mutual-exclusion discipline.

use crate::bag::{AttributeBag, MatchMode};
use crate::record::{Record, TypedRecord};
use serde::{Deserialize, Serialize};

/// Ordered collection of flat records with a per-instance match mode
///
/// The match policy is chosen once, at construction, and applies to every
/// query against this instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    records: Vec<Record>,
    mode: MatchMode,
}

impl Catalogue {
    /// Create an empty catalogue with the given match mode
    pub fn new(mode: MatchMode) -> Self {
        Self {
            records: Vec::new(),
            mode,
        }
    }

    /// The match mode fixed at construction
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Append a record; O(1) amortized, never fails
    pub fn add(&mut self, record: Record) {
        tracing::trace!(
            target: "folio::catalogue",
            record = %record,
            "Record added"
        );
        self.records.push(record);
    }

    /// All records whose attributes satisfy `query` under this catalogue's
    /// mode, in insertion order
    ///
    /// Returns an empty vector (not an error) when nothing matches.
    pub fn find(&self, query: &AttributeBag) -> Vec<&Record> {
        let matches: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record.attributes().matches(query, self.mode))
            .collect();
        tracing::debug!(
            target: "folio::catalogue",
            scanned = self.records.len(),
            matched = matches.len(),
            query = %query,
            "Catalogue scan"
        );
        matches
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalogue holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

/// Ordered collection of typed records
///
/// Queries carry their kind in the enum variant, so a scan filters on kind
/// and the typed match together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypedCatalogue {
    records: Vec<TypedRecord>,
}

impl TypedCatalogue {
    /// Create an empty typed catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; O(1) amortized, never fails
    pub fn add(&mut self, record: TypedRecord) {
        tracing::trace!(
            target: "folio::catalogue",
            kind = %record.kind(),
            record = %record,
            "Typed record added"
        );
        self.records.push(record);
    }

    /// All records of the query's kind that satisfy the typed match, in
    /// insertion order
    ///
    /// Records of other kinds are skipped before any field comparison.
    /// Returns an empty vector when nothing matches.
    pub fn find_of_kind(&self, query: &TypedRecord) -> Vec<&TypedRecord> {
        let matches: Vec<&TypedRecord> = self
            .records
            .iter()
            .filter(|record| record.matches(query))
            .collect();
        tracing::debug!(
            target: "folio::catalogue",
            scanned = self.records.len(),
            matched = matches.len(),
            kind = %query.kind(),
            "Typed catalogue scan"
        );
        matches
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalogue holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TypedRecord> {
        self.records.iter()
    }
}
