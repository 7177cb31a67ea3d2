//! Catalogue records
//!
//! Two record shapes coexist, mirroring the two evolutions of the design:
//!
//! - [`Record`]: a flat, schema-validated [`AttributeBag`] — the dynamic
//!   shape used with per-catalogue match modes
//! - [`TypedRecord`]: a closed tagged-variant family where each kind embeds
//!   the shared [`BaseAttributes`] (title / last / first) as a named field
//!   plus its kind-specific fields
//!
//! Records are immutable after construction. The typed family matches with
//! fixed sentinel semantics (the base text fields by case-insensitive
//! prefix, kind-specific fields by sentinel-or-exact), and the query's
//! variant carries the kind: matching rejects on kind mismatch first, then
//! defers to the base match, then to the kind-specific match.

use crate::bag::{text_prefix_fold, AttributeBag};
use folio_core::{Genre, Key, Kind, Region, Subject, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalogue entry owning a flat attribute bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    attrs: AttributeBag,
}

impl Record {
    /// Wrap a validated attribute bag as a record
    pub fn new(attrs: AttributeBag) -> Self {
        Self { attrs }
    }

    /// The record's attributes
    pub fn attributes(&self) -> &AttributeBag {
        &self.attrs
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.attrs.fmt(f)
    }
}

/// Fields shared by every typed record: title, author last and first name
///
/// An empty field in a query means "no constraint"; a non-empty field
/// matches by case-insensitive prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseAttributes {
    /// Title text
    pub title: String,
    /// Author last name
    pub last: String,
    /// Author first name
    pub first: String,
}

impl BaseAttributes {
    /// Build base attributes from title and author name
    pub fn new(title: impl Into<String>, last: impl Into<String>, first: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            last: last.into(),
            first: first.into(),
        }
    }

    /// The shared base match: each non-empty query field must be a
    /// case-insensitive prefix of the corresponding record field
    pub fn matches(&self, query: &BaseAttributes) -> bool {
        field_matches(&query.title, &self.title)
            && field_matches(&query.last, &self.last)
            && field_matches(&query.first, &self.first)
    }

    fn pairs(&self) -> [(Key, Value); 3] {
        [
            (Key::Title, Value::from(self.title.clone())),
            (Key::Last, Value::from(self.last.clone())),
            (Key::First, Value::from(self.first.clone())),
        ]
    }
}

fn field_matches(target: &str, source: &str) -> bool {
    target.is_empty() || text_prefix_fold(target, source)
}

/// Attributes of a fiction record: base plus year and genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FictionAttributes {
    /// Shared base fields
    pub base: BaseAttributes,
    /// Publication year (0 = no constraint in a query)
    pub year: i64,
    /// Genre (`Unspecified` = no constraint in a query)
    pub genre: Genre,
}

impl FictionAttributes {
    /// Build fiction attributes
    pub fn new(base: BaseAttributes, year: i64, genre: Genre) -> Self {
        Self { base, year, genre }
    }

    /// Base match first, then year and genre (sentinel-or-exact)
    pub fn matches(&self, query: &FictionAttributes) -> bool {
        if !self.base.matches(&query.base) {
            return false;
        }
        (query.year == 0 || query.year == self.year)
            && (query.genre == Genre::Unspecified || query.genre == self.genre)
    }

    fn bag(&self) -> AttributeBag {
        AttributeBag::from_validated(self.base.pairs().into_iter().chain([
            (Key::Year, Value::Int(self.year)),
            (Key::Genre, Value::Genre(self.genre)),
        ]))
    }
}

impl fmt::Display for FictionAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bag().fmt(f)
    }
}

/// Attributes of a cookbook record: base plus region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookbookAttributes {
    /// Shared base fields
    pub base: BaseAttributes,
    /// Cuisine region (`Unspecified` = no constraint in a query)
    pub region: Region,
}

impl CookbookAttributes {
    /// Build cookbook attributes
    pub fn new(base: BaseAttributes, region: Region) -> Self {
        Self { base, region }
    }

    /// Base match first, then region (sentinel-or-exact)
    pub fn matches(&self, query: &CookbookAttributes) -> bool {
        if !self.base.matches(&query.base) {
            return false;
        }
        query.region == Region::Unspecified || query.region == self.region
    }

    fn bag(&self) -> AttributeBag {
        AttributeBag::from_validated(
            self.base
                .pairs()
                .into_iter()
                .chain([(Key::Region, Value::Region(self.region))]),
        )
    }
}

impl fmt::Display for CookbookAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bag().fmt(f)
    }
}

/// Attributes of a how-to record: base plus subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowtoAttributes {
    /// Shared base fields
    pub base: BaseAttributes,
    /// Instruction subject (`Unspecified` = no constraint in a query)
    pub subject: Subject,
}

impl HowtoAttributes {
    /// Build how-to attributes
    pub fn new(base: BaseAttributes, subject: Subject) -> Self {
        Self { base, subject }
    }

    /// Base match first, then subject (sentinel-or-exact)
    pub fn matches(&self, query: &HowtoAttributes) -> bool {
        if !self.base.matches(&query.base) {
            return false;
        }
        query.subject == Subject::Unspecified || query.subject == self.subject
    }

    fn bag(&self) -> AttributeBag {
        AttributeBag::from_validated(
            self.base
                .pairs()
                .into_iter()
                .chain([(Key::Subject, Value::Subject(self.subject))]),
        )
    }
}

impl fmt::Display for HowtoAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bag().fmt(f)
    }
}

/// A catalogue entry of exactly one of the closed record kinds
///
/// The variant is the kind discriminant; there is no way to hold a record
/// of unknown shape, so matching needs no downcasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypedRecord {
    /// Fiction record
    Fiction(FictionAttributes),
    /// Cookbook record
    Cookbook(CookbookAttributes),
    /// How-to record
    Howto(HowtoAttributes),
}

impl TypedRecord {
    /// The kind discriminant of this record
    pub fn kind(&self) -> Kind {
        match self {
            TypedRecord::Fiction(_) => Kind::Fiction,
            TypedRecord::Cookbook(_) => Kind::Cookbook,
            TypedRecord::Howto(_) => Kind::Howto,
        }
    }

    /// Attribute-bag view of this record
    ///
    /// Infallible: the field types make schema violations unrepresentable.
    pub fn attributes(&self) -> AttributeBag {
        match self {
            TypedRecord::Fiction(attrs) => attrs.bag(),
            TypedRecord::Cookbook(attrs) => attrs.bag(),
            TypedRecord::Howto(attrs) => attrs.bag(),
        }
    }

    /// Whether this record satisfies a typed query
    ///
    /// The query's variant selects the kind: a kind mismatch rejects
    /// outright, then the shared base match and the kind-specific match
    /// must both pass.
    pub fn matches(&self, query: &TypedRecord) -> bool {
        match (self, query) {
            (TypedRecord::Fiction(attrs), TypedRecord::Fiction(query)) => attrs.matches(query),
            (TypedRecord::Cookbook(attrs), TypedRecord::Cookbook(query)) => attrs.matches(query),
            (TypedRecord::Howto(attrs), TypedRecord::Howto(query)) => attrs.matches(query),
            _ => false,
        }
    }
}

impl fmt::Display for TypedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedRecord::Fiction(attrs) => attrs.fmt(f),
            TypedRecord::Cookbook(attrs) => attrs.fmt(f),
            TypedRecord::Howto(attrs) => attrs.fmt(f),
        }
    }
}
