//! Value types for the folio catalogue
//!
//! This module defines:
//! - The closed domain enumerations (Kind, Genre, Region, Subject)
//! - Value: Unified enum for all attribute value types
//! - ValueKind: The variant tag, used by the schema
//!
//! ## Type Rules
//!
//! - No implicit coercions: `Int(1984)` never equals `Text("1984")`
//! - Different variants are NEVER equal, even across enum families
//! - Each domain enum carries a reserved `Unspecified` member, the sentinel
//!   meaning "no constraint" in sentinel-mode queries
//!
//! ## Rendering
//!
//! `Display` produces the canonical textual form consumed by the catalogue
//! renderer: text single-quoted, integers in decimal, enum members by their
//! lowercase name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Fiction book
    Fiction,
    /// Cookbook
    Cookbook,
    /// How-to book
    Howto,
    /// Sentinel: no constraint
    Unspecified,
}

impl Kind {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Fiction => "fiction",
            Kind::Cookbook => "cookbook",
            Kind::Howto => "howto",
            Kind::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fiction genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Adventure fiction
    Adventure,
    /// Classic literature
    Classics,
    /// Detective fiction
    Detective,
    /// Fantasy fiction
    Fantasy,
    /// Historical fiction
    Historic,
    /// Horror fiction
    Horror,
    /// Romance fiction
    Romance,
    /// Science fiction
    SciFi,
    /// Sentinel: no constraint
    Unspecified,
}

impl Genre {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Adventure => "adventure",
            Genre::Classics => "classics",
            Genre::Detective => "detective",
            Genre::Fantasy => "fantasy",
            Genre::Historic => "historic",
            Genre::Horror => "horror",
            Genre::Romance => "romance",
            Genre::SciFi => "scifi",
            Genre::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cookbook region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Chinese cuisine
    China,
    /// French cuisine
    France,
    /// Indian cuisine
    India,
    /// Italian cuisine
    Italy,
    /// Mexican cuisine
    Mexico,
    /// Persian cuisine
    Persia,
    /// United States cuisine
    Us,
    /// Sentinel: no constraint
    Unspecified,
}

impl Region {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Region::China => "china",
            Region::France => "france",
            Region::India => "india",
            Region::Italy => "italy",
            Region::Mexico => "mexico",
            Region::Persia => "persia",
            Region::Us => "us",
            Region::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How-to subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// Drawing instruction
    Drawing,
    /// Painting instruction
    Painting,
    /// Writing instruction
    Writing,
    /// Sentinel: no constraint
    Unspecified,
}

impl Subject {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Drawing => "drawing",
            Subject::Painting => "painting",
            Subject::Writing => "writing",
            Subject::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant tag for [`Value`]
///
/// The schema maps each [`crate::Key`] to exactly one `ValueKind`; a value
/// is legal for a key only when its tag matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// 64-bit signed integer
    Int,
    /// UTF-8 text
    Text,
    /// Record kind
    Kind,
    /// Fiction genre
    Genre,
    /// Cookbook region
    Region,
    /// How-to subject
    Subject,
}

impl ValueKind {
    /// Lowercase tag name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Text => "text",
            ValueKind::Kind => "kind",
            ValueKind::Genre => "genre",
            ValueKind::Region => "region",
            ValueKind::Subject => "subject",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical attribute value
///
/// The derived `PartialEq` gives strict variant equality: different variants
/// are never equal, and there are no coercions between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// UTF-8 text
    Text(String),
    /// Record kind
    Kind(Kind),
    /// Fiction genre
    Genre(Genre),
    /// Cookbook region
    Region(Region),
    /// How-to subject
    Subject(Subject),
}

impl Value {
    /// The variant tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Text(_) => ValueKind::Text,
            Value::Kind(_) => ValueKind::Kind,
            Value::Genre(_) => ValueKind::Genre,
            Value::Region(_) => ValueKind::Region,
            Value::Subject(_) => ValueKind::Subject,
        }
    }

    /// Whether this value is a sentinel-mode wildcard
    ///
    /// Wildcards are empty text, integer zero, and the `Unspecified` member
    /// of any domain enum.
    pub fn is_wildcard(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Text(s) => s.is_empty(),
            Value::Kind(k) => *k == Kind::Unspecified,
            Value::Genre(g) => *g == Genre::Unspecified,
            Value::Region(r) => *r == Region::Unspecified,
            Value::Subject(s) => *s == Subject::Unspecified,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as Kind if this is a Kind value
    pub fn as_kind(&self) -> Option<Kind> {
        match self {
            Value::Kind(k) => Some(*k),
            _ => None,
        }
    }

    /// Get as Genre if this is a Genre value
    pub fn as_genre(&self) -> Option<Genre> {
        match self {
            Value::Genre(g) => Some(*g),
            _ => None,
        }
    }

    /// Get as Region if this is a Region value
    pub fn as_region(&self) -> Option<Region> {
        match self {
            Value::Region(r) => Some(*r),
            _ => None,
        }
    }

    /// Get as Subject if this is a Subject value
    pub fn as_subject(&self) -> Option<Subject> {
        match self {
            Value::Subject(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "'{s}'"),
            Value::Kind(k) => write!(f, "{k}"),
            Value::Genre(g) => write!(f, "{g}"),
            Value::Region(r) => write!(f, "{r}"),
            Value::Subject(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for ergonomic literal construction

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Kind> for Value {
    fn from(k: Kind) -> Self {
        Value::Kind(k)
    }
}

impl From<Genre> for Value {
    fn from(g: Genre) -> Self {
        Value::Genre(g)
    }
}

impl From<Region> for Value {
    fn from(r: Region) -> Self {
        Value::Region(r)
    }
}

impl From<Subject> for Value {
    fn from(s: Subject) -> Self {
        Value::Subject(s)
    }
}
