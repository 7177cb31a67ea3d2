//! folio - In-memory attribute catalogue with partial-match queries
//!
//! A catalogue entry carries a schema-validated bag of typed attributes;
//! queries are themselves attribute bags in which absent or sentinel fields
//! act as wildcards.
//!
//! # Quick Start
//!
//! ```
//! use folio::{AttributeBag, Catalogue, Genre, Key, Kind, MatchMode, Record, Value};
//!
//! # fn main() -> folio::Result<()> {
//! let mut catalogue = Catalogue::new(MatchMode::Presence);
//! catalogue.add(Record::new(AttributeBag::from_pairs([
//!     (Key::Kind, Value::Kind(Kind::Fiction)),
//!     (Key::Title, Value::from("Life of Pi")),
//!     (Key::Last, Value::from("Martel")),
//!     (Key::First, Value::from("Yann")),
//!     (Key::Year, Value::Int(2003)),
//!     (Key::Genre, Value::Genre(Genre::Adventure)),
//! ])?));
//!
//! // Keys absent from the query impose no constraint
//! let query = AttributeBag::from_pairs([(Key::Last, Value::from("martel"))])?;
//! assert_eq!(catalogue.find(&query).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Foundational types (keys, values, schema, errors) live in `folio-core`;
//! the attribute bag, the record shapes, and the catalogues live in
//! `folio-engine`. This crate re-exports the public API of both.

pub use folio_core::{Error, Genre, Key, Kind, Region, Result, Schema, Subject, Value, ValueKind};
pub use folio_engine::{
    AttributeBag, BaseAttributes, Catalogue, CookbookAttributes, FictionAttributes,
    HowtoAttributes, MatchMode, Record, TypedCatalogue, TypedRecord,
};
