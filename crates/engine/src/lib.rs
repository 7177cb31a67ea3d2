//! Catalogue engine for folio
//!
//! This crate holds the behavior layered over `folio-core`'s types:
//! - AttributeBag: schema-validated heterogeneous attribute mapping with
//!   the two named match modes
//! - Record and the tagged-variant record family (fiction / cookbook /
//!   howto over a shared base)
//! - Catalogue / TypedCatalogue: ordered, append-only collections with
//!   linear-scan queries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bag;
pub mod catalogue;
pub mod record;

pub use bag::{AttributeBag, MatchMode};
pub use catalogue::{Catalogue, TypedCatalogue};
pub use record::{
    BaseAttributes, CookbookAttributes, FictionAttributes, HowtoAttributes, Record, TypedRecord,
};
