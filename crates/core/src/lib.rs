//! Core types for the folio catalogue
//!
//! This crate defines the foundational types used throughout the system:
//! - Key: Attribute slot identifiers with a stable ordinal order
//! - Kind, Genre, Region, Subject: Closed domain enumerations
//! - Value: Unified value enum for all attribute types
//! - ValueKind: Discriminates between Value variants
//! - Schema: The fixed Key -> ValueKind mapping and its validation predicate
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use key::Key;
pub use schema::Schema;
pub use value::{Genre, Kind, Region, Subject, Value, ValueKind};
