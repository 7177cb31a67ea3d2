//! Error types for the folio catalogue
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Queries never fail; the only fallible operation is
//! attribute-bag construction.

use crate::key::Key;
use crate::value::{Value, ValueKind};
use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the folio catalogue
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A supplied value's variant does not match the key's registered variant.
    ///
    /// Raised only at attribute-bag construction; the bag is not partially
    /// built.
    #[error("schema violation for key {key}: expected {expected} value, got {value}")]
    SchemaViolation {
        /// The key whose registered kind was violated
        key: Key,
        /// The offending value
        value: Value,
        /// The kind the schema registers for the key
        expected: ValueKind,
    },
}
