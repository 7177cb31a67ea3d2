//! Attribute keys
//!
//! A [`Key`] names one attribute slot on a catalogue record. The set of keys
//! is closed and the ordinal values are stable: rendering iterates keys in
//! ordinal order, so reordering or renumbering variants changes observable
//! output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one attribute slot
///
/// The derived `Ord` follows the declared ordinal order, which defines the
/// deterministic key order used when rendering an attribute bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    /// Record kind (fiction, cookbook, howto)
    Kind = 0,
    /// Title text
    Title = 1,
    /// Author last name
    Last = 2,
    /// Author first name
    First = 3,
    /// Publication year
    Year = 4,
    /// Fiction genre
    Genre = 5,
    /// Cookbook region
    Region = 6,
    /// How-to subject
    Subject = 7,
}

impl Key {
    /// All keys in ordinal order
    pub const ALL: [Key; 8] = [
        Key::Kind,
        Key::Title,
        Key::Last,
        Key::First,
        Key::Year,
        Key::Genre,
        Key::Region,
        Key::Subject,
    ];

    /// The slot name as rendered in catalogue output (uppercase)
    pub fn name(&self) -> &'static str {
        match self {
            Key::Kind => "KIND",
            Key::Title => "TITLE",
            Key::Last => "LAST",
            Key::First => "FIRST",
            Key::Year => "YEAR",
            Key::Genre => "GENRE",
            Key::Region => "REGION",
            Key::Subject => "SUBJECT",
        }
    }

    /// Ordinal value of this key
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
