//! Shared behaviour of contact fields.

use std::fmt;

/// A validated, string-backed field of a contact record.
///
/// Fields compare by value and render as their raw value.
pub trait Field: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// The validated value.
    fn value(&self) -> &str;
}
