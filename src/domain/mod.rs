//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact. These value objects
//! validate at construction time so an invalid name or phone number can
//! never be stored in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
