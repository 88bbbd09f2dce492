//! Record model: one contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name plus an ordered list of phone numbers.
///
/// Duplicate phones are allowed. Phones only change through the
/// methods below, each of which validates its input first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name (unique key in the address book)
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Returns how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything changes. Returns the number of
    /// phones replaced; zero means `old` was not on the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = Phone::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    /// Replace all phones with a single validated `phone`.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("John").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record_has_no_phones() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_new_record_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(
            phone_values(&record),
            vec!["1111111111", "2222222222", "1111111111"]
        );
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = record_with(&["1111111111"]);
        let result = record.add_phone("12345");
        assert_eq!(result, Err(ValidationError::InvalidPhone("12345".into())));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(record.remove_phone("1111111111"), 2);
        assert_eq!(phone_values(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(record.remove_phone("9999999999"), 0);
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        let replaced = record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(replaced, 1);
        assert_eq!(phone_values(&record), vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_absent_is_noop() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        let replaced = record.edit_phone("9999999999", "3333333333").unwrap();
        assert_eq!(replaced, 0);
        assert_eq!(phone_values(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_changes_nothing() {
        let mut record = record_with(&["1111111111"]);
        assert!(record.edit_phone("1111111111", "bad").is_err());
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_set_phone_replaces_all() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        record.set_phone("3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["3333333333"]);
    }

    #[test]
    fn test_find_phone() {
        let record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(Phone::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_record_display() {
        let record = record_with(&["1234567890", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = record_with(&["1234567890"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "John", "phones": ["1234567890"] })
        );

        let bad = serde_json::json!({ "name": "John", "phones": ["123"] });
        assert!(serde_json::from_value::<Record>(bad).is_err());
    }
}
