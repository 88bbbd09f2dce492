//! Shared fixtures for integration tests.

#![allow(dead_code)]

use contact_assistant::{AddressBook, Assistant, Record, Reply};

/// Build a record with the given phones.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    record
}

/// Build a book from `(name, phones)` entries, in order.
pub fn sample_book(entries: &[(&str, &[&str])]) -> AddressBook {
    let mut book = AddressBook::new();
    for &(name, phones) in entries {
        book.add_record(sample_record(name, phones));
    }
    book
}

/// Feed `lines` to the assistant and collect the text replies.
///
/// Stops at the first `Reply::Exit`.
pub fn run_script(assistant: &mut Assistant, lines: &[&str]) -> Vec<String> {
    let mut replies = Vec::new();
    for line in lines {
        match assistant.handle_line(line) {
            Reply::Message(text) => replies.push(text),
            Reply::Exit => break,
        }
    }
    replies
}
