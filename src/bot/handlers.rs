//! Command handlers.
//!
//! Each handler checks its arity, runs one address-book operation and
//! returns the reply text. Failures come back as `CommandError`; turning
//! them into user-facing text is the dispatcher's job.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::{debug, info};

/// Check that `args` holds between `min` and `max` positional arguments.
fn expect_args(args: &[String], min: usize, max: usize) -> CommandResult<()> {
    if args.len() < min {
        return Err(CommandError::Arity {
            expected: min,
            got: args.len(),
        });
    }
    if args.len() > max {
        return Err(CommandError::Format(format!(
            "expected at most {} arguments, got {}",
            max,
            args.len()
        )));
    }
    Ok(())
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

pub fn help() -> String {
    [
        "Available commands:",
        "  hello                      greet the assistant",
        "  add <name> <phone>         add a contact or another phone to it",
        "  change <name> <phone>      replace all phones of a contact",
        "  change <name> <old> <new>  replace one phone of a contact",
        "  phone <name>               show the phones of a contact",
        "  remove <name> <phone>      remove a phone from a contact",
        "  delete <name>              delete a contact",
        "  all                        list every contact",
        "  close | exit               leave",
    ]
    .join("\n")
}

/// `add <name> <phone>`
///
/// Creates the contact if needed, otherwise appends the phone to it.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_args(args, 2, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            info!("Added phone to existing contact: {}", name);
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            record.add_phone(phone)?;
            book.add_record(record);
            info!("Contact created: {}", name);
        }
    }

    Ok("Contact added.".to_string())
}

/// `change <name> <phone>` or `change <name> <old> <new>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_args(args, 2, 3)?;
    let name = &args[0];

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    if let [_, old, new] = args {
        if record.edit_phone(old, new)? == 0 {
            return Err(CommandError::PhoneNotFound {
                name: name.clone(),
                phone: old.clone(),
            });
        }
    } else {
        record.set_phone(&args[1])?;
    }

    info!("Contact updated: {}", name);
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
///
/// Tokens after the name are ignored.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    expect_args(args, 1, usize::MAX)?;
    let name = &args[0];

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    Ok(format!("{}'s phone number: {}", name, record.phones_display()))
}

/// `remove <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_args(args, 2, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let removed = record.remove_phone(phone);
    if removed == 0 {
        return Err(CommandError::PhoneNotFound {
            name: name.clone(),
            phone: phone.clone(),
        });
    }

    info!("Removed {} phone(s) from contact: {}", removed, name);
    Ok("Phone removed.".to_string())
}

/// `delete <name>`
///
/// Tokens after the name are ignored.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    expect_args(args, 1, usize::MAX)?;
    let name = &args[0];

    book.delete(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    info!("Contact deleted: {}", name);
    Ok("Contact deleted.".to_string())
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    debug!("Listing {} contacts", book.len());
    let mut lines = vec!["All contacts:".to_string()];
    lines.extend(
        book.iter()
            .map(|(name, record)| format!("{}: {}", name, record.phones_display())),
    );
    lines.join("\n")
}
