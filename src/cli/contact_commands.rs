use std::path::Path;

use chrono::NaiveDate;

use super::messages::{CommandError, CommandResult};
use crate::book::AddressBook;
use crate::model::Record;
use crate::queries::birthday_queries;

const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

fn args_of(args: &str) -> Vec<&str> {
    args.split_whitespace().collect()
}

fn format_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_record(record: &Record) -> String {
    let phones = format_phones(record);
    match record.birthday() {
        Some(bd) => format!("{}: {} (birthday: {})", record.name(), phones, bd),
        None => format!("{}: {}", record.name(), phones),
    }
}

fn days_label(days: i64) -> String {
    match days {
        0 => "today".into(),
        1 => "tomorrow".into(),
        n => format!("in {} days", n),
    }
}

pub fn add(book: &mut AddressBook, args: &str) -> CommandResult {
    let (name, phone, birthday) = match args_of(args).as_slice() {
        &[name, phone] => (name, phone, None),
        &[name, phone, birthday] => (name, phone, Some(birthday)),
        _ => return Err(CommandError::Arity),
    };
    let record = Record::create(name, Some(phone), birthday)?;
    let reply = format!("Contact {} added", record.name());
    book.add(record);
    Ok(reply)
}

pub fn change(book: &mut AddressBook, args: &str) -> CommandResult {
    let &[name, old, new] = args_of(args).as_slice() else {
        return Err(CommandError::Arity);
    };
    let mut record = book.get(name)?.clone();
    if !record.has_phone(old) {
        return Ok(format!("Phone {} not found for {}", old, record.name()));
    }
    record.edit_phone(old, new)?;
    let reply = format!("Phone number for {} changed", record.name());
    book.replace(name, record);
    Ok(reply)
}

pub fn phone(book: &AddressBook, args: &str) -> CommandResult {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingName);
    }
    let record = book.get(name)?;
    Ok(format!(
        "Phone number(s) for {}: {}",
        record.name(),
        format_phones(record)
    ))
}

pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts found".into());
    }
    let lines: Vec<String> = book.iter().map(format_record).collect();
    Ok(format!("Contacts:\n{}", lines.join("\n")))
}

pub fn search(book: &AddressBook, args: &str) -> CommandResult {
    let query = args.trim();
    if query.is_empty() {
        return Err(CommandError::Usage("Enter a name or part of a phone number to search for"));
    }
    let lines: Vec<String> = book.search(query).map(format_record).collect();
    if lines.is_empty() {
        return Ok("No contacts found".into());
    }
    Ok(format!("Found {} contact(s):\n{}", lines.len(), lines.join("\n")))
}

pub fn delete(book: &mut AddressBook, args: &str) -> CommandResult {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingName);
    }
    let removed = book.remove(name)?;
    Ok(format!("Contact {} deleted", removed.name()))
}

pub fn remove_phone(book: &mut AddressBook, args: &str) -> CommandResult {
    let &[name, phone] = args_of(args).as_slice() else {
        return Err(CommandError::Arity);
    };
    let mut record = book.get(name)?.clone();
    record.remove_phone(phone);
    let reply = format!("Phone {} removed from {}", phone, record.name());
    book.replace(name, record);
    Ok(reply)
}

pub fn set_birthday(book: &mut AddressBook, args: &str) -> CommandResult {
    let &[name, birthday] = args_of(args).as_slice() else {
        return Err(CommandError::Usage("Enter name and birthday (YYYY-MM-DD) separated by a space"));
    };
    let mut record = book.get(name)?.clone();
    record.set_birthday(birthday)?;
    let reply = format!("Birthday for {} set to {}", record.name(), birthday);
    book.replace(name, record);
    Ok(reply)
}

pub fn days(book: &AddressBook, args: &str, today: NaiveDate) -> CommandResult {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingName);
    }
    let record = book.get(name)?;
    Ok(match record.days_to_birthday_from(today) {
        Some(d) => format!("{}'s birthday is {}", record.name(), days_label(d)),
        None => format!("No birthday recorded for {}", record.name()),
    })
}

pub fn birthdays(book: &AddressBook, args: &str, today: NaiveDate) -> CommandResult {
    let window = match args.trim() {
        "" => DEFAULT_BIRTHDAY_WINDOW,
        raw => raw
            .parse::<i64>()
            .ok()
            .filter(|d| *d >= 0)
            .ok_or(CommandError::Usage("Enter the number of days as a whole number"))?,
    };

    let upcoming = birthday_queries::upcoming_birthdays(book, window, today);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days", window));
    }
    let lines: Vec<String> = upcoming
        .iter()
        .map(|(r, d)| format!("{}: {}", r.name(), days_label(*d)))
        .collect();
    Ok(format!("Upcoming birthdays:\n{}", lines.join("\n")))
}

pub fn save(book: &AddressBook, args: &str) -> CommandResult {
    let path = args.trim();
    if path.is_empty() {
        return Err(CommandError::Usage("Enter a file path"));
    }
    book.save_to_file(Path::new(path))?;
    Ok(format!("Saved {} contact(s) to {}", book.len(), path))
}

pub fn load(book: &mut AddressBook, args: &str) -> CommandResult {
    let path = args.trim();
    if path.is_empty() {
        return Err(CommandError::Usage("Enter a file path"));
    }
    book.load_from_file(Path::new(path))?;
    Ok(format!("Loaded {} contact(s) from {}", book.len(), path))
}
