use addrbook::book::AddressBook;
use addrbook::cli::{dispatch, Reply};
use chrono::NaiveDate;
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn run(book: &mut AddressBook, line: &str) -> String {
    match dispatch(book, line, today()) {
        Reply::Continue(text) => text,
        Reply::Exit(text) => panic!("unexpected exit: {text}"),
    }
}

// ==========================================================================
// GREETING AND EXIT
// ==========================================================================

#[test]
fn hello_greets() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "hello"), "How can I help you?");
    assert_eq!(run(&mut book, "HELLO"), "How can I help you?");
}

#[test]
fn exit_words_end_the_loop() {
    let mut book = AddressBook::new();
    for line in ["exit", "close", "good bye", "Good   Bye", "  EXIT  "] {
        assert_eq!(dispatch(&mut book, line, today()), Reply::Exit("Good bye!".into()));
    }
}

#[test]
fn unknown_command() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "dance"), "Unknown command");
}

// ==========================================================================
// ADD / PHONE / CHANGE
// ==========================================================================

#[test]
fn add_then_phone() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "add Alice 0991234567"), "Contact Alice added");
    assert_eq!(
        run(&mut book, "phone alice"),
        "Phone number(s) for Alice: 0991234567"
    );
}

#[test]
fn add_keeps_name_case() {
    let mut book = AddressBook::new();
    run(&mut book, "ADD Alice 0991234567");
    assert_eq!(book.get("alice").unwrap().name(), "Alice");
}

#[test]
fn add_with_birthday() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567 1990-03-05");
    assert_eq!(run(&mut book, "days Alice"), "Alice's birthday is in 4 days");
}

#[test]
fn add_wrong_arity() {
    let mut book = AddressBook::new();
    let msg = "Enter name and phone number separated by a space";
    assert_eq!(run(&mut book, "add Alice"), msg);
    assert_eq!(run(&mut book, "add"), msg);
    assert_eq!(run(&mut book, "add a b c d"), msg);
}

#[test]
fn add_invalid_phone_names_the_value() {
    let mut book = AddressBook::new();
    let reply = run(&mut book, "add Alice 12345");
    assert!(reply.contains("phone"), "{reply}");
    assert!(reply.contains("12345"), "{reply}");
    assert!(book.is_empty());
}

#[test]
fn add_invalid_birthday_names_the_value() {
    let mut book = AddressBook::new();
    let reply = run(&mut book, "add Alice 0991234567 05/03/1990");
    assert!(reply.contains("birthday"), "{reply}");
    assert!(book.is_empty());
}

#[test]
fn phone_missing_name() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "phone"), "Enter a contact name");
}

#[test]
fn phone_unknown_contact() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "phone ghost"), "Contact not found");
}

#[test]
fn change_replaces_phone() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    assert_eq!(
        run(&mut book, "change alice 0991234567 0671234567"),
        "Phone number for Alice changed"
    );
    assert_eq!(
        run(&mut book, "phone Alice"),
        "Phone number(s) for Alice: 0671234567"
    );
}

#[test]
fn change_unknown_phone_reports_it() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    assert_eq!(
        run(&mut book, "change Alice 0000000000 0671234567"),
        "Phone 0000000000 not found for Alice"
    );
}

#[test]
fn change_invalid_new_phone_keeps_old() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    let reply = run(&mut book, "change Alice 0991234567 abc");
    assert!(reply.contains("abc"), "{reply}");
    assert_eq!(book.get("alice").unwrap().phones()[0].get(), "0991234567");
}

#[test]
fn change_unknown_contact_and_arity() {
    let mut book = AddressBook::new();
    assert_eq!(
        run(&mut book, "change ghost 0991234567 0671234567"),
        "Contact not found"
    );
    assert_eq!(
        run(&mut book, "change Alice 0991234567"),
        "Enter name and phone number separated by a space"
    );
}

// ==========================================================================
// LISTING AND SEARCH
// ==========================================================================

#[test]
fn show_all_empty_and_filled() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "show all"), "No contacts found");

    run(&mut book, "add Alice 0991234567 1990-03-05");
    run(&mut book, "add Bob 0671234567");
    assert_eq!(
        run(&mut book, "Show All"),
        "Contacts:\nAlice: 0991234567 (birthday: 1990-03-05)\nBob: 0671234567"
    );
}

#[test]
fn search_by_phone() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    run(&mut book, "add Bob 0671234567");
    assert_eq!(
        run(&mut book, "search 099"),
        "Found 1 contact(s):\nAlice: 0991234567"
    );
    assert_eq!(run(&mut book, "search nobody"), "No contacts found");
}

#[test]
fn search_requires_query() {
    let mut book = AddressBook::new();
    assert_eq!(
        run(&mut book, "search"),
        "Enter a name or part of a phone number to search for"
    );
}

// ==========================================================================
// DELETE / REMOVE PHONE / BIRTHDAYS
// ==========================================================================

#[test]
fn delete_contact() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    assert_eq!(run(&mut book, "delete alice"), "Contact Alice deleted");
    assert_eq!(run(&mut book, "delete alice"), "Contact not found");
    assert_eq!(run(&mut book, "delete"), "Enter a contact name");
}

#[test]
fn remove_phone_command() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    assert_eq!(
        run(&mut book, "remove-phone Alice 0991234567"),
        "Phone 0991234567 removed from Alice"
    );
    assert_eq!(run(&mut book, "phone Alice"), "Phone number(s) for Alice: ");
}

#[test]
fn birthday_and_days_commands() {
    let mut book = AddressBook::new();
    run(&mut book, "add Bob 0671234567");
    assert_eq!(run(&mut book, "days Bob"), "No birthday recorded for Bob");
    assert_eq!(
        run(&mut book, "birthday Bob 1992-03-01"),
        "Birthday for Bob set to 1992-03-01"
    );
    assert_eq!(run(&mut book, "days bob"), "Bob's birthday is today");

    let reply = run(&mut book, "birthday Bob tomorrow");
    assert!(reply.contains("tomorrow"), "{reply}");
    assert_eq!(
        run(&mut book, "birthday Bob"),
        "Enter name and birthday (YYYY-MM-DD) separated by a space"
    );
}

#[test]
fn birthdays_command() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567 1990-03-05");
    run(&mut book, "add Bob 0671234567 1992-03-02");
    run(&mut book, "add Carol 0501112233 1970-12-31");

    assert_eq!(
        run(&mut book, "birthdays"),
        "Upcoming birthdays:\nBob: tomorrow\nAlice: in 4 days"
    );
    assert_eq!(run(&mut book, "birthdays 0"), "No birthdays in the next 0 days");
    assert_eq!(
        run(&mut book, "birthdays soon"),
        "Enter the number of days as a whole number"
    );
}

// ==========================================================================
// SAVE / LOAD
// ==========================================================================

#[test]
fn save_and_load_commands() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    let path_str = path.to_str().unwrap();

    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0991234567");
    assert_eq!(
        run(&mut book, &format!("save {path_str}")),
        format!("Saved 1 contact(s) to {path_str}")
    );

    let mut fresh = AddressBook::new();
    assert_eq!(
        run(&mut fresh, &format!("load {path_str}")),
        format!("Loaded 1 contact(s) from {path_str}")
    );
    assert_eq!(fresh, book);
}

#[test]
fn load_missing_file_reports_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let mut book = AddressBook::new();
    let reply = run(&mut book, &format!("load {}", path.display()));
    assert!(reply.starts_with("Cannot access"), "{reply}");
}

#[test]
fn save_and_load_require_path() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "save"), "Enter a file path");
    assert_eq!(run(&mut book, "load   "), "Enter a file path");
}
