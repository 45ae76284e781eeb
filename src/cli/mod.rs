pub mod context;
pub mod contact_commands;
pub mod messages;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::book::AddressBook;
use crate::config::Config;
use context::CLIContext;
use messages::{error_message, CommandResult};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

/// Run the interactive REPL.
pub fn run(config: &Config) {
    println!("Address book");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut ctx = CLIContext::new(AddressBook::new(), config.data_file.clone());
    load_data_file(&mut ctx);
    repl_loop(&mut ctx);
    save_data_file(&ctx);
}

fn load_data_file(ctx: &mut CLIContext) {
    let Some(path) = ctx.data_file.clone() else {
        return;
    };
    if !path.exists() {
        println!("No contact file at {} yet, starting empty.", path.display());
        return;
    }
    match ctx.book.load_from_file(&path) {
        Ok(()) => println!("Loaded {} contact(s) from {}", ctx.book.len(), path.display()),
        Err(e) => {
            warn!(error = %e, "could not load contact file");
            println!("Error loading contacts: {}", e);
            println!("Starting empty...");
        }
    }
}

fn save_data_file(ctx: &CLIContext) {
    let Some(path) = ctx.data_file.as_deref() else {
        return;
    };
    match ctx.book.save_to_file(path) {
        Ok(()) => println!("Saved {} contact(s) to {}", ctx.book.len(), path.display()),
        Err(e) => {
            warn!(error = %e, "could not save contact file");
            println!("Error saving contacts: {}", e);
        }
    }
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("Enter command: ") {
            Some(s) => s,
            None => break,
        };

        if input.trim().is_empty() {
            continue;
        }

        match dispatch(&mut ctx.book, &input, CLIContext::today()) {
            Reply::Continue(text) => println!("{}", text),
            Reply::Exit(text) => {
                println!("{}", text);
                break;
            }
        }
    }
}

/// Parses one command line and runs it against `book`.
pub fn dispatch(book: &mut AddressBook, input: &str, today: NaiveDate) -> Reply {
    let input = input.trim();
    let whole = input.to_lowercase();

    // Two-word commands first.
    match whole.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["good", "bye"] => return Reply::Exit("Good bye!".into()),
        ["show", "all"] => return Reply::Continue(render(contact_commands::show_all(book))),
        _ => {}
    }

    let (command, args) = parse_command(input);
    debug!(command, "dispatching");

    let result = match command.to_lowercase().as_str() {
        "hello" => Ok("How can I help you?".into()),
        "help" | "?" => Ok(help_text().into()),
        "exit" | "close" => return Reply::Exit("Good bye!".into()),

        "add" => contact_commands::add(book, args),
        "change" => contact_commands::change(book, args),
        "phone" => contact_commands::phone(book, args),
        "search" => contact_commands::search(book, args),
        "delete" => contact_commands::delete(book, args),
        "remove-phone" => contact_commands::remove_phone(book, args),
        "birthday" => contact_commands::set_birthday(book, args),
        "days" => contact_commands::days(book, args, today),
        "birthdays" => contact_commands::birthdays(book, args, today),
        "save" => contact_commands::save(book, args),
        "load" => contact_commands::load(book, args),

        _ => Ok("Unknown command".into()),
    };

    Reply::Continue(render(result))
}

fn render(result: CommandResult) -> String {
    result.unwrap_or_else(|e| error_message(&e))
}

/// Split input into the command word and the rest.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn help_text() -> &'static str {
    r#"COMMANDS:

  Contacts:
    add <name> <phone> [birthday]          Add a contact (replaces one with the same name)
    change <name> <old_phone> <new_phone>  Change a phone number
    phone <name>                           Show a contact's phone numbers
    remove-phone <name> <phone>            Remove a phone number
    delete <name>                          Delete a contact
    show all                               List every contact
    search <query>                         Find contacts by name or phone digits

  Birthdays:
    birthday <name> <YYYY-MM-DD>           Set a contact's birthday
    days <name>                            Days until a contact's birthday
    birthdays [days]                       Birthdays in the next N days (default 7)

  Files:
    save <path>                            Save contacts as JSON
    load <path>                            Replace contacts with a JSON file

  Other:
    hello                                  Say hello
    help                                   Show this help
    exit / close / good bye                Exit"#
}
