use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::book::AddressBook;

pub struct CLIContext {
    pub book: AddressBook,
    pub data_file: Option<PathBuf>,
}

impl CLIContext {
    pub fn new(book: AddressBook, data_file: Option<PathBuf>) -> Self {
        Self { book, data_file }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
