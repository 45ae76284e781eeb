use crate::error::BookError;

pub const ARITY_MESSAGE: &str = "Enter name and phone number separated by a space";
pub const MISSING_NAME_MESSAGE: &str = "Enter a contact name";
pub const NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Why a command could not be carried out.
#[derive(Debug)]
pub enum CommandError {
    /// Wrong number of name/phone arguments.
    Arity,
    MissingName,
    /// Any other malformed input; carries the hint shown to the user.
    Usage(&'static str),
    Book(BookError),
}

impl From<BookError> for CommandError {
    fn from(e: BookError) -> Self {
        CommandError::Book(e)
    }
}

pub type CommandResult = Result<String, CommandError>;

/// The one place where errors become user-facing text.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::Arity => ARITY_MESSAGE.into(),
        CommandError::MissingName => MISSING_NAME_MESSAGE.into(),
        CommandError::Usage(hint) => (*hint).into(),
        CommandError::Book(e) => match e {
            BookError::NotFound { .. } => NOT_FOUND_MESSAGE.into(),
            BookError::EmptyValue { .. } => MISSING_NAME_MESSAGE.into(),
            BookError::InvalidPhoneFormat { .. }
            | BookError::InvalidDateFormat { .. }
            | BookError::MalformedData { .. }
            | BookError::Io { .. } => e.to_string(),
        },
    }
}
