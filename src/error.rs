use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be empty")]
    EmptyValue { field: String },

    #[error("Invalid phone number '{value}': expected exactly 10 digits")]
    InvalidPhoneFormat { value: String },

    #[error("Invalid birthday '{value}': expected a date in YYYY-MM-DD format")]
    InvalidDateFormat { value: String },

    #[error("Contact not found: {name}")]
    NotFound { name: String },

    #[error("Malformed contact data in {path}: {reason}")]
    MalformedData { path: String, reason: String },

    #[error("Cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type BookResult<T> = Result<T, BookError>;
