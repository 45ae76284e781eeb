//! JSON persistence for the address book.
//!
//! The file holds an array of contacts:
//!
//! ```json
//! [
//!   { "name": "Alice", "phones": ["0991234567"], "birthday": "1990-05-15" },
//!   { "name": "Bob", "phones": [] }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{BookError, BookResult};
use crate::model::Record;

#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<String>,
}

impl StoredContact {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.get().clone()).collect(),
            birthday: record.birthday().map(|d| d.to_string()),
        }
    }

    fn into_record(self) -> BookResult<Record> {
        let mut record = Record::create(&self.name, None, self.birthday.as_deref())?;
        for phone in &self.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

/// Writes `records` to `path`, replacing any existing file.
pub fn save<'a>(path: &Path, records: impl Iterator<Item = &'a Record>) -> BookResult<()> {
    let stored: Vec<StoredContact> = records.map(StoredContact::from_record).collect();
    let json = serde_json::to_string_pretty(&stored).map_err(|e| malformed(path, e))?;
    std::fs::write(path, json).map_err(|e| io_error(path, e))?;
    info!(path = %path.display(), contacts = stored.len(), "saved address book");
    Ok(())
}

/// Reads and validates every contact in `path`. Nothing is returned
/// unless the whole file is valid.
pub fn load(path: &Path) -> BookResult<Vec<Record>> {
    let json = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let stored: Vec<StoredContact> = serde_json::from_str(&json).map_err(|e| {
        warn!(path = %path.display(), error = %e, "address book file does not parse");
        malformed(path, e)
    })?;

    let records = stored
        .into_iter()
        .map(StoredContact::into_record)
        .collect::<BookResult<Vec<_>>>()
        .map_err(|e| {
            warn!(path = %path.display(), error = %e, "address book file holds invalid contact");
            malformed(path, e)
        })?;

    info!(path = %path.display(), contacts = records.len(), "loaded address book");
    Ok(records)
}

fn malformed(path: &Path, reason: impl ToString) -> BookError {
    BookError::MalformedData {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> BookError {
    BookError::Io {
        path: path.display().to_string(),
        source,
    }
}
