use std::path::Path;

use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::model::Record;
use crate::storage;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    record: Record,
}

/// Contacts keyed by lower-cased name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: Vec<Entry>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Inserts under the record's own name, overwriting any existing entry.
    pub fn add(&mut self, record: Record) {
        let key = normalize(record.name());
        self.upsert(key, record);
    }

    /// Inserts under `name` regardless of the record's own name.
    pub fn replace(&mut self, name: &str, record: Record) {
        self.upsert(normalize(name), record);
    }

    pub fn get(&self, name: &str) -> BookResult<&Record> {
        let key = normalize(name);
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.record)
            .ok_or_else(|| not_found(name))
    }

    pub fn remove(&mut self, name: &str) -> BookResult<Record> {
        let key = normalize(name);
        let pos = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| not_found(name))?;
        debug!(key = %key, "removing contact");
        Ok(self.entries.remove(pos).record)
    }

    /// Contacts whose name contains `query` (ignoring case) or whose
    /// phones contain it verbatim.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        let lower = query.to_lowercase();
        self.iter().filter(move |r| {
            r.name().to_lowercase().contains(&lower)
                || r.phones().iter().any(|p| p.get().contains(query))
        })
    }

    pub fn save_to_file(&self, path: &Path) -> BookResult<()> {
        storage::save(path, self.iter())
    }

    /// Replaces the whole book with the file's contents. On any error the
    /// book is left as it was.
    pub fn load_from_file(&mut self, path: &Path) -> BookResult<()> {
        let records = storage::load(path)?;
        let mut loaded = AddressBook::new();
        for record in records {
            loaded.add(record);
        }
        *self = loaded;
        Ok(())
    }

    fn upsert(&mut self, key: String, record: Record) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => {
                debug!(key = %key, "overwriting contact");
                existing.record = record;
            }
            None => {
                debug!(key = %key, "adding contact");
                self.entries.push(Entry { key, record });
            }
        }
    }
}

fn not_found(name: &str) -> BookError {
    BookError::NotFound {
        name: name.to_string(),
    }
}
