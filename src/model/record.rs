use chrono::{Datelike, Local, NaiveDate};

use super::field::{Birthday, Name, Phone};
use crate::error::BookResult;

/// One contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn create(name: &str, phone: Option<&str>, birthday: Option<&str>) -> BookResult<Self> {
        let mut record = Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        };
        if let Some(p) = phone {
            record.add_phone(p)?;
        }
        if let Some(bd) = birthday {
            record.set_birthday(bd)?;
        }
        Ok(record)
    }

    pub fn name(&self) -> &str {
        self.name.get()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday.as_ref().map(|bd| *bd.get())
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.phones.iter().any(|p| p.get() == raw)
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Removes every phone equal to `raw`. Unknown numbers are ignored.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.get() != raw);
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// Does nothing when no phone matches. An invalid `new` fails without
    /// touching the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.get() == old) {
            phone.set(new)?;
        }
        Ok(())
    }

    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        match self.birthday.as_mut() {
            Some(bd) => bd.set(raw)?,
            None => self.birthday = Some(Birthday::new(raw)?),
        }
        Ok(())
    }

    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, 0 when it is today.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday()?;
        let this_year = occurrence_in(born, today.year())?;
        let next = if this_year < today {
            occurrence_in(born, today.year() + 1)?
        } else {
            this_year
        };
        Some((next - today).num_days())
    }
}

/// The birthday as it falls in `year`. Feb 29 moves to Feb 28 in
/// non-leap years.
fn occurrence_in(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    born.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}
