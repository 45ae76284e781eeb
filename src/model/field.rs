use std::fmt;
use std::marker::PhantomData;

use chrono::NaiveDate;

use crate::error::BookResult;
use crate::validation;

/// The validation rule behind a [`Field`].
///
/// `validate` turns raw user input into the stored value, or rejects it.
pub trait FieldRule {
    type Value: Clone + fmt::Debug + fmt::Display + PartialEq + Eq;

    fn validate(raw: &str) -> BookResult<Self::Value>;
}

/// A single value that is validated on every assignment.
///
/// A rejected `set` leaves the previous value in place.
pub struct Field<R: FieldRule> {
    value: R::Value,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    pub fn new(raw: &str) -> BookResult<Self> {
        Ok(Self {
            value: R::validate(raw)?,
            rule: PhantomData,
        })
    }

    pub fn set(&mut self, raw: &str) -> BookResult<()> {
        self.value = R::validate(raw)?;
        Ok(())
    }

    pub fn get(&self) -> &R::Value {
        &self.value
    }
}

impl<R: FieldRule> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R: FieldRule> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for Field<R> {}

impl<R: FieldRule> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<R: FieldRule> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;

    fn validate(raw: &str) -> BookResult<String> {
        validation::non_blank(raw, "name")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn validate(raw: &str) -> BookResult<String> {
        validation::phone_number(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;

    fn validate(raw: &str) -> BookResult<NaiveDate> {
        validation::iso_date(raw, "birthday")
    }
}

/// A contact's display name. Any non-blank text.
pub type Name = Field<NameRule>;

/// A ten-digit phone number.
pub type Phone = Field<PhoneRule>;

/// A calendar date; displays as `YYYY-MM-DD`.
pub type Birthday = Field<BirthdayRule>;
