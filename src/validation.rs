use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

pub const PHONE_LENGTH: usize = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::EmptyValue {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates a phone number: exactly ten ASCII digits, nothing else.
pub fn phone_number(value: &str) -> BookResult<String> {
    if value.len() == PHONE_LENGTH && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhoneFormat {
            value: value.to_string(),
        })
    }
}

/// Validates a calendar date in strict `YYYY-MM-DD` form.
///
/// chrono's `%Y-%m-%d` accepts unpadded months and days, so the shape is
/// checked byte by byte before parsing.
pub fn iso_date(value: &str, field: &str) -> BookResult<NaiveDate> {
    non_blank(value, field)?;
    let invalid = || BookError::InvalidDateFormat {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}
