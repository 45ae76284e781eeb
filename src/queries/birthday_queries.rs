use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::model::Record;

/// Contacts whose next birthday falls within `within_days` of `as_of`,
/// soonest first. Ties are ordered by name.
pub fn upcoming_birthdays(
    book: &AddressBook,
    within_days: i64,
    as_of: NaiveDate,
) -> Vec<(&Record, i64)> {
    let mut results: Vec<(&Record, i64)> = book
        .iter()
        .filter_map(|r| r.days_to_birthday_from(as_of).map(|d| (r, d)))
        .filter(|(_, d)| *d <= within_days)
        .collect();

    results.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.name().cmp(b.0.name())));
    results
}
