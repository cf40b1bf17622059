use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::Entry;

/// Distinct days with at least one non-blank entry, iterated in ascending order.
pub type WrittenDays = BTreeSet<NaiveDate>;

/// Collapse a raw entry log into the days written inside `[start, end]`.
///
/// Several entries on one day count once, and a day with only blank entries
/// does not count at all.
pub fn aggregate(entries: &[Entry], start: NaiveDate, end: NaiveDate) -> WrittenDays {
    entries
        .iter()
        .filter(|e| start <= e.date && e.date <= end)
        .filter(|e| e.is_written())
        .map(|e| e.date)
        .collect()
}
