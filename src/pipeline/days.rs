use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::types::trip::DutyStatusEntry;

/// Distinct calendar dates touched by any entry's start or end, sorted
/// ascending. One log sheet is produced per returned date.
pub fn unique_dates(timeline: &[DutyStatusEntry]) -> Vec<NaiveDate> {
    let mut dates = BTreeSet::new();
    for entry in timeline {
        dates.insert(entry.start.date());
        dates.insert(entry.end.date());
    }
    dates.into_iter().collect()
}
