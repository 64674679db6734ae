use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::log::{DaySegment, DaySegments, DutyRow};
use crate::types::trip::DutyStatusEntry;

const DAY_MINUTES: f64 = 24.0 * 60.0;

/// Midnight-to-midnight window of one calendar day.
pub fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    let end = (day + Days::new(1)).and_time(NaiveTime::MIN);
    (start, end)
}

/// Minutes of overlap between an entry and a window, clipped to the window.
/// Entries with `end < start` violate the upstream contract and count as
/// zero rather than negative.
pub fn overlap_minutes(
    entry: &DutyStatusEntry,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> f64 {
    let clip_start = entry.start.max(window_start);
    let clip_end = entry.end.min(window_end);
    if clip_end <= clip_start {
        return 0.0;
    }
    (clip_end - clip_start).num_seconds() as f64 / 60.0
}

/// Clips the full trip timeline to one calendar day, producing the ordered
/// draw segments for the grid trace and per-row minute totals. Fractions are
/// relative to the 24-hour window. Segment order follows timeline order, so
/// consecutive segments share their boundary timestamp and the renderer can
/// join them with a step connector.
pub fn segment_day<F>(timeline: &[DutyStatusEntry], day: NaiveDate, classify: F) -> DaySegments
where
    F: Fn(&str) -> DutyRow,
{
    let (day_start, day_end) = day_bounds(day);
    let mut out = DaySegments::default();

    for entry in timeline {
        if entry.start >= day_end || entry.end <= day_start {
            continue;
        }
        let clip_start = entry.start.max(day_start);
        let clip_end = entry.end.min(day_end);
        if clip_end <= clip_start {
            continue;
        }

        let start_fraction =
            (clip_start - day_start).num_seconds() as f64 / 60.0 / DAY_MINUTES;
        let end_fraction = (clip_end - day_start).num_seconds() as f64 / 60.0 / DAY_MINUTES;
        let row = classify(&entry.status);

        out.row_minutes[row.index()] += (clip_end - clip_start).num_seconds() as f64 / 60.0;
        out.segments.push(DaySegment {
            row,
            start_fraction,
            end_fraction,
        });
    }

    out
}
