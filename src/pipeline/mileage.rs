use chrono::NaiveDate;

use crate::pipeline::segment::{day_bounds, overlap_minutes};
use crate::types::trip::DutyStatusEntry;

/// Estimated miles driven on one calendar day, apportioned from the trip's
/// total distance proportionally to driving time falling within the day.
/// Assumes a uniform average speed; the denominator trusts the upstream
/// `duration_minutes` while the numerator is clipped from the timestamps.
pub fn day_miles(timeline: &[DutyStatusEntry], day: NaiveDate, total_miles: f64) -> f64 {
    let (day_start, day_end) = day_bounds(day);
    let mut day_driving = 0.0;
    let mut total_driving = 0.0;

    for entry in timeline {
        if !entry.is_driving {
            continue;
        }
        // Inverted entries violate the upstream contract; they must not
        // drag the denominator negative.
        if entry.end <= entry.start {
            continue;
        }
        total_driving += entry.duration_minutes;
        day_driving += overlap_minutes(entry, day_start, day_end);
    }

    if total_driving == 0.0 {
        0.0
    } else {
        (day_driving / total_driving) * total_miles
    }
}
