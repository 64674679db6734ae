use chrono::NaiveDate;

use crate::types::trip::DutyStatusEntry;

/// The four rows of the paper Driver's Daily Log grid, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyRow {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyRow {
    pub fn index(self) -> usize {
        match self {
            DutyRow::OffDuty => 0,
            DutyRow::Sleeper => 1,
            DutyRow::Driving => 2,
            DutyRow::OnDuty => 3,
        }
    }

    /// Maps a free-text status label to its grid row. First match wins;
    /// anything unrecognized falls through to Off Duty. The substring rules
    /// mirror the vocabulary of the trip service and must not be reordered.
    pub fn from_status(status: &str) -> Self {
        let status = status.to_lowercase();
        if status.contains("driving") {
            return DutyRow::Driving;
        }
        if status.contains("sleeper") {
            return DutyRow::Sleeper;
        }
        if ["pickup", "drop-off", "fueling", "on-duty"]
            .iter()
            .any(|needle| status.contains(needle))
        {
            return DutyRow::OnDuty;
        }
        DutyRow::OffDuty
    }
}

/// One contiguous horizontal run of a duty row within a single day's grid.
/// Fractions are positions within the 24-hour window: 0.0 = midnight at the
/// start of the day, 1.0 = the following midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySegment {
    pub row: DutyRow,
    pub start_fraction: f64,
    pub end_fraction: f64,
}

/// Output of clipping a trip timeline to one calendar day.
#[derive(Debug, Clone, Default)]
pub struct DaySegments {
    pub segments: Vec<DaySegment>,
    pub row_minutes: [f64; 4],
}

/// Everything the log sheet renderer needs for one calendar day. A pure
/// value: identical inputs must produce identical images.
#[derive(Debug, Clone)]
pub struct LogSheet<'a> {
    pub date: NaiveDate,
    pub timeline: &'a [DutyStatusEntry],
    pub total_miles: f64,
    pub day_miles: f64,
    pub carrier: &'a str,
    pub main_office: &'a str,
    pub home_terminal: &'a str,
    pub truck_number: &'a str,
    pub from_location: &'a str,
    pub to_location: &'a str,
    pub sheet_number: usize,
    pub total_sheets: usize,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub background: Option<(u8, u8, u8, u8)>,
}
