use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use chrono::Timelike;
use crate::models::weather::{DayRecord, HourRecord};

/// Part of the day to present hourly data for.
///
/// Each part includes one extra hour before and after its nominal span, e.g. morning
/// is 8 - 12 and thus covers hours 7 to 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    AllDay,
}

impl DayPart {
    /// First and last hour of day (inclusive) for the part
    pub fn hours(&self) -> (u32, u32) {
        match self {
            DayPart::Morning   => (7, 13),
            DayPart::Afternoon => (11, 18),
            DayPart::Evening   => (16, 22),
            DayPart::AllDay    => (0, 23),
        }
    }

    pub fn contains(&self, hour: &HourRecord) -> bool {
        let (first, last) = self.hours();
        (first..=last).contains(&hour.time.hour())
    }
}

/// Unknown names select the whole day
impl FromStr for DayPart {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "morning" => DayPart::Morning,
            "afternoon" => DayPart::Afternoon,
            "evening" => DayPart::Evening,
            _ => DayPart::AllDay,
        })
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DayPart::Morning   => write!(f, "morning"),
            DayPart::Afternoon => write!(f, "afternoon"),
            DayPart::Evening   => write!(f, "evening"),
            DayPart::AllDay    => write!(f, "all day"),
        }
    }
}

/// Returns the hours of the day that fall within the given part, in their original order
///
/// # Arguments
///
/// * 'day' - the day to pick hours from
/// * 'part' - part of the day
pub fn hours_in_part(day: &DayRecord, part: DayPart) -> Vec<&HourRecord> {
    day.hours.iter().filter(|h| part.contains(h)).collect()
}

/// Returns a temperature range for charting the hours, one degree wider than the actual
/// min and max in both directions. None if there are no hours.
///
/// # Arguments
///
/// * 'hours' - hours to find the range for
pub fn temperature_range(hours: &[&HourRecord]) -> Option<(f64, f64)> {
    if hours.is_empty() {
        return None;
    }

    let (min, max) = hours.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), h| (min.min(h.temp), max.max(h.temp)));

    Some((min - 1.0, max + 1.0))
}
