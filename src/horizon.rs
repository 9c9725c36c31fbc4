use chrono::{Days, NaiveDate};
use crate::models::weather::DayRecord;

/// Fewest known days before the target date that a projection can be based on
pub const MIN_PRIOR_DAYS: usize = 3;

/// Number of most recent prior days used for trend and baseline computations
pub const RECENT_WINDOW: usize = 7;

/// Distance in days back from the target date to the seasonal anchor
pub const SEASONAL_LAG_DAYS: u64 = 7;

/// Result of resolving a target date against a history
#[derive(Debug)]
pub enum Resolution<'a> {
    /// The target date is part of the history
    Known(&'a DayRecord),
    /// The target date must be estimated from the days before it
    Projectable(Horizon<'a>),
    /// Too few known days precede the target date
    Unavailable { prior_days: usize },
}

/// Everything the projection needs to know about the days preceding a target date
#[derive(Debug)]
pub struct Horizon<'a> {
    pub target: NaiveDate,
    /// Up to the 7 most recent days before the target, oldest first
    pub recent_days: Vec<&'a DayRecord>,
    /// Whole days from the latest known day to the target, at least 1
    pub horizon_offset: i64,
    pub seasonal_anchor: Option<&'a DayRecord>,
}

impl<'a> Horizon<'a> {
    /// The most recent known day before the target, used as template for the projected day
    pub fn latest(&self) -> &'a DayRecord {
        // recent_days is never empty, resolve() requires MIN_PRIOR_DAYS
        self.recent_days[self.recent_days.len() - 1]
    }
}

/// Resolves the target date against the history.
///
/// The history is sorted by date on a local list of references, the caller's data is
/// never reordered or changed. If the target date is present its record is returned as is,
/// otherwise the days before the target are gathered together with the horizon offset and
/// any day exactly one week before the target.
///
/// # Arguments
///
/// * 'history' - known days, in any order, with unique dates
/// * 'target' - the date to get weather for
pub fn resolve(history: &[DayRecord], target: NaiveDate) -> Resolution<'_> {
    let mut sorted: Vec<&DayRecord> = history.iter().collect();
    sorted.sort_by_key(|d| d.date);

    if let Some(known) = sorted.iter().copied().find(|d| d.date == target) {
        return Resolution::Known(known);
    }

    let prior: Vec<&DayRecord> = sorted.iter()
        .copied()
        .filter(|d| d.date < target)
        .collect();

    if prior.len() < MIN_PRIOR_DAYS {
        return Resolution::Unavailable { prior_days: prior.len() };
    }

    let latest = prior[prior.len() - 1];
    let horizon_offset = (target - latest.date).num_days().max(1);

    let seasonal_anchor = target
        .checked_sub_days(Days::new(SEASONAL_LAG_DAYS))
        .and_then(|anchor_date| prior.iter().copied().find(|d| d.date == anchor_date));

    let recent_days = prior[prior.len().saturating_sub(RECENT_WINDOW)..].to_vec();

    Resolution::Projectable(Horizon { target, recent_days, horizon_offset, seasonal_anchor })
}
