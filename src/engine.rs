use std::fmt;
use chrono::NaiveDate;
use log::{debug, info};
use crate::config::{ConditionThresholds, ProjectionParameters};
use crate::horizon::{resolve, Resolution};
use crate::models::weather::{DayRecord, Provenance};
use crate::projector::project_metrics;
use crate::synthesizer::synthesize;

/// Outcome of asking for the weather of a date
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The date was part of the history, the record is returned unchanged but marked as observed
    Known(DayRecord),
    /// The date was estimated from the history
    Projected(DayRecord),
    /// Too few days before the date to estimate it
    Unavailable { prior_days: usize },
}

impl Outcome {
    pub fn into_day(self) -> Option<DayRecord> {
        match self {
            Outcome::Known(day) | Outcome::Projected(day) => Some(day),
            Outcome::Unavailable { .. } => None,
        }
    }

    pub fn day(&self) -> Option<&DayRecord> {
        match self {
            Outcome::Known(day) | Outcome::Projected(day) => Some(day),
            Outcome::Unavailable { .. } => None,
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Known(day) => write!(f, "Known:       {}", day),
            Outcome::Projected(day) => write!(f, "Projected:   {}", day),
            Outcome::Unavailable { prior_days } => {
                write!(f, "Unavailable: only {} known day(s) before the date", prior_days)
            }
        }
    }
}

/// Stateless projection engine holding the tunable parameters
#[derive(Clone, Debug, Default)]
pub struct Projector {
    params: ProjectionParameters,
    thresholds: ConditionThresholds,
}

impl Projector {
    /// Returns a Projector using the given parameters and decision table thresholds
    ///
    /// # Arguments
    ///
    /// * 'params' - weights and factors for the projection
    /// * 'thresholds' - thresholds for icon and condition selection
    pub fn new(params: ProjectionParameters, thresholds: ConditionThresholds) -> Projector {
        Self { params, thresholds }
    }

    /// Resolves the weather for the target date.
    ///
    /// A known date is returned as is, but always marked as observed. Otherwise, given at least three known days before the
    /// target date, a day is projected from the recent history. The history is never changed.
    ///
    /// # Arguments
    ///
    /// * 'history' - known days, any order, unique dates
    /// * 'target' - the date to get weather for
    pub fn outcome(&self, history: &[DayRecord], target: NaiveDate) -> Outcome {
        match resolve(history, target) {
            Resolution::Known(day) => {
                debug!("{} found in history", target);
                Outcome::Known(DayRecord { provenance: Provenance::Observed, ..day.clone() })
            }
            Resolution::Unavailable { prior_days } => {
                info!("{} can't be projected, {} known day(s) before it", target, prior_days);
                Outcome::Unavailable { prior_days }
            }
            Resolution::Projectable(horizon) => {
                let metrics = project_metrics(&horizon, &self.params);
                let day = synthesize(&horizon, &metrics, &self.params, &self.thresholds);
                debug!("{} projected {} day(s) ahead from {} day(s), anchor: {}, confidence {:0.2}",
                       target, horizon.horizon_offset, horizon.recent_days.len(),
                       horizon.seasonal_anchor.is_some(), day.provenance.score());
                Outcome::Projected(day)
            }
        }
    }

    /// Same as outcome but flattened to the day record, if any
    ///
    /// # Arguments
    ///
    /// * 'history' - known days, any order, unique dates
    /// * 'target' - the date to get weather for
    pub fn day_or_projection(&self, history: &[DayRecord], target: NaiveDate) -> Option<DayRecord> {
        self.outcome(history, target).into_day()
    }
}

/// Returns the known day for the target date, a projection of it, or None when fewer than
/// three known days precede it. Uses the default projection parameters.
///
/// # Arguments
///
/// * 'history' - known days, any order, unique dates
/// * 'target' - the date to get weather for
pub fn get_day_or_projection(history: &[DayRecord], target: NaiveDate) -> Option<DayRecord> {
    Projector::default().day_or_projection(history, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::Confidence;
    use crate::projector::{linear_slope, mean, round_to};
    use crate::test_support::{date, history};

    #[test]
    fn known_day_is_returned_unchanged() {
        let days = history("2024-06-01", &[70.0, 71.0, 72.0]);

        let day = get_day_or_projection(&days, date("2024-06-02")).unwrap();

        assert_eq!(day, days[1]);
        assert!(!day.is_estimated());
        assert_eq!(day.provenance.confidence(), Confidence::High);
        assert_eq!(day.provenance.score(), 1.0);
    }

    #[test]
    fn known_day_is_marked_observed_even_if_stored_as_estimate() {
        let mut days = history("2024-06-01", &[70.0, 71.0, 72.0, 73.0]);
        days[3].provenance = Provenance::Projected { confidence: Confidence::Low, score: 0.3, model: "m".to_string() };

        let day = get_day_or_projection(&days, date("2024-06-04")).unwrap();

        assert!(!day.is_estimated());
        assert_eq!(day.provenance.score(), 1.0);
        assert_eq!(day.provenance.confidence(), Confidence::High);
        assert_eq!(day.temp, days[3].temp);
        assert_eq!(day.hours, days[3].hours);
    }

    #[test]
    fn known_day_wins_even_with_short_history() {
        let days = history("2024-06-01", &[70.0]);

        assert!(matches!(Projector::default().outcome(&days, date("2024-06-01")), Outcome::Known(_)));
    }

    #[test]
    fn insufficient_history_gives_none() {
        assert!(get_day_or_projection(&[], date("2024-06-10")).is_none());
        for n in 1..=2 {
            let days = history("2024-06-01", &vec![70.0; n]);
            assert!(get_day_or_projection(&days, date("2024-06-10")).is_none());
        }
    }

    #[test]
    fn two_prior_days_with_later_days_gives_none() {
        let mut days = history("2024-06-01", &[70.0, 71.0]);
        days.extend(history("2024-06-05", &[72.0, 73.0, 74.0]));

        assert_eq!(Projector::default().outcome(&days, date("2024-06-04")), Outcome::Unavailable { prior_days: 2 });
    }

    #[test]
    fn constant_week_eight_days_ahead() {
        let days = history("2024-06-01", &[60.0; 7]);

        let day = get_day_or_projection(&days, date("2024-06-15")).unwrap();

        assert!((day.temp - 60.0).abs() <= 0.1);
        assert_eq!(day.precip_prob, 10.0);
        assert_eq!(day.wind_speed, 5.0);
        assert_eq!(day.provenance.score(), 0.55);
        assert_eq!(day.provenance.confidence(), Confidence::Medium);
        assert_eq!(day.hours.len(), 4);
    }

    #[test]
    fn seasonal_spike_shifts_projection() {
        // 2024-06-01 is 10 degrees above the rest and is the anchor for 2024-06-08
        let temps = [70.0, 60.0, 60.0, 60.0, 60.0, 60.0, 60.0];
        let days = history("2024-06-01", &temps);

        let day = get_day_or_projection(&days, date("2024-06-08")).unwrap();

        let seasonal = 0.4 * (70.0 - mean(&temps));
        let trend = 0.6 * linear_slope(&temps);
        assert_eq!(day.temp, round_to(60.0 + trend + seasonal, 1));
        assert!(seasonal > 0.0);
    }

    #[test]
    fn projections_respect_bounds() {
        let histories = [
            history("2024-06-01", &[-70.0, -60.0, -80.0, -90.0]),
            history("2024-06-01", &[100.0, 130.0, 90.0, 150.0, 145.0, 160.0]),
            history("2024-06-01", &[55.0, 56.0, 57.0]),
        ];
        for (i, days) in histories.iter().enumerate() {
            let mut days = days.clone();
            days[0].precip_prob = 100.0;
            days[0].wind_speed = 200.0;
            for offset in 1..=10 {
                let target = days[days.len() - 1].date + chrono::TimeDelta::days(offset);
                let day = get_day_or_projection(&days, target).unwrap();

                assert!(day.temp_min <= day.temp && day.temp <= day.temp_max, "history {} offset {}", i, offset);
                assert!((0.0..=100.0).contains(&day.precip_prob));
                assert!((0.0..=120.0).contains(&day.wind_speed));
                assert!((0.10..=0.95).contains(&day.provenance.score()));
            }
        }
    }

    #[test]
    fn projection_is_deterministic_and_leaves_history_alone() {
        let mut days = history("2024-06-01", &[58.0, 63.0, 61.0, 66.0, 59.0, 62.0]);
        days.swap(0, 4);
        let before = days.clone();

        let first = get_day_or_projection(&days, date("2024-06-10")).unwrap();
        let second = get_day_or_projection(&days, date("2024-06-10")).unwrap();

        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
        assert_eq!(days, before);
    }

    #[test]
    fn outcome_reports_projection() {
        let days = history("2024-06-01", &[60.0; 5]);

        let outcome = Projector::default().outcome(&days, date("2024-06-07"));

        assert!(matches!(outcome, Outcome::Projected(_)));
        assert!(outcome.to_string().starts_with("Projected:"));
        assert_eq!(outcome.day().map(|d| d.date), Some(date("2024-06-07")));
    }
}
