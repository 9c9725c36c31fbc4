use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use log::{debug, info};
use crate::errors::HistoryError;
use crate::models::weather::{DayRecord, Timeline};

/// Struct for holding a weather timeline previously fetched from the weather provider
pub struct HistoryStore {
    timeline: Timeline,
}

impl HistoryStore {
    /// Loads a saved timeline document from file
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the timeline json file
    pub fn load(path: &str) -> Result<HistoryStore, HistoryError> {
        let json = fs::read_to_string(path)?;
        let store = Self::from_json(&json, path)?;
        info!("loaded {} day(s) for {} from {}", store.timeline.days.len(), store.timeline.resolved_address, path);

        Ok(store)
    }

    /// Parses a timeline document and checks that it holds at least one day and that
    /// no date occurs twice
    ///
    /// # Arguments
    ///
    /// * 'json' - the timeline document
    /// * 'origin' - where the document came from, used in error messages
    pub fn from_json(json: &str, origin: &str) -> Result<HistoryStore, HistoryError> {
        let timeline: Timeline = serde_json::from_str(json)?;

        if timeline.days.is_empty() {
            return Err(HistoryError::Empty(origin.to_string()));
        }

        let mut seen: HashSet<NaiveDate> = HashSet::with_capacity(timeline.days.len());
        for day in timeline.days.iter() {
            if !seen.insert(day.date) {
                return Err(HistoryError::DuplicateDate(day.date));
            }
        }

        Ok(HistoryStore { timeline })
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.timeline.days
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns true if the provider returned data for the given date
    ///
    /// # Arguments
    ///
    /// * 'date' - date to look for
    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.timeline.days.iter().any(|d| d.date == date)
    }
}

/// Saves a projected (or known) day to file as pretty printed json.
/// The file is named after the date of the day, any existing file is replaced.
///
/// # Arguments
///
/// * 'output_dir' - the directory to save the file to
/// * 'day' - the day to save
pub fn save_projection(output_dir: &str, day: &DayRecord) -> Result<PathBuf, HistoryError> {
    let file_path = Path::new(output_dir).join(format!("{}_projection.json", day.date.format("%Y%m%d")));

    let json = serde_json::to_string_pretty(day)?;
    fs::write(&file_path, json)?;
    debug!("saved {} to {}", day.date, file_path.display());

    Ok(file_path)
}
