//! Weather projection engine.
//!
//! Resolves the weather for a calendar date from a history of daily (and hourly) records.
//! Dates present in the history are returned as is, dates beyond it are estimated from a
//! recency weighted baseline, a linear trend and a one week seasonal correction.

pub mod config;
pub mod day_parts;
pub mod engine;
pub mod errors;
pub mod horizon;
pub mod initialization;
pub mod logging;
pub mod manager_history;
pub mod models;
pub mod projector;
pub mod synthesizer;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{get_day_or_projection, Outcome, Projector};
pub use models::weather::{Confidence, DayRecord, HourRecord, Provenance};
