use chrono::{NaiveDate, NaiveTime};
use crate::models::weather::{DayRecord, HourRecord, Provenance};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn midnight_epoch(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp()
}

/// Builds an observed hour at the given hour of day
///
/// # Arguments
///
/// * 'hour_of_day' - hour 0-23
/// * 'day_epoch' - epoch of midnight for the owning day
/// * 'temp' - temperature for the hour
pub fn hour(hour_of_day: u32, day_epoch: i64, temp: f64) -> HourRecord {
    HourRecord {
        time: NaiveTime::from_hms_opt(hour_of_day, 0, 0).unwrap(),
        datetime_epoch: day_epoch + hour_of_day as i64 * 3600,
        temp,
        feels_like: temp - 1.0,
        humidity: Some(60.0),
        dew: None,
        precip: Some(0.0),
        precip_prob: 10.0,
        snow: None,
        snow_depth: None,
        precip_type: None,
        wind_gust: None,
        wind_speed: 5.0,
        wind_dir: Some(180.0),
        pressure: Some(1016.0),
        visibility: None,
        cloud_cover: 20.0,
        solar_radiation: None,
        solar_energy: None,
        uv_index: None,
        severe_risk: None,
        conditions: "Clear".to_string(),
        icon: "clear-day".to_string(),
        stations: None,
        source: "obs".to_string(),
    }
}

/// Builds hours for the listed hours of day on the given date, all with the same temperature
pub fn hours_for(date_str: &str, hours: &[u32], temp: f64) -> Vec<HourRecord> {
    let epoch = midnight_epoch(date(date_str));
    hours.iter().map(|h| hour(*h, epoch, temp)).collect()
}

/// Builds an observed day record with tempmax/tempmin 5 degrees around temp
pub fn day(date_str: &str, temp: f64, precip_prob: f64, wind_speed: f64, cloud_cover: f64, hours: Vec<HourRecord>) -> DayRecord {
    let date = date(date_str);
    DayRecord {
        date,
        datetime_epoch: midnight_epoch(date),
        temp_max: temp + 5.0,
        temp_min: temp - 5.0,
        temp,
        feels_like_max: None,
        feels_like_min: None,
        feels_like: Some(temp),
        dew: None,
        humidity: Some(62.0),
        precip: Some(0.0),
        precip_prob,
        precip_cover: None,
        precip_type: None,
        snow: None,
        snow_depth: None,
        wind_gust: None,
        wind_speed,
        wind_dir: Some(180.0),
        pressure: Some(1015.0),
        cloud_cover,
        visibility: None,
        solar_radiation: None,
        solar_energy: None,
        uv_index: None,
        severe_risk: None,
        sunrise: Some("06:45:00".to_string()),
        sunrise_epoch: None,
        sunset: Some("18:10:00".to_string()),
        sunset_epoch: None,
        moon_phase: None,
        conditions: "Clear".to_string(),
        description: "Clear conditions throughout the day.".to_string(),
        icon: "clear-day".to_string(),
        stations: None,
        source: "obs".to_string(),
        hours,
        provenance: Provenance::Observed,
    }
}

/// Consecutive days starting at 'first' with the given temperatures and otherwise calm weather.
/// Every day carries hours 0, 6, 12 and 18.
pub fn history(first: &str, temps: &[f64]) -> Vec<DayRecord> {
    let start = date(first);
    temps.iter().enumerate().map(|(i, t)| {
        let d = start + chrono::Days::new(i as u64);
        let d_str = d.format("%Y-%m-%d").to_string();
        day(&d_str, *t, 10.0, 5.0, 20.0, hours_for(&d_str, &[0, 6, 12, 18], *t))
    }).collect()
}
