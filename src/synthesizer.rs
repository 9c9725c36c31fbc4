use chrono::TimeDelta;
use crate::config::{ConditionThresholds, ProjectionParameters};
use crate::horizon::Horizon;
use crate::models::weather::{Confidence, DayRecord, HourRecord, Provenance};
use crate::projector::{round_to, series, std_dev, Metric, ProjectedMetrics};

/// Confidence score before any penalties
const BASE_CONFIDENCE: f64 = 0.80;

/// Lowest and highest confidence score a projection may get
const CONFIDENCE_RANGE: (f64, f64) = (0.10, 0.95);

/// Number of recent days needed to avoid the short history penalty
const FULL_HISTORY_DAYS: usize = 5;

/// Recent temperature standard deviation above which the series is considered volatile
const VOLATILE_TEMP_STD_DEV: f64 = 8.0;

/// Margin around the projected min/max that hourly temperatures may reach
const HOUR_TEMP_MARGIN: f64 = 5.0;

/// Share of the daily precipitation probability shift applied to every hour
const HOUR_PRECIP_SHARE: f64 = 0.5;

/// Icon and condition used when nothing else applies
const CLEAR_ICON: &str = "clear-day";
const CLEAR_CONDITIONS: &str = "Clear";

/// Scores how reliable a projection is likely to be.
///
/// Starting at 0.80 the score is penalized for a short history (-0.15), volatile recent
/// temperatures (-0.10), a missing seasonal anchor (-0.10) and a far horizon (-0.10 from
/// 5 days, another -0.05 from 7 days). The result is rounded to two decimals and kept within
/// 0.10 - 0.95.
///
/// # Arguments
///
/// * 'horizon' - resolved horizon for the target date
pub fn confidence_score(horizon: &Horizon) -> f64 {
    let mut score = BASE_CONFIDENCE;

    if horizon.recent_days.len() < FULL_HISTORY_DAYS {
        score -= 0.15;
    }
    if std_dev(&series(&horizon.recent_days, Metric::Temp)) > VOLATILE_TEMP_STD_DEV {
        score -= 0.10;
    }
    if horizon.seasonal_anchor.is_none() {
        score -= 0.10;
    }
    if horizon.horizon_offset >= 5 {
        score -= 0.10;
    }
    if horizon.horizon_offset >= 7 {
        score -= 0.05;
    }

    round_to(score, 2).clamp(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1)
}

/// Picks icon and condition text from precipitation probability, wind speed and cloud cover.
/// The first matching rule wins, None means that no rule matched.
///
/// # Arguments
///
/// * 'precip_prob' - precipitation probability in percent
/// * 'wind_speed' - wind speed
/// * 'cloud_cover' - cloud cover in percent
/// * 'thresholds' - the decision table thresholds
pub fn classify(precip_prob: f64, wind_speed: f64, cloud_cover: f64, thresholds: &ConditionThresholds) -> Option<(&'static str, &'static str)> {
    if precip_prob >= thresholds.rain_precip_prob {
        Some(("rain", "Rain"))
    } else if wind_speed >= thresholds.windy_speed {
        Some(("wind", "Windy"))
    } else if cloud_cover >= thresholds.overcast_cloud_cover {
        Some(("cloudy", "Overcast"))
    } else if cloud_cover >= thresholds.partly_cloudy_cloud_cover {
        Some(("partly-cloudy-day", "Partially cloudy"))
    } else {
        None
    }
}

/// Returns icon and conditions from the decision table, or the fallback values when no rule
/// matched. An empty fallback icon is replaced by clear sky.
fn icon_and_conditions(precip_prob: f64, wind_speed: f64, cloud_cover: f64, thresholds: &ConditionThresholds,
                       fallback_icon: &str, fallback_conditions: &str) -> (String, String) {
    match classify(precip_prob, wind_speed, cloud_cover, thresholds) {
        Some((icon, conditions)) => (icon.to_string(), conditions.to_string()),
        None if fallback_icon.is_empty() => (CLEAR_ICON.to_string(), CLEAR_CONDITIONS.to_string()),
        None => (fallback_icon.to_string(), fallback_conditions.to_string()),
    }
}

/// Builds the projected day record.
///
/// The latest known day acts as template, every field not projected is copied from it.
/// Hours are rebuilt from the template hours, see project_hour.
///
/// # Arguments
///
/// * 'horizon' - resolved horizon for the target date
/// * 'metrics' - the projected daily metrics
/// * 'params' - projection parameters, used for the model identifier
/// * 'thresholds' - decision table thresholds for icon and conditions
pub fn synthesize(horizon: &Horizon, metrics: &ProjectedMetrics, params: &ProjectionParameters,
                  thresholds: &ConditionThresholds) -> DayRecord {
    let template = horizon.latest();
    let score = confidence_score(horizon);
    let shift = TimeDelta::days(horizon.horizon_offset);

    let (icon, conditions) = icon_and_conditions(
        metrics.precip_prob, metrics.wind_speed, metrics.cloud_cover, thresholds,
        &template.icon, &template.conditions);

    let hours = template.hours.iter()
        .map(|h| project_hour(h, template, metrics, shift, &params.model_id))
        .collect::<Vec<HourRecord>>();

    DayRecord {
        date: horizon.target,
        datetime_epoch: template.datetime_epoch + shift.num_seconds(),
        temp: metrics.temp,
        temp_max: metrics.temp_max,
        temp_min: metrics.temp_min,
        precip_prob: metrics.precip_prob,
        wind_speed: metrics.wind_speed,
        cloud_cover: metrics.cloud_cover,
        icon,
        conditions,
        hours,
        provenance: Provenance::Projected {
            confidence: Confidence::from_score(score),
            score,
            model: params.model_id.clone(),
        },
        ..template.clone()
    }
}

/// Projects one template hour onto the target date.
///
/// Temperatures are shifted by the difference between projected and template day temperature,
/// the precipitation probability by half of the daily difference. Wind speed and cloud cover
/// are taken from the projected day. Icon and condition stay those of the template hour, the
/// condition marked as estimated.
///
/// # Arguments
///
/// * 'hour' - the template hour
/// * 'template' - the day owning the template hour
/// * 'metrics' - the projected daily metrics
/// * 'shift' - time between template day and target day
/// * 'model_id' - identifier of the projection model, used as source
fn project_hour(hour: &HourRecord, template: &DayRecord, metrics: &ProjectedMetrics, shift: TimeDelta,
                model_id: &str) -> HourRecord {
    let temp_delta = metrics.temp - template.temp;
    let temp_low = metrics.temp_min - HOUR_TEMP_MARGIN;
    let temp_high = metrics.temp_max + HOUR_TEMP_MARGIN;
    let shift_temp = |t: f64| round_to((t + temp_delta).clamp(temp_low, temp_high), 1);

    let precip_prob = round_to(hour.precip_prob + HOUR_PRECIP_SHARE * (metrics.precip_prob - template.precip_prob), 0)
        .clamp(0.0, 100.0);

    HourRecord {
        datetime_epoch: hour.datetime_epoch + shift.num_seconds(),
        temp: shift_temp(hour.temp),
        feels_like: shift_temp(hour.feels_like),
        precip_prob,
        wind_speed: metrics.wind_speed,
        cloud_cover: metrics.cloud_cover,
        conditions: format!("{} (estimated)", hour.conditions),
        source: model_id.to_string(),
        ..hour.clone()
    }
}
