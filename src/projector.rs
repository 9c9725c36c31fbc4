use crate::config::ProjectionParameters;
use crate::horizon::Horizon;
use crate::models::weather::DayRecord;

/// Allowed range for a projected temperature
const TEMP_RANGE: (f64, f64) = (-40.0, 140.0);

/// Allowed range for a projected max temperature
const TEMP_MAX_RANGE: (f64, f64) = (-30.0, 150.0);

/// Lowest allowed projected min temperature, the upper bound is the projected max temperature
const TEMP_MIN_FLOOR: f64 = -60.0;

/// Allowed range for a projected precipitation probability (percent)
const PRECIP_PROB_RANGE: (f64, f64) = (0.0, 100.0);

/// Allowed range for a projected wind speed
const WIND_SPEED_RANGE: (f64, f64) = (0.0, 120.0);

/// Daily metrics that get projected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Temp,
    TempMax,
    TempMin,
    PrecipProb,
    WindSpeed,
    CloudCover,
}

impl Metric {
    /// Reads the metric from a day record
    pub fn value(&self, day: &DayRecord) -> f64 {
        match self {
            Metric::Temp       => day.temp,
            Metric::TempMax    => day.temp_max,
            Metric::TempMin    => day.temp_min,
            Metric::PrecipProb => day.precip_prob,
            Metric::WindSpeed  => day.wind_speed,
            Metric::CloudCover => day.cloud_cover,
        }
    }
}

/// Projected daily metrics after clamping and rounding
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedMetrics {
    pub temp: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub precip_prob: f64,
    pub wind_speed: f64,
    pub cloud_cover: f64,
}

/// Projects all daily metrics for the horizon and applies the per metric range policy.
///
/// Max and min temperatures are derived with the already clamped central temperature as
/// their bound, so that tempmin <= temp <= tempmax always holds.
///
/// # Arguments
///
/// * 'horizon' - resolved horizon for the target date
/// * 'params' - weights and factors for the projection
pub fn project_metrics(horizon: &Horizon, params: &ProjectionParameters) -> ProjectedMetrics {
    let raw = |metric: Metric| project(&horizon.recent_days, horizon.horizon_offset, horizon.seasonal_anchor, metric, params);

    let temp = round_to(raw(Metric::Temp).clamp(TEMP_RANGE.0, TEMP_RANGE.1), 1);
    let temp_max = round_to(raw(Metric::TempMax).max(temp).clamp(TEMP_MAX_RANGE.0, TEMP_MAX_RANGE.1), 1);
    let temp_min = round_to(raw(Metric::TempMin).min(temp).clamp(TEMP_MIN_FLOOR, temp_max), 1);
    let precip_prob = round_to(raw(Metric::PrecipProb), 0).clamp(PRECIP_PROB_RANGE.0, PRECIP_PROB_RANGE.1);
    let wind_speed = round_to(raw(Metric::WindSpeed), 0).clamp(WIND_SPEED_RANGE.0, WIND_SPEED_RANGE.1);

    // Cloud cover is never extrapolated, only smoothed
    let cloud_cover = weighted_baseline(&series(&horizon.recent_days, Metric::CloudCover), &params.baseline_weights);

    ProjectedMetrics { temp, temp_max, temp_min, precip_prob, wind_speed, cloud_cover }
}

/// Returns the raw, unclamped, projection of one metric.
///
/// The projection is the sum of three terms:
/// * a recency weighted baseline over the latest days
/// * the least squares slope over the recent days, extrapolated by the horizon offset
/// * a seasonal correction, the distance between the seasonal anchor and the recent mean
///
/// # Arguments
///
/// * 'recent_days' - the most recent known days, oldest first
/// * 'horizon_offset' - days from the latest known day to the target date
/// * 'seasonal_anchor' - the known day one week before the target, if any
/// * 'metric' - the metric to project
/// * 'params' - weights and factors for the projection
pub fn project(recent_days: &[&DayRecord], horizon_offset: i64, seasonal_anchor: Option<&DayRecord>,
               metric: Metric, params: &ProjectionParameters) -> f64 {
    let values = series(recent_days, metric);

    let baseline = weighted_baseline(&values, &params.baseline_weights);
    let trend = params.trend_factor * linear_slope(&values) * horizon_offset as f64;
    let seasonal = seasonal_anchor
        .filter(|_| !values.is_empty())
        .map_or(0.0, |anchor| params.seasonal_factor * (metric.value(anchor) - mean(&values)));

    baseline + trend + seasonal
}

/// Collects a metric over the given days, keeping their order
pub fn series(days: &[&DayRecord], metric: Metric) -> Vec<f64> {
    days.iter().map(|d| metric.value(d)).collect()
}

/// Weighted average of the latest values where the first weight goes to the most recent value.
/// Weights are normalized over the number of values actually available.
///
/// # Arguments
///
/// * 'values' - series of values, oldest first
/// * 'weights' - weights, most recent first
pub fn weighted_baseline(values: &[f64], weights: &[f64]) -> f64 {
    let (sum, weight_sum) = values.iter()
        .rev()
        .zip(weights.iter())
        .fold((0.0, 0.0), |(sum, weight_sum), (v, w)| (sum + v * w, weight_sum + w));

    if weight_sum > 0.0 { sum / weight_sum } else { 0.0 }
}

/// Ordinary least squares slope of the values against their index
pub fn linear_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let x_mean = (values.len() - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let (numerator, denominator) = values.iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (x, y)| {
            let dx = x as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if denominator > 0.0 { numerator / denominator } else { 0.0 }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population standard deviation, zero for less than two values
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Rounds to the given number of decimals, halves are rounded up (towards positive infinity)
/// also for negative values, e.g. -0.5 rounds to 0 and -2.5 to -2
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}
