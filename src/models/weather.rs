use std::fmt;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Confidence classification for a projected day
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Buckets a confidence score, high from 0.70 and medium from 0.45
    ///
    /// # Arguments
    ///
    /// * 'score' - confidence score in the range 0.0 - 1.0
    pub fn from_score(score: f64) -> Confidence {
        if score >= 0.70 {
            Confidence::High
        } else if score >= 0.45 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Confidence::Low    => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High   => write!(f, "high"),
        }
    }
}

/// Where a day record comes from.
///
/// On the wire this is represented by the flat fields `isEstimated`, `confidence`,
/// `confidenceScore` and `sourceModel`, where the last three are left out for observations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "ProvenanceFields", into = "ProvenanceFields")]
pub enum Provenance {
    #[default]
    Observed,
    Projected {
        confidence: Confidence,
        score: f64,
        model: String,
    },
}

impl Provenance {
    pub fn is_estimated(&self) -> bool {
        matches!(self, Provenance::Projected { .. })
    }

    /// Observed data is always fully trusted
    pub fn confidence(&self) -> Confidence {
        match self {
            Provenance::Observed => Confidence::High,
            Provenance::Projected { confidence, .. } => *confidence,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Provenance::Observed => 1.0,
            Provenance::Projected { score, .. } => *score,
        }
    }

    pub fn source_model(&self) -> Option<&str> {
        match self {
            Provenance::Observed => None,
            Provenance::Projected { model, .. } => Some(model.as_str()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ProvenanceFields {
    #[serde(rename = "isEstimated", default)]
    is_estimated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<Confidence>,
    #[serde(rename = "confidenceScore", skip_serializing_if = "Option::is_none")]
    confidence_score: Option<f64>,
    #[serde(rename = "sourceModel", skip_serializing_if = "Option::is_none")]
    source_model: Option<String>,
}

impl From<ProvenanceFields> for Provenance {
    fn from(fields: ProvenanceFields) -> Self {
        if !fields.is_estimated {
            return Provenance::Observed;
        }

        let score = fields.confidence_score.unwrap_or(0.0);
        Provenance::Projected {
            confidence: fields.confidence.unwrap_or_else(|| Confidence::from_score(score)),
            score,
            model: fields.source_model.unwrap_or_default(),
        }
    }
}

impl From<Provenance> for ProvenanceFields {
    fn from(provenance: Provenance) -> Self {
        match provenance {
            Provenance::Observed => ProvenanceFields {
                is_estimated: false,
                confidence: None,
                confidence_score: None,
                source_model: None,
            },
            Provenance::Projected { confidence, score, model } => ProvenanceFields {
                is_estimated: true,
                confidence: Some(confidence),
                confidence_score: Some(score),
                source_model: Some(model),
            },
        }
    }
}

/// Weather for one hour within a day
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HourRecord {
    #[serde(rename = "datetime")]
    pub time: NaiveTime,
    #[serde(rename = "datetimeEpoch")]
    pub datetime_epoch: i64,
    pub temp: f64,
    #[serde(rename = "feelslike")]
    pub feels_like: f64,
    pub humidity: Option<f64>,
    pub dew: Option<f64>,
    pub precip: Option<f64>,
    #[serde(rename = "precipprob", default, deserialize_with = "null_as_zero")]
    pub precip_prob: f64,
    pub snow: Option<f64>,
    #[serde(rename = "snowdepth")]
    pub snow_depth: Option<f64>,
    #[serde(rename = "preciptype")]
    pub precip_type: Option<Vec<String>>,
    #[serde(rename = "windgust")]
    pub wind_gust: Option<f64>,
    #[serde(rename = "windspeed", default, deserialize_with = "null_as_zero")]
    pub wind_speed: f64,
    #[serde(rename = "winddir")]
    pub wind_dir: Option<f64>,
    pub pressure: Option<f64>,
    pub visibility: Option<f64>,
    #[serde(rename = "cloudcover", default, deserialize_with = "null_as_zero")]
    pub cloud_cover: f64,
    #[serde(rename = "solarradiation")]
    pub solar_radiation: Option<f64>,
    #[serde(rename = "solarenergy")]
    pub solar_energy: Option<f64>,
    #[serde(rename = "uvindex")]
    pub uv_index: Option<f64>,
    #[serde(rename = "severerisk")]
    pub severe_risk: Option<f64>,
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub icon: String,
    pub stations: Option<Vec<String>>,
    #[serde(default)]
    pub source: String,
}

/// Weather for one calendar day, including its hourly breakdown
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayRecord {
    #[serde(rename = "datetime")]
    pub date: NaiveDate,
    #[serde(rename = "datetimeEpoch")]
    pub datetime_epoch: i64,
    #[serde(rename = "tempmax")]
    pub temp_max: f64,
    #[serde(rename = "tempmin")]
    pub temp_min: f64,
    pub temp: f64,
    #[serde(rename = "feelslikemax")]
    pub feels_like_max: Option<f64>,
    #[serde(rename = "feelslikemin")]
    pub feels_like_min: Option<f64>,
    #[serde(rename = "feelslike")]
    pub feels_like: Option<f64>,
    pub dew: Option<f64>,
    pub humidity: Option<f64>,
    pub precip: Option<f64>,
    #[serde(rename = "precipprob", default, deserialize_with = "null_as_zero")]
    pub precip_prob: f64,
    #[serde(rename = "precipcover")]
    pub precip_cover: Option<f64>,
    #[serde(rename = "preciptype")]
    pub precip_type: Option<Vec<String>>,
    pub snow: Option<f64>,
    #[serde(rename = "snowdepth")]
    pub snow_depth: Option<f64>,
    #[serde(rename = "windgust")]
    pub wind_gust: Option<f64>,
    #[serde(rename = "windspeed", default, deserialize_with = "null_as_zero")]
    pub wind_speed: f64,
    #[serde(rename = "winddir")]
    pub wind_dir: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(rename = "cloudcover", default, deserialize_with = "null_as_zero")]
    pub cloud_cover: f64,
    pub visibility: Option<f64>,
    #[serde(rename = "solarradiation")]
    pub solar_radiation: Option<f64>,
    #[serde(rename = "solarenergy")]
    pub solar_energy: Option<f64>,
    #[serde(rename = "uvindex")]
    pub uv_index: Option<f64>,
    #[serde(rename = "severerisk")]
    pub severe_risk: Option<f64>,
    pub sunrise: Option<String>,
    #[serde(rename = "sunriseEpoch")]
    pub sunrise_epoch: Option<i64>,
    pub sunset: Option<String>,
    #[serde(rename = "sunsetEpoch")]
    pub sunset_epoch: Option<i64>,
    #[serde(rename = "moonphase")]
    pub moon_phase: Option<f64>,
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub stations: Option<Vec<String>>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub hours: Vec<HourRecord>,
    #[serde(flatten)]
    pub provenance: Provenance,
}

impl DayRecord {
    pub fn is_estimated(&self) -> bool {
        self.provenance.is_estimated()
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for DayRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:<18} temp {:>5.1} ({:>5.1} - {:>5.1}), precip {:>3.0}%, wind {:>3.0}, cloud {:>5.1}%",
               self.date, self.icon, self.temp, self.temp_min, self.temp_max,
               self.precip_prob, self.wind_speed, self.cloud_cover)?;

        if let Provenance::Projected { confidence, score, model } = &self.provenance {
            write!(f, " [estimated by {}, confidence {} ({:0.2})]", model, confidence, score)?;
        }

        Ok(())
    }
}

/// Timeline document as returned by the weather provider and saved to disk
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Timeline {
    #[serde(rename = "queryCost")]
    pub query_cost: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "resolvedAddress", default)]
    pub resolved_address: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(rename = "tzoffset")]
    pub tz_offset: Option<f64>,
    pub days: Vec<DayRecord>,
}

/// Providers occasionally send null for metrics they have no value for
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
