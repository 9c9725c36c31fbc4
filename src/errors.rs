use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("configuration error: {0}")]
pub struct ConfigError(pub String);

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("HistoryError::Io: {0}")]
    Io(String),
    #[error("HistoryError::Document: {0}")]
    Document(String),
    #[error("HistoryError::Empty: no days in {0}")]
    Empty(String),
    #[error("HistoryError::DuplicateDate: {0} occurs more than once")]
    DuplicateDate(NaiveDate),
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e.to_string())
    }
}
impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Document(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);

impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self {
        LoggingError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        LoggingError(e.to_string())
    }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self {
        LoggingError(e.to_string())
    }
}

#[derive(Error, Debug)]
#[error("WxTrendInitError: {0}")]
pub struct WxTrendInitError(pub String);

impl From<ConfigError> for WxTrendInitError {
    fn from(e: ConfigError) -> Self {
        WxTrendInitError(e.to_string())
    }
}
impl From<HistoryError> for WxTrendInitError {
    fn from(e: HistoryError) -> Self {
        WxTrendInitError(e.to_string())
    }
}
impl From<LoggingError> for WxTrendInitError {
    fn from(e: LoggingError) -> Self {
        WxTrendInitError(e.to_string())
    }
}
