use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Builds the log4rs configuration from the general section of the config file.
/// At least one appender is always present, stdout is used if no log file is configured.
///
/// # Arguments
///
/// * 'general' - general configuration holding log level, log file and stdout selection
pub fn build_log_config(general: &General) -> Result<Config, LoggingError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if general.log_to_stdout || general.log_path.is_none() {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

/// Initializes the global logger
///
/// # Arguments
///
/// * 'general' - general configuration holding log level, log file and stdout selection
pub fn setup_logger(general: &General) -> Result<(), LoggingError> {
    let config = build_log_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn stdout_is_used_when_no_file_is_configured() {
        let general = General { log_path: None, log_level: LevelFilter::Info, log_to_stdout: false };

        let config = build_log_config(&general).unwrap();

        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stdout");
        assert_eq!(config.root().level(), LevelFilter::Info);
    }

    #[test]
    fn file_and_stdout_can_be_combined() {
        let log_path = std::env::temp_dir().join(format!("wxtrend-log-{}.log", std::process::id()));
        let general = General {
            log_path: Some(log_path.to_string_lossy().to_string()),
            log_level: LevelFilter::Debug,
            log_to_stdout: true,
        };

        let config = build_log_config(&general).unwrap();

        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().appenders(), &["file".to_string(), "stdout".to_string()]);
        let _ = std::fs::remove_file(log_path);
    }
}
