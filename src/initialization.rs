use log::info;
use crate::config::{load_config, Config};
use crate::engine::Projector;
use crate::errors::WxTrendInitError;
use crate::logging::setup_logger;
use crate::manager_history::HistoryStore;

/// Everything needed to serve weather for a date
pub struct Mgr {
    pub projector: Projector,
    pub history: HistoryStore,
    pub output_dir: Option<String>,
}

/// Loads configuration, sets up logging and loads the weather history
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn init(config_path: &str) -> Result<Mgr, WxTrendInitError> {
    let config: Config = load_config(config_path)?;
    setup_logger(&config.general)?;

    info!("wxtrend version: {}", env!("CARGO_PKG_VERSION"));
    info!("projection model: {}", config.projection.model_id);

    let history = HistoryStore::load(&config.files.history_file)?;
    let projector = Projector::new(config.projection, config.conditions);

    Ok(Mgr { projector, history, output_dir: config.files.output_dir })
}
