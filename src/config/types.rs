use std::path::PathBuf;

use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// Location of the optional configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "./config.yaml";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConfigV1 {
    pub bind_address: String,
    /// Directory holding `serial_metrics.json`, `parallel_metrics.json` and
    /// `compare_metrics.json`.
    pub results_dir: PathBuf,
    /// HTML template served on `/`. Must exist at startup.
    pub index_template: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            bind_address: "127.0.0.1:5000".to_string(),
            results_dir: PathBuf::from("results").join("logs"),
            index_template: PathBuf::from("templates").join("index.html"),
            logging: LoggingConfig::default(),
        }
    }
}

/// Load config from `./config.yaml`, falling back to defaults for anything it omits.
///
/// A missing file is not an error. A file that does not parse terminates the process.
pub fn load_config() -> ConfigV1 {
    match load_config_from(Figment::new().merge(Yaml::file(CONFIG_PATH))) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Extract a config from `overrides` layered on top of the built-in defaults.
pub fn load_config_from(overrides: Figment) -> Result<ConfigV1, figment::Error> {
    let defaults = Serialized::defaults(Config::ConfigV1(ConfigV1::default()));
    let config = Figment::from(defaults).merge(overrides).extract::<Config>()?;

    // handle configuration migration between versions here when necessary
    match config {
        Config::ConfigV1(c) => Ok(c),
    }
}
