use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    /// Base URL of the forum server, e.g. `http://localhost:8000`
    #[serde(default)]
    pub base_url: String,
}

impl Config {
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::error!("No configuration file found");
            return Err(ConfigError::Message(String::from(
                "No configuration file found",
            )));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings and styles into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if cfg.base_url.is_empty() {
            return Err(ConfigError::NotFound(String::from("base_url")));
        }

        Ok(cfg)
    }
}
