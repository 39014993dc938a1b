use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Holds `preferences.toml` and `folio.log`.
    pub state_dir: PathBuf,
    pub tick_rate_ms: u64,
    /// Rows moved per `j`/`k` press.
    pub scroll_step: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: config_dir().join("folio"),
            tick_rate_ms: 30,
            scroll_step: 2,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(cli_state_dir: Option<PathBuf>) -> Self {
        let config_file = config_dir().join("folio").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("FOLIO_"));

        if let Some(dir) = cli_state_dir {
            figment = figment.merge(Serialized::default("state_dir", dir));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.state_dir.join("preferences.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join("folio.log")
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
