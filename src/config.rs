use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_query: String,
    pub page_size: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_query: "termux hacking".to_string(),
            page_size: 5,
            request_timeout_secs: 15,
        }
    }
}

impl Config {
    pub fn load(cli_query: Option<String>) -> Self {
        let config_file = config_dir().join("repohunt").join("config.toml");
        Self::load_from(&config_file, cli_query)
    }

    fn load_from(config_file: &Path, cli_query: Option<String>) -> Self {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment = figment.merge(Env::prefixed("REPOHUNT_"));

        if let Some(query) = cli_query {
            figment = figment.merge(Serialized::default("default_query", query));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn config_dir() -> PathBuf {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.default_query, "termux hacking");
        assert_eq!(c.page_size, 5);
        assert_eq!(c.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn file_overrides_defaults_and_cli_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 10\ndefault_query = \"rust tui\"\n").unwrap();

        let c = Config::load_from(&path, None);
        assert_eq!(c.page_size, 10);
        assert_eq!(c.default_query, "rust tui");

        let c = Config::load_from(&path, Some("shell tools".to_string()));
        assert_eq!(c.default_query, "shell tools");
        assert_eq!(c.page_size, 10);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = Config::load_from(&dir.path().join("nope.toml"), None);
        assert_eq!(c.page_size, 5);
    }
}
