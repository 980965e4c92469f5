//! Configuration settings for Tickerdeck.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Watchlist symbols; the table's row set is fixed at startup.
    pub watchlist: Vec<String>,
    /// Symbol analyzed when the input field is empty.
    pub default_symbol: String,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            watchlist: ["AAPL", "MSFT", "NVDA", "TSLA", "GOOGL"]
                .map(String::from)
                .to_vec(),
            default_symbol: "AAPL".to_string(),
            keybindings: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Analysis service base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Auto-refresh interval for portfolio and watchlist in seconds (0 to disable).
    pub auto_refresh_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            auto_refresh_secs: 30,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Edit the symbol input field.
    pub input: String,
    /// Submit the symbol for analysis.
    pub analyze: String,
    /// Refresh the watchlist.
    pub refresh: String,
    /// Refresh the portfolio.
    pub portfolio: String,
    /// Cancel/back.
    pub back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            input: "i".to_string(),
            analyze: "Enter".to_string(),
            refresh: "r".to_string(),
            portfolio: "p".to_string(),
            back: "Esc".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_watchlist_is_fixed_roster() {
        let config = Config::default();
        assert_eq!(
            config.watchlist,
            vec!["AAPL", "MSFT", "NVDA", "TSLA", "GOOGL"]
        );
        assert_eq!(config.default_symbol, "AAPL");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://example.test:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://example.test:9000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.default_symbol, "AAPL");
    }
}
