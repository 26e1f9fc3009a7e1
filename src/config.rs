//! Configuration management for Trivialist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CATEGORY_PANEL_DEFAULT_WIDTH, CATEGORY_PANEL_MAX_WIDTH, CATEGORY_PANEL_MIN_WIDTH, CONFIG_GENERATED,
    DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_TIMEOUT_SECS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// How a free-text search reaches the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// `GET /questions?query=<term>`
    #[default]
    Query,
    /// `POST /questions/search` with `{"searchTerm": <term>}`
    Route,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    pub search_mode: SearchMode,
    /// Request timeout in seconds (0 = wait forever)
    pub timeout_secs: u64,
    /// Keep and send cookies with every request
    pub with_credentials: bool,
    /// Page size the server uses for `GET /questions`
    pub page_size: usize,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub icon_theme: IconTheme,
    /// Category panel width in columns
    pub category_panel_width: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log records to a file in the data directory
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            search_mode: SearchMode::default(),
            timeout_secs: 0,
            with_credentials: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            category_panel_width: CATEGORY_PANEL_DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            config.api.base_url = base_url;
            config
                .validate()
                .with_context(|| format!("Invalid value in {}", API_URL_ENV))?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("trivialist.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!("api.timeout_secs cannot exceed {}", MAX_TIMEOUT_SECS);
        }

        if self.api.page_size == 0 || self.api.page_size > MAX_PAGE_SIZE {
            anyhow::bail!("api.page_size must be between 1 and {}, got {}", MAX_PAGE_SIZE, self.api.page_size);
        }

        if self.ui.category_panel_width < CATEGORY_PANEL_MIN_WIDTH
            || self.ui.category_panel_width > CATEGORY_PANEL_MAX_WIDTH
        {
            anyhow::bail!(
                "category_panel_width must be between {} and {} columns, got {}",
                CATEGORY_PANEL_MIN_WIDTH,
                CATEGORY_PANEL_MAX_WIDTH,
                self.ui.category_panel_width
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let full_content = Self::default().to_commented_toml()?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Render this configuration as TOML with a comment on every key
    pub fn to_commented_toml(&self) -> Result<String> {
        let value = |v: toml::Value| v.to_string();
        let search_mode = toml::Value::try_from(self.api.search_mode).context("Failed to serialize search_mode")?;
        let icon_theme = toml::Value::try_from(self.ui.icon_theme).context("Failed to serialize icon_theme")?;

        let lines = [
            "# Trivialist Configuration File".to_string(),
            format!("# Generated on {}", chrono::Local::now().format("%Y-%m-%d")),
            String::new(),
            "[api]".to_string(),
            "# Base URL every endpoint path is appended to".to_string(),
            format!("base_url = {}", value(self.api.base_url.clone().into())),
            "# \"query\" sends GET /questions?query=, \"route\" sends POST /questions/search".to_string(),
            format!("search_mode = {}", value(search_mode)),
            format!("# Request timeout in seconds, 0 = no timeout (max {})", MAX_TIMEOUT_SECS),
            format!("timeout_secs = {}", self.api.timeout_secs),
            "# Keep and send cookies with every request".to_string(),
            format!("with_credentials = {}", self.api.with_credentials),
            format!("# Questions per page served by the catalog (1-{})", MAX_PAGE_SIZE),
            format!("page_size = {}", self.api.page_size),
            String::new(),
            "[ui]".to_string(),
            "# Emoji | Unicode | Ascii".to_string(),
            format!("icon_theme = {}", value(icon_theme)),
            format!(
                "# Category panel width in columns ({}-{})",
                CATEGORY_PANEL_MIN_WIDTH, CATEGORY_PANEL_MAX_WIDTH
            ),
            format!("category_panel_width = {}", self.ui.category_panel_width),
            String::new(),
            "[logging]".to_string(),
            "# Write log records to trivialist.log in the data directory".to_string(),
            format!("enabled = {}", self.logging.enabled),
        ];

        Ok(lines.join("\n") + "\n")
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("trivialist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
