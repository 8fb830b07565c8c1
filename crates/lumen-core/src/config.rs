//! Workbench configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lumen_layout::SidebarConstraints;
use lumen_tabs::TabStyle;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bounds applied to the sidebar on every window resize
    pub sidebar: SidebarConstraints,
    /// Sidebar width of a new window, before the first resize
    pub initial_sidebar_width: f64,
    /// Colors of the active and inactive tabs
    pub tab_style: TabStyle,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Read and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::info!(path = %path.as_ref().display(), "Loaded configuration");

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            tracing::info!(
                path = %path.as_ref().display(),
                "No configuration file, using defaults"
            );
            return Ok(Self::default());
        }

        Self::load(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.sidebar.validate()?;

        if !self.initial_sidebar_width.is_finite() || self.initial_sidebar_width < 0.0 {
            return Err(CoreError::Config(format!(
                "initial_sidebar_width must be a non-negative number, got {}",
                self.initial_sidebar_width
            )));
        }

        Ok(())
    }

    /// `Lumen/config.json` in the platform configuration directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("Lumen").join("config.json"))
            .unwrap_or_else(|| PathBuf::from(".lumen/config.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar: SidebarConstraints::default(),
            initial_sidebar_width: 200.0,
            tab_style: TabStyle::default(),
            log_filter: "info".to_string(),
        }
    }
}
