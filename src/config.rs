use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Dashboard rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Weekday column labels, Sunday first. Must have exactly 7 entries.
    #[serde(default = "default_weekday_labels")]
    pub weekday_labels: Vec<String>,

    /// Character width of each rendered cell.
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,

    /// Marker for dates whose reservations are on or after "today".
    #[serde(default = "default_upcoming_marker")]
    pub upcoming_marker: String,

    /// Marker for dates whose reservations lie in the past.
    #[serde(default = "default_past_marker")]
    pub past_marker: String,
}

fn default_weekday_labels() -> Vec<String> {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_cell_width() -> usize {
    10
}

fn default_upcoming_marker() -> String {
    "*".to_string()
}

fn default_past_marker() -> String {
    ".".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            weekday_labels: default_weekday_labels(),
            cell_width: default_cell_width(),
            upcoming_marker: default_upcoming_marker(),
            past_marker: default_past_marker(),
        }
    }
}

/// Loads configuration from a TOML file.
///
/// A missing file is not an error: defaults are used so the dashboard works
/// without any configuration on disk.
pub fn load(path: &Path) -> Result<DashboardConfig> {
    let config = if path.exists() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?
    } else {
        debug!(path = %path.display(), "config file not found, using defaults");
        DashboardConfig::default()
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DashboardConfig) -> Result<()> {
    if config.weekday_labels.len() != 7 {
        bail!(
            "weekday_labels must have exactly 7 entries, got {}",
            config.weekday_labels.len()
        );
    }
    if config.cell_width == 0 {
        bail!("cell_width must be at least 1");
    }
    Ok(())
}
