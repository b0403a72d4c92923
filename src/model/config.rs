use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from `conductor/tui.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TuiConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-status color overrides, `status = "#RRGGBB"`
    #[serde(default)]
    pub status_colors: HashMap<String, String>,
}
