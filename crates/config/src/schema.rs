use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `overmonitor.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Sampling and rendering settings.
    pub global: GlobalConfig,
    /// Colors and glyphs.
    pub theme: ThemeConfig,
}

/// Sampling and rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// How metric lines are drawn.
    pub style: Style,
    /// Pause between the end of one cycle and the start of the next.
    pub delay_ms: u64,
    /// Upper bound for each metrics provider call.  `0` waits forever.
    pub provider_timeout_ms: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            style: Style::Progress,
            delay_ms: 1_000,
            provider_timeout_ms: 5_000,
        }
    }
}

impl GlobalConfig {
    pub fn provider_timeout(&self) -> Option<std::time::Duration> {
        (self.provider_timeout_ms > 0)
            .then(|| std::time::Duration::from_millis(self.provider_timeout_ms))
    }
}

/// Dashboard render style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Filled bar per metric, current value only.
    #[default]
    Progress,
    /// Sparkline over the retained history.
    Graph,
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Bar color below the critical level (hex, e.g. `"#a6e3a1"`).
    pub normal: String,
    /// Bar color at or above the critical level.
    pub critical: String,
    /// Glyph for a filled bar cell.
    pub filled: String,
    /// Glyph for an empty bar cell.
    pub empty: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            normal:   "#a6e3a1".to_string(), // Catppuccin Mocha green
            critical: "#f38ba8".to_string(), // Catppuccin Mocha red
            filled:   "█".to_string(),
            empty:    "⣿".to_string(),
        }
    }
}
