pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{Severity, CRITICAL_LEVEL};

use om_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible: invalid color strings and
/// empty glyphs fall back to safe defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub normal:   Color,
    pub critical: Color,
    pub filled:   char,
    pub empty:    char,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            normal:   Color::from_hex(&cfg.normal).unwrap_or(Color::GREEN),
            critical: Color::from_hex(&cfg.critical).unwrap_or(Color::RED),
            filled:   cfg.filled.chars().next().unwrap_or('█'),
            empty:    cfg.empty.chars().next().unwrap_or('⣿'),
        }
    }

    pub fn color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Normal   => self.normal,
            Severity::Critical => self.critical,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
