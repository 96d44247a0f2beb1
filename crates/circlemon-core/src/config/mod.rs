mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::gauge::Palette;
use crate::log::LogConfig;
use crate::opacity::Opacity;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for circlemon.
///
/// Loaded from `~/.config/circlemon/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`. The sampling
/// interval is fixed and has no setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Widget window settings.
    pub window: WindowConfig,
    /// Gauge and label colors.
    pub colors: GaugeColors,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Widget window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Opacity at startup, in percent (30–100, steps of 5).
    pub opacity: i32,
    /// Keep the widget above other windows.
    pub always_on_top: bool,
}

/// Hex colors used to paint the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeColors {
    /// Stroke color below 50% usage.
    pub low: String,
    /// Stroke color from 50% up to 80% usage.
    pub moderate: String,
    /// Stroke color at 80% usage and above.
    pub high: String,
    /// Unfilled part of each ring.
    pub track: String,
    /// Label text color.
    pub text: String,
    /// Disc drawn behind the rings.
    pub background: String,
    /// Background disc opacity in percent (0 = invisible, 100 = opaque).
    pub background_opacity: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            opacity: 100,
            always_on_top: true,
        }
    }
}

impl Default for GaugeColors {
    fn default() -> Self {
        Self {
            low: "#32cd32".into(),
            moderate: "#ffd700".into(),
            high: "#ff0000".into(),
            track: "#3c3c3c".into(),
            text: "#ffffff".into(),
            background: "#1e1e1e".into(),
            background_opacity: 60,
        }
    }
}

impl Config {
    /// Clamps numeric values to their legal ranges and replaces
    /// unparsable colors with the defaults.
    pub fn validate(&mut self) {
        self.window.opacity = i32::from(Opacity::from_percent(self.window.opacity).percent());
        self.colors.background_opacity = self.colors.background_opacity.clamp(0, 100);

        let defaults = GaugeColors::default();
        let fields = [
            (&mut self.colors.low, defaults.low),
            (&mut self.colors.moderate, defaults.moderate),
            (&mut self.colors.high, defaults.high),
            (&mut self.colors.track, defaults.track),
            (&mut self.colors.text, defaults.text),
            (&mut self.colors.background, defaults.background),
        ];
        for (value, fallback) in fields {
            match Color::from_hex(value) {
                Some(color) => *value = color.to_hex(),
                None => {
                    crate::log_warn!("invalid color {value:?}, using {fallback}");
                    *value = fallback;
                }
            }
        }
    }

    /// Initial window opacity.
    pub fn opacity(&self) -> Opacity {
        Opacity::from_percent(self.window.opacity)
    }

    /// Stroke colors for the usage levels.
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            low: Color::from_hex(&self.colors.low).unwrap_or(defaults.low),
            moderate: Color::from_hex(&self.colors.moderate).unwrap_or(defaults.moderate),
            high: Color::from_hex(&self.colors.high).unwrap_or(defaults.high),
        }
    }

    pub fn track_color(&self) -> Color {
        Color::from_hex(&self.colors.track).unwrap_or(Color::new(0x3c, 0x3c, 0x3c))
    }

    pub fn text_color(&self) -> Color {
        Color::from_hex(&self.colors.text).unwrap_or(Color::new(0xff, 0xff, 0xff))
    }

    /// Background disc alpha (0-255).
    pub fn background_alpha(&self) -> u8 {
        (self.colors.background_opacity.clamp(0, 100) * 255 / 100) as u8
    }

    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.colors.background).unwrap_or(Color::new(0x1e, 0x1e, 0x1e))
    }
}

#[cfg(test)]
mod tests;
