//! Theme configuration for the NeuroScan demo
//!
//! Provides the red-on-black palette the demo is styled with, plus a few
//! shared widget style helpers. Colors are overridable via YAML in the
//! user's config directory.
//! Default location: ~/.config/neuroscan/theme.yaml

use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global theme instance (initialized once at startup)
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Root theme configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color used for primary actions and progress (default: red)
    pub accent: String,
    /// Darker accent for hover states
    pub accent_dark: String,
    /// Panel background
    pub panel: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#DC2626".to_string(),      // red-600
            accent_dark: "#7F1D1D".to_string(), // red-900
            panel: "#131316".to_string(),
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns white on parse failure
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::from_rgb8(r, g, b)
}

/// Get the default theme file path
///
/// Returns: ~/.config/neuroscan/theme.yaml
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("neuroscan")
        .join("theme.yaml")
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist or is invalid, returns the default palette.
fn load_theme(path: &Path) -> ThemeConfig {
    if !path.exists() {
        return ThemeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("Failed to parse theme file: {}, using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read theme file: {}, using defaults", e);
            ThemeConfig::default()
        }
    }
}

/// Initialize the global theme (call once at startup)
pub fn init_theme() {
    let theme = load_theme(&default_theme_path());
    let _ = THEME.set(theme);
}

fn theme_config() -> &'static ThemeConfig {
    THEME.get_or_init(ThemeConfig::default)
}

/// Accent color for primary actions and progress bars
pub fn accent() -> Color {
    parse_hex_color(&theme_config().accent)
}

/// Darker accent for borders and hover states
pub fn accent_dark() -> Color {
    parse_hex_color(&theme_config().accent_dark)
}

/// Panel background color
pub fn panel_color() -> Color {
    parse_hex_color(&theme_config().panel)
}

/// Dimmed text color for secondary labels
pub const TEXT_DIM: Color = Color::from_rgb(0.62, 0.62, 0.66);

/// Container style for a bordered card/panel
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(panel_color())),
        border: Border {
            color: accent_dark(),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Container style for the dashed-look drop zone
pub fn drop_zone(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.07, 0.07, 0.08))),
        border: Border {
            color: Color::from_rgb(0.3, 0.3, 0.33),
            width: 2.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Container style for the "Tumor Detected" badge
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.3,
            ..accent_dark()
        })),
        text_color: Some(Color::from_rgb(0.95, 0.45, 0.45)),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Accent-colored primary button
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => accent_dark(),
        button::Status::Disabled => Color::from_rgb(0.25, 0.12, 0.12),
        _ => accent(),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Progress bar style using the accent color
pub fn progress(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(Color::from_rgb(0.16, 0.16, 0.18)),
        bar: Background::Color(accent()),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let c = parse_hex_color("#DC2626");
        assert!((c.r - 0xDC as f32 / 255.0).abs() < 0.001);
        assert!((c.g - 0x26 as f32 / 255.0).abs() < 0.001);

        // Prefix optional, garbage falls back to white
        assert_eq!(parse_hex_color("DC2626"), parse_hex_color("#DC2626"));
        assert_eq!(parse_hex_color("nope"), Color::WHITE);
    }
}
