//! Viewer display settings
//!
//! Zoom, contrast, brightness, and the two view toggles. These affect
//! rendering only and have no relationship to the scan session; every
//! setter clamps to its fixed range.

use crate::config::DisplayConfig;

/// Zoom percentage bounds
pub const ZOOM_MIN: u16 = 50;
pub const ZOOM_MAX: u16 = 200;

/// Zoom change per button press (the slider moves in steps of 5)
pub const ZOOM_BUTTON_STEP: u16 = 10;

/// Contrast/brightness percentage bounds
pub const LEVEL_MIN: u16 = 0;
pub const LEVEL_MAX: u16 = 200;

/// Reset targets
const DEFAULT_ZOOM: u16 = 100;
const DEFAULT_CONTRAST: u16 = 50;
const DEFAULT_BRIGHTNESS: u16 = 50;

/// Display controls for the result viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSettings {
    zoom: u16,
    contrast: u16,
    brightness: u16,
    /// Show the original scan instead of the processed result
    pub show_original: bool,
    /// Draw the tumor annotation overlay
    pub show_annotations: bool,
}

impl ViewerSettings {
    /// Settings with the built-in defaults
    pub fn new() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            contrast: DEFAULT_CONTRAST,
            brightness: DEFAULT_BRIGHTNESS,
            show_original: false,
            show_annotations: true,
        }
    }

    /// Settings seeded from the display config section, clamped
    pub fn from_config(config: &DisplayConfig) -> Self {
        let mut settings = Self::new();
        settings.set_zoom(config.default_zoom);
        settings.set_contrast(config.default_contrast);
        settings.set_brightness(config.default_brightness);
        settings.show_annotations = config.show_annotations;
        settings
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    pub fn contrast(&self) -> u16 {
        self.contrast
    }

    pub fn brightness(&self) -> u16 {
        self.brightness
    }

    /// Set zoom, clamped to 50-200
    pub fn set_zoom(&mut self, zoom: u16) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.saturating_add(ZOOM_BUTTON_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.saturating_sub(ZOOM_BUTTON_STEP));
    }

    /// Set contrast, clamped to 0-200
    pub fn set_contrast(&mut self, contrast: u16) {
        self.contrast = contrast.clamp(LEVEL_MIN, LEVEL_MAX);
    }

    /// Set brightness, clamped to 0-200
    pub fn set_brightness(&mut self, brightness: u16) {
        self.brightness = brightness.clamp(LEVEL_MIN, LEVEL_MAX);
    }

    /// Reset zoom/contrast/brightness together; toggles are untouched
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.contrast = DEFAULT_CONTRAST;
        self.brightness = DEFAULT_BRIGHTNESS;
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_buttons_clamp_at_bounds() {
        let mut v = ViewerSettings::new();
        for _ in 0..20 {
            v.zoom_in();
        }
        assert_eq!(v.zoom(), ZOOM_MAX);
        for _ in 0..40 {
            v.zoom_out();
        }
        assert_eq!(v.zoom(), ZOOM_MIN);
    }

    #[test]
    fn test_slider_values_clamp() {
        let mut v = ViewerSettings::new();
        v.set_zoom(10);
        assert_eq!(v.zoom(), ZOOM_MIN);
        v.set_zoom(999);
        assert_eq!(v.zoom(), ZOOM_MAX);
        v.set_contrast(999);
        assert_eq!(v.contrast(), LEVEL_MAX);
        v.set_brightness(999);
        assert_eq!(v.brightness(), LEVEL_MAX);
    }

    #[test]
    fn test_reset_leaves_toggles_alone() {
        let mut v = ViewerSettings::new();
        v.set_zoom(150);
        v.set_contrast(120);
        v.set_brightness(10);
        v.show_original = true;
        v.show_annotations = false;

        v.reset();
        assert_eq!(v.zoom(), 100);
        assert_eq!(v.contrast(), 50);
        assert_eq!(v.brightness(), 50);
        assert!(v.show_original);
        assert!(!v.show_annotations);
    }

    #[test]
    fn test_from_config_clamps() {
        let config = DisplayConfig {
            default_zoom: 300,
            default_contrast: 250,
            default_brightness: 50,
            show_annotations: false,
        };
        let v = ViewerSettings::from_config(&config);
        assert_eq!(v.zoom(), ZOOM_MAX);
        assert_eq!(v.contrast(), LEVEL_MAX);
        assert!(!v.show_annotations);
    }
}
