//! Optional TOML site configuration.

use crate::ContactTiming;
use pf_core::SiteError;
use pf_core::SiteResult;
use pf_tracker::TrackerConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Smallest window the layout supports; also the window's minimum size.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Every key is optional; absent sections keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub tracker: TrackerConfig,
    pub contact: ContactTiming,
    pub window: WindowConfig,
}

/// Initial size of the application window.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> SiteResult<Self> {
        let source = fs::read_to_string(path).map_err(|error| {
            SiteError::new(
                "config.read_failed",
                format!("failed reading site config `{}`: {error}", path.display()),
            )
        })?;

        let config = Self::from_toml_str(&source).map_err(|error| {
            SiteError::new(
                error.code,
                format!("{} ({})", error.message, path.display()),
            )
        })?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    pub fn from_toml_str(source: &str) -> SiteResult<Self> {
        let config: Self = toml::from_str(source).map_err(|error| {
            SiteError::new(
                "config.parse_failed",
                format!("invalid site config: {}", error.message()),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        self.tracker.validate()?;

        if !(self.window.width >= MIN_WINDOW_WIDTH && self.window.height >= MIN_WINDOW_HEIGHT) {
            return Err(SiteError::new(
                "config.window_too_small",
                format!(
                    "window must be at least {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT} (got {}x{})",
                    self.window.width, self.window.height
                ),
            ));
        }

        Ok(())
    }
}
