use pf_core::SiteError;
use pf_core::SiteResult;
use serde::Deserialize;

/// Distance from the viewport top at which sections are tested.
pub const DEFAULT_REFERENCE_LINE: f32 = 150.0;
/// Scroll offset past which the page counts as scrolled.
pub const DEFAULT_SCROLLED_THRESHOLD: f32 = 50.0;

/// Tuning knobs for [`crate::SectionTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub reference_line: f32,
    pub scrolled_threshold: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reference_line: DEFAULT_REFERENCE_LINE,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> SiteResult<()> {
        for (name, value) in [
            ("reference_line", self.reference_line),
            ("scrolled_threshold", self.scrolled_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SiteError::new(
                    "tracker.config.invalid_tuning",
                    format!("{name} must be a finite, non-negative distance (got {value})"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TrackerConfig;

    #[test]
    fn defaults_match_documented_values() {
        let config = TrackerConfig::default();
        assert_eq!(config.reference_line, 150.0);
        assert_eq!(config.scrolled_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let negative = TrackerConfig {
            reference_line: -1.0,
            ..TrackerConfig::default()
        };
        let error = negative.validate().expect_err("negative line should fail");
        assert_eq!(error.code, "tracker.config.invalid_tuning");

        let nan = TrackerConfig {
            scrolled_threshold: f32::NAN,
            ..TrackerConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: TrackerConfig = toml::from_str("reference_line = 96.0").expect("valid toml");
        assert_eq!(config.reference_line, 96.0);
        assert_eq!(config.scrolled_threshold, 50.0);
    }
}
