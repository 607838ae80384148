//! Pipeline configuration

use crate::VigilanceError;
use eye_state::TrackerConfig;
use face_geometry::FusionPolicy;
use serde::{Deserialize, Serialize};

/// Umbrella configuration for the drowsiness pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilanceConfig {
    /// Rolling-average window over the fused openness ratio
    pub smoothing_window: usize,

    /// Consecutive no-face frames tolerated before the face counts as lost
    pub no_face_grace_frames: u32,

    /// Yaw-adaptive fusion thresholds
    pub fusion: FusionPolicy,

    /// Eye-state classifier settings
    pub tracker: TrackerConfig,
}

impl Default for VigilanceConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 3,
            no_face_grace_frames: 8,
            fusion: FusionPolicy::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl VigilanceConfig {
    /// Load configuration from an optional file plus `VIGILANCE_`-prefixed
    /// environment variables; unset values keep their defaults
    pub fn load(path: &str) -> Result<Self, VigilanceError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                // Prefix strips after a single underscore; "__" nests keys,
                // so VIGILANCE_TRACKER__DROWSY_AFTER_MS reaches
                // tracker.drowsy_after_ms
                config::Environment::with_prefix("VIGILANCE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| VigilanceError::Config(e.to_string()))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| VigilanceError::Config(e.to_string()))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate every stage's settings
    pub fn validate(&self) -> Result<(), VigilanceError> {
        if self.smoothing_window == 0 {
            return Err(VigilanceError::Config(
                "smoothing_window must be positive".into(),
            ));
        }
        if self.no_face_grace_frames == 0 {
            return Err(VigilanceError::Config(
                "no_face_grace_frames must be positive".into(),
            ));
        }
        self.fusion
            .validate()
            .map_err(|e| VigilanceError::Config(e.to_string()))?;
        self.tracker
            .validate()
            .map_err(|e| VigilanceError::Config(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(VigilanceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_window() {
        let config = VigilanceConfig {
            smoothing_window: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(VigilanceError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_grace() {
        let config = VigilanceConfig {
            no_face_grace_frames: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nested_stage_errors_surface_as_config() {
        let mut config = VigilanceConfig::default();
        config.tracker.drowsy_after_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(VigilanceError::Config(_))
        ));

        let mut config = VigilanceConfig::default();
        config.fusion.near_eye_only_yaw = 0.1;
        assert!(matches!(
            config.validate(),
            Err(VigilanceError::Config(_))
        ));
    }

    #[test]
    fn test_load_layers_env_over_defaults() {
        // One test covers both cases: environment mutation is
        // process-global and parallel tests would race on it
        let loaded = VigilanceConfig::load("config/does-not-exist").unwrap();
        assert_eq!(loaded.smoothing_window, 3);
        assert_eq!(loaded.no_face_grace_frames, 8);

        std::env::set_var("VIGILANCE_SMOOTHING_WINDOW", "4");
        std::env::set_var("VIGILANCE_TRACKER__DROWSY_AFTER_MS", "2000");
        let loaded = VigilanceConfig::load("config/does-not-exist").unwrap();
        std::env::remove_var("VIGILANCE_SMOOTHING_WINDOW");
        std::env::remove_var("VIGILANCE_TRACKER__DROWSY_AFTER_MS");

        assert_eq!(loaded.smoothing_window, 4);
        assert_eq!(loaded.tracker.drowsy_after_ms, 2000);
        assert_eq!(loaded.no_face_grace_frames, 8);
    }
}
