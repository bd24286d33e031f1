//! Configuration module for peekr
//!
//! Routing thresholds, viewer timers and gesture tuning. Configuration is
//! stored as TOML in the user's config directory; every section and key is
//! optional and falls back to the built-in defaults.

use crate::gesture::{GestureConfig, SpringConfig};
use crate::routing::RouterConfig;
use crate::session::SessionConfig;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MIB: u64 = 1024 * 1024;

/// Size limits for in-app preview and security advisories
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest image shown in-app (bytes)
    pub max_file_size: u64,
    /// Largest PDF shown in-app (bytes)
    pub pdf_max_file_size: u64,
    /// Largest video shown in-app (bytes)
    pub video_max_file_size: u64,
    /// Attach security advisories to routing results
    pub enable_security: bool,
    /// Files above this size get an oversize advisory (bytes)
    pub security_max_file_size: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size: 30 * MIB,
            pdf_max_file_size: 50 * MIB,
            video_max_file_size: 100 * MIB,
            enable_security: true,
            security_max_file_size: 200 * MIB,
        }
    }
}

/// Viewer timers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Delay between closing the viewer and dropping its files
    pub close_grace_ms: u64,
    /// Idle time before controls hide
    pub controls_hide_ms: u64,
    /// Swipe horizontally at rest to change files
    pub swipe_navigation: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            close_grace_ms: 300,
            controls_hide_ms: 3000,
            swipe_navigation: true,
        }
    }
}

/// Gesture tuning
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GesturesConfig {
    /// Lower pinch bound
    pub min_zoom: f32,
    /// Upper pinch bound
    pub max_zoom: f32,
    /// Drag distance (points) that commits a swipe
    pub swipe_threshold: f32,
    /// Card opacity at full swipe fade
    pub swipe_min_opacity: f32,
    /// Double-tap zoom target
    pub double_tap_scale: f32,
    /// Spring stiffness
    pub stiffness: f32,
    /// Spring damping
    pub damping: f32,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        let gesture = GestureConfig::default();
        Self {
            min_zoom: gesture.min_zoom,
            max_zoom: gesture.max_zoom,
            swipe_threshold: gesture.swipe_threshold,
            swipe_min_opacity: gesture.swipe_min_opacity,
            double_tap_scale: gesture.double_tap_scale,
            stiffness: gesture.spring.stiffness,
            damping: gesture.spring.damping,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PeekrConfig {
    /// Preview size limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Viewer timers
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Gesture tuning
    #[serde(default)]
    pub gestures: GesturesConfig,
}

impl PeekrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("peekr").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed,
    /// validated, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, validated,
    /// or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or
    /// writing fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Check that thresholds are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        for (key, value) in [
            ("limits.max_file_size", limits.max_file_size),
            ("limits.pdf_max_file_size", limits.pdf_max_file_size),
            ("limits.video_max_file_size", limits.video_max_file_size),
            ("limits.security_max_file_size", limits.security_max_file_size),
        ] {
            if value == 0 {
                return Err(invalid(key, "must be greater than zero"));
            }
        }

        let gestures = &self.gestures;
        for (key, value) in [
            ("gestures.min_zoom", gestures.min_zoom),
            ("gestures.max_zoom", gestures.max_zoom),
            ("gestures.swipe_threshold", gestures.swipe_threshold),
            ("gestures.double_tap_scale", gestures.double_tap_scale),
            ("gestures.stiffness", gestures.stiffness),
            ("gestures.damping", gestures.damping),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(key, "must be a positive number"));
            }
        }

        if gestures.min_zoom > 1.0 {
            return Err(invalid("gestures.min_zoom", "must not exceed 1.0"));
        }
        if gestures.max_zoom < 1.0 {
            return Err(invalid("gestures.max_zoom", "must be at least 1.0"));
        }
        if !(0.0..=1.0).contains(&gestures.swipe_min_opacity) {
            return Err(invalid("gestures.swipe_min_opacity", "must be within 0.0..=1.0"));
        }

        Ok(())
    }

    /// Router thresholds
    #[must_use]
    pub const fn router_config(&self) -> RouterConfig {
        RouterConfig {
            max_file_size: self.limits.max_file_size,
            pdf_max_file_size: self.limits.pdf_max_file_size,
            video_max_file_size: self.limits.video_max_file_size,
            enable_security: self.limits.enable_security,
            security_max_file_size: self.limits.security_max_file_size,
        }
    }

    /// Gesture engine tuning
    #[must_use]
    pub const fn gesture_config(&self) -> GestureConfig {
        let g = &self.gestures;
        GestureConfig {
            min_zoom: g.min_zoom,
            max_zoom: g.max_zoom,
            swipe_threshold: g.swipe_threshold,
            swipe_min_opacity: g.swipe_min_opacity,
            double_tap_scale: g.double_tap_scale,
            swipe_navigation: self.viewer.swipe_navigation,
            spring: SpringConfig {
                stiffness: g.stiffness,
                damping: g.damping,
            },
        }
    }

    /// Session controller settings
    #[must_use]
    pub const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            close_grace: Duration::from_millis(self.viewer.close_grace_ms),
        }
    }

    /// Idle time before controls hide
    #[must_use]
    pub const fn controls_hide(&self) -> Duration {
        Duration::from_millis(self.viewer.controls_hide_ms)
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::Message(format!("Invalid config value for {key}: {reason}"))
}
