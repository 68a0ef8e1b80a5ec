//! User settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridmark_engine::Glyphs;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Front-end preferences.
///
/// ```toml
/// min_size = 3
/// max_size = 5
///
/// [glyphs]
/// empty = " "
/// player_one = "X"
/// player_two = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Display strings for cells.
    #[serde(default)]
    glyphs: Glyphs,

    /// Smallest board offered at the size prompt.
    #[serde(default = "default_min_size")]
    min_size: usize,

    /// Largest board offered at the size prompt.
    #[serde(default = "default_max_size")]
    max_size: usize,
}

fn default_min_size() -> usize {
    3
}

fn default_max_size() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::default(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        info!(
            min_size = settings.min_size,
            max_size = settings.max_size,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks if `size` is in the offered range.
    pub fn allows_size(&self, size: usize) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }

    /// Offered sizes as shown in the size prompt, e.g. `3, 4, 5`.
    pub fn size_choices(&self) -> String {
        (self.min_size..=self.max_size)
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(SettingsError::new(format!(
                "Invalid size range {}..={}",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.size_choices(), "3, 4, 5");
        assert!(settings.allows_size(3));
        assert!(settings.allows_size(5));
        assert!(!settings.allows_size(6));
        assert!(!settings.allows_size(2));
        assert_eq!(settings.glyphs(), &Glyphs::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("max_size = 7\n[glyphs]\nplayer_one = \"#\"\n")
            .expect("valid toml");
        assert_eq!(*settings.max_size(), 7);
        assert_eq!(*settings.min_size(), 3);
        assert_eq!(settings.glyphs().player_one, "#");
        assert_eq!(settings.glyphs().player_two, "O");
    }

    #[test]
    fn test_invalid_range_rejected() {
        let settings: Settings = toml::from_str("min_size = 6\nmax_size = 4\n").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Settings>("enforce_terminal = true\n").is_err());
    }
}
