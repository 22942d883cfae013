//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the gantt viewer.

use std::path::PathBuf;

use gantt_protocol::{DateRange, HeaderResolution};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Default height of a chart row, in terminal rows.
pub const DEFAULT_ROW_HEIGHT: u16 = 1;

/// Largest accepted row height.
pub const MAX_ROW_HEIGHT: u16 = 8;

/// Default width of the timeline track, in terminal columns.
pub const DEFAULT_TRACK_WIDTH: f64 = 240.0;

/// Default bar color, used for records without a (valid) color of their own.
pub const DEFAULT_BAR_COLOR: &str = "rgb(85, 155, 241)";

/// Columns shown in the task list when none are configured.
pub const DEFAULT_COLUMNS: &[&str] = &["id", "task_name", "start", "finish"];

/// Layout settings shared by the task list and the timeline.
///
/// # Examples
///
/// ```
/// use gantt_config::ViewerConfig;
///
/// let viewer = ViewerConfig::default();
/// assert_eq!(viewer.row_height, 1);
/// assert_eq!(viewer.columns, ["id", "task_name", "start", "finish"]);
/// assert!(viewer.range.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Height of every chart row, in terminal rows.
    #[serde(default = "default_row_height")]
    pub row_height: u16,

    /// Width of the whole timeline track, in terminal columns.
    #[serde(default = "default_track_width")]
    pub track_width: f64,

    /// Visible date range. When absent, the range spanning all records is
    /// used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,

    /// Record fields shown as task-list columns, left to right.
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,

    /// Granularity of the timeline header ticks.
    #[serde(default)]
    pub header_resolution: HeaderResolution,

    /// Bar color for records that do not specify one.
    #[serde(default = "default_bar_color")]
    pub default_color: String,
}

fn default_row_height() -> u16 {
    DEFAULT_ROW_HEIGHT
}

fn default_track_width() -> f64 {
    DEFAULT_TRACK_WIDTH
}

fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(ToString::to_string).collect()
}

fn default_bar_color() -> String {
    DEFAULT_BAR_COLOR.to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            track_width: DEFAULT_TRACK_WIDTH,
            range: None,
            columns: default_columns(),
            header_resolution: HeaderResolution::default(),
            default_color: default_bar_color(),
        }
    }
}

impl ViewerConfig {
    /// Validates the layout settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the row height or track width is out of range, or
    /// if a column name is blank.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ROW_HEIGHT).contains(&self.row_height) {
            return Err(ConfigError::InvalidRowHeight {
                value: self.row_height,
                max: MAX_ROW_HEIGHT,
            });
        }
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(ConfigError::InvalidTrackWidth(self.track_width));
        }
        if let Some(position) = self.columns.iter().position(|c| c.trim().is_empty()) {
            return Err(ConfigError::EmptyColumn(position));
        }
        Ok(())
    }
}

/// The main configuration struct for the gantt viewer.
///
/// # Examples
///
/// ```
/// use gantt_config::{Config, ViewerConfig};
///
/// let config = Config::default();
/// assert!(config.data_path.is_none());
///
/// let config = Config {
///     viewer: ViewerConfig {
///         row_height: 2,
///         ..Default::default()
///     },
///     data_path: Some("schedule.json".into()),
///     session_token: None,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Layout settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// JSON file to load records from when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Session token that skips the login prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gantt_config::Config;
    ///
    /// # fn example() -> gantt_config::Result<()> {
    /// let config = Config::load_from("gantt.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        self.viewer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantt_protocol::parse_timestamp;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::new();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.viewer.default_color, DEFAULT_BAR_COLOR);
    }

    #[test]
    fn validate_row_height_bounds() {
        let mut viewer = ViewerConfig::default();
        viewer.row_height = 0;
        assert!(matches!(
            viewer.validate(),
            Err(ConfigError::InvalidRowHeight { value: 0, .. })
        ));

        viewer.row_height = MAX_ROW_HEIGHT;
        assert!(viewer.validate().is_ok());

        viewer.row_height = MAX_ROW_HEIGHT + 1;
        assert!(viewer.validate().is_err());
    }

    #[test]
    fn validate_track_width() {
        let mut viewer = ViewerConfig::default();
        viewer.track_width = 0.0;
        assert!(matches!(
            viewer.validate(),
            Err(ConfigError::InvalidTrackWidth(_))
        ));
        viewer.track_width = f64::NAN;
        assert!(viewer.validate().is_err());
    }

    #[test]
    fn validate_blank_column() {
        let viewer = ViewerConfig {
            columns: vec!["id".to_string(), "  ".to_string()],
            ..Default::default()
        };
        assert!(matches!(viewer.validate(), Err(ConfigError::EmptyColumn(1))));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial_viewer() {
        let json = r#"{"viewer": {"row_height": 2, "header_resolution": "week"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.viewer.row_height, 2);
        assert_eq!(config.viewer.header_resolution, HeaderResolution::Week);
        assert_eq!(config.viewer.track_width, DEFAULT_TRACK_WIDTH);
    }

    #[test]
    fn degenerate_range_fails_to_parse() {
        let json = r#"{"viewer": {"range": {"start": "2023-06-27", "end": "2023-06-01"}}}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gantt.json5");
        std::fs::write(
            &path,
            r#"
            {
                viewer: {
                    range: { start: "2023-06-01T09:00", end: "2023-06-27T13:00" },
                    track_width: 3000,
                    columns: ["id", "task_name"],
                },
                data_path: "test_data.json",
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let range = config.viewer.range.unwrap();
        assert_eq!(range.start(), parse_timestamp("2023-06-01T09:00").unwrap());
        assert_eq!(config.viewer.track_width, 3000.0);
        assert_eq!(config.viewer.columns, ["id", "task_name"]);
        assert_eq!(config.data_path, Some(PathBuf::from("test_data.json")));
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gantt.json");
        std::fs::write(&path, r#"{"viewer": {"row_height": 0}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            viewer: ViewerConfig {
                row_height: 3,
                header_resolution: HeaderResolution::Day,
                ..Default::default()
            },
            data_path: Some(PathBuf::from("/tmp/records.json")),
            session_token: Some("abc".to_string()),
        };

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }

    #[test]
    fn session_token_not_serialized_when_none() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.contains("session_token"));
        assert!(!json.contains("range"));
    }
}
