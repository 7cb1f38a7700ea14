//! TOML configuration for a timeline: behaviour flags, style overrides and
//! the event list.
//!
//! ```toml
//! animation = "bounce"
//! visible_count = 4
//! likes = true
//! share = true
//! date_format = "%d %b %Y"
//!
//! [style]
//! line_color = "#3366FF"
//!
//! [[events]]
//! title = "First commit"
//! date = "2024-01-15"
//! important = true
//! description = "Where it all started"
//! ```

mod error;

pub use error::{ConfigError, Result};

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::animation::TimelineAnimation;
use crate::models::color::parse_hex_color;
use crate::models::event::TimelineEvent;
use crate::models::style::TimelineStyle;

const CONFIG_FILE_NAME: &str = "timeline.toml";

/// One `[[events]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl EventConfig {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            color: None,
            title_color: None,
            important: false,
            description: String::new(),
            icon: None,
        }
    }

    /// Date as shown on the timeline.
    ///
    /// ISO dates (`YYYY-MM-DD`) are reformatted with `date_format` when one is
    /// given; anything else is shown verbatim.
    pub fn display_date(&self, date_format: Option<&str>) -> String {
        let Some(format) = date_format else {
            return self.date.clone();
        };
        let Ok(date) = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") else {
            return self.date.clone();
        };

        let mut out = String::new();
        if write!(out, "{}", date.format(format)).is_err() {
            log::warn!("Invalid date format {:?}; showing {:?} as is", format, self.date);
            return self.date.clone();
        }
        out
    }

    fn to_event(&self, index: usize, date_format: Option<&str>) -> Result<TimelineEvent> {
        let mut event = TimelineEvent::new(self.title.clone(), self.display_date(date_format))
            .with_important(self.important)
            .with_description(self.description.clone());

        if let Some(raw) = &self.color {
            event = event.with_color(parse_color(raw, format!("events[{}].color", index))?);
        }
        if let Some(raw) = &self.title_color {
            event = event.with_title_color(parse_color(raw, format!("events[{}].title_color", index))?);
        }
        if let Some(glyph) = self.icon.as_ref().filter(|g| !g.trim().is_empty()) {
            event = event.with_glyph(glyph.clone());
        }

        Ok(event)
    }
}

fn parse_color(raw: &str, field: String) -> Result<egui::Color32> {
    parse_hex_color(raw).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: raw.to_string(),
    })
}

/// Everything needed to construct a timeline from a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<TimelineAnimation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_count: Option<usize>,
    pub likes: bool,
    pub share: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    pub style: TimelineStyle,
    pub events: Vec<EventConfig>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            animation: None,
            visible_count: None,
            likes: false,
            share: false,
            date_format: None,
            style: TimelineStyle::default(),
            events: Vec::new(),
        }
    }
}

impl TimelineConfig {
    /// Platform config location, e.g. `~/.config/timelinedemo/timeline.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "EguiTimeline", "TimelineDemo")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded timeline config from {:?} ({} events)",
            path,
            config.events.len()
        );
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else the platform config file, else the sample.
    /// Failures are logged and fall back to the sample config.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let explicit = path.is_some();
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::warn!("Unable to resolve config directory; using sample timeline");
            return Self::sample();
        };

        if !explicit && !path.exists() {
            log::info!("No config at {:?}; using sample timeline", path);
            return Self::sample();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to load timeline config: {err}; using sample timeline");
                Self::sample()
            }
        }
    }

    /// Build the events in file order
    pub fn build_events(&self) -> Result<Vec<TimelineEvent>> {
        let date_format = self.date_format.as_deref();
        self.events
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_event(index, date_format))
            .collect()
    }

    /// Demo content shown when no config file exists
    pub fn sample() -> Self {
        let entry = |title: &str, date: &str, color: &str, important: bool, description: &str| {
            EventConfig {
                color: Some(color.to_string()),
                important,
                description: description.to_string(),
                ..EventConfig::new(title, date)
            }
        };

        let mut launch = entry(
            "Public launch",
            "2024-09-02",
            "#FF9500",
            true,
            "Version 1.0 shipped to everyone. The release notes listed forty-two fixes.",
        );
        launch.icon = Some("★".to_string());

        Self {
            animation: Some(TimelineAnimation::Bounce),
            visible_count: Some(4),
            likes: true,
            share: true,
            date_format: Some("%d %b %Y".to_string()),
            style: TimelineStyle::default(),
            events: vec![
                entry(
                    "Kick-off",
                    "2024-01-15",
                    "#007AFF",
                    false,
                    "The team met for the first time and agreed on scope.",
                ),
                entry(
                    "First prototype",
                    "2024-03-04",
                    "#34C759",
                    false,
                    "A clickable prototype was demoed to early users.",
                ),
                entry(
                    "Beta",
                    "2024-06-10",
                    "#AF52DE",
                    true,
                    "Closed beta opened with two hundred testers.",
                ),
                launch,
                entry(
                    "First anniversary",
                    "2025-01-15",
                    "#FF2D55",
                    false,
                    "One year since the kick-off meeting.",
                ),
            ],
        }
    }
}
