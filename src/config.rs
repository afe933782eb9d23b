//! TOML configuration for the picker demo.
//!
//! Settings are layered with figment: built-in defaults, then an optional
//! TOML file, then whatever was given on the command line.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::StyleKind;
use crate::theme::{Theme, parse_color};

/// Width offered to the picker when none is configured.
pub const DEFAULT_WIDTH: u16 = 40;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Config error: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub picker: PickerSection,
    pub theme: ThemeSection,
}

/// What the picker shows and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSection {
    pub title: String,
    /// Values to pick from, in display order
    pub sources: Vec<String>,
    /// Values selected on startup
    pub selected: Vec<String>,
    pub style: StyleKind,
    /// Width offered to the picker, in cells
    pub width: u16,
    /// Whether menu style pickers start open
    pub expanded: bool,
}

impl Default for PickerSection {
    fn default() -> Self {
        Self {
            title: "Options".to_string(),
            sources: Vec::new(),
            selected: Vec::new(),
            style: StyleKind::default(),
            width: DEFAULT_WIDTH,
            expanded: false,
        }
    }
}

/// Theme colors in any CSS format. Unset colors keep the built-in theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

/// Values set on the command line. `None` leaves lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigOverrides {
    pub picker: PickerOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PickerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
}

impl AppConfig {
    /// Build the layered figment: defaults, then `file`, then `overrides`.
    pub fn figment(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Serialized::defaults(overrides.clone())))
    }

    /// Load the layered configuration.
    pub fn load(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(file, overrides)?
            .extract()
            .map_err(Box::new)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The configured theme on top of the built-in one.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let defaults = Theme::default();
        let section = &self.theme;
        Ok(Theme {
            accent: color_or(section.accent.as_deref(), defaults.accent)?,
            on_accent: color_or(section.on_accent.as_deref(), defaults.on_accent)?,
            neutral: color_or(section.neutral.as_deref(), defaults.neutral)?,
            secondary: color_or(section.secondary.as_deref(), defaults.secondary)?,
            highlight: defaults.highlight,
        })
    }

    /// Initial selection as a set.
    pub fn selection(&self) -> HashSet<String> {
        self.picker.selected.iter().cloned().collect()
    }

    /// Selected values that are not among the sources.
    ///
    /// They stay selected but no option will show them.
    pub fn unknown_selected(&self) -> Vec<&str> {
        self.picker
            .selected
            .iter()
            .filter(|value| !self.picker.sources.contains(value))
            .map(String::as_str)
            .collect()
    }
}

fn color_or(value: Option<&str>, fallback: Color) -> Result<Color, ConfigError> {
    match value {
        Some(input) => parse_color(input).map_err(ConfigError::InvalidColor),
        None => Ok(fallback),
    }
}
