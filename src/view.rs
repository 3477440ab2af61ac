//! View style and visual style enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Layout used to display a collection of entries
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewStyle {
    Standard,
    Gallery,
    #[default]
    SearchEngine,
    ContentCentric,
    Accordion,
    LinksOnly,
}

impl ViewStyle {
    /// All view styles in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Standard,
            Self::Gallery,
            Self::SearchEngine,
            Self::ContentCentric,
            Self::Accordion,
            Self::LinksOnly,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Gallery => "gallery",
            Self::SearchEngine => "search-engine",
            Self::ContentCentric => "content-centric",
            Self::Accordion => "accordion",
            Self::LinksOnly => "links-only",
        }
    }
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.id() == s)
            .ok_or_else(|| ConfigError::InvalidViewStyle(s.to_string()))
    }
}

/// Colour scheme of the page
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum VisualStyle {
    #[default]
    #[serde(rename = "style-light")]
    Light,
    #[serde(rename = "style-dark")]
    Dark,
}

impl VisualStyle {
    pub fn all() -> &'static [Self] {
        &[Self::Light, Self::Dark]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Light => "style-light",
            Self::Dark => "style-dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VisualStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.id() == s)
            .ok_or_else(|| ConfigError::InvalidVisualStyle(s.to_string()))
    }
}
