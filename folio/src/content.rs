//! Site content model and YAML loading.
//!
//! Everything the generated page shows is authored in one YAML file: the
//! display name, the typewriter roles, the radar chart axes, and the floating
//! skill labels with their approximate positions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating site content
#[derive(Error, Debug)]
pub enum ContentError {
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content file is not valid YAML
    #[error("parse error: {0}")]
    Parse(String),

    /// A required section is missing or empty
    #[error("content is missing {0}")]
    Missing(&'static str),

    /// A radar score is outside 0-100
    #[error("score for '{name}' is {score}, expected 0-100")]
    ScoreOutOfRange { name: String, score: f32 },

    /// An authored skill position is outside the 0-100 percentage range
    #[error("position for '{name}' is ({x}, {y}), expected percentages in 0-100")]
    PositionOutOfRange { name: String, x: f32, y: f32 },
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// One radar chart axis: a skill area and its self-rated score out of 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAxis {
    pub name: String,
    pub score: f32,
}

/// One floating skill label with its authored approximate position, in
/// viewport percentages. Final positions are resolved in the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPin {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// The full authored content of a portfolio page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    /// Display name, used in the hero section and the page title.
    pub name: String,

    /// Short line under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Roles cycled by the typewriter headline.
    pub roles: Vec<String>,

    /// Radar chart axes.
    #[serde(default)]
    pub radar: Vec<SkillAxis>,

    /// Floating skill labels.
    #[serde(default)]
    pub skills: Vec<SkillPin>,
}

impl SiteContent {
    /// Load and validate content from a YAML file.
    pub fn from_path(path: &Path) -> ContentResult<Self> {
        let text = fs::read_to_string(path)?;
        let content: SiteContent =
            serde_yaml::from_str(&text).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the page rendering relies on.
    pub fn validate(&self) -> ContentResult<()> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Missing("a display name"));
        }
        if self.roles.is_empty() {
            return Err(ContentError::Missing("typewriter roles"));
        }

        for axis in &self.radar {
            if !(0.0..=100.0).contains(&axis.score) {
                return Err(ContentError::ScoreOutOfRange {
                    name: axis.name.clone(),
                    score: axis.score,
                });
            }
        }

        for pin in &self.skills {
            if !(0.0..=100.0).contains(&pin.x) || !(0.0..=100.0).contains(&pin.y) {
                return Err(ContentError::PositionOutOfRange {
                    name: pin.name.clone(),
                    x: pin.x,
                    y: pin.y,
                });
            }
        }

        Ok(())
    }
}
