//! Project — a showcased piece of work with its stack and links.

use std::fmt;

use serde::Serialize;

use super::{require_link, require_non_empty};
use crate::error::{FolioError, ValidationError};

/// Broad area a project belongs to, shown as a badge on the projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    AiMl,
    DevOpsCloud,
    WebDevelopment,
    DataScience,
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AiMl => f.write_str("AI/ML"),
            Self::DevOpsCloud => f.write_str("DevOps/Cloud"),
            Self::WebDevelopment => f.write_str("Web Development"),
            Self::DataScience => f.write_str("Data Science"),
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    /// One or two sentences, used on cards.
    pub summary: &'static str,
    /// Long-form description.
    pub description: &'static str,
    pub image: &'static str,
    pub tech_stack: &'static [&'static str],
    pub role: Option<&'static str>,
    pub category: ProjectCategory,
    pub live_demo: &'static str,
    pub source: &'static str,
    /// Whether the project is highlighted on the home page.
    pub featured: bool,
}

impl Project {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when a text field is blank, the
    /// tech stack is empty, or a link is malformed.
    pub fn validate(&self) -> Result<(), FolioError> {
        require_non_empty("title", self.title)?;
        require_non_empty("summary", self.summary)?;
        require_non_empty("description", self.description)?;
        if self.tech_stack.is_empty() {
            return Err(ValidationError::EmptyTechStack.into());
        }
        if let Some(role) = self.role {
            require_non_empty("role", role)?;
        }
        require_link("image", self.image)?;
        require_link("live_demo", self.live_demo)?;
        require_link("source", self.source)?;
        Ok(())
    }
}
