//! Social links shown in the contact section.

use serde::Serialize;

use super::require_link;
use crate::error::{FolioError, ValidationError};

/// Network a [`SocialLink`] points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    GitHub,
    LinkedIn,
    X,
    Email,
}

/// A link to one of the author's profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
}

impl SocialLink {
    /// Accessible name for icon-only links.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.network {
            SocialNetwork::GitHub => "GitHub",
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::X => "X (Twitter)",
            SocialNetwork::Email => "Email",
        }
    }

    /// Whether the link leaves the site (and should open in a new tab).
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.url.starts_with("http")
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when the URL is malformed or an
    /// email link does not use `mailto:`.
    pub fn validate(&self) -> Result<(), FolioError> {
        require_link("url", self.url)?;
        if self.network == SocialNetwork::Email && !self.url.starts_with("mailto:") {
            return Err(ValidationError::InvalidLink {
                field: "url",
                value: self.url.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_label_networks() {
        let link = SocialLink {
            network: SocialNetwork::X,
            url: "https://x.com/sobaanx",
        };
        assert_eq!(link.label(), "X (Twitter)");
        assert!(link.is_external());
    }

    #[test]
    fn should_not_treat_mailto_as_external() {
        let link = SocialLink {
            network: SocialNetwork::Email,
            url: "mailto:me@sobaansaeed.com",
        };
        assert!(!link.is_external());
        assert!(link.validate().is_ok());
    }

    #[test]
    fn should_reject_email_link_without_mailto_scheme() {
        let link = SocialLink {
            network: SocialNetwork::Email,
            url: "https://example.com",
        };
        assert!(link.validate().is_err());
    }
}
