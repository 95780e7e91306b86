//! Profile — who the portfolio belongs to.

use serde::Serialize;

use super::require_non_empty;
use crate::error::{FolioError, ValidationError};

/// Author details rendered in the hero, contact section, and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub pitch: &'static str,
    pub email: &'static str,
    pub skills: &'static [&'static str],
}

impl Profile {
    /// `mailto:` link for the contact address.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when a field is blank or the email
    /// has no `@`.
    pub fn validate(&self) -> Result<(), FolioError> {
        require_non_empty("name", self.name)?;
        require_non_empty("tagline", self.tagline)?;
        require_non_empty("pitch", self.pitch)?;
        require_non_empty("email", self.email)?;
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidLink {
                field: "email",
                value: self.email.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile {
            name: "Sobaan Saeed",
            tagline: "Giving life to the code.",
            pitch: "I craft web experiences.",
            email: "me@sobaansaeed.com",
            skills: &["Rust"],
        }
    }

    #[test]
    fn should_build_mailto_link() {
        assert_eq!(sample().mailto(), "mailto:me@sobaansaeed.com");
    }

    #[test]
    fn should_reject_email_without_at_sign() {
        let profile = Profile {
            email: "me.sobaansaeed.com",
            ..sample()
        };
        assert!(profile.validate().is_err());
    }
}
