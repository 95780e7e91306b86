//! Portfolio content — the projects, posts, and links the site renders.
//!
//! Content is compiled into the binary as `'static` data, so every type here
//! borrows `'static` strings instead of owning them. Invariants are checked
//! with `validate()` rather than at construction time.

pub mod blog_post;
pub mod profile;
pub mod project;
pub mod social;

pub use blog_post::BlogPost;
pub use profile::Profile;
pub use project::{Project, ProjectCategory};
pub use social::{SocialLink, SocialNetwork};

use crate::error::ValidationError;

/// Placeholder target used for links that are not published yet.
pub const PLACEHOLDER_LINK: &str = "#";

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Accepts `#`, absolute `http(s)://` URLs, and `mailto:` links.
pub(crate) fn require_link(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let valid = value == PLACEHOLDER_LINK
        || ["https://", "http://", "mailto:"].iter().any(|scheme| {
            value
                .strip_prefix(scheme)
                .is_some_and(|rest| !rest.is_empty() && !rest.contains(char::is_whitespace))
        });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidLink {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_placeholder_and_absolute_links() {
        for link in [
            "#",
            "https://github.com/sobaansaeed/",
            "http://example.com",
            "mailto:me@sobaansaeed.com",
        ] {
            assert!(require_link("link", link).is_ok(), "{link}");
        }
    }

    #[test]
    fn should_reject_relative_or_malformed_links() {
        for link in ["", "github.com", "https://", "ftp://x", "https://a b", "/blog"] {
            assert!(
                matches!(
                    require_link("link", link),
                    Err(ValidationError::InvalidLink { field: "link", .. })
                ),
                "{link}"
            );
        }
    }

    #[test]
    fn should_reject_blank_field() {
        assert!(matches!(
            require_non_empty("title", "   "),
            Err(ValidationError::EmptyField { field: "title" })
        ));
        assert!(require_non_empty("title", "Hi").is_ok());
    }
}
