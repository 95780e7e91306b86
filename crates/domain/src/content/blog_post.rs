//! Blog post — a dated summary linking to the full article.

use chrono::NaiveDate;
use serde::Serialize;

use super::{require_link, require_non_empty};
use crate::error::{FolioError, ValidationError};

/// A blog post summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub summary: &'static str,
    /// Publication date, `YYYY-MM-DD`.
    pub published: &'static str,
    pub link: &'static str,
}

impl BlogPost {
    /// Parse the publication date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] when `published` is not an
    /// ISO calendar date.
    pub fn published_on(&self) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").map_err(|source| {
            ValidationError::InvalidDate {
                value: self.published.to_string(),
                source,
            }
        })
    }

    /// Human-readable date, e.g. `May 28, 2025`.
    ///
    /// Falls back to the raw string when the date does not parse.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.published_on().map_or_else(
            |_| self.published.to_string(),
            |date| date.format("%B %-d, %Y").to_string(),
        )
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Validation`] when a text field is blank, the
    /// date does not parse, or the link is malformed.
    pub fn validate(&self) -> Result<(), FolioError> {
        require_non_empty("title", self.title)?;
        require_non_empty("summary", self.summary)?;
        self.published_on()?;
        require_link("link", self.link)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            title: "Mastering Tailwind CSS for Responsive Design",
            summary: "A guide to responsive interfaces with Tailwind CSS.",
            published: "2025-04-15",
            link: "#",
        }
    }

    #[test]
    fn should_parse_publication_date() {
        let date = sample().published_on().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
    }

    #[test]
    fn should_format_display_date_with_month_name() {
        assert_eq!(sample().display_date(), "April 15, 2025");
        let post = BlogPost {
            published: "2025-03-01",
            ..sample()
        };
        assert_eq!(post.display_date(), "March 1, 2025");
    }

    #[test]
    fn should_fall_back_to_raw_date_when_unparseable() {
        let post = BlogPost {
            published: "May 28, 2025",
            ..sample()
        };
        assert_eq!(post.display_date(), "May 28, 2025");
    }

    #[test]
    fn should_reject_post_when_date_is_invalid() {
        let post = BlogPost {
            published: "2025-02-30",
            ..sample()
        };
        assert!(matches!(
            post.validate(),
            Err(FolioError::Validation(ValidationError::InvalidDate { .. }))
        ));
    }

    #[test]
    fn should_reject_post_when_summary_is_empty() {
        let post = BlogPost {
            summary: "",
            ..sample()
        };
        assert!(matches!(
            post.validate(),
            Err(FolioError::Validation(ValidationError::EmptyField {
                field: "summary"
            }))
        ));
    }

    #[test]
    fn should_accept_valid_post() {
        assert!(sample().validate().is_ok());
    }
}
