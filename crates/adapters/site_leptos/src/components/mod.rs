mod blog_card;
mod contact;
mod footer;
mod nav;
mod project_card;
mod section_heading;
mod social_links;
mod tech_tag;
mod theme_toggle;

pub use blog_card::BlogCard;
pub use contact::ContactSection;
pub use footer::Footer;
pub use nav::Nav;
pub use project_card::{CardDetail, ProjectCard};
pub use section_heading::SectionHeading;
pub use social_links::SocialLinks;
pub use tech_tag::TechTags;
pub use theme_toggle::ThemeToggle;

/// Inline style delaying the `reveal` animation of the `index`-th item.
pub(crate) fn stagger(index: usize, base_ms: usize) -> String {
    format!("animation-delay: {}ms", base_ms + index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stagger_by_hundred_milliseconds() {
        assert_eq!(stagger(0, 0), "animation-delay: 0ms");
        assert_eq!(stagger(3, 200), "animation-delay: 500ms");
    }

    #[test]
    fn should_link_contact_to_home_anchor() {
        assert!(nav::NAV_LINKS.contains(&("Contact", "/#contact")));
        assert_eq!(nav::NAV_LINKS.first(), Some(&("Home", "/")));
    }
}
