//! Static portfolio content.
//!
//! Everything the pages render lives here, once, instead of being repeated
//! per page. Order within each list is display order.

use folio_domain::content::{
    BlogPost, Profile, Project, ProjectCategory, SocialLink, SocialNetwork,
};
use folio_domain::error::FolioError;

static PROFILE: Profile = Profile {
    name: "Sobaan Saeed",
    tagline: "Giving life to the code.",
    pitch: "I craft cutting-edge web experiences from concept to deployment, \
            ensuring robust functionality and intuitive design.",
    email: "me@sobaansaeed.com",
    skills: &[
        "HTML",
        "CSS",
        "JavaScript",
        "React",
        "Node.js",
        "Next.js",
        "Tailwind CSS",
        "MongoDB",
        "Python",
        "SQL",
    ],
};

static PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered Content Generation Platform",
        summary: "A full-stack platform using advanced NLP for content generation, featuring \
                  customizable templates and user authentication, showcasing scalable web app \
                  development.",
        description: "Developed a full-stack platform leveraging advanced NLP models (GPT-3/4) \
                      to generate high-quality articles, marketing copy, and social media \
                      content. Features include customizable templates, user authentication, \
                      and a credit-based system.",
        image: "https://placehold.co/800x500/1a1a2e/00FFFF?text=AI+Content+Gen",
        tech_stack: &["Next.js", "Node.js", "MongoDB", "OpenAI API", "Tailwind CSS"],
        role: Some("Lead Full-Stack Developer"),
        category: ProjectCategory::AiMl,
        live_demo: "#",
        source: "#",
        featured: true,
    },
    Project {
        title: "Automated Cloud Infrastructure Manager",
        summary: "Automated cloud infrastructure manager for AWS/Azure, with IaC templating, \
                  real-time dashboards, and cost optimization.",
        description: "Engineered a robust system for automating cloud resource provisioning, \
                      monitoring, and scaling across AWS and Azure. Features include \
                      infrastructure-as-code templating, real-time performance dashboards, \
                      and cost optimization insights.",
        image: "https://placehold.co/800x500/0a0a2a/00FF00?text=Cloud+Automation",
        tech_stack: &[
            "Python",
            "AWS Lambda",
            "Azure Functions",
            "Terraform",
            "React",
            "Grafana",
        ],
        role: Some("DevOps & Cloud Engineer"),
        category: ProjectCategory::DevOpsCloud,
        live_demo: "#",
        source: "#",
        featured: true,
    },
    Project {
        title: "E-commerce Microservices Platform",
        summary: "A scalable e-commerce platform built on microservices: catalog, orders, \
                  and payment gateway integrations.",
        description: "Built a scalable e-commerce platform using microservices architecture, \
                      including product catalog, order processing, and payment gateway \
                      integrations.",
        image: "https://placehold.co/800x500/2a1a0a/FF8C00?text=E-commerce",
        tech_stack: &["Spring Boot", "Kafka", "PostgreSQL", "React", "Docker"],
        role: None,
        category: ProjectCategory::WebDevelopment,
        live_demo: "#",
        source: "#",
        featured: false,
    },
    Project {
        title: "Real-time Chat Application",
        summary: "Real-time chat over WebSockets with authentication and group rooms.",
        description: "Developed a real-time chat application with WebSockets, user \
                      authentication, and group chat functionality.",
        image: "https://placehold.co/800x500/0a2a1a/00FF7F?text=Chat+App",
        tech_stack: &["Node.js", "Socket.IO", "Express", "React", "Redis"],
        role: None,
        category: ProjectCategory::WebDevelopment,
        live_demo: "#",
        source: "#",
        featured: false,
    },
    Project {
        title: "Data Visualization Dashboard",
        summary: "Interactive dashboard for complex datasets with D3.js charts and filtering.",
        description: "Interactive dashboard for visualizing complex datasets, featuring D3.js \
                      charts, filtering options, and responsive design.",
        image: "https://placehold.co/800x500/1a0a2a/8A2BE2?text=Data+Viz",
        tech_stack: &["React", "D3.js", "Python", "Flask", "Pandas"],
        role: None,
        category: ProjectCategory::DataScience,
        live_demo: "#",
        source: "#",
        featured: false,
    },
];

static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "The Future of AI in Web Development",
        summary: "Exploring how AI is transforming web development workflows, from code \
                  generation to automated testing and deployment.",
        published: "2025-05-28",
        link: "#",
    },
    BlogPost {
        title: "Mastering Tailwind CSS for Responsive Design",
        summary: "A comprehensive guide to building beautiful and responsive user interfaces \
                  with Tailwind CSS.",
        published: "2025-04-15",
        link: "#",
    },
    BlogPost {
        title: "Demystifying Serverless Functions with AWS Lambda",
        summary: "A deep dive into serverless architecture and how to build scalable \
                  applications using AWS Lambda.",
        published: "2025-03-10",
        link: "#",
    },
];

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: SocialNetwork::GitHub,
        url: "https://github.com/sobaansaeed/",
    },
    SocialLink {
        network: SocialNetwork::LinkedIn,
        url: "https://www.linkedin.com/in/sobaansaeed/",
    },
    SocialLink {
        network: SocialNetwork::X,
        url: "https://x.com/sobaanx",
    },
];

#[must_use]
pub fn profile() -> &'static Profile {
    &PROFILE
}

#[must_use]
pub fn skills() -> &'static [&'static str] {
    PROFILE.skills
}

/// Every project, in display order.
#[must_use]
pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Projects highlighted on the home page.
pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.featured)
}

/// Blog posts, newest first.
#[must_use]
pub fn blog_posts() -> &'static [BlogPost] {
    BLOG_POSTS
}

/// Profile links shown as icons in the contact section.
#[must_use]
pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

/// Validate every piece of content.
///
/// # Errors
///
/// Returns the first [`FolioError::Validation`] encountered.
pub fn validate_all() -> Result<(), FolioError> {
    PROFILE.validate()?;
    for project in PROJECTS {
        project.validate()?;
    }
    for post in BLOG_POSTS {
        post.validate()?;
    }
    for link in SOCIAL_LINKS {
        link.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_validate_all_content() {
        validate_all().unwrap();
    }

    #[test]
    fn should_feature_subset_of_projects_in_order() {
        let featured: Vec<_> = featured_projects().map(|p| p.title).collect();
        assert_eq!(
            featured,
            vec![
                "AI-Powered Content Generation Platform",
                "Automated Cloud Infrastructure Manager",
            ]
        );
        for title in featured {
            assert!(projects().iter().any(|p| p.title == title));
        }
    }

    #[test]
    fn should_list_every_project() {
        assert_eq!(projects().len(), 5);
    }

    #[test]
    fn should_give_featured_projects_a_role() {
        assert!(featured_projects().all(|p| p.role.is_some()));
    }

    #[test]
    fn should_order_blog_posts_newest_first() {
        let dates: Vec<_> = blog_posts()
            .iter()
            .map(|post| post.published_on().unwrap())
            .collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn should_have_unique_project_titles() {
        let mut titles: Vec<_> = projects().iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), projects().len());
    }

    #[test]
    fn should_expose_skills_from_profile() {
        assert_eq!(skills().first(), Some(&"HTML"));
        assert_eq!(skills().len(), 10);
    }

    #[test]
    fn should_link_every_social_network_externally() {
        assert!(social_links().iter().all(SocialLink::is_external));
    }
}
