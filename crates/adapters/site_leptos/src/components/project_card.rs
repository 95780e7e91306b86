//! Card for one project, used on the home and projects pages.

use folio_domain::content::Project;
use leptos::prelude::*;

use super::TechTags;

/// How much detail a [`ProjectCard`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardDetail {
    /// Home page: role and the short summary.
    #[default]
    Featured,
    /// Projects page: category badge and the summary.
    Listing,
}

#[component]
pub fn ProjectCard(
    project: &'static Project,
    #[prop(optional)] detail: CardDetail,
    /// Position in the list, used to stagger the entrance animation.
    #[prop(optional)]
    index: usize,
) -> impl IntoView {
    let badge = match detail {
        CardDetail::Featured => project.role.map(ToString::to_string),
        CardDetail::Listing => Some(project.category.to_string()),
    };

    view! {
        <article class="card reveal" style=super::stagger(index, 0)>
            <img src=project.image alt=project.title width="800" height="500"/>
            <h3>{project.title}</h3>
            {badge.map(|text| view! { <span class="category">{text}</span> })}
            <p>{project.summary}</p>
            <p class="post-date">"Tech Stack:"</p>
            <TechTags names=project.tech_stack/>
            <div class="tags">
                <a class="button" href=project.live_demo target="_blank" rel="noopener noreferrer">
                    "Live Demo"
                </a>
                <a
                    class="button secondary"
                    href=project.source
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "GitHub"
                </a>
            </div>
        </article>
    }
}
