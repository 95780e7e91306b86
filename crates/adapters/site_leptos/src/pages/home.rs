//! Home page — hero, featured projects, blog teaser, and contact.

use folio_app::catalog;
use leptos::prelude::*;

use crate::components::{CardDetail, ContactSection, ProjectCard, SectionHeading, TechTags};

#[component]
pub fn Home() -> impl IntoView {
    let profile = catalog::profile();

    view! {
        <section id="hero" class="hero">
            <div class="animate-gradient-shift"></div>
            <h1 class="reveal" style="animation-delay: 600ms">
                {format!("I'm {}", profile.name)}
            </h1>
            <p class="reveal" style="animation-delay: 800ms">{profile.tagline}</p>
            <p class="reveal" style="animation-delay: 1000ms">{profile.pitch}</p>
            <div class="reveal" style="animation-delay: 1200ms">
                <TechTags names=profile.skills/>
            </div>
        </section>

        <section id="projects">
            <SectionHeading text="My Featured Projects"/>
            <div class="card-grid">
                {catalog::featured_projects()
                    .enumerate()
                    .map(|(index, project)| {
                        view! { <ProjectCard project=project detail=CardDetail::Featured index=index/> }
                    })
                    .collect_view()}
            </div>
            <p>
                <a class="button secondary" href="/projects">"See all projects"</a>
            </p>
        </section>

        <section id="blog">
            <SectionHeading text="Blog & Insights"/>
            <div class="card reveal">
                <p>
                    "Explore my thoughts on full-stack development, AI, automation, and tech trends on the dedicated Blog page."
                </p>
                <a class="button" href="/blog">"Go to Blog Page"</a>
            </div>
        </section>

        <ContactSection/>
    }
}
