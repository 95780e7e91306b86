use folio_app::catalog;
use leptos::prelude::*;

use crate::components::{CardDetail, ProjectCard, SectionHeading};

/// Every project, with its category.
#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section>
            <SectionHeading text="All My Projects" page_title=true/>
            <div class="card-grid">
                {catalog::projects()
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! { <ProjectCard project=project detail=CardDetail::Listing index=index/> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
