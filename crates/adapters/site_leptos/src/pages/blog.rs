use folio_app::catalog;
use leptos::prelude::*;

use crate::components::{BlogCard, SectionHeading};

/// Blog listing, newest post first.
#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section>
            <SectionHeading text="My Blog" page_title=true/>
            <div class="card-grid">
                {catalog::blog_posts()
                    .iter()
                    .enumerate()
                    .map(|(index, post)| view! { <BlogCard post=post index=index/> })
                    .collect_view()}
            </div>
        </section>
    }
}
