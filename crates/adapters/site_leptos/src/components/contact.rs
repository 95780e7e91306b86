use folio_app::catalog;
use leptos::prelude::*;

use super::{SectionHeading, SocialLinks};

/// "Get in Touch" block, anchored at `#contact`.
#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = catalog::profile();

    view! {
        <section id="contact">
            <SectionHeading text="Get in Touch"/>
            <div class="card reveal">
                <p>"Have a project in mind or just want to chat? Feel free to reach out!"</p>
                <p>
                    <a class="button" href=profile.mailto()>{profile.email}</a>
                </p>
                <SocialLinks links=catalog::social_links()/>
            </div>
        </section>
    }
}
