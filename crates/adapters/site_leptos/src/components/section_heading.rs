use leptos::prelude::*;

/// Section title with the shared reveal animation.
#[component]
pub fn SectionHeading(
    #[prop(into)] text: String,
    /// Render as `<h1>` (page title) instead of `<h2>`.
    #[prop(optional)]
    page_title: bool,
) -> impl IntoView {
    if page_title {
        view! { <h1 class="section-heading reveal">{text}</h1> }.into_any()
    } else {
        view! { <h2 class="section-heading reveal">{text}</h2> }.into_any()
    }
}
