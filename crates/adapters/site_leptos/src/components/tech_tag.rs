use leptos::prelude::*;

/// A pill showing one technology.
#[component]
pub fn TechTag(name: &'static str) -> impl IntoView {
    view! { <span class="tag">{name}</span> }
}

/// A wrapped row of [`TechTag`]s.
#[component]
pub fn TechTags(names: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="tags">
            {names.iter().map(|name| view! { <TechTag name=*name/> }).collect_view()}
        </div>
    }
}
