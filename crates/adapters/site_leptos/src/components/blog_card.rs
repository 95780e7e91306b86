use folio_domain::content::BlogPost;
use leptos::prelude::*;

#[component]
pub fn BlogCard(post: &'static BlogPost, #[prop(optional)] index: usize) -> impl IntoView {
    view! {
        <article class="card reveal" style=super::stagger(index, 0)>
            <h3>{post.title}</h3>
            <time class="post-date" datetime=post.published>{post.display_date()}</time>
            <p>{post.summary}</p>
            <a class="button" href=post.link>"Read More"</a>
        </article>
    }
}
