use leptos::prelude::*;

use super::ThemeToggle;

/// Site navigation: `(label, href)` in display order.
pub(crate) const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Projects", "/projects"),
    ("Blog", "/blog"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                {NAV_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, (label, href))| {
                        view! {
                            <li class="reveal" style=super::stagger(i, 200)>
                                <a href=*href>{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ThemeToggle/>
        </nav>
    }
}
