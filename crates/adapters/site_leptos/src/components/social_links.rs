use folio_domain::content::{SocialLink, SocialNetwork};
use leptos::prelude::*;

/// Short glyph standing in for each network's logo.
fn glyph(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::GitHub => "GH",
        SocialNetwork::LinkedIn => "in",
        SocialNetwork::X => "X",
        SocialNetwork::Email => "\u{2709}",
    }
}

#[component]
pub fn SocialLinks(links: &'static [SocialLink]) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .iter()
                .map(|link| {
                    let target = link.is_external().then_some("_blank");
                    view! {
                        <a
                            href=link.url
                            target=target
                            rel="noopener noreferrer"
                            title=link.label()
                            aria-label=link.label()
                        >
                            {glyph(link.network)}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_give_every_network_a_glyph() {
        for network in [
            SocialNetwork::GitHub,
            SocialNetwork::LinkedIn,
            SocialNetwork::X,
            SocialNetwork::Email,
        ] {
            assert!(!glyph(network).is_empty());
        }
    }
}
