//! Dark/light theme toggle button.

use folio_domain::theme::ThemeValue;
use leptos::prelude::*;

use crate::theme::use_theme;

/// Icon for the button: it shows the theme a click switches *to*.
fn icon(theme: ThemeValue) -> &'static str {
    match theme {
        ThemeValue::Dark => "\u{2600}",
        ThemeValue::Light => "\u{263E}",
    }
}

fn title(theme: ThemeValue) -> &'static str {
    match theme.toggled() {
        ThemeValue::Dark => "Switch to dark theme",
        ThemeValue::Light => "Switch to light theme",
    }
}

/// A toggle button that switches between light and dark themes.
///
/// Each click toggles and persists the new preference through the shared
/// theme store.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let theme = ctx.theme();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| ctx.toggle()
            title=move || title(theme.get())
            aria-label=move || title(theme.get())
        >
            {move || icon(theme.get())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_sun_when_dark() {
        assert_eq!(icon(ThemeValue::Dark), "\u{2600}");
        assert_eq!(title(ThemeValue::Dark), "Switch to light theme");
    }

    #[test]
    fn should_show_moon_when_light() {
        assert_eq!(icon(ThemeValue::Light), "\u{263E}");
        assert_eq!(title(ThemeValue::Light), "Switch to dark theme");
    }
}
