use chrono::Datelike;
use folio_app::catalog;
use leptos::prelude::*;

fn copyright(year: i32, name: &str) -> String {
    format!("\u{00A9} {year} {name}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <p>{copyright(year, catalog::profile().name)}</p>
            <p>"Designed and Developed with \u{2764}\u{FE0F}"</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_copyright_line() {
        assert_eq!(
            copyright(2025, "Sobaan Saeed"),
            "\u{00A9} 2025 Sobaan Saeed. All rights reserved."
        );
    }
}
