//! # folio-adapter-site-leptos
//!
//! Client-side rendered portfolio site.
//!
//! ## Responsibilities
//! - Render the home, projects, and blog pages from `folio_app::catalog`
//! - Act as the **composition root** for the theme store: build it once from
//!   the browser adapters and share it through Leptos context
//! - Implement the `PreferenceStorage` and `DocumentRoot` ports on top of
//!   `localStorage` and the `<html>` element
//!
//! ## Dependency rule
//! Depends on `folio-app` and `folio-domain`. Nothing depends on this crate.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod browser;
mod components;
mod pages;
pub mod theme;

use components::{Footer, Nav};
use pages::{Blog, Home, NotFound, Projects};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    theme::provide_theme();

    if let Err(err) = folio_app::catalog::validate_all() {
        log::error!("invalid portfolio content: {err}");
    }

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("projects") view=Projects/>
                    <Route path=path!("blog") view=Blog/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
