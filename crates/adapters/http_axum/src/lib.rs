//! # folio-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **exported site** (the `dist/` output of the Leptos crate)
//!   as static files
//! - Fall back to `index.html` for client-side routes (`/projects`, `/blog`)
//!   so deep links and reloads work
//! - Expose `/health` for liveness probes
//!
//! The site is fully client-side: there is no API and no server-side
//! rendering. The theme preference never reaches the server.

pub mod router;
pub mod state;
