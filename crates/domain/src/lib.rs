//! # folio-domain
//!
//! Pure domain model for the folio portfolio site.
//!
//! ## Responsibilities
//! - Foundational types: error conventions shared by every layer
//! - Define the **theme** (`dark` / `light`) and the pure mapping from a theme
//!   to the markers applied on the document root
//! - Define **portfolio content**: projects, blog posts, social links, profile
//! - Contain all invariant enforcement for that content
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;

pub mod content;
