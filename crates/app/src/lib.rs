//! # folio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStorage` — durable key-value record (`localStorage`)
//!   - `DocumentRoot` — the element theme markers are applied to
//! - Define **use-cases**:
//!   - `ThemePreferenceStore` — initialise, toggle, and persist the theme
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`MemoryStorage`, the static content `catalog`)
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod catalog;
pub mod ports;
pub mod services;
pub mod storage;
