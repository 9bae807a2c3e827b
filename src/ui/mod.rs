//! # UI Module
//!
//! The terminal front end of the landing page builder.
//!
//! ## Components
//!
//! - [`App`] - form controller: description, request state, content, editor
//! - [`editable`] - rendering-agnostic inline text editor
//! - [`keys`] - key bindings mapped onto [`App`] operations
//! - [`mod@render`] - drawing the form and the landing page preview
//! - [`theme`] / [`config`] - colors and persisted settings
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  AI Landing Page Builder  → server              │
//! ├─ Describe your product or business ─────────────┤
//! │  description draft                              │
//! └─────────────────────────────────────────────────┘
//!  [ Generate ]
//!  error message
//! ┌─ Preview ───────────────────────────────────────┐
//! │              Hero title / subtitle              │
//! │  Key Features                                   │
//! │  ● feature                                      │
//! │                  [ CTA ]                        │
//! └─────────────────────────────────────────────────┘
//!  footer / key hints
//! ```
//!
//! The description box and the status rows take only the height their
//! wrapped text needs. The preview gets the rest and scrolls to keep the
//! focused field visible.

pub mod app;
pub mod config;
pub mod editable;
pub mod keys;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
