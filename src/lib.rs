//! Landing TUI - describe a product, generate landing page copy, edit it in place
//!
//! This library provides the form controller, the generation service client
//! and the terminal rendering used by the `landing` binary.

pub mod content;
pub mod generate;
pub mod logging;
pub mod ui;
