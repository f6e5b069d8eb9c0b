// src/reporting/mod.rs
//! Presentation layer: the core emits plain structured data; these
//! renderers turn it into console or JSON output.

pub mod console;
pub mod json;
