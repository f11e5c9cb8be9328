//! Core library for outline
//!
//! This crate implements the **Functional Core** of the outline service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`outline_core`** (this crate): Pure transformation functions with zero I/O
//! - **`outline`**: Fetching, HTTP serving and terminal output (the Imperative Shell)
//!
//! Every function here is deterministic and can be tested with fixture HTML,
//! no network or mocking required.
//!
//! # Module Organization
//!
//! - [`outline`]: Heading extraction from an HTML document and Markdown rendering
//! - [`country`]: Validation of country names and article title normalization
//! - [`mime`]: MIME type sniffing for data URIs
//!
//! # Example Usage
//!
//! ```rust
//! use outline_core::outline::{extract_outline, ContentScope, RenderOptions};
//!
//! let html = r#"<div id="mw-content-text"><h2>History[edit]</h2><h2>See also</h2></div>"#;
//! let outline = extract_outline(html, &ContentScope::default());
//!
//! assert_eq!(outline.render(&RenderOptions::default()), "## History");
//! ```

pub mod country;
pub mod error;
pub mod mime;
pub mod outline;

pub use error::OutlineError;
