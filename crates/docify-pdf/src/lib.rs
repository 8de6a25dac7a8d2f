//! Paginated PDF export of documented commit histories
//!
//! The export runs in two steps: [`layout_document`] places every line of
//! the document on A4 pages ([`layout`]), then [`render_pdf`] draws those pages
//! with the built-in Courier fonts. Pages can be inspected before rendering.

pub mod document;
pub mod error;
pub mod exporter;
pub mod layout;
pub mod render;
pub mod style;

pub use document::{layout_document, text_stream};
pub use error::ExportError;
pub use exporter::export_commits;
pub use layout::{wrap_text, DocumentLayout, Page, Rule, Shade, TextRun};
pub use render::render_pdf;
pub use style::PageGeometry;
