//! Rendering module for converting reconstructed documents to output formats.

mod html;
mod json;
mod text;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use text::to_text;
