//! Rendering module: page template, docstring formatting, reflective
//! walking, and JSON export.

pub mod help_text;
mod json;
mod options;
mod reflect;
pub mod template;

pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use reflect::{reflect_to_html, ReflectionWalker};
