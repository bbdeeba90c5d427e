//! # helpmark
//!
//! Help markup compiler and reflective documentation renderer for Rust.
//!
//! This library turns a small, fixed line-oriented marker grammar into
//! complete HTML pages, and renders object descriptors (modules, classes,
//! functions) into the same page style for in-application reference
//! viewers.
//!
//! ## Quick Start
//!
//! ```
//! use helpmark::compile;
//!
//! fn main() -> helpmark::Result<()> {
//!     let html = compile("Manual", "++<Welcome to the manual.>++")?;
//!     assert!(html.contains("<h1>Manual</h1>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Marker grammar**: paragraphs, bulleted lists, code blocks, anchors,
//!   colored and bold text, cross-references
//! - **Reflective rendering**: module and class pages built from inert
//!   [`ObjectDescriptor`] values supplied by the host
//! - **Docstring formatting**: underlined headings, `>>>` prompt blocks,
//!   key/value pairs, bullets
//! - **Lenient by design**: unrecognized lines pass through verbatim and
//!   block nesting is never checked during compilation
//! - **Opt-in lint pass**: [`check_balance`] reports unbalanced block
//!   markers without affecting compilation
//! - **JSON export**: persist documents and descriptors with serde

pub mod error;
pub mod model;
pub mod render;
pub mod scanner;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    DescriptorKind, DocumentWrapper, MarkupDocument, MemberDescriptor, MemberKind,
    ObjectDescriptor,
};
pub use render::{
    help_text, reflect_to_html, to_json, JsonFormat, ReflectionWalker, RenderOptions,
};
pub use scanner::{
    check_balance, Diagnostic, MarkerScanner, Severity, ValidationReport, MARKER_TABLE,
};

/// Compile raw marker text into a complete HTML page.
///
/// # Example
///
/// ```
/// let html = helpmark::compile("Doc", "%*%intro").unwrap();
/// assert!(html.contains("<a name=\"intro\">"));
/// ```
pub fn compile(title: &str, body: &str) -> Result<String> {
    MarkerScanner::new(RenderOptions::default()).compile(title, body)
}

/// Compile raw marker text with custom options.
pub fn compile_with_options(title: &str, body: &str, options: &RenderOptions) -> Result<String> {
    MarkerScanner::new(options.clone()).compile(title, body)
}

/// Render a module descriptor into a complete HTML page.
///
/// Module pages append a name/value/type summary table for scalar members.
pub fn render_module(descriptor: &ObjectDescriptor, title: &str) -> Result<String> {
    reflect_to_html(
        descriptor,
        title,
        DescriptorKind::Module,
        &RenderOptions::default(),
    )
}

/// Render a class descriptor into a complete HTML page.
///
/// Class pages list scalar members by name only.
pub fn render_class(descriptor: &ObjectDescriptor, title: &str) -> Result<String> {
    reflect_to_html(
        descriptor,
        title,
        DescriptorKind::Class,
        &RenderOptions::default(),
    )
}

/// Builder for compiling markup and rendering descriptors.
///
/// # Example
///
/// ```
/// use helpmark::Helpmark;
///
/// let html = Helpmark::new()
///     .with_line_separator("\n")
///     .compile("Index", "%->%intro:Introduction")?;
/// assert!(html.contains("#intro"));
/// # Ok::<(), helpmark::Error>(())
/// ```
pub struct Helpmark {
    options: RenderOptions,
}

impl Helpmark {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Set a replacement page template.
    ///
    /// The template must keep the `{{title}}`/`{{body}}` slots and the
    /// stylesheet class names emitted markup refers to.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.options = self.options.with_template(template);
        self
    }

    /// Set the docstring line separator.
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.options = self.options.with_line_separator(separator);
        self
    }

    /// Compile raw marker text into a complete HTML page.
    pub fn compile(&self, title: &str, body: &str) -> Result<String> {
        MarkerScanner::new(self.options.clone()).compile(title, body)
    }

    /// Compile a markup document into a complete HTML page.
    pub fn compile_document(&self, document: &MarkupDocument) -> Result<String> {
        self.compile(&document.title, &document.body)
    }

    /// Render a descriptor into a complete HTML page.
    pub fn render(
        &self,
        descriptor: &ObjectDescriptor,
        title: &str,
        kind: DescriptorKind,
    ) -> Result<String> {
        ReflectionWalker::new(self.options.clone()).render(descriptor, title, kind)
    }

    /// The options this builder will render with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Default for Helpmark {
    fn default() -> Self {
        Self::new()
    }
}
