//! Error types for the helpmark library.

use thiserror::Error;

/// Result type alias for helpmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while compiling markup or rendering
/// descriptors.
///
/// The grammar is deliberately lenient: unrecognized lines pass through
/// verbatim and block nesting is never checked. Only two kinds of input are
/// rejected, an inline marker missing its required separator and a
/// structurally incomplete descriptor member.
#[derive(Error, Debug)]
pub enum Error {
    /// An inline marker is missing its required separator.
    #[error("malformed {marker} marker in line: {line}")]
    MalformedMarker {
        /// Which marker failed to parse (e.g. "inline-color").
        marker: &'static str,
        /// The offending input line.
        line: String,
    },

    /// A descriptor member is structurally incomplete.
    #[error("descriptor member is missing a name: {0}")]
    MissingMember(String),

    /// Error serializing a value on the JSON export path.
    #[error("rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Render the error as an inline red HTML fragment.
    ///
    /// Hosts display this in place of the document so a failed compile
    /// never blanks the viewer.
    pub fn to_inline_html(&self) -> String {
        format!("<font color=\"red\"><b>{}</b></font>", self)
    }
}
