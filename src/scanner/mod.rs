//! Marker scanning module: compiles raw marker text into HTML.

mod marker_scanner;
mod rules;
mod validate;

pub use marker_scanner::{to_html, MarkerScanner};
pub use rules::{MarkerAction, MarkerRule, MARKER_TABLE};
pub use validate::{check_balance, Diagnostic, Severity, ValidationReport};
