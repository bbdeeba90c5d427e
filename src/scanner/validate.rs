//! Opt-in structural checks for markup bodies.
//!
//! The compiler never validates block nesting: unmatched markers pass
//! through and yield unmatched HTML tags. Hosts that want a lint step can
//! run [`check_balance`] separately before compiling; its findings never
//! affect compilation.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Output will render, possibly oddly.
    Warning,
    /// Output is structurally broken (e.g. a close without an open).
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding from a validation pass.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Machine-readable code (e.g. "helpmark::balance::unclosed").
    pub code: &'static str,

    /// Human-readable message.
    pub message: String,

    /// 1-indexed line the finding anchors to.
    pub line: usize,
}

/// Findings collected by a validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// True when no findings were recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All findings, in discovery order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True when no findings were recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Block marker pairs checked for balance.
const BLOCK_PAIRS: &[(&str, &str, &str)] = &[
    ("++<", ">++", "paragraph"),
    ("==<", ">==", "list"),
    ("%%<", ">%%", "code"),
];

/// Check open/close balance of the paragraph, list, and code markers.
///
/// Reports a warning per marker kind left open at end of input and an
/// error per close marker that has no matching open. Within one line,
/// opens are counted before closes.
pub fn check_balance(body: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (open, close, kind) in BLOCK_PAIRS {
        let mut depth: i64 = 0;
        let mut first_open_line = 0usize;

        for (i, line) in body.split('\n').enumerate() {
            let line_no = i + 1;
            let opens = line.matches(open).count() as i64;
            let closes = line.matches(close).count() as i64;

            if depth == 0 && opens > 0 {
                first_open_line = line_no;
            }
            depth += opens;

            if closes > depth {
                report.push(Diagnostic {
                    severity: Severity::Error,
                    code: "helpmark::balance::unopened",
                    message: format!("{kind} close marker without a matching open"),
                    line: line_no,
                });
                depth = 0;
            } else {
                depth -= closes;
            }
        }

        if depth > 0 {
            report.push(Diagnostic {
                severity: Severity::Warning,
                code: "helpmark::balance::unclosed",
                message: format!("{depth} unclosed {kind} marker(s)"),
                line: first_open_line,
            });
        }
    }

    if !report.is_clean() {
        log::debug!("balance check: {} finding(s)", report.len());
    }
    report
}
