//! Line scanner turning raw marker text into an HTML page.

use crate::error::{Error, Result};
use crate::model::MarkupDocument;
use crate::render::{template, RenderOptions};

use super::rules::{MarkerAction, MarkerRule, MARKER_TABLE};

/// Compile a markup document to a full HTML page.
pub fn to_html(doc: &MarkupDocument, options: &RenderOptions) -> Result<String> {
    MarkerScanner::new(options.clone()).compile(&doc.title, &doc.body)
}

/// Line-oriented markup compiler.
///
/// Each input line is checked against [`MARKER_TABLE`] in order. Checks are
/// independent, not mutually exclusive: a line can trigger several
/// emissions, one per matching rule. A line matching no rule is emitted
/// verbatim with one trailing space so browsers can word-wrap.
pub struct MarkerScanner {
    options: RenderOptions,
}

impl MarkerScanner {
    /// Create a new scanner.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Compile raw marker text into a complete HTML page.
    pub fn compile(&self, title: &str, body: &str) -> Result<String> {
        let fragment = self.compile_fragment(body)?;
        Ok(template::render_page(title, &fragment, &self.options))
    }

    /// Compile raw marker text into the body fragment only.
    pub fn compile_fragment(&self, body: &str) -> Result<String> {
        if body.is_empty() {
            return Ok(String::new());
        }

        let mut html = String::with_capacity(body.len() * 2);
        for line in body.split('\n') {
            let rendered = self.scan_line(line)?;
            html.push_str(&rendered);
            html.push('\n');
        }
        Ok(html)
    }

    fn scan_line(&self, line: &str) -> Result<String> {
        let mut work = line.to_string();
        let mut matched = false;

        for rule in MARKER_TABLE {
            if let Some(rewritten) = apply_rule(&work, rule)? {
                work = rewritten;
                matched = true;
            }
        }

        if !matched {
            // trailing space enables browser word-wrap across joined lines
            work.push(' ');
        }
        log::trace!("scan {:?} -> {:?}", line, work);
        Ok(work)
    }
}

/// Apply one rule to one line, returning the rewritten line on a match.
fn apply_rule(line: &str, rule: &MarkerRule) -> Result<Option<String>> {
    let at = match line.find(rule.token) {
        Some(at) => at,
        None => return Ok(None),
    };
    let before = &line[..at];
    let rest = &line[at + rule.token.len()..];

    let rewritten = match rule.action {
        MarkerAction::Swap(html) => line.replace(rule.token, html),
        MarkerAction::ListItem => format!("{before}<li><p>{rest}</li></p>"),
        MarkerAction::TitleItem => {
            format!("{before}<li class=\"class1\"><a name=\"{rest}\"><h2>{rest}</h2></a></li>")
        }
        MarkerAction::Anchor => format!("{before}<a name=\"{rest}\"></a>"),
        MarkerAction::InlineColor => {
            let (rgb, text) = rest.split_once("::").ok_or_else(|| Error::MalformedMarker {
                marker: "inline-color",
                line: line.to_string(),
            })?;
            format!("{before}<font color={rgb}>{text}</font>")
        }
        MarkerAction::InlineBold => format!("{before}<b>{rest}</b>"),
        MarkerAction::CrossReference => {
            let (target, label) = rest.split_once(':').ok_or_else(|| Error::MalformedMarker {
                marker: "cross-reference",
                line: line.to_string(),
            })?;
            format!("{before}<li class=\"class2\"><a href=\"#{target}\">{label}</a></li>")
        }
    };
    Ok(Some(rewritten))
}
