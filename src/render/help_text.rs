//! Secondary docstring formatter used by the reflection walker.
//!
//! Free-text docstrings use underlined headings, `>>>` prompt blocks,
//! indented key/value pairs, and `*` bullets. The formatter runs with one
//! line of lookahead plus a single in-code-block flag, and never rejects
//! input; whatever it does not recognize passes through verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

static DASH_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{3,}\s*$").unwrap());
static EQUALS_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^={3,}\s*$").unwrap());

/// Interpreter prompt opening a code block, in escaped form.
const PROMPT: &str = "&gt;&gt;&gt;";

/// Continuation marker keeping a code block open.
const CONTINUATION: &str = "...";

/// Format a docstring into an HTML fragment.
///
/// `line_separator` splits `text` into lines. Every line contributes one
/// fragment ending in `<br>\n`; heading underlines are consumed by the
/// line above them. The stream may end inside a code block, in which case
/// the `<pre>` is left open.
pub fn format(text: &str, line_separator: &str) -> String {
    // `>` is escaped before any branch test, so prompt detection matches
    // the escaped form.
    let escaped = text.replace('>', "&gt;");
    let lines: Vec<&str> = escaped.split(line_separator).collect();

    let mut html = String::with_capacity(escaped.len() * 2);
    let mut in_code = false;
    let mut skip = false;

    for (i, line) in lines.iter().enumerate() {
        if skip {
            skip = false;
            continue;
        }
        let next = lines.get(i + 1).copied().unwrap_or("");

        // Code block transitions run independently of the line branches.
        if !in_code && line.starts_with(PROMPT) {
            html.push_str("<pre>");
            in_code = true;
        } else if in_code && !line.starts_with(PROMPT) && !line.starts_with(CONTINUATION) {
            html.push_str("</pre>");
            in_code = false;
        }

        if DASH_RULE.is_match(next) {
            html.push_str("<h3>");
            html.push_str(line);
            html.push_str("</h3>");
            skip = true;
        } else if EQUALS_RULE.is_match(next) {
            html.push_str("<h2>");
            html.push_str(line);
            html.push_str("</h2>");
            skip = true;
        } else if starts_indented(next) && line.contains(':') {
            if let Some((label, value)) = line.split_once(':') {
                html.push_str(&format!("<b>{label}</b>:<em>{value}</em>"));
            }
        } else if line.starts_with('*') {
            // the leading `*` stays in the text
            html.push_str(&format!("<li>{line}</li>"));
        } else if starts_indented(line) {
            html.push_str(&format!("&nbsp;&nbsp;<em>{line}</em>"));
        } else {
            html.push_str(line);
        }
        html.push_str("<br>\n");
    }
    html
}

fn starts_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}
