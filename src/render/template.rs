//! The static HTML page template.
//!
//! The inline stylesheet defines the class names emitted markup refers to
//! (`p_wrapper`, `sp_bullets`, `class1`, `class2`, `sidebar`, `inside`).
//! A replacement template supplied through
//! [`RenderOptions::with_template`](super::RenderOptions::with_template)
//! must keep those names along with the `{{title}}` and `{{body}}` slots.

use super::RenderOptions;

/// Title placeholder in page templates.
pub const TITLE_SLOT: &str = "{{title}}";

/// Body placeholder in page templates.
pub const BODY_SLOT: &str = "{{body}}";

/// The built-in page template.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>{{title}}</title>
<style>
body { font-family: sans-serif; margin: 0; background: #ffffff; }
h1 { background: #e8e8e0; padding: 6px 12px; margin-top: 0; }
pre { background: #f6f6f2; border: 1px solid #d0d0c8; padding: 4px; }
.sidebar { float: right; width: 16em; background: #f0f0ee; border: 1px solid #d0d0c8; padding: 6px; }
.inside { margin-left: 1em; padding: 2px; }
.p_wrapper { margin: 4px 12px; }
.p_wrapper p { margin: 2px 0; }
.sp_bullets { list-style: disc; margin-left: 1.5em; }
.class1 { font-size: 110%; font-weight: bold; list-style: none; }
.class2 { list-style: square; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<div class="inside">
{{body}}</div>
</body>
</html>
"#;

/// Substitute title and body into the page template.
///
/// Uses the caller-supplied template when one is set on `options`.
pub fn render_page(title: &str, body: &str, options: &RenderOptions) -> String {
    let template = options.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    template.replace(TITLE_SLOT, title).replace(BODY_SLOT, body)
}
