//! Reflective documentation renderer.
//!
//! Walks an [`ObjectDescriptor`] and emits the same page style the marker
//! scanner produces, formatting each member's documentation with the
//! docstring formatter. The walker consumes inert descriptors only; any
//! live-object introspection happens on the host side, ahead of rendering.

use crate::error::Result;
use crate::model::{DescriptorKind, MemberKind, ObjectDescriptor};

use super::{help_text, template, RenderOptions};

/// Convert a descriptor to a full HTML page.
pub fn reflect_to_html(
    descriptor: &ObjectDescriptor,
    title: &str,
    kind: DescriptorKind,
    options: &RenderOptions,
) -> Result<String> {
    ReflectionWalker::new(options.clone()).render(descriptor, title, kind)
}

/// Renderer walking object descriptors.
///
/// Members render in descriptor order, duplicates included. Scalar members
/// (data values and properties) accumulate into a trailing section whose
/// shape depends on the descriptor kind: module pages get a
/// name/value/type table, class pages a name-only property list.
pub struct ReflectionWalker {
    options: RenderOptions,
}

impl ReflectionWalker {
    /// Create a new walker.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a descriptor as a complete HTML page.
    pub fn render(
        &self,
        descriptor: &ObjectDescriptor,
        title: &str,
        kind: DescriptorKind,
    ) -> Result<String> {
        let fragment = self.render_fragment(descriptor, title, kind, false)?;
        Ok(template::render_page(title, &fragment, &self.options))
    }

    /// Render a descriptor as an HTML fragment.
    ///
    /// `nested` marks a class spliced inline into its module's listing: it
    /// gets its own sub-heading and no member index, and the enclosing
    /// page template is suppressed.
    pub fn render_fragment(
        &self,
        descriptor: &ObjectDescriptor,
        title: &str,
        kind: DescriptorKind,
        nested: bool,
    ) -> Result<String> {
        descriptor.validate()?;
        log::debug!(
            "rendering descriptor '{}' ({} members)",
            descriptor.name,
            descriptor.member_count()
        );

        let mut html = String::new();
        if nested {
            html.push_str(&format!(
                "<a name=\"{title}\"></a><h2>class {title}</h2>\n"
            ));
        }

        if let Some(ref version) = descriptor.version {
            html.push_str(&format!("<b>Version:</b> {version}<br>\n"));
        }
        if let Some(ref credits) = descriptor.credits {
            html.push_str(&format!("<b>Credits:</b> {credits}<br>\n"));
        }
        if let Some(ref docstring) = descriptor.docstring {
            // raw docstring, shown verbatim
            html.push_str(&format!("<pre>{docstring}</pre>\n"));
        }

        if !nested {
            html.push_str(&member_index(descriptor));
        }

        // (name, value/type payload); properties carry no payload
        let mut scalars: Vec<(&str, Option<(&str, &str)>)> = Vec::new();

        for member in &descriptor.members {
            match &member.kind {
                MemberKind::Function { params, docstring } => {
                    html.push_str(&format!(
                        "<a name=\"{0}\"></a><div class=\"p_wrapper\"><p><b>function {0} \
                         (args={1})</b></p></div>\n",
                        member.name,
                        format_params(params)
                    ));
                    if let Some(doc) = docstring {
                        html.push_str(&help_text::format(doc, &self.options.line_separator));
                    }
                }
                MemberKind::Type { inner } => {
                    let nested_html =
                        self.render_fragment(inner, &member.name, DescriptorKind::Class, true)?;
                    html.push_str(&nested_html);
                }
                MemberKind::DataValue { value, type_label } => {
                    scalars.push((
                        member.name.as_str(),
                        Some((value.as_str(), type_label.as_str())),
                    ));
                }
                MemberKind::PropertyValue => {
                    scalars.push((member.name.as_str(), None));
                }
            }
        }

        match kind {
            DescriptorKind::Module => html.push_str(&module_summary(&scalars)),
            DescriptorKind::Class => html.push_str(&class_summary(&scalars)),
        }

        Ok(html)
    }
}

/// Anchor index over the descriptor's members, shown on full pages.
fn member_index(descriptor: &ObjectDescriptor) -> String {
    if descriptor.members.is_empty() {
        return String::new();
    }
    let mut html = String::from("<div class=\"sidebar\"><ul>\n");
    for member in &descriptor.members {
        html.push_str(&format!(
            "<li class=\"class2\"><a href=\"#{0}\">{0}</a></li>\n",
            member.name
        ));
    }
    html.push_str("</ul></div>\n");
    html
}

/// Format parameter names as a quoted list: `['a', 'b']`.
fn format_params(params: &[String]) -> String {
    let quoted: Vec<String> = params.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Trailing name/value/type table, module pages only.
fn module_summary(scalars: &[(&str, Option<(&str, &str)>)]) -> String {
    if scalars.is_empty() {
        return String::new();
    }
    let mut html = String::from(
        "<h2>Data</h2>\n<table class=\"inside\">\n<tr><th>name</th><th>value</th><th>type</th></tr>\n",
    );
    for (name, payload) in scalars {
        let (value, type_label) = payload.unwrap_or(("", ""));
        html.push_str(&format!(
            "<tr><td><a name=\"{name}\">{name}</a></td><td>{value}</td><td>{type_label}</td></tr>\n"
        ));
    }
    html.push_str("</table>\n");
    html
}

/// Trailing name-only property list, class pages only.
fn class_summary(scalars: &[(&str, Option<(&str, &str)>)]) -> String {
    if scalars.is_empty() {
        return String::new();
    }
    let mut html =
        String::from("<h3>Properties</h3>\n<div class=\"inside\"><div class=\"sp_bullets\">\n");
    for (name, _) in scalars {
        html.push_str(&format!(
            "<li><p><a name=\"{name}\">{name}</a></li></p>\n"
        ));
    }
    html.push_str("</div></div>\n");
    html
}
