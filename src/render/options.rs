//! Rendering options.

/// Options shared by the markup compiler and the reflection walker.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Replacement page template.
    ///
    /// Must keep the `{{title}}`/`{{body}}` slots and the stylesheet class
    /// names emitted markup refers to (see [`super::template`]).
    pub template: Option<String>,

    /// Separator splitting docstrings into lines.
    pub line_separator: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a replacement page template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the docstring line separator.
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template: None,
            line_separator: "\n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_template("<title>{{title}}</title>{{body}}")
            .with_line_separator("\r\n");

        assert!(options.template.is_some());
        assert_eq!(options.line_separator, "\r\n");
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.template.is_none());
        assert_eq!(options.line_separator, "\n");
    }
}
