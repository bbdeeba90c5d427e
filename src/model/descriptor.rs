//! Descriptor types describing a reflect-able object's shape.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which rendering path a descriptor takes.
///
/// Module and class pages differ in how scalar members are summarized:
/// module pages append a name/value/type table, class pages list property
/// names only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DescriptorKind {
    /// Module rendering with the trailing value/type summary table.
    #[default]
    Module,
    /// Class rendering with the name-only property list.
    Class,
}

/// A language-neutral description of a module, class, or function.
///
/// Members are rendered in the order they appear here; duplicate names are
/// kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    /// Object name
    pub name: String,

    /// Documentation text, if any
    pub docstring: Option<String>,

    /// Version string surfaced above the docstring
    pub version: Option<String>,

    /// Credits surfaced above the docstring
    pub credits: Option<String>,

    /// Members in declaration order
    pub members: Vec<MemberDescriptor>,
}

impl ObjectDescriptor {
    /// Create a new descriptor with no documentation or members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: None,
            version: None,
            credits: None,
            members: Vec::new(),
        }
    }

    /// Set the docstring.
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Set the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the credits string.
    pub fn with_credits(mut self, credits: impl Into<String>) -> Self {
        self.credits = Some(credits.into());
        self
    }

    /// Append a member, keeping declaration order.
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Append a member in place.
    pub fn add_member(&mut self, member: MemberDescriptor) {
        self.members.push(member);
    }

    /// Check if the descriptor has any members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of direct members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Check that every function member carries a name, recursing into
    /// nested types.
    ///
    /// Rendering calls this before emitting anything so an incomplete
    /// descriptor fails fast instead of producing partial HTML.
    pub fn validate(&self) -> Result<()> {
        for member in &self.members {
            match &member.kind {
                MemberKind::Function { .. } if member.name.is_empty() => {
                    return Err(Error::MissingMember(format!(
                        "unnamed function member in '{}'",
                        self.name
                    )));
                }
                MemberKind::Type { inner } => inner.validate()?,
                _ => {}
            }
        }
        Ok(())
    }
}

/// A single member of an [`ObjectDescriptor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name
    pub name: String,

    /// Member classification and payload
    pub kind: MemberKind,
}

impl MemberDescriptor {
    /// A function member with its parameter names in declaration order.
    pub fn function(name: impl Into<String>, params: &[&str], docstring: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Function {
                params: params.iter().map(|p| (*p).to_string()).collect(),
                docstring: docstring.map(str::to_string),
            },
        }
    }

    /// A nested type member carrying its own descriptor.
    pub fn nested(name: impl Into<String>, inner: ObjectDescriptor) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Type { inner },
        }
    }

    /// A data member with a renderable value and a type label.
    pub fn data(
        name: impl Into<String>,
        value: impl Into<String>,
        type_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::DataValue {
                value: value.into(),
                type_label: type_label.into(),
            },
        }
    }

    /// A property member, rendered by name only.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::PropertyValue,
        }
    }
}

/// Classification of a descriptor member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MemberKind {
    /// A callable with ordered parameter names and optional documentation.
    Function {
        /// Parameter names in declaration order
        params: Vec<String>,
        /// Documentation text, if any
        docstring: Option<String>,
    },

    /// A nested type rendered recursively as a class.
    Type {
        /// Descriptor of the nested type
        inner: ObjectDescriptor,
    },

    /// A scalar with a renderable value and a type label.
    DataValue {
        /// Rendered value
        value: String,
        /// Type label shown next to the value
        type_label: String,
    },

    /// A property, rendered by name only.
    PropertyValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let desc = ObjectDescriptor::new("math")
            .with_docstring("Math helpers")
            .with_version("1.2")
            .with_member(MemberDescriptor::function("add", &["a", "b"], None))
            .with_member(MemberDescriptor::data("PI", "3.14159", "float"));

        assert_eq!(desc.name, "math");
        assert_eq!(desc.member_count(), 2);
        assert_eq!(desc.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn test_validate_accepts_named_members() {
        let desc = ObjectDescriptor::new("m")
            .with_member(MemberDescriptor::function("f", &[], Some("doc")));
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unnamed_function() {
        let desc =
            ObjectDescriptor::new("m").with_member(MemberDescriptor::function("", &["x"], None));
        assert!(matches!(desc.validate(), Err(Error::MissingMember(_))));
    }

    #[test]
    fn test_validate_recurses_into_nested_types() {
        let inner =
            ObjectDescriptor::new("Inner").with_member(MemberDescriptor::function("", &[], None));
        let outer = ObjectDescriptor::new("outer").with_member(MemberDescriptor::nested(
            "Inner", inner,
        ));
        assert!(outer.validate().is_err());
    }

    #[test]
    fn test_unnamed_property_is_accepted() {
        // Only function members are required to carry a name.
        let desc = ObjectDescriptor::new("m").with_member(MemberDescriptor::property(""));
        assert!(desc.validate().is_ok());
    }
}
