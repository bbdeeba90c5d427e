//! JSON export for documents and descriptors.

use crate::error::{Error, Result};
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document or descriptor to JSON.
///
/// Lets hosts persist descriptors and feed them back through the serde
/// `Deserialize` impls later.
pub fn to_json<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemberDescriptor, ObjectDescriptor};

    #[test]
    fn test_to_json_pretty() {
        let desc = ObjectDescriptor::new("math")
            .with_member(MemberDescriptor::function("add", &["a", "b"], None));
        let json = to_json(&desc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("math"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let desc = ObjectDescriptor::new("math");
        let json = to_json(&desc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }
}
