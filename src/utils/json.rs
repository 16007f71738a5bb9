use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Renders a value as pretty JSON with 4-space indentation. serde_json
/// leaves non-ASCII characters unescaped, which the downstream consumer
/// expects.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::Internal(format!("Invalid UTF-8 in JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indents_with_four_spaces() {
        let rendered = to_pretty_json(&json!({"nombre": "Warehouse Associate"})).unwrap();
        assert_eq!(rendered, "{\n    \"nombre\": \"Warehouse Associate\"\n}");
    }

    #[test]
    fn keeps_non_ascii_literal() {
        let rendered = to_pretty_json(&json!({"pregunta": "¿Cuál es el horario?"})).unwrap();
        assert!(rendered.contains("¿Cuál es el horario?"));
        assert!(!rendered.contains("\\u"));
    }
}
