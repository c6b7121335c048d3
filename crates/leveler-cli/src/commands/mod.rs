//! CLI command handlers.

pub mod add;
pub mod history;
pub mod init;
pub mod record;
pub mod run;
pub mod select;
pub mod show;

use serde_json::Value;

/// Render a raw cell for terminal output. Null prints as `-`.
pub(crate) fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_render_without_json_quoting() {
        assert_eq!(display_cell(&json!(null)), "-");
        assert_eq!(display_cell(&json!("abc")), "abc");
        assert_eq!(display_cell(&json!(103)), "103");
        assert_eq!(display_cell(&json!(2.5)), "2.5");
        assert_eq!(display_cell(&json!({"value": 1})), r#"{"value":1}"#);
    }
}
