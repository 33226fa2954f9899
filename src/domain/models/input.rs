//! Boundary coercion of loosely typed request fields.
//!
//! Request bodies arrive as arbitrary JSON. Before any engine logic runs, the
//! `text` field is turned into a guaranteed string here: strings pass through,
//! truthy scalars are stringified and everything else becomes empty.

use serde_json::Value;

/// Essay text after boundary coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EssayInput {
    text: String,
}

impl EssayInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Coerce a single JSON field.
    pub fn from_value(value: Option<&Value>) -> Self {
        let text = match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
            _ => String::new(),
        };
        Self { text }
    }

    /// Coerce the first non-empty field among `candidates`.
    ///
    /// Used for the `text` / `essay` alias pair.
    pub fn first_of(candidates: &[Option<&Value>]) -> Self {
        candidates
            .iter()
            .map(|value| Self::from_value(*value))
            .find(|input| !input.text.is_empty())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// True when the text holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_passes_through() {
        let value = json!("  My essay. ");
        assert_eq!(EssayInput::from_value(Some(&value)).as_str(), "  My essay. ");
    }

    #[test]
    fn test_missing_and_null_become_empty() {
        assert_eq!(EssayInput::from_value(None).as_str(), "");
        assert_eq!(EssayInput::from_value(Some(&Value::Null)).as_str(), "");
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert_eq!(EssayInput::from_value(Some(&json!(42))).as_str(), "42");
        assert_eq!(EssayInput::from_value(Some(&json!(1.5))).as_str(), "1.5");
        assert_eq!(EssayInput::from_value(Some(&json!(true))).as_str(), "true");
    }

    #[test]
    fn test_falsy_scalars_become_empty() {
        assert_eq!(EssayInput::from_value(Some(&json!(0))).as_str(), "");
        assert_eq!(EssayInput::from_value(Some(&json!(false))).as_str(), "");
    }

    #[test]
    fn test_structures_become_empty() {
        assert_eq!(EssayInput::from_value(Some(&json!(["a", "b"]))).as_str(), "");
        assert_eq!(EssayInput::from_value(Some(&json!({"a": 1}))).as_str(), "");
    }

    #[test]
    fn test_first_of_prefers_text_then_alias() {
        let text = json!("primary");
        let essay = json!("alias");
        assert_eq!(EssayInput::first_of(&[Some(&text), Some(&essay)]).as_str(), "primary");
        assert_eq!(EssayInput::first_of(&[None, Some(&essay)]).as_str(), "alias");
        assert_eq!(EssayInput::first_of(&[Some(&json!("")), Some(&essay)]).as_str(), "alias");
        assert!(EssayInput::first_of(&[None, None]).is_blank());
    }
}
