//! WordEntry is a triple <word, description, translation>. Only text is used in all three fields
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub description: String,
    pub translation: String,
}

impl WordEntry {
    pub fn new(
        word: impl Into<String>,
        description: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            description: description.into(),
            translation: translation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_entry_creation() {
        let entry = WordEntry::new("hello", "greeting", "cześć");

        assert_eq!(entry.word, "hello");
        assert_eq!(entry.description, "greeting");
        assert_eq!(entry.translation, "cześć");
    }

    #[test]
    fn test_word_entry_description_defaults_to_empty() {
        let entry: WordEntry =
            serde_json::from_str(r#"{"word": "dog", "translation": "pies"}"#).unwrap();

        assert_eq!(entry.description, "");
        assert_eq!(entry.translation, "pies");
    }
}
