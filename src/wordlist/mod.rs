//! Loading and saving word lists in the plain-text and JSON formats.

pub mod json;
pub mod text;

pub use json::{WordList, export_json_to_path, import_json};
pub use text::{format_words, parse_row, parse_words};

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a word list file as editable plain text.
///
/// `.json` files go through the JSON importer and are rendered back into the text
/// format; a JSON entry the text format can't hold is an error. Anything else is
/// read as is.
pub fn read_word_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if is_json(path) {
        let list = import_json(path)?;
        return Ok(format_words(&list.words)?);
    }

    let content = fs::read_to_string(path)?;
    info!(path = %path.display(), lines = content.lines().count(), "word file read");
    Ok(content)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::models::WordEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "dog,,pies\ncat,,kot").unwrap();

        assert_eq!(read_word_file(&path).unwrap(), "dog,,pies\ncat,,kot");
    }

    #[test]
    fn test_read_json_file_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.JSON");
        let list = WordList {
            name: "Animals".to_string(),
            words: vec![
                WordEntry::new("dog", "", "pies"),
                WordEntry::new("cat", "small, furry", "kot"),
            ],
        };
        export_json_to_path(&list, &path).unwrap();

        let text = read_word_file(&path).unwrap();

        assert_eq!(text, "dog,,pies\ncat,\"small, furry\",kot");
        assert_eq!(parse_words(&text).unwrap(), list.words);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(read_word_file(dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_read_json_file_with_unwritable_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let list = WordList {
            name: "Quotes".to_string(),
            words: vec![
                WordEntry::new("w", "he said \"x\", then", "t"),
                WordEntry::new("dog", "", "pies"),
            ],
        };
        export_json_to_path(&list, &path).unwrap();

        let result = read_word_file(&path);

        assert!(matches!(
            result,
            Err(crate::error::QuizError::Parse(ParseError::Unrepresentable { .. }))
        ));
    }
}
