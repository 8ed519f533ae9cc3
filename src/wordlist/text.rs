//! Parser for plain-text word lists.
//!
//! # Format
//! One record per line, three comma-separated fields:
//! ```text
//! dog,an animal,pies
//! cat,,kot
//! hello,"greeting, informal",cześć
//! ```
//!
//! A field starting with `"` runs up to the next `"`; the closing quote and the single
//! character after it are consumed, whatever that character is. Any other field runs up
//! to the next comma. Blank lines are skipped.

use crate::error::ParseError;
use crate::models::WordEntry;
use tracing::warn;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const FIELD_COUNT: usize = 3;

/// How a field read stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldEnd {
    Delimiter,
    EndOfLine,
}

/// Parse a whole word list, one entry per non-blank line.
pub fn parse_words(content: &str) -> Result<Vec<WordEntry>, ParseError> {
    let mut words = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = parse_row(line, idx + 1).inspect_err(|e| warn!("{e}"))?;
        words.push(entry);
    }

    if words.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(words)
}

/// Split one line into a word entry. `line` is the 1-based line number used in errors.
///
/// Stricter than the bare quoting rule: anything left on the line after the third
/// field (`a,b,"c"x`, `a,"b" ,c`, a trailing comma) is `TooManyFields`, and a line
/// that ends before the third field is `TooFewFields`, instead of padding or
/// dropping fields.
pub fn parse_row(row: &str, line: usize) -> Result<WordEntry, ParseError> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut rest = row;

    loop {
        let (field, tail, end) = read_field(rest);
        fields.push(field);
        rest = tail;

        match end {
            FieldEnd::EndOfLine if fields.len() < FIELD_COUNT => {
                return Err(ParseError::TooFewFields {
                    line,
                    row: row.to_string(),
                });
            }
            FieldEnd::EndOfLine => break,
            FieldEnd::Delimiter if fields.len() == FIELD_COUNT => {
                return Err(ParseError::TooManyFields {
                    line,
                    row: row.to_string(),
                });
            }
            FieldEnd::Delimiter => {}
        }
    }

    Ok(WordEntry::new(fields[0], fields[1], fields[2]))
}

/// Returns the field, the unread remainder of the line, and how the field ended.
fn read_field(rest: &str) -> (&str, &str, FieldEnd) {
    if let Some(quoted) = rest.strip_prefix(QUOTE) {
        let Some(end) = quoted.find(QUOTE) else {
            return (quoted, "", FieldEnd::EndOfLine);
        };
        let mut after = quoted[end + QUOTE.len_utf8()..].chars();
        match after.next() {
            Some(_) => (&quoted[..end], after.as_str(), FieldEnd::Delimiter),
            None => (&quoted[..end], "", FieldEnd::EndOfLine),
        }
    } else {
        match rest.find(DELIMITER) {
            Some(end) => (
                &rest[..end],
                &rest[end + DELIMITER.len_utf8()..],
                FieldEnd::Delimiter,
            ),
            None => (rest, "", FieldEnd::EndOfLine),
        }
    }
}

/// Render entries back into the plain-text format.
///
/// Fields containing a comma or starting with a quote are wrapped in quotes. Entries
/// that the format can't hold (a line break anywhere, or a quote inside a field that
/// needs wrapping) are rejected instead of being written as lines that would not parse.
pub fn format_words(words: &[WordEntry]) -> Result<String, ParseError> {
    let mut lines = Vec::with_capacity(words.len());

    for entry in words {
        let mut fields = Vec::with_capacity(FIELD_COUNT);
        for field in [&entry.word, &entry.description, &entry.translation] {
            let formatted = format_field(field).ok_or_else(|| ParseError::Unrepresentable {
                word: entry.word.clone(),
            })?;
            fields.push(formatted);
        }
        lines.push(fields.join(","));
    }

    Ok(lines.join("\n"))
}

fn format_field(field: &str) -> Option<String> {
    if field.contains(['\n', '\r']) {
        return None;
    }
    if field.contains(DELIMITER) || field.starts_with(QUOTE) {
        if field.contains(QUOTE) {
            return None;
        }
        return Some(format!("{QUOTE}{field}{QUOTE}"));
    }
    Some(field.to_string())
}
