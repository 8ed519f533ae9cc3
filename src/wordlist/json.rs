//! JSON import/export module for word lists.
//! Provides functionality to save and load WordList structures to/from JSON files.

use crate::error::Result;
use crate::models::WordEntry;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// A named word list as stored in JSON files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub name: String,
    pub words: Vec<WordEntry>,
}

/// Exports a word list to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(list: &WordList, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(list)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    info!(name = %list.name, path = %path.display(), words = list.words.len(), "word list exported");
    Ok(())
}

/// Imports a word list from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<WordList> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let list: WordList = serde_json::from_str(&contents)?;

    info!(name = %list.name, path = %path.display(), words = list.words.len(), "word list imported");
    Ok(list)
}
