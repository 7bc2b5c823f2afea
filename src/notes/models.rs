//! Note models and the name-to-file mapping

use serde::{Deserialize, Serialize};

/// Suffix appended to a note name to form its file name in the store root
pub const NOTE_EXTENSION: &str = ".txt";

/// A named unit of plain-text content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub text: String,
}

impl Note {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Returns true if `name` maps to an entry directly inside the store root.
///
/// Rejects empty names, `.` and `..`, and anything carrying a path separator
/// or NUL byte.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// File name for a note: `name` + `.txt`
pub fn file_name_for(name: &str) -> String {
    format!("{}{}", name, NOTE_EXTENSION)
}

/// Inverse of [`file_name_for`]. Returns `None` for files that are not notes.
pub fn name_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(NOTE_EXTENSION)
        .filter(|name| is_valid_name(name))
}
