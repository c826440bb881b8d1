//! External editor integration for page bodies.
//!
//! The body markup is written to a scratch `.html` file, the user's editor is opened on it,
//! and whatever is left in the file afterwards becomes the new body.

use crate::error::{PagepadError, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(PagepadError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(editor.as_str());

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| PagepadError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(PagepadError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(PagepadError::Io)
}

/// Opens an editor on `markup` and returns the edited body.
///
/// The scratch file is created exclusively with a random name and removed when dropped.
pub fn edit_markup(markup: &str) -> Result<String> {
    let mut temp_file = tempfile::Builder::new()
        .prefix("pagepad_edit_")
        .suffix(".html")
        .tempfile()
        .map_err(PagepadError::Io)?;

    temp_file
        .write_all(markup.as_bytes())
        .map_err(PagepadError::Io)?;
    temp_file.flush().map_err(PagepadError::Io)?;
    let edited = open_in_editor(temp_file.path())?;

    Ok(normalize_edited(&edited))
}

/// Editors like to append a final newline; the body should not grow one per edit.
pub fn normalize_edited(buffer: &str) -> String {
    buffer.trim_end_matches(['\n', '\r']).to_string()
}
