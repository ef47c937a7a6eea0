use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

pub const APP_NAME: &str = "MultiPad";

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Window title: a leading `*` marks unsaved changes.
pub fn window_title(file_path: Option<&str>, dirty: bool) -> String {
    let name = file_path
        .map(extract_filename)
        .unwrap_or_else(|| "Untitled".to_string());
    let prefix = if dirty { "*" } else { "" };
    format!("{}{} - {}", prefix, name, APP_NAME)
}

pub fn status_text(font_family: &str, font_size: u32, text: &str) -> String {
    format!(
        "Font: {} {}    |    Characters: {}",
        font_family,
        font_size,
        text.chars().count()
    )
}

/// Read a whole file as UTF-8 text.
pub fn read_text_file(path: &str) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Replace a file's contents with `text`, byte for byte.
pub fn write_text_file(path: &str, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}
