use std::path::Path;

/// Filter for the open/save dialogs.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
pub fn text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*.*"].join("\n")
}

/// Append `.{ext}` to a chosen save path that has no extension.
pub fn with_default_extension(path: &str, ext: &str) -> String {
    if Path::new(path).extension().is_some() {
        path.to_string()
    } else {
        format!("{}.{}", path, ext)
    }
}
