use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::services::file_filters::{text_files_filter, with_default_extension};

fn run_chooser(mut nfc: NativeFileChooser) -> Option<String> {
    nfc.set_filter(&text_files_filter());
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    run_chooser(nfc)
}

pub fn native_save_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save As");
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    run_chooser(nfc).map(|path| with_default_extension(&path, "txt"))
}
