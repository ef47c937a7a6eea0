use fltk::dialog;

use crate::app::domain::color::Rgb;
use crate::app::infrastructure::host::SavePrompt;

pub fn ask_unsaved_changes() -> SavePrompt {
    let choice = dialog::choice2_default(
        "You have unsaved changes. Do you want to save them?",
        "Save",
        "Discard",
        "Cancel",
    );
    match choice {
        Some(0) => SavePrompt::Save,
        Some(1) => SavePrompt::Discard,
        _ => SavePrompt::Cancel,
    }
}

pub fn show_error(message: &str) {
    dialog::alert_default(message);
}

/// Color picker seeded with `initial`. Returns `#rrggbb`, or `None` when the
/// dialog was dismissed without picking a different color.
pub fn pick_color(title: &str, initial: &str, fallback: Rgb) -> Option<String> {
    let start = Rgb::parse(initial).unwrap_or(fallback);
    let (r, g, b) = dialog::color_chooser_with_default(
        title,
        dialog::ColorMode::Rgb,
        (start.0, start.1, start.2),
    );
    let picked = Rgb(r, g, b);
    if picked == start { None } else { Some(picked.to_hex()) }
}
