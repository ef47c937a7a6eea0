pub mod font_picker;
pub mod prompts;

use fltk::{app, prelude::*, window::Window};

/// Pump events until `dialog` is hidden. A program quit (the last editor
/// window going away) hides it as well.
pub fn run_dialog(dialog: &Window) {
    let mut dialog = dialog.clone();
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            dialog.hide();
        }
    }
}
