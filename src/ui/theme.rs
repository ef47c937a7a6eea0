use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::TextEditor,
};

use crate::app::domain::color::{ColorTarget, Rgb};

/// Resolve a settings color string, falling back for names FLTK's side
/// doesn't know.
pub fn to_fltk_color(value: &str, fallback: Rgb) -> Color {
    let Rgb(r, g, b) = Rgb::parse(value).unwrap_or(fallback);
    Color::from_rgb(r, g, b)
}

pub fn apply_font(editor: &mut TextEditor, family: &str, size: u32) {
    editor.set_text_font(Font::by_name(family));
    editor.set_text_size(size as i32);
    editor.redraw();
}

pub fn apply_colors(editor: &mut TextEditor, font_color: &str, bg_color: &str) {
    let fg = to_fltk_color(font_color, ColorTarget::Font.fallback());
    let bg = to_fltk_color(bg_color, ColorTarget::Background.fallback());
    editor.set_text_color(fg);
    // Cursor follows the text color.
    editor.set_cursor_color(fg);
    editor.set_color(bg);
    editor.redraw();
}
