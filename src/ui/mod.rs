//! FLTK front end: editor windows, menus, dialogs and timers.

pub mod buffer;
pub mod dialogs;
pub mod editor_window;
pub mod file_dialogs;
pub mod menu;
pub mod platform;
pub mod theme;
