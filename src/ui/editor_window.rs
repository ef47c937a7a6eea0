use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::{self, Sender},
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use super::buffer::buffer_text;
use super::dialogs::{font_picker, prompts};
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use super::menu::{build_menu, rebuild_recent_menu, set_checked, AUTOSAVE_ITEM};
use super::theme;
use crate::app::domain::color::ColorTarget;
use crate::app::domain::messages::{EditCommand, Message, WindowId};
use crate::app::infrastructure::host::{EditorHost, SavePrompt};

const MENU_HEIGHT: i32 = 30;
const STATUS_HEIGHT: i32 = 24;

/// One top-level FLTK editor window: menu bar, text editor and status bar.
pub struct EditorWindow {
    id: WindowId,
    sender: Sender<Message>,
    window: Window,
    menu: MenuBar,
    editor: TextEditor,
    buffer: TextBuffer,
    status: Frame,
    /// Raised by the buffer's modify callback, cleared by the session.
    modified: Rc<Cell<bool>>,
}

impl EditorWindow {
    pub fn new(id: WindowId, sender: Sender<Message>) -> Self {
        let mut window = Window::default()
            .with_size(800, 600)
            .with_label("Untitled - MultiPad");
        window.set_xclass("MultiPad");

        let mut flex = Flex::default_fill();
        flex.set_type(FlexType::Column);

        let mut menu = MenuBar::default();
        flex.fixed(&menu, MENU_HEIGHT);

        let mut buffer = TextBuffer::default();
        let mut editor = TextEditor::default();
        editor.set_buffer(buffer.clone());
        editor.wrap_mode(WrapMode::AtBounds, 0);

        let mut status = Frame::default().with_label("Ready");
        status.set_frame(FrameType::DownBox);
        status.set_align(Align::Left | Align::Inside);
        flex.fixed(&status, STATUS_HEIGHT);

        flex.end();
        window.resizable(&flex);
        window.end();

        build_menu(&mut menu, sender, id);

        let modified = Rc::new(Cell::new(false));
        let changes = modified.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                sender.send(Message::ContentChanged(id));
            }
        });

        // The close button goes through the unsaved-changes check.
        window.set_callback(move |_| {
            if app::event() == Event::Close {
                sender.send(Message::WindowClose(id));
            }
        });

        window.show();
        editor.take_focus().ok();

        Self {
            id,
            sender,
            window,
            menu,
            editor,
            buffer,
            status,
            modified,
        }
    }
}

impl EditorHost for EditorWindow {
    fn text(&self) -> String {
        buffer_text(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn is_modified(&self) -> bool {
        self.modified.get()
    }

    fn clear_modified(&mut self) {
        self.modified.set(false);
    }

    fn clear_undo_history(&mut self) {
        // Disabling undo drops the recorded history.
        self.buffer.can_undo(false);
        self.buffer.can_undo(true);
    }

    fn edit(&mut self, command: EditCommand) {
        // Key-function results only report "nothing to do".
        match command {
            EditCommand::Undo => {
                let _ = self.editor.undo();
            }
            EditCommand::Redo => {
                let _ = self.editor.redo();
            }
            EditCommand::Cut => {
                let _ = self.editor.cut();
            }
            EditCommand::Copy => {
                let _ = self.editor.copy();
            }
            EditCommand::Paste => {
                let _ = self.editor.paste();
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    fn set_status(&mut self, status: &str) {
        // Leading spaces keep the text off the frame edge.
        self.status.set_label(&format!("  {}", status.replace('@', "@@")));
    }

    fn apply_font(&mut self, family: &str, size: u32) {
        theme::apply_font(&mut self.editor, family, size);
    }

    fn apply_colors(&mut self, font_color: &str, bg_color: &str) {
        theme::apply_colors(&mut self.editor, font_color, bg_color);
    }

    fn set_autosave_checked(&mut self, checked: bool) {
        set_checked(&self.menu, AUTOSAVE_ITEM, checked);
    }

    fn set_recent_files(&mut self, paths: &[String]) {
        rebuild_recent_menu(&mut self.menu, self.sender, self.id, paths);
    }

    fn close_window(&mut self) {
        self.window.hide();
        app::delete_widget(self.window.clone());
    }

    fn show_error(&mut self, message: &str) {
        prompts::show_error(message);
    }

    fn ask_unsaved_changes(&mut self) -> SavePrompt {
        prompts::ask_unsaved_changes()
    }

    fn pick_open_path(&mut self) -> Option<String> {
        native_open_dialog()
    }

    fn pick_save_path(&mut self) -> Option<String> {
        native_save_dialog()
    }

    fn pick_font_family(&mut self, current: &str) -> Option<String> {
        font_picker::show_font_dialog(current)
    }

    fn pick_color(&mut self, target: ColorTarget, initial: &str) -> Option<String> {
        prompts::pick_color(target.title(), initial, target.fallback())
    }
}
