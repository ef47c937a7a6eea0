use std::time::Duration;

use crate::app::domain::color::ColorTarget;
use crate::app::domain::messages::{EditCommand, WindowId};
use crate::app::domain::settings::{AppSettings, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::app::infrastructure::host::{AutosaveTask, EditorHost, SavePrompt};
use crate::app::services::text_ops::{read_text_file, status_text, window_title, write_text_file};

/// Outcome of the unsaved-changes check shared by new, open and close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Nothing to lose, the user discarded, or the save went through.
    Proceed,
    /// The user chose Save but writing failed (or Save As was cancelled).
    SaveFailed,
    Cancelled,
}

impl Guard {
    pub fn proceeds(self) -> bool {
        self == Guard::Proceed
    }
}

/// Effects a session cannot apply itself; drained by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A path was successfully opened or saved.
    RecentFile(String),
    /// The window passed its unsaved-changes check and is gone.
    Closed,
}

/// Per-window formatting, copied from settings at creation and then
/// independent of every other window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatting {
    pub font_family: String,
    pub font_size: u32,
    pub font_color: String,
    pub bg_color: String,
}

impl From<&AppSettings> for Formatting {
    fn from(settings: &AppSettings) -> Self {
        Self {
            font_family: settings.font_family.clone(),
            font_size: settings.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            font_color: settings.font_color.clone(),
            bg_color: settings.bg_color.clone(),
        }
    }
}

/// One editor window: its file, dirty state, formatting and autosave timer.
///
/// `dirty` is true iff the widget's text differs from what was last opened
/// or saved (or from empty for a buffer that was never saved).
pub struct EditorSession {
    id: WindowId,
    host: Box<dyn EditorHost>,
    file_path: Option<String>,
    dirty: bool,
    formatting: Formatting,
    autosave_enabled: bool,
    autosave_interval: Duration,
    autosave_task: Option<AutosaveTask>,
    events: Vec<SessionEvent>,
}

impl EditorSession {
    pub fn new(id: WindowId, host: Box<dyn EditorHost>, settings: &AppSettings) -> Self {
        let mut session = Self {
            id,
            host,
            file_path: None,
            dirty: false,
            formatting: Formatting::from(settings),
            autosave_enabled: settings.autosave_enabled,
            autosave_interval: Duration::from_millis(settings.autosave_interval),
            autosave_task: None,
            events: Vec::new(),
        };

        let f = &session.formatting;
        session.host.apply_font(&f.font_family, f.font_size);
        session.host.apply_colors(&f.font_color, &f.bg_color);
        session.host.set_autosave_checked(session.autosave_enabled);
        session.host.clear_modified();
        session.update_title();
        session.update_status();
        session
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_enabled
    }

    pub fn autosave_interval(&self) -> Duration {
        self.autosave_interval
    }

    pub fn has_autosave_task(&self) -> bool {
        self.autosave_task.is_some()
    }

    pub fn start_autosave(&mut self, task: AutosaveTask) {
        self.autosave_task = Some(task);
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // --- File operations ---

    /// Clear the buffer and forget the path.
    pub fn file_new(&mut self) -> bool {
        if !self.check_unsaved_changes().proceeds() {
            return false;
        }
        self.host.set_text("");
        self.host.clear_modified();
        self.host.clear_undo_history();
        self.file_path = None;
        self.dirty = false;
        self.update_title();
        self.update_status();
        true
    }

    /// Ask for a file and open it.
    pub fn open_dialog(&mut self) -> bool {
        if !self.check_unsaved_changes().proceeds() {
            return false;
        }
        match self.host.pick_open_path() {
            Some(path) => self.load_file(&path),
            None => false,
        }
    }

    pub fn open(&mut self, path: &str) -> bool {
        if !self.check_unsaved_changes().proceeds() {
            return false;
        }
        self.load_file(path)
    }

    fn load_file(&mut self, path: &str) -> bool {
        match read_text_file(path) {
            Ok(content) => {
                self.host.set_text(&content);
                self.host.clear_modified();
                self.host.clear_undo_history();
                self.file_path = Some(path.to_string());
                self.dirty = false;
                self.update_title();
                self.update_status();
                self.events.push(SessionEvent::RecentFile(path.to_string()));
                tracing::info!(window = self.id.0, path = %path, "opened file");
                true
            }
            Err(e) => {
                tracing::warn!(window = self.id.0, path = %path, "open failed: {}", e);
                self.host.show_error(&format!("Could not open file:\n{}", e));
                false
            }
        }
    }

    /// Write the buffer to its path, asking for one when untitled.
    /// Returns whether the buffer is now on disk.
    pub fn save(&mut self) -> bool {
        let Some(path) = self.file_path.clone() else {
            return self.save_as();
        };

        match write_text_file(&path, &self.host.text()) {
            Ok(()) => {
                self.dirty = false;
                self.update_title();
                self.events.push(SessionEvent::RecentFile(path.clone()));
                tracing::debug!(window = self.id.0, path = %path, "saved file");
                true
            }
            Err(e) => {
                tracing::warn!(window = self.id.0, path = %path, "save failed: {}", e);
                self.host.show_error(&format!("Could not save file:\n{}", e));
                false
            }
        }
    }

    pub fn save_as(&mut self) -> bool {
        match self.host.pick_save_path() {
            Some(path) => {
                self.file_path = Some(path);
                self.save()
            }
            None => false,
        }
    }

    /// Close the window unless the user backs out. The autosave timer is
    /// cancelled with it.
    pub fn close(&mut self) -> bool {
        if !self.check_unsaved_changes().proceeds() {
            return false;
        }
        self.autosave_task = None;
        self.host.close_window();
        self.events.push(SessionEvent::Closed);
        true
    }

    /// Handle a buffer-changed notification from the widget.
    pub fn on_content_changed(&mut self) {
        if !self.host.is_modified() {
            return;
        }
        self.dirty = true;
        self.update_title();
        self.update_status();
        // The widget only reports the next edit once its flag is reset.
        self.host.clear_modified();
    }

    pub fn tick_autosave(&mut self) {
        if self.autosave_enabled && self.dirty && self.file_path.is_some() {
            tracing::debug!(window = self.id.0, "autosave");
            self.save();
        }
    }

    pub fn toggle_autosave(&mut self) {
        self.autosave_enabled = !self.autosave_enabled;
        self.host.set_autosave_checked(self.autosave_enabled);
    }

    pub fn edit(&mut self, command: EditCommand) {
        self.host.edit(command);
    }

    pub fn set_recent_files(&mut self, paths: &[String]) {
        self.host.set_recent_files(paths);
    }

    // --- Format ---

    pub fn increase_font_size(&mut self) {
        if self.formatting.font_size < MAX_FONT_SIZE {
            self.formatting.font_size += 1;
            self.apply_font();
        }
    }

    pub fn decrease_font_size(&mut self) {
        if self.formatting.font_size > MIN_FONT_SIZE {
            self.formatting.font_size -= 1;
            self.apply_font();
        }
    }

    pub fn change_font_family(&mut self, name: &str) {
        self.formatting.font_family = name.to_string();
        self.apply_font();
    }

    pub fn change_font_color(&mut self, color: &str) {
        self.formatting.font_color = color.to_string();
        self.apply_colors();
    }

    pub fn change_bg_color(&mut self, color: &str) {
        self.formatting.bg_color = color.to_string();
        self.apply_colors();
    }

    pub fn pick_font_family(&mut self) {
        if let Some(name) = self.host.pick_font_family(&self.formatting.font_family) {
            self.change_font_family(&name);
        }
    }

    pub fn pick_font_color(&mut self) {
        if let Some(color) = self.host.pick_color(ColorTarget::Font, &self.formatting.font_color) {
            self.change_font_color(&color);
        }
    }

    pub fn pick_bg_color(&mut self) {
        if let Some(color) =
            self.host.pick_color(ColorTarget::Background, &self.formatting.bg_color)
        {
            self.change_bg_color(&color);
        }
    }

    /// Copy this window's formatting and autosave choice into `settings`.
    pub fn harvest_into(&self, settings: &mut AppSettings) {
        settings.font_family = self.formatting.font_family.clone();
        settings.font_size = self.formatting.font_size;
        settings.font_color = self.formatting.font_color.clone();
        settings.bg_color = self.formatting.bg_color.clone();
        settings.autosave_enabled = self.autosave_enabled;
    }

    // --- Helpers ---

    /// Ask before throwing away unsaved changes.
    pub fn check_unsaved_changes(&mut self) -> Guard {
        if !self.dirty {
            return Guard::Proceed;
        }
        match self.host.ask_unsaved_changes() {
            SavePrompt::Save => {
                if self.save() {
                    Guard::Proceed
                } else {
                    Guard::SaveFailed
                }
            }
            SavePrompt::Discard => Guard::Proceed,
            SavePrompt::Cancel => Guard::Cancelled,
        }
    }

    fn apply_font(&mut self) {
        self.host.apply_font(&self.formatting.font_family, self.formatting.font_size);
        self.update_status();
    }

    fn apply_colors(&mut self) {
        self.host.apply_colors(&self.formatting.font_color, &self.formatting.bg_color);
    }

    fn update_title(&mut self) {
        let title = window_title(self.file_path.as_deref(), self.dirty);
        self.host.set_title(&title);
    }

    fn update_status(&mut self) {
        let status = status_text(
            &self.formatting.font_family,
            self.formatting.font_size,
            &self.host.text(),
        );
        self.host.set_status(&status);
    }
}
