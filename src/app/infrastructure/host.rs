//! Seams between the editor core and the GUI toolkit.
//!
//! The FLTK implementations live in `crate::ui`; tests use the scripted
//! fakes in [`fake`].

use std::time::Duration;

use crate::app::domain::color::ColorTarget;
use crate::app::domain::messages::{EditCommand, WindowId};

/// Answer to the "You have unsaved changes" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePrompt {
    Save,
    Discard,
    Cancel,
}

/// One editor window as seen by its session: text widget, chrome and the
/// modal dialogs parented to it.
pub trait EditorHost {
    // Text widget
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Whether the widget saw an edit since the flag was last cleared.
    fn is_modified(&self) -> bool;
    fn clear_modified(&mut self);
    fn clear_undo_history(&mut self);
    fn edit(&mut self, command: EditCommand);

    // Presentation
    fn set_title(&mut self, title: &str);
    fn set_status(&mut self, status: &str);
    fn apply_font(&mut self, family: &str, size: u32);
    fn apply_colors(&mut self, font_color: &str, bg_color: &str);
    fn set_autosave_checked(&mut self, checked: bool);
    fn set_recent_files(&mut self, paths: &[String]);
    fn close_window(&mut self);

    // Dialogs
    fn show_error(&mut self, message: &str);
    fn ask_unsaved_changes(&mut self) -> SavePrompt;
    fn pick_open_path(&mut self) -> Option<String>;
    fn pick_save_path(&mut self) -> Option<String>;
    fn pick_font_family(&mut self, current: &str) -> Option<String>;
    fn pick_color(&mut self, target: ColorTarget, initial: &str) -> Option<String>;
}

/// A repeating timer registration; dropping the owning [`AutosaveTask`]
/// cancels it.
pub trait TaskHandle {
    fn cancel(&mut self);
}

/// The per-session autosave timer. Cancelled when dropped, so a closed
/// session can never receive another tick.
pub struct AutosaveTask {
    handle: Box<dyn TaskHandle>,
}

impl AutosaveTask {
    pub fn new(handle: Box<dyn TaskHandle>) -> Self {
        Self { handle }
    }
}

impl Drop for AutosaveTask {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

/// Creates windows and timers for the controller.
pub trait Platform {
    fn create_window(&mut self, id: WindowId) -> Box<dyn EditorHost>;

    /// Start posting `AutosaveTick(id)` every `interval`.
    fn schedule_autosave(&mut self, id: WindowId, interval: Duration) -> AutosaveTask;
}

#[cfg(test)]
pub mod fake {
    //! Headless stand-ins for the FLTK layer. State is shared through
    //! `Rc<RefCell<..>>` so tests can inspect a host after handing it off.

    use std::cell::RefCell;
    use std::collections::{BTreeMap, VecDeque};
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Default)]
    pub struct HostState {
        pub text: String,
        pub modified: bool,
        pub undo_cleared: usize,
        pub edits: Vec<EditCommand>,
        pub title: String,
        pub status: String,
        pub font: (String, u32),
        pub colors: (String, String),
        pub autosave_checked: Option<bool>,
        pub recent_files: Vec<String>,
        pub closed: bool,
        pub errors: Vec<String>,
        pub prompts: VecDeque<SavePrompt>,
        pub prompt_count: usize,
        pub open_paths: VecDeque<Option<String>>,
        pub save_paths: VecDeque<Option<String>>,
        pub save_dialogs: usize,
        pub font_choices: VecDeque<Option<String>>,
        pub color_choices: VecDeque<Option<String>>,
        pub color_targets: Vec<ColorTarget>,
    }

    #[derive(Clone, Default)]
    pub struct FakeHost {
        pub state: Rc<RefCell<HostState>>,
    }

    impl FakeHost {
        pub fn new() -> Self {
            Self::default()
        }

        /// Simulate the user typing: replace the text and raise the
        /// widget's modified flag.
        pub fn type_text(&self, text: &str) {
            let mut s = self.state.borrow_mut();
            s.text = text.to_string();
            s.modified = true;
        }

        pub fn queue_prompt(&self, answer: SavePrompt) {
            self.state.borrow_mut().prompts.push_back(answer);
        }

        pub fn queue_save_path(&self, path: Option<&str>) {
            self.state
                .borrow_mut()
                .save_paths
                .push_back(path.map(str::to_string));
        }

        pub fn queue_open_path(&self, path: Option<&str>) {
            self.state
                .borrow_mut()
                .open_paths
                .push_back(path.map(str::to_string));
        }
    }

    impl EditorHost for FakeHost {
        fn text(&self) -> String {
            self.state.borrow().text.clone()
        }

        fn set_text(&mut self, text: &str) {
            // Programmatic changes raise the flag too, like a real widget.
            let mut s = self.state.borrow_mut();
            s.text = text.to_string();
            s.modified = true;
        }

        fn is_modified(&self) -> bool {
            self.state.borrow().modified
        }

        fn clear_modified(&mut self) {
            self.state.borrow_mut().modified = false;
        }

        fn clear_undo_history(&mut self) {
            self.state.borrow_mut().undo_cleared += 1;
        }

        fn edit(&mut self, command: EditCommand) {
            self.state.borrow_mut().edits.push(command);
        }

        fn set_title(&mut self, title: &str) {
            self.state.borrow_mut().title = title.to_string();
        }

        fn set_status(&mut self, status: &str) {
            self.state.borrow_mut().status = status.to_string();
        }

        fn apply_font(&mut self, family: &str, size: u32) {
            self.state.borrow_mut().font = (family.to_string(), size);
        }

        fn apply_colors(&mut self, font_color: &str, bg_color: &str) {
            self.state.borrow_mut().colors = (font_color.to_string(), bg_color.to_string());
        }

        fn set_autosave_checked(&mut self, checked: bool) {
            self.state.borrow_mut().autosave_checked = Some(checked);
        }

        fn set_recent_files(&mut self, paths: &[String]) {
            self.state.borrow_mut().recent_files = paths.to_vec();
        }

        fn close_window(&mut self) {
            self.state.borrow_mut().closed = true;
        }

        fn show_error(&mut self, message: &str) {
            self.state.borrow_mut().errors.push(message.to_string());
        }

        fn ask_unsaved_changes(&mut self) -> SavePrompt {
            let mut s = self.state.borrow_mut();
            s.prompt_count += 1;
            s.prompts.pop_front().unwrap_or(SavePrompt::Cancel)
        }

        fn pick_open_path(&mut self) -> Option<String> {
            self.state.borrow_mut().open_paths.pop_front().flatten()
        }

        fn pick_save_path(&mut self) -> Option<String> {
            let mut s = self.state.borrow_mut();
            s.save_dialogs += 1;
            s.save_paths.pop_front().flatten()
        }

        fn pick_font_family(&mut self, _current: &str) -> Option<String> {
            self.state.borrow_mut().font_choices.pop_front().flatten()
        }

        fn pick_color(&mut self, target: ColorTarget, _initial: &str) -> Option<String> {
            let mut s = self.state.borrow_mut();
            s.color_targets.push(target);
            s.color_choices.pop_front().flatten()
        }
    }

    #[derive(Debug, Default)]
    pub struct TimerLog {
        pub scheduled: Vec<(WindowId, Duration)>,
        pub cancelled: Vec<WindowId>,
    }

    struct FakeTask {
        id: WindowId,
        log: Rc<RefCell<TimerLog>>,
    }

    impl TaskHandle for FakeTask {
        fn cancel(&mut self) {
            self.log.borrow_mut().cancelled.push(self.id);
        }
    }

    /// Hands out [`FakeHost`]s and records timer activity.
    #[derive(Clone, Default)]
    pub struct FakePlatform {
        pub hosts: Rc<RefCell<BTreeMap<WindowId, FakeHost>>>,
        pub timers: Rc<RefCell<TimerLog>>,
    }

    impl FakePlatform {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn host(&self, id: WindowId) -> FakeHost {
            self.hosts.borrow()[&id].clone()
        }
    }

    impl Platform for FakePlatform {
        fn create_window(&mut self, id: WindowId) -> Box<dyn EditorHost> {
            let host = FakeHost::new();
            self.hosts.borrow_mut().insert(id, host.clone());
            Box::new(host)
        }

        fn schedule_autosave(&mut self, id: WindowId, interval: Duration) -> AutosaveTask {
            self.timers.borrow_mut().scheduled.push((id, interval));
            AutosaveTask::new(Box::new(FakeTask {
                id,
                log: self.timers.clone(),
            }))
        }
    }
}
