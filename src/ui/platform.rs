use std::time::Duration;

use fltk::app::{self, Sender, TimeoutHandle};

use super::editor_window::EditorWindow;
use crate::app::domain::messages::{Message, WindowId};
use crate::app::infrastructure::host::{AutosaveTask, EditorHost, Platform, TaskHandle};

/// Creates real windows and FLTK timeouts, all reporting back through the
/// app channel.
pub struct FltkPlatform {
    sender: Sender<Message>,
}

impl FltkPlatform {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

impl Platform for FltkPlatform {
    fn create_window(&mut self, id: WindowId) -> Box<dyn EditorHost> {
        Box::new(EditorWindow::new(id, self.sender))
    }

    fn schedule_autosave(&mut self, id: WindowId, interval: Duration) -> AutosaveTask {
        let secs = interval.as_secs_f64();
        let sender = self.sender;
        let handle = app::add_timeout3(secs, move |handle| {
            sender.send(Message::AutosaveTick(id));
            app::repeat_timeout3(secs, handle);
        });
        tracing::debug!(
            window = id.0,
            interval_ms = interval.as_millis() as u64,
            "autosave timer started"
        );
        AutosaveTask::new(Box::new(FltkTimeout { handle: Some(handle) }))
    }
}

struct FltkTimeout {
    handle: Option<TimeoutHandle>,
}

impl TaskHandle for FltkTimeout {
    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if app::has_timeout3(handle) {
                app::remove_timeout3(handle);
            }
        }
    }
}
