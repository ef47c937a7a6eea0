use crate::app::domain::messages::{Message, WindowId};
use crate::app::domain::session::{EditorSession, SessionEvent};
use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::Platform;
use crate::app::services::settings_store::SettingsStore;

/// Process lifecycle as driven by window count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// No window has been opened yet.
    Idle,
    /// At least one window is open.
    Running,
    /// The last window closed and settings were flushed.
    ShuttingDown,
    Terminated,
}

/// Owns every open editor window and the canonical settings.
///
/// Sessions never see each other. Recent-file updates and the final
/// settings harvest go through here.
pub struct SessionController {
    platform: Box<dyn Platform>,
    store: SettingsStore,
    settings: AppSettings,
    sessions: Vec<EditorSession>,
    next_id: u64,
    lifecycle: Lifecycle,
}

impl SessionController {
    /// Controller seeded from whatever `store` holds.
    pub fn new(platform: Box<dyn Platform>, store: SettingsStore) -> Self {
        let settings = store.load();
        Self::with_settings(platform, store, settings)
    }

    pub fn with_settings(
        platform: Box<dyn Platform>,
        store: SettingsStore,
        settings: AppSettings,
    ) -> Self {
        Self {
            platform,
            store,
            settings,
            sessions: Vec::new(),
            next_id: 1,
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.sessions.iter().map(|s| s.id()).collect()
    }

    pub fn session(&self, id: WindowId) -> Option<&EditorSession> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn session_mut(&mut self, id: WindowId) -> Option<&mut EditorSession> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    fn next_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Open a window seeded from the cached settings and start its autosave
    /// timer.
    pub fn create_window(&mut self) -> WindowId {
        let id = self.next_window_id();
        let host = self.platform.create_window(id);
        let mut session = EditorSession::new(id, host, &self.settings);
        session.set_recent_files(self.settings.recent_files.paths());

        let task = self.platform.schedule_autosave(id, session.autosave_interval());
        session.start_autosave(task);

        self.sessions.push(session);
        if self.lifecycle == Lifecycle::Idle {
            self.lifecycle = Lifecycle::Running;
        }
        tracing::info!(window = id.0, open = self.sessions.len(), "window created");
        id
    }

    /// Open `path` in a fresh window. The window stays (untitled) if the
    /// read fails.
    pub fn open_in_new_window(&mut self, path: &str) -> WindowId {
        let id = self.create_window();
        if let Some(session) = self.session_mut(id) {
            session.open(path);
        }
        self.apply_session_events(id);
        id
    }

    /// Route one message to the window it was built for.
    pub fn dispatch(&mut self, msg: Message) {
        if self.lifecycle != Lifecycle::Running {
            tracing::debug!(?msg, "ignoring message outside running state");
            return;
        }

        let Some(id) = msg.window() else {
            if msg == Message::NewWindow {
                self.create_window();
            }
            return;
        };

        let Some(session) = self.session_mut(id) else {
            // Queued before its window closed.
            tracing::debug!(?msg, "message for a closed window");
            return;
        };

        match msg {
            Message::FileNew(_) => {
                session.file_new();
            }
            Message::FileOpen(_) => {
                session.open_dialog();
            }
            Message::OpenRecent(_, path) => {
                session.open(&path);
            }
            Message::FileSave(_) => {
                session.save();
            }
            Message::FileSaveAs(_) => {
                session.save_as();
            }
            Message::ToggleAutosave(_) => session.toggle_autosave(),
            Message::WindowClose(_) => {
                session.close();
            }
            Message::Edit(_, command) => session.edit(command),
            Message::ChangeFont(_) => session.pick_font_family(),
            Message::ChangeFontColor(_) => session.pick_font_color(),
            Message::ChangeBgColor(_) => session.pick_bg_color(),
            Message::IncreaseFontSize(_) => session.increase_font_size(),
            Message::DecreaseFontSize(_) => session.decrease_font_size(),
            Message::ContentChanged(_) => session.on_content_changed(),
            Message::AutosaveTick(_) => session.tick_autosave(),
            Message::NewWindow => {}
        }

        self.apply_session_events(id);
    }

    fn apply_session_events(&mut self, id: WindowId) {
        let events = match self.session_mut(id) {
            Some(session) => session.take_events(),
            None => return,
        };
        for event in events {
            match event {
                SessionEvent::RecentFile(path) => self.add_to_recent_files(&path),
                SessionEvent::Closed => self.on_window_close(id),
            }
        }
    }

    /// Forget a closed window. Closing the last one harvests and persists
    /// settings and moves to [`Lifecycle::ShuttingDown`].
    pub fn on_window_close(&mut self, id: WindowId) {
        let Some(idx) = self.sessions.iter().position(|s| s.id() == id) else {
            return;
        };

        if self.sessions.len() == 1 {
            if let Err(e) = self.save_settings() {
                tracing::error!("failed to save settings: {}", e);
            }
        }

        // Dropping the session cancels its autosave timer.
        self.sessions.remove(idx);
        tracing::info!(window = id.0, open = self.sessions.len(), "window closed");

        if self.sessions.is_empty() {
            self.lifecycle = Lifecycle::ShuttingDown;
            tracing::info!("last window closed, shutting down");
        }
    }

    /// Copy formatting from the most recently created open window into the
    /// canonical settings. Other windows' formatting is not kept.
    pub fn harvest_settings(&mut self) {
        if let Some(last) = self.sessions.last() {
            last.harvest_into(&mut self.settings);
        }
    }

    /// Harvest, then write settings to the store.
    pub fn save_settings(&mut self) -> Result<()> {
        self.harvest_settings();
        self.store.save(&self.settings)
    }

    pub fn add_to_recent_files(&mut self, path: &str) {
        self.settings.recent_files.touch(path);
        self.refresh_recent_menus();
    }

    /// Push the recent files list to every open window.
    pub fn refresh_recent_menus(&mut self) {
        let paths = self.settings.recent_files.paths().to_vec();
        for session in &mut self.sessions {
            session.set_recent_files(&paths);
        }
    }

    pub fn terminate(&mut self) {
        self.lifecycle = Lifecycle::Terminated;
    }
}
