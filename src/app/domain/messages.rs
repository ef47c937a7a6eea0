/// Identifies one editor window for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// Text-widget commands the editor forwards untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
}

/// All messages that can be sent through the FLTK channel.
/// Each menu callback, buffer callback and autosave timer sends one of these,
/// tagged with the window it was built for; the controller dispatches them.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // File
    FileNew(WindowId),
    NewWindow,
    FileOpen(WindowId),
    OpenRecent(WindowId, String),
    FileSave(WindowId),
    FileSaveAs(WindowId),
    ToggleAutosave(WindowId),
    WindowClose(WindowId),

    // Edit
    Edit(WindowId, EditCommand),

    // Format
    ChangeFont(WindowId),
    ChangeFontColor(WindowId),
    ChangeBgColor(WindowId),

    // View
    IncreaseFontSize(WindowId),
    DecreaseFontSize(WindowId),

    // Background
    ContentChanged(WindowId),
    AutosaveTick(WindowId),
}

impl Message {
    /// The window a message targets, if any.
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Message::NewWindow => None,
            Message::FileNew(id)
            | Message::FileOpen(id)
            | Message::OpenRecent(id, _)
            | Message::FileSave(id)
            | Message::FileSaveAs(id)
            | Message::ToggleAutosave(id)
            | Message::WindowClose(id)
            | Message::Edit(id, _)
            | Message::ChangeFont(id)
            | Message::ChangeFontColor(id)
            | Message::ChangeBgColor(id)
            | Message::IncreaseFontSize(id)
            | Message::DecreaseFontSize(id)
            | Message::ContentChanged(id)
            | Message::AutosaveTick(id) => Some(*id),
        }
    }
}
