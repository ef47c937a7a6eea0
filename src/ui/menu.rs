use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::{EditCommand, Message, WindowId};
use crate::app::services::text_ops::extract_filename;

pub const RECENT_MENU: &str = "File/Recent Files";
pub const AUTOSAVE_ITEM: &str = "File/Autosave";

/// Keys that grow the font with the command modifier. The first one is shown
/// in the menu; the rest get hidden items.
pub const INCREASE_FONT_KEYS: [char; 2] = ['=', '+'];

/// Build one window's menu bar. Every item sends a message bound to `id`.
/// The Autosave item starts unchecked; the session sets it.
pub fn build_menu(menu: &mut MenuBar, sender: Sender<Message>, id: WindowId) {
    let s = sender;
    let cmd = Shortcut::Command;

    // File
    menu.add("File/New File", cmd | 'n', MenuFlag::Normal, move |_| s.send(Message::FileNew(id)));
    menu.add("File/New Window", cmd | Shortcut::Shift | 'n', MenuFlag::Normal, move |_| s.send(Message::NewWindow));
    menu.add("File/Open...", cmd | 'o', MenuFlag::Normal, move |_| s.send(Message::FileOpen(id)));
    menu.add(RECENT_MENU, Shortcut::None, MenuFlag::Submenu | MenuFlag::MenuDivider, |_| {});
    menu.add("File/Save", cmd | 's', MenuFlag::Normal, move |_| s.send(Message::FileSave(id)));
    menu.add("File/Save As...", cmd | Shortcut::Shift | 's', MenuFlag::MenuDivider, move |_| s.send(Message::FileSaveAs(id)));
    menu.add(AUTOSAVE_ITEM, Shortcut::None, MenuFlag::Toggle | MenuFlag::MenuDivider, move |_| s.send(Message::ToggleAutosave(id)));
    menu.add("File/Close Window", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::WindowClose(id)));

    // Edit
    menu.add("Edit/Undo", cmd | 'z', MenuFlag::Normal, move |_| s.send(Message::Edit(id, EditCommand::Undo)));
    menu.add("Edit/Redo", cmd | 'y', MenuFlag::MenuDivider, move |_| s.send(Message::Edit(id, EditCommand::Redo)));
    menu.add("Edit/Cut", cmd | 'x', MenuFlag::Normal, move |_| s.send(Message::Edit(id, EditCommand::Cut)));
    menu.add("Edit/Copy", cmd | 'c', MenuFlag::Normal, move |_| s.send(Message::Edit(id, EditCommand::Copy)));
    menu.add("Edit/Paste", cmd | 'v', MenuFlag::Normal, move |_| s.send(Message::Edit(id, EditCommand::Paste)));

    // Format
    menu.add("Format/Change Font...", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::ChangeFont(id)));
    menu.add("Format/Change Font Color...", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::ChangeFontColor(id)));
    menu.add("Format/Change Background Color...", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::ChangeBgColor(id)));

    // View
    for (i, key) in INCREASE_FONT_KEYS.into_iter().enumerate() {
        let (label, flag) = if i == 0 {
            ("View/Increase Font Size".to_string(), MenuFlag::Normal)
        } else {
            (format!("View/Increase Font Size ({})", key), MenuFlag::Invisible)
        };
        menu.add(&label, cmd | key, flag, move |_| s.send(Message::IncreaseFontSize(id)));
    }
    menu.add("View/Decrease Font Size", cmd | '-', MenuFlag::Normal, move |_| s.send(Message::DecreaseFontSize(id)));

    rebuild_recent_menu(menu, sender, id, &[]);
}

/// Replace the Recent Files submenu. Each entry owns its own copy of the
/// path it opens.
pub fn rebuild_recent_menu(menu: &mut MenuBar, sender: Sender<Message>, id: WindowId, paths: &[String]) {
    let idx = menu.find_index(RECENT_MENU);
    if idx < 0 {
        return;
    }
    if let Err(e) = menu.clear_submenu(idx) {
        tracing::warn!("failed to clear recent files menu: {}", e);
        return;
    }

    if paths.is_empty() {
        menu.add(&format!("{}/(empty)", RECENT_MENU), Shortcut::None, MenuFlag::Inactive, |_| {});
        return;
    }

    for (i, path) in paths.iter().enumerate() {
        let label = format!("{}/{}", RECENT_MENU, recent_label(i, path));
        let path = path.clone();
        menu.add(&label, Shortcut::None, MenuFlag::Normal, move |_| {
            sender.send(Message::OpenRecent(id, path.clone()))
        });
    }
}

/// Menu text for a recent file: a 1-based index (so equal basenames stay
/// distinct) and the escaped file name.
pub fn recent_label(index: usize, path: &str) -> String {
    let name = extract_filename(path)
        .replace('\\', "\\\\")
        .replace('/', "\\/")
        .replace('&', "&&");
    format!("&{} {}", index + 1, name)
}

/// Set or clear a toggle item's check mark.
pub fn set_checked(menu: &MenuBar, path: &str, checked: bool) {
    let idx = menu.find_index(path);
    if idx >= 0 {
        if let Some(mut item) = menu.at(idx) {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}
