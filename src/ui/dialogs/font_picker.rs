use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app,
    browser::HoldBrowser,
    button::Button,
    enums::Event,
    prelude::*,
    window::Window,
};

use super::run_dialog;

/// Font families FLTK knows about, sorted and without duplicates.
pub fn font_families() -> Vec<String> {
    let mut names = app::get_font_names();
    names.sort();
    names.dedup();
    names
}

/// Show a list of font families and return the one the user picked.
pub fn show_font_dialog(current: &str) -> Option<String> {
    let families = font_families();

    let mut dialog = Window::default()
        .with_size(300, 400)
        .with_label("Choose Font")
        .center_screen();
    dialog.make_modal(true);

    let mut list = HoldBrowser::default().with_pos(10, 10).with_size(280, 340);
    list.set_format_char('\0');
    for (i, name) in families.iter().enumerate() {
        list.add(name);
        if name == current {
            list.select(i as i32 + 1);
            list.middle_line(i as i32 + 1);
        }
    }

    let mut ok_btn = Button::default()
        .with_pos(120, 360).with_size(80, 30).with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(210, 360).with_size(80, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let chosen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let chosen_ok = chosen.clone();
    let list_ok = list.clone();
    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        let line = list_ok.value();
        if line > 0 {
            *chosen_ok.borrow_mut() = list_ok.text(line);
        }
        dialog_ok.clone().hide();
    });

    // Double-click picks immediately
    let mut ok_dbl = ok_btn.clone();
    list.set_callback(move |_| {
        if app::event() == Event::Released && app::event_clicks() {
            ok_dbl.do_callback();
        }
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    run_dialog(&dialog);

    let picked = chosen.borrow_mut().take();
    picked.filter(|name| name != current)
}
