#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use clap::Parser;
use fltk::app;

use multi_pad::app::infrastructure::logging;
use multi_pad::app::{Lifecycle, Message, SessionController};
use multi_pad::cli::Cli;
use multi_pad::ui::platform::FltkPlatform;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let app = app::App::default();
    app::set_fonts("*");
    let (sender, receiver) = app::channel::<Message>();

    let mut controller = SessionController::new(
        Box::new(FltkPlatform::new(sender)),
        cli.settings_store(),
    );

    if cli.files.is_empty() {
        controller.create_window();
    } else {
        for path in &cli.files {
            controller.open_in_new_window(path);
        }
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            controller.dispatch(msg);
            if controller.lifecycle() == Lifecycle::ShuttingDown {
                break;
            }
        }
    }

    controller.terminate();
}
