//! Standalone demo: opens a window with the color picker.
//!
//! Run with `RUST_LOG=debug` to watch the emitted hex values.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_shade::shade_picker;

fn main() {
    env_logger::init();

    let hex = RwSignal::new("#e4bd18".to_string());

    floem::Application::new()
        .window(
            move |_| {
                shade_picker(hex).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 260.0))
                    .title("floem-shade"),
            ),
        )
        .run();
}
