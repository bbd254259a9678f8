//! Standalone demo: opens a window with the swatch wheel.
//!
//! `RUST_LOG=floem_swatch=trace` logs the raster pass and every pick.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_swatch::{SwatchList, swatch_wheel};

fn main() {
    env_logger::init();

    let selections = RwSignal::new(SwatchList::new());

    floem::Application::new()
        .window(
            move |_| {
                swatch_wheel(selections).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 520.0))
                    .title("floem-swatch"),
            ),
        )
        .run();
}
