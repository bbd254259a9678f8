//! # floem-swatch
//!
//! A click-to-collect color wheel widget for [Floem](https://github.com/lapce/floem).
//!
//! Renders a circular hue/saturation wheel. Every click inside the disk
//! picks the color under the pointer, drops a circular marker where it was
//! picked, and appends a row with the color's hex code to the list below
//! the wheel. Clicks outside the disk are ignored.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_swatch::{swatch_wheel, SwatchList};
//!
//! let selections = RwSignal::new(SwatchList::new());
//! // Use `swatch_wheel(selections)` in your Floem view tree.
//! ```

mod color_wheel;
mod constants;
mod math;
mod picker;
mod swatch;

pub use swatch::{Swatch, SwatchList};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the color wheel picker view.
///
/// Every pick appends a [`Swatch`] to `selections`; the host application
/// keeps ownership of the signal and can read the accumulated picks at any
/// time. The list is only ever appended to — pass a fresh [`SwatchList`]
/// to start over.
pub fn swatch_wheel(selections: RwSignal<SwatchList>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker_panel(selections)
}
