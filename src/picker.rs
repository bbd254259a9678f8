//! Picker panel: the color wheel above the running list of picked swatches.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color_wheel::color_wheel;
use crate::constants;
use crate::swatch::{Swatch, SwatchList};

/// Creates the panel: wheel on top, one row per pick below, in pick order.
pub(crate) fn picker_panel(selections: RwSignal<SwatchList>) -> impl IntoView {
    v_stack((
        color_wheel(selections).style(|s| s.margin_top(12.0)),
        swatch_rows(selections),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}

/// Pure projection of the selection list; rows are keyed by pick index and
/// only ever added, never edited.
fn swatch_rows(selections: RwSignal<SwatchList>) -> impl IntoView {
    dyn_stack(
        move || selections.get().into_iter().enumerate().collect::<Vec<_>>(),
        |(i, _)| *i,
        |(_, swatch)| swatch_row(swatch),
    )
    .style(|s| s.flex_col().gap(constants::GAP / 2.0).items_center())
}

fn swatch_row(swatch: Swatch) -> impl IntoView {
    let (r, g, b) = swatch.rgb();
    let hex = swatch.hex().to_string();
    let hex_label = hex.clone();

    h_stack((
        empty().style(move |s| {
            s.width(constants::CHIP_SIZE)
                .height(constants::CHIP_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(r, g, b))
        }),
        label(move || hex_label.clone()).style(|s| {
            s.font_size(constants::HEX_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(60, 60, 60))
        }),
        copy_button(move || hex.clone()),
    ))
    .style(|st| st.gap(constants::GAP).items_center().justify_center())
}

/// A small copy button that copies the result of `get_text` to the clipboard.
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
