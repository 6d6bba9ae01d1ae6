// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};

/// Keeps the browser's context menu from popping up over the scene on right-click.  The canvas
/// already follows the browser window's size through `Window::fit_canvas_to_parent`.
pub(crate) fn tweak_bevy_app(app: &mut App) {
    app.add_systems(Startup, suppress_context_menu);
}

fn suppress_context_menu() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("No browser document; the context menu stays enabled.");
        return;
    };
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        event.prevent_default();
    });
    if let Err(err) =
        document.add_event_listener_with_callback("contextmenu", handler.as_ref().unchecked_ref())
    {
        warn!("Failed to suppress the context menu: {err:?}");
    }
    // The listener lives as long as the page, so the closure must too.
    handler.forget();
}

// End of File
