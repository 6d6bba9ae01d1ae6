// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Native platforms need no tweaks: there is no context menu to suppress, and the window
//! resizes its own surface.

use bevy::app::App;

/// Does nothing on platforms which don't need customization.
pub(crate) fn tweak_bevy_app(app: &mut App) {
    let _ = app;
}

// End of File
