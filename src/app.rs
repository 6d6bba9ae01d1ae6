// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{HudPlugin, ScenePlugin, WindowSettingsPlugin};
use bevy::prelude::*;
use interaction::prelude::InteractionPlugin;

/// Everything that makes up the application, on top of Bevy's default plugins.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            WindowSettingsPlugin,
            ScenePlugin,
            InteractionPlugin::default(),
            HudPlugin,
        ));
    }
}

// End of File
