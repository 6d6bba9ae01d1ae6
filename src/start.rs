// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{APP_NAME, AppPlugin, PlatformTweaks};
use bevy::{
    log::{Level, LogPlugin},
    prelude::*,
    window::PresentMode,
};

/// Logging defaults to `Info` in debug builds and `Warn` in release builds.  Either can be
/// overridden through `RUST_LOG`, e.g. `RUST_LOG=shape_drag=debug,interaction=debug`.
fn log_plugin() -> LogPlugin {
    let level = if cfg!(debug_assertions) {
        Level::INFO
    } else {
        Level::WARN
    };
    LogPlugin {
        level,
        filter: "wgpu=error,naga=warn".to_owned(),
        ..default()
    }
}

pub fn start() -> AppExit {
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: APP_NAME.into(),
            present_mode: PresentMode::AutoVsync,
            canvas: Some("#bevy".to_owned()), // Web only.
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true, // Keep browser shortcuts away from the scene.
            ..default()
        }),
        ..default()
    };

    let default_plugins = DefaultPlugins.set(window_plugin).set(log_plugin());

    App::new()
        .add_plugins(default_plugins)
        .add_plugins(PlatformTweaks)
        .add_plugins(AppPlugin)
        .run()
}

// End of File
