// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

pub const APP_NAME: &str = "Shape Drag";

mod app;
pub use app::AppPlugin;

mod hud;
pub use hud::HudPlugin;

mod platform;
pub use platform::bevy::PlatformTweaks;

mod platform_impl;

mod scene;
pub use scene::{SCENE_LAYOUT, ScenePlugin, ShapeKind, SceneShape};

mod start;
pub use start::start;

mod window_settings;
pub use window_settings::WindowSettingsPlugin;

// End of File
