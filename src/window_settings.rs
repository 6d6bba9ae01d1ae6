// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use app_config::AppConfig;
use bevy::{
    prelude::*,
    window::{
        PrimaryWindow, WindowCloseRequested, WindowMoved, WindowResizeConstraints, WindowResized,
    },
};

pub const MIN_WIDTH: f32 = 640.0;
pub const MIN_HEIGHT: f32 = 480.0;

/// Restores the primary window's size and position from the previous session, and saves them
/// again when the app exits.
pub struct WindowSettingsPlugin;

impl Plugin for WindowSettingsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_app_config())
            .add_systems(Startup, apply_initial_window_settings)
            .add_systems(
                Update,
                (update_window_settings, save_window_settings_on_exit).chain(),
            );
    }
}

fn load_app_config() -> AppConfig {
    let mut config = match AppConfig::in_platform_dir("org", "shape-drag", crate::APP_NAME) {
        Ok(config) => config,
        Err(err) => {
            warn!("Window settings will not be remembered: {err}");
            return AppConfig::default();
        }
    };
    if let Err(err) = config.load() {
        error!("Failed to load window settings: {err}");
    }
    config
}

fn apply_initial_window_settings(
    config: Res<AppConfig>,
    mut primary_window: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = primary_window.single_mut() else {
        return;
    };
    debug!("Initial {:?}", *config);

    window.resize_constraints = WindowResizeConstraints {
        min_width: MIN_WIDTH,
        min_height: MIN_HEIGHT,
        ..default()
    };
    if let Some(size) = config.window_resolution
        && size.x > 0.0
        && size.y > 0.0
    {
        window
            .resolution
            .set(size.x.max(MIN_WIDTH), size.y.max(MIN_HEIGHT));
    }
    if let Some(position) = config.window_position {
        window.position = WindowPosition::At(position);
    }
}

fn update_window_settings(
    mut resize_events: EventReader<WindowResized>,
    mut move_events: EventReader<WindowMoved>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
    mut config: ResMut<AppConfig>,
) {
    let Ok(primary) = primary_window.single() else {
        resize_events.clear();
        move_events.clear();
        return;
    };
    if let Some(resized) = resize_events.read().filter(|e| e.window == primary).last() {
        config.window_resolution = Some(Vec2::new(resized.width, resized.height));
    }
    if let Some(moved) = move_events.read().filter(|e| e.window == primary).last() {
        config.window_position = Some(moved.position);
    }
}

fn save_window_settings_on_exit(
    config: Res<AppConfig>,
    mut app_exit_events: EventReader<AppExit>,
    mut close_events: EventReader<WindowCloseRequested>,
) {
    let exiting = app_exit_events.read().count() > 0;
    let closing = close_events.read().count() > 0;
    if !exiting && !closing {
        return;
    }
    if config.db_path.is_none() {
        return;
    }

    debug!("Saving window settings before exit...");
    if let Err(err) = config.save() {
        error!("Failed to save window settings: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(config: AppConfig) -> (App, Entity) {
        let mut app = App::new();
        app.insert_resource(config)
            .add_event::<WindowResized>()
            .add_event::<WindowMoved>()
            .add_event::<WindowCloseRequested>()
            .add_systems(Startup, apply_initial_window_settings)
            .add_systems(
                Update,
                (update_window_settings, save_window_settings_on_exit).chain(),
            );
        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        (app, window)
    }

    // -- restoring --

    #[test]
    fn stored_geometry_is_applied_at_startup() {
        let config = AppConfig {
            window_resolution: Some(Vec2::new(1024.0, 768.0)),
            window_position: Some(IVec2::new(30, 40)),
            db_path: None,
        };
        let (mut app, window) = test_app(config);
        app.update();

        let window = app.world().get::<Window>(window).unwrap();
        assert_eq!(window.resolution.width(), 1024.0);
        assert_eq!(window.resolution.height(), 768.0);
        assert_eq!(window.position, WindowPosition::At(IVec2::new(30, 40)));
        assert_eq!(window.resize_constraints.min_width, MIN_WIDTH);
    }

    #[test]
    fn tiny_stored_sizes_are_raised_to_the_minimum() {
        let config = AppConfig {
            window_resolution: Some(Vec2::new(100.0, 50.0)),
            ..default()
        };
        let (mut app, window) = test_app(config);
        app.update();

        let window = app.world().get::<Window>(window).unwrap();
        assert_eq!(window.resolution.width(), MIN_WIDTH);
        assert_eq!(window.resolution.height(), MIN_HEIGHT);
    }

    // -- recording --

    #[test]
    fn resizes_and_moves_of_the_primary_window_are_recorded() {
        let (mut app, window) = test_app(AppConfig::default());
        let other = app.world_mut().spawn(Window::default()).id();
        app.update();

        app.world_mut().send_event(WindowResized {
            window,
            width: 900.0,
            height: 700.0,
        });
        app.world_mut().send_event(WindowResized {
            window: other,
            width: 10.0,
            height: 10.0,
        });
        app.world_mut().send_event(WindowMoved {
            window,
            position: IVec2::new(-5, 12),
        });
        app.update();

        let config = app.world().resource::<AppConfig>();
        assert_eq!(config.window_resolution, Some(Vec2::new(900.0, 700.0)));
        assert_eq!(config.window_position, Some(IVec2::new(-5, 12)));
    }

    // -- saving --

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn closing_the_window_saves_the_settings() {
        let dir = std::env::temp_dir().join(format!("shape-drag-window-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let (mut app, window) = test_app(AppConfig::with_storage_dir(&dir).unwrap());
        app.update();

        app.world_mut().send_event(WindowResized {
            window,
            width: 1280.0,
            height: 720.0,
        });
        app.world_mut().send_event(WindowCloseRequested { window });
        app.update();

        let mut reloaded = AppConfig::with_storage_dir(&dir).unwrap();
        reloaded.load().unwrap();
        assert_eq!(reloaded.window_resolution, Some(Vec2::new(1280.0, 720.0)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}

// End of File
