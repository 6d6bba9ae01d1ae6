// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use interaction::Dragger;

/// An overlay in the top-left corner showing the frame rate and what is being dragged.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(Startup, setup_hud)
            .add_systems(Update, (update_fps_display, update_drag_display));
    }
}

// Component to mark the FPS text entity
#[derive(Component)]
struct FpsText;

// Component to mark the drag status text entity
#[derive(Component)]
struct DragText;

fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(5.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        ))
        .with_children(|parent| {
            let font = TextFont {
                font_size: 16.0,
                ..default()
            };
            parent.spawn((
                Text::new("FPS: --"),
                font.clone(),
                TextColor(Color::WHITE),
                FpsText,
            ));
            parent.spawn((
                Text::new(drag_status(None)),
                font,
                TextColor(Color::WHITE),
                DragText,
            ));
        });
}

fn drag_status(held: Option<&str>) -> String {
    match held {
        Some(name) => format!("Dragging {name}, click to drop"),
        None => "Click a shape to pick it up".to_owned(),
    }
}

fn update_fps_display(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    if let Ok(mut text) = query.single_mut()
        && let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS)
        && let Some(value) = fps.smoothed()
    {
        text.0 = format!("FPS: {value:>4.1}");
    }
}

fn update_drag_display(
    dragger: Res<Dragger>,
    names: Query<&Name>,
    mut query: Query<&mut Text, With<DragText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };
    let held = dragger.held().and_then(|entity| names.get(entity).ok());
    let status = drag_status(held.map(Name::as_str));
    // Only touch the text when it changes, to avoid a relayout every frame.
    if text.0 != status {
        text.0 = status;
    }
}


// End of File
