// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{
    ClickOutcome, DragController, DragMove, Hit, NormalizedPointer, Picker, PickingCamera, PointerTracker,
    RecastPolicy, SceneRole,
};
use bevy::{
    ecs::system::SystemParam,
    input::{ButtonState, mouse::MouseButtonInput},
    picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility},
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};

/// Settings for the drag interaction.
#[derive(Resource, Clone, Copy, Debug)]
pub struct InteractionConfig {
    /// The mouse button whose clicks pick up and drop shapes.
    pub button: MouseButton,
    pub recast: RecastPolicy,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        InteractionConfig {
            button: MouseButton::Left,
            recast: RecastPolicy::EveryFrame,
        }
    }
}

/// The drag state machine of the running app, tracking entities.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Dragger(pub DragController<Entity>);

/// The interaction systems, which run in this order every frame.
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionSystems {
    /// Keep the pointer tracker's viewport and pointer positions current.
    TrackPointer,
    /// Pick up or drop shapes in response to clicks.
    HandleClicks,
    /// Move the held shape over the ground.
    Advance,
}

/// Adds pointer tracking, click handling and per-frame dragging to an app.
///
/// Entities take part in the interaction by carrying a [`SceneRole`] and a mesh; the `Name`
/// component, if present, is used in log messages.
#[derive(Default)]
pub struct InteractionPlugin {
    pub config: InteractionConfig,
}

impl InteractionPlugin {
    pub fn new(config: InteractionConfig) -> Self {
        InteractionPlugin { config }
    }
}

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneRole>()
            .insert_resource(self.config)
            .insert_resource(Dragger(DragController::with_policy(self.config.recast)))
            .init_resource::<PointerTracker>()
            .configure_sets(
                Update,
                (
                    InteractionSystems::TrackPointer,
                    InteractionSystems::HandleClicks,
                    InteractionSystems::Advance,
                )
                    .chain(),
            )
            .add_systems(Startup, init_viewport)
            .add_systems(
                Update,
                (
                    (track_viewport, track_pointer_moves)
                        .chain()
                        .in_set(InteractionSystems::TrackPointer),
                    handle_clicks.in_set(InteractionSystems::HandleClicks),
                    advance_drag.in_set(InteractionSystems::Advance),
                ),
            );
    }
}

/// Picks against the meshes in the world, using the single 3D camera.
#[derive(SystemParam)]
pub struct MeshPicker<'w, 's> {
    ray_cast: MeshRayCast<'w, 's>,
    cameras: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<Camera3d>>,
    roles: Query<'w, 's, &'static SceneRole>,
}

impl Picker<Entity> for MeshPicker<'_, '_> {
    fn intersect(&mut self, pointer: NormalizedPointer) -> Vec<Hit<Entity>> {
        let Ok((camera, camera_transform)) = self.cameras.single() else {
            return Vec::new();
        };
        let camera = PickingCamera::new(camera_transform.affine(), camera.clip_from_view());
        let Some(ray) = camera.ray_through(pointer) else {
            return Vec::new();
        };

        // Hidden shapes still count, and every hit along the ray is needed to find the ground.
        let settings = MeshRayCastSettings::default()
            .with_visibility(RayCastVisibility::Any)
            .never_early_exit();
        let roles = &self.roles;
        self.ray_cast
            .cast_ray(ray, &settings)
            .iter()
            .map(|(entity, hit)| Hit {
                entity: *entity,
                role: roles.get(*entity).copied().unwrap_or_default(),
                point: hit.point,
                distance: hit.distance,
            })
            .collect()
    }
}

fn init_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<PointerTracker>,
) {
    if let Ok(window) = windows.single() {
        tracker.resize(window.size());
    }
}

pub(crate) fn track_viewport(
    mut resized: EventReader<WindowResized>,
    mut tracker: ResMut<PointerTracker>,
) {
    for event in resized.read() {
        debug!("Viewport resized to {}x{}", event.width, event.height);
        tracker.resize(Vec2::new(event.width, event.height));
    }
}

pub(crate) fn track_pointer_moves(
    mut moved: EventReader<CursorMoved>,
    mut tracker: ResMut<PointerTracker>,
) {
    for event in moved.read() {
        tracker.moved_to(event.position);
    }
}

fn handle_clicks(
    mut buttons: EventReader<MouseButtonInput>,
    windows: Query<&Window>,
    names: Query<&Name>,
    config: Res<InteractionConfig>,
    mut tracker: ResMut<PointerTracker>,
    mut dragger: ResMut<Dragger>,
    mut picker: MeshPicker,
) {
    // A click completes when the button comes back up.
    for event in buttons.read() {
        if event.button != config.button || event.state != ButtonState::Released {
            continue;
        }
        let Some(cursor) = windows
            .get(event.window)
            .ok()
            .and_then(Window::cursor_position)
        else {
            continue;
        };

        let pointer = tracker.clicked(cursor);
        let label = |entity: Entity| {
            names
                .get(entity)
                .map_or_else(|_| entity.to_string(), |name| name.as_str().to_owned())
        };
        match dragger.click(&mut picker, pointer) {
            ClickOutcome::PickedUp(entity) => info!("found draggable {}", label(entity)),
            ClickOutcome::Dropped(entity) => info!("dropping draggable {}", label(entity)),
            ClickOutcome::NotDraggable(entity) => {
                debug!("clicked {}, which is not draggable", label(entity));
            }
            ClickOutcome::Missed => debug!("clicked on nothing"),
            ClickOutcome::Holding(entity) => debug!("still holding {}", label(entity)),
        }
    }
}

fn advance_drag(
    tracker: Res<PointerTracker>,
    mut dragger: ResMut<Dragger>,
    mut picker: MeshPicker,
    mut transforms: Query<&mut Transform>,
) {
    if let Some(step) = dragger.advance(&mut picker, tracker.last_move()) {
        move_held(step, &mut transforms);
    }
}

/// Writes one drag step into the held entity's transform.  Returns `false` if the entity has no
/// transform (it was despawned while held, say).
fn move_held(step: DragMove<Entity>, transforms: &mut Query<&mut Transform>) -> bool {
    let Ok(mut transform) = transforms.get_mut(step.entity) else {
        return false;
    };
    step.apply(&mut transform.translation);
    true
}


// End of File
