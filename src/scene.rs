// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::{pbr::light_consts::lux, prelude::*};
use interaction::SceneRole;

const CLEAR_COLOR: u32 = 0xbfd1e5;
/// Bevy has no hemisphere light, so the ambient light carries its sky color.
const SKY_TINT: u32 = 0xffffbb;
const AMBIENT_BRIGHTNESS: f32 = 400.0;
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 50.0, 80.0);
const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

/// The geometry of a [`SceneShape`].  Sizes are full extents, not half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Cuboid { size: Vec3 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, height: f32 },
}

impl ShapeKind {
    pub fn mesh(&self) -> Mesh {
        match *self {
            ShapeKind::Cuboid { size } => Cuboid::from_size(size).into(),
            ShapeKind::Sphere { radius } => Sphere::new(radius).mesh().uv(32, 18),
            ShapeKind::Cylinder { radius, height } => {
                Cylinder::new(radius, height).mesh().resolution(32).into()
            }
        }
    }

    /// Distance from the shape's center to its lowest point.
    pub fn half_height(&self) -> f32 {
        match *self {
            ShapeKind::Cuboid { size } => size.y / 2.0,
            ShapeKind::Sphere { radius } => radius,
            ShapeKind::Cylinder { height, .. } => height / 2.0,
        }
    }
}

/// One entry of the scene layout.
#[derive(Clone, Copy, Debug)]
pub struct SceneShape {
    pub name: &'static str,
    pub role: SceneRole,
    pub kind: ShapeKind,
    pub translation: Vec3,
    /// 0xRRGGBB in sRGB.
    pub color: u32,
}

/// Everything in the scene besides the camera and lights.
///
/// The floor is an island in a much larger water plane that sits slightly lower.  The draggable
/// shapes rest on the floor's top face at y = 0.
pub static SCENE_LAYOUT: [SceneShape; 6] = [
    SceneShape {
        name: "FLOOR",
        role: SceneRole::GroundSurface,
        kind: ShapeKind::Cuboid {
            size: Vec3::new(100.0, 2.0, 100.0),
        },
        translation: Vec3::new(0.0, -1.0, 3.0),
        color: 0xf9c834,
    },
    SceneShape {
        name: "WATER",
        role: SceneRole::GroundSurface,
        kind: ShapeKind::Cuboid {
            size: Vec3::new(10000.0, 1.0, 10000.0),
        },
        translation: Vec3::new(0.0, -2.0, 0.0),
        color: 0x1284ff,
    },
    SceneShape {
        name: "BOX",
        role: SceneRole::Draggable,
        kind: ShapeKind::Cuboid {
            size: Vec3::splat(6.0),
        },
        translation: Vec3::new(15.0, 3.0, 15.0),
        color: 0xdc143c,
    },
    SceneShape {
        name: "SPHERE",
        role: SceneRole::Draggable,
        kind: ShapeKind::Sphere { radius: 4.0 },
        translation: Vec3::new(15.0, 4.0, -15.0),
        color: 0x43a1f4,
    },
    SceneShape {
        name: "CYLINDER",
        role: SceneRole::Draggable,
        kind: ShapeKind::Cylinder {
            radius: 4.0,
            height: 6.0,
        },
        translation: Vec3::new(-15.0, 3.0, 15.0),
        color: 0x90ee90,
    },
    SceneShape {
        name: "MARKER",
        role: SceneRole::Decoration,
        kind: ShapeKind::Cuboid { size: Vec3::ONE },
        translation: Vec3::new(0.0, 1.0, 0.0),
        color: 0xff0000,
    },
];

fn srgb_hex(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::srgb_u8(r, g, b)
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(srgb_hex(CLEAR_COLOR)))
            .insert_resource(AmbientLight {
                color: srgb_hex(SKY_TINT),
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .add_systems(Startup, (spawn_camera, spawn_lights, spawn_shapes));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("CAMERA"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_lights(mut commands: Commands) {
    // A soft key light from the front right, and a stronger one from behind on the left.
    commands.spawn((
        Name::new("SHADOW_LIGHT"),
        DirectionalLight {
            illuminance: lux::AMBIENT_DAYLIGHT * 0.5,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("SUN"),
        DirectionalLight {
            illuminance: lux::AMBIENT_DAYLIGHT,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-30.0, 50.0, -30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_shapes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for shape in &SCENE_LAYOUT {
        commands.spawn((
            Name::new(shape.name),
            shape.role,
            Mesh3d(meshes.add(shape.kind.mesh())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: srgb_hex(shape.color),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(shape.translation),
        ));
        debug!("Spawned {} as {:?}", shape.name, shape.role);
    }
}


// End of File
