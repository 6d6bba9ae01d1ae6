// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{NormalizedPointer, SceneRole};
use bevy::math::{Affine3A, Dir3, Mat4, Ray3d, Vec3};

/// A single ray intersection, as reported by a [`Picker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<E> {
    pub entity: E,
    pub role: SceneRole,
    /// World-space position where the ray meets the entity.
    pub point: Vec3,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
}

/// Answers "what is under this pointer?" for some scene.
///
/// Implementations return every entity the pointer ray intersects, nearest first.  A ray that
/// hits nothing (or a scene with nothing in it) yields an empty list.
pub trait Picker<E> {
    fn intersect(&mut self, pointer: NormalizedPointer) -> Vec<Hit<E>>;
}

/// The parts of a camera needed to turn a normalized pointer into a world-space ray.
#[derive(Clone, Copy, Debug)]
pub struct PickingCamera {
    world_from_view: Affine3A,
    view_from_clip: Option<Mat4>,
}

impl PickingCamera {
    pub fn new(world_from_view: Affine3A, clip_from_view: Mat4) -> Self {
        let invertible = clip_from_view.determinant();
        let view_from_clip = (invertible != 0.0 && invertible.is_finite())
            .then(|| clip_from_view.inverse());
        PickingCamera {
            world_from_view,
            view_from_clip,
        }
    }

    /// A camera at `eye` looking at `target` with +Y up.
    pub fn looking_at(eye: Vec3, target: Vec3, clip_from_view: Mat4) -> Self {
        let view_from_world = Affine3A::look_at_rh(eye, target, Vec3::Y);
        PickingCamera::new(view_from_world.inverse(), clip_from_view)
    }

    pub fn position(&self) -> Vec3 {
        self.world_from_view.translation.into()
    }

    /// Builds the ray starting at the camera and passing through the pointer.
    ///
    /// Returns `None` when the projection cannot be inverted.
    pub fn ray_through(&self, pointer: NormalizedPointer) -> Option<Ray3d> {
        let view_from_clip = self.view_from_clip?;
        let ndc = pointer.ndc();
        // Any depth strictly inside the clip volume works for a perspective projection, whatever
        // its depth convention.
        let in_view = view_from_clip.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        let through = self.world_from_view.transform_point3(in_view);
        let origin = self.position();
        let direction = Dir3::new(through - origin).ok()?;
        Some(Ray3d::new(origin, direction))
    }
}


// End of File
