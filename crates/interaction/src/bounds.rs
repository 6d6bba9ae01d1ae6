// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{DragMove, Hit, NormalizedPointer, Picker, PickingCamera, SceneRole};
use bevy::math::{
    Vec3,
    bounding::{Aabb3d, BoundingSphere, RayCast3d},
};

/// The bounding volume of a [`SceneObject`], centered on the object's translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// An axis-aligned box with the given half extents.  Also used for cylinders.
    Cuboid { half_size: Vec3 },
    Ball { radius: f32 },
}

impl Bounds {
    fn distance_along(&self, cast: &RayCast3d, translation: Vec3) -> Option<f32> {
        match *self {
            Bounds::Cuboid { half_size } => {
                cast.aabb_intersection_at(&Aabb3d::new(translation, half_size))
            }
            Bounds::Ball { radius } => {
                cast.sphere_intersection_at(&BoundingSphere::new(translation, radius))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObject<E> {
    pub entity: E,
    pub role: SceneRole,
    pub translation: Vec3,
    pub bounds: Bounds,
}

/// A scene registry that answers ray queries analytically against bounding volumes.
///
/// This is coarser than picking against triangles, but needs no meshes or GPU, which makes it the
/// picker of choice for exercising the drag logic outside of a running app.
#[derive(Clone, Debug)]
pub struct BoundsScene<E> {
    camera: PickingCamera,
    objects: Vec<SceneObject<E>>,
    max_distance: f32,
}

impl<E: Copy + PartialEq> BoundsScene<E> {
    pub fn new(camera: PickingCamera) -> Self {
        BoundsScene {
            camera,
            objects: Vec::new(),
            max_distance: f32::MAX,
        }
    }

    /// Ignore anything farther than `max_distance` from the camera, like a far clip plane.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn insert(&mut self, entity: E, role: SceneRole, translation: Vec3, bounds: Bounds) {
        self.objects.push(SceneObject {
            entity,
            role,
            translation,
            bounds,
        });
    }

    pub fn objects(&self) -> &[SceneObject<E>] {
        &self.objects
    }

    pub fn translation(&self, entity: E) -> Option<Vec3> {
        self.object(entity).map(|object| object.translation)
    }

    /// Moves the entity the drag step refers to.  Returns `false` if it is not in the scene.
    pub fn apply(&mut self, step: &DragMove<E>) -> bool {
        match self.objects.iter_mut().find(|o| o.entity == step.entity) {
            Some(object) => {
                step.apply(&mut object.translation);
                true
            }
            None => false,
        }
    }

    fn object(&self, entity: E) -> Option<&SceneObject<E>> {
        self.objects.iter().find(|o| o.entity == entity)
    }
}

impl<E: Copy + PartialEq> Picker<E> for BoundsScene<E> {
    fn intersect(&mut self, pointer: NormalizedPointer) -> Vec<Hit<E>> {
        let Some(ray) = self.camera.ray_through(pointer) else {
            return Vec::new();
        };
        let cast = RayCast3d::from_ray(ray, self.max_distance);
        let mut hits: Vec<_> = self
            .objects
            .iter()
            .filter_map(|object| {
                let distance = object.bounds.distance_along(&cast, object.translation)?;
                Some(Hit {
                    entity: object.entity,
                    role: object.role,
                    point: ray.get_point(distance),
                    distance,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}


// End of File
