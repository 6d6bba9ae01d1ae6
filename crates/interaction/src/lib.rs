// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Pointer-driven shape dragging
//!
//! This crate turns 2D pointer input into 3D scene manipulation.  Pixel coordinates from click and
//! move events are normalized by the [`PointerTracker`], a [`Picker`] casts a ray from the camera
//! through that coordinate, and the [`DragController`] decides what the hits mean: a click picks
//! up the nearest [`SceneRole::Draggable`] shape or drops the one being held, and every frame the
//! held shape slides to wherever the pointer ray first meets a [`SceneRole::GroundSurface`].
//!
//! The state machine and the coordinate math are plain Rust and know nothing about the ECS, so
//! they can be driven by the analytic [`BoundsScene`] in tests.  The [`InteractionPlugin`] wires
//! them into a Bevy app, using Bevy's mesh ray caster as the picker.

mod bounds;
pub use bounds::{Bounds, BoundsScene, SceneObject};

mod drag;
pub use drag::{ClickOutcome, DragController, DragMove, DragState, RecastPolicy, first_ground_hit};

mod picking;
pub use picking::{Hit, Picker, PickingCamera};

mod plugin;
pub use plugin::{Dragger, InteractionConfig, InteractionPlugin, InteractionSystems, MeshPicker};

mod pointer;
pub use pointer::{NormalizedPointer, PointerTracker};

mod role;
pub use role::SceneRole;

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::{Dragger, InteractionConfig, InteractionPlugin, RecastPolicy, SceneRole};
}

// End of File
