// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// What part an entity plays in the drag interaction.
///
/// Every pickable entity carries exactly one role.  Entities without a role component are treated
/// as [`SceneRole::Decoration`] by the pickers: they still occlude, but can neither be picked up
/// nor dropped onto.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum SceneRole {
    /// Can be picked up by a click and dragged around.
    Draggable,
    /// A horizontal surface that receives drop positions while dragging.
    GroundSurface,
    /// Scenery.  Blocks clicks, but is skipped when looking for the ground.
    #[default]
    Decoration,
}

impl SceneRole {
    pub fn is_draggable(self) -> bool {
        matches!(self, SceneRole::Draggable)
    }

    pub fn is_ground(self) -> bool {
        matches!(self, SceneRole::GroundSurface)
    }
}

// End of File
