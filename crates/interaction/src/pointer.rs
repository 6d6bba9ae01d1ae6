// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

/// A pointer position in normalized device coordinates.
///
/// Both axes run from -1 to 1 across the viewport, with +Y pointing up.  Screen space has its
/// origin in the top-left corner and Y growing downward, so the Y axis is flipped during the
/// conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct NormalizedPointer(Vec2);

impl NormalizedPointer {
    pub const CENTER: Self = NormalizedPointer(Vec2::ZERO);

    pub fn new(ndc: Vec2) -> Self {
        NormalizedPointer(ndc)
    }

    /// Normalizes a pixel position against the size of the viewport it was measured in.
    pub fn from_pixels(pixel: Vec2, viewport: Vec2) -> Self {
        let viewport = usable_viewport(viewport);
        NormalizedPointer(Vec2::new(
            (pixel.x / viewport.x) * 2.0 - 1.0,
            -(pixel.y / viewport.y) * 2.0 + 1.0,
        ))
    }

    /// Maps the pointer back into pixel space for a viewport of the given size.
    pub fn to_pixels(self, viewport: Vec2) -> Vec2 {
        let viewport = usable_viewport(viewport);
        Vec2::new(
            (self.0.x + 1.0) * 0.5 * viewport.x,
            (1.0 - self.0.y) * 0.5 * viewport.y,
        )
    }

    pub fn ndc(self) -> Vec2 {
        self.0
    }
}

// A minimised window reports a zero-sized viewport.
fn usable_viewport(viewport: Vec2) -> Vec2 {
    viewport.max(Vec2::ONE)
}

/// Keeps the latest normalized pointer positions, one for clicks and one for movement.
///
/// Clicks and moves are tracked separately: the click position is only consulted when picking
/// something up, while the move position steers the held shape on every frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    viewport: Vec2,
    click: NormalizedPointer,
    moved: NormalizedPointer,
}

impl PointerTracker {
    pub fn new(viewport: Vec2) -> Self {
        PointerTracker {
            viewport,
            ..default()
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Records a click at the given pixel position and returns its normalized coordinate.
    pub fn clicked(&mut self, pixel: Vec2) -> NormalizedPointer {
        self.click = NormalizedPointer::from_pixels(pixel, self.viewport);
        self.click
    }

    /// Records pointer movement to the given pixel position.
    pub fn moved_to(&mut self, pixel: Vec2) -> NormalizedPointer {
        self.moved = NormalizedPointer::from_pixels(pixel, self.viewport);
        self.moved
    }

    /// The most recent click, which stays put while the pointer moves on.
    pub fn last_click(&self) -> NormalizedPointer {
        self.click
    }

    pub fn last_move(&self) -> NormalizedPointer {
        self.moved
    }
}


// End of File
