// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Hit, NormalizedPointer, Picker};
use bevy::math::Vec3;

/// Whether a shape is currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState<E> {
    #[default]
    Idle,
    Dragging(E),
}

/// How often the held shape is re-projected onto the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecastPolicy {
    /// Cast a ray on every frame while dragging.
    #[default]
    EveryFrame,
    /// Only cast when the pointer moved since the previous frame, or right after a pick.
    OnPointerChange,
}

/// What a click did to the drag state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome<E> {
    /// The nearest hit was draggable and is now held.
    PickedUp(E),
    /// The held shape was let go.
    Dropped(E),
    /// The nearest hit was not draggable.  Nothing changed.
    NotDraggable(E),
    /// Nothing under the pointer.  Nothing changed.
    Missed,
    /// A shape is already held, so nothing was picked.
    Holding(E),
}

/// One frame's worth of movement for the held shape: its new ground position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMove<E> {
    pub entity: E,
    /// Where the pointer ray met the ground.
    pub target: Vec3,
}

impl<E> DragMove<E> {
    /// Moves `translation` over the target horizontally.  Height is kept, so dragging never lifts
    /// or sinks a shape.
    pub fn apply(&self, translation: &mut Vec3) {
        translation.x = self.target.x;
        translation.z = self.target.z;
    }
}

/// Returns the nearest hit on a ground surface, skipping anything in front of it.
///
/// When ground surfaces overlap along the ray (a floor above a water plane, say) this is the one
/// nearest the camera, not necessarily the topmost.
pub fn first_ground_hit<E>(hits: &[Hit<E>]) -> Option<&Hit<E>> {
    hits.iter().find(|hit| hit.role.is_ground())
}

/// The pick/drop/move state machine.
///
/// At most one shape is held at a time.  A click while idle picks up the nearest hit if it is
/// draggable; any click while dragging drops.  [`DragController::advance`] is meant to run once
/// per frame and reports where the held shape should move.
#[derive(Clone, Debug)]
pub struct DragController<E> {
    state: DragState<E>,
    policy: RecastPolicy,
    // Pointer used by the last ray cast in `advance`, cleared on pick and drop.
    last_cast: Option<NormalizedPointer>,
}

impl<E> Default for DragController<E> {
    fn default() -> Self {
        DragController::with_policy(RecastPolicy::default())
    }
}

impl<E: Copy + PartialEq> DragController<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState<E> {
        self.state
    }

    pub fn held(&self) -> Option<E> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(entity) => Some(entity),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn policy(&self) -> RecastPolicy {
        self.policy
    }

    /// Tries to pick up whatever is nearest under the pointer.
    ///
    /// Only has an effect while idle; a shape that is already held stays held.
    pub fn pick(
        &mut self,
        picker: &mut impl Picker<E>,
        pointer: NormalizedPointer,
    ) -> ClickOutcome<E> {
        if let DragState::Dragging(entity) = self.state {
            return ClickOutcome::Holding(entity);
        }
        let hits = picker.intersect(pointer);
        match hits.first() {
            Some(hit) if hit.role.is_draggable() => {
                self.state = DragState::Dragging(hit.entity);
                self.last_cast = None;
                ClickOutcome::PickedUp(hit.entity)
            }
            Some(hit) => ClickOutcome::NotDraggable(hit.entity),
            None => ClickOutcome::Missed,
        }
    }

    /// Lets go of the held shape, returning it.  Dropping while idle does nothing.
    pub fn drop(&mut self) -> Option<E> {
        let held = self.held();
        self.state = DragState::Idle;
        self.last_cast = None;
        held
    }

    /// Handles a click: drop if something is held, otherwise try to pick.
    ///
    /// The click that drops never picks something else up in the same go.
    pub fn click(
        &mut self,
        picker: &mut impl Picker<E>,
        pointer: NormalizedPointer,
    ) -> ClickOutcome<E> {
        match self.drop() {
            Some(entity) => ClickOutcome::Dropped(entity),
            None => self.pick(picker, pointer),
        }
    }

    /// Per-frame step: project the pointer onto the ground and report where the held shape goes.
    ///
    /// Returns `None` while idle (without casting a ray), when the pointer ray misses every ground
    /// surface, or when the recast policy decides nothing changed since the last frame.
    pub fn advance(
        &mut self,
        picker: &mut impl Picker<E>,
        pointer: NormalizedPointer,
    ) -> Option<DragMove<E>> {
        let entity = self.held()?;
        if self.policy == RecastPolicy::OnPointerChange && self.last_cast == Some(pointer) {
            return None;
        }
        self.last_cast = Some(pointer);

        let hits = picker.intersect(pointer);
        first_ground_hit(&hits).map(|hit| DragMove {
            entity,
            target: hit.point,
        })
    }
}

impl<E> DragController<E> {
    pub fn with_policy(policy: RecastPolicy) -> Self {
        DragController {
            state: DragState::Idle,
            policy,
            last_cast: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneRole;
    use bevy::math::Vec2;

    /// Replays a fixed list of hits and counts how often it was asked.
    struct ScriptedPicker {
        hits: Vec<Hit<u32>>,
        casts: usize,
    }

    impl ScriptedPicker {
        fn new(hits: Vec<Hit<u32>>) -> Self {
            ScriptedPicker { hits, casts: 0 }
        }
    }

    impl Picker<u32> for ScriptedPicker {
        fn intersect(&mut self, _pointer: NormalizedPointer) -> Vec<Hit<u32>> {
            self.casts += 1;
            self.hits.clone()
        }
    }

    fn hit(entity: u32, role: SceneRole, point: Vec3, distance: f32) -> Hit<u32> {
        Hit {
            entity,
            role,
            point,
            distance,
        }
    }

    const BOX: u32 = 1;
    const FLOOR: u32 = 2;
    const WATER: u32 = 3;
    const MARKER: u32 = 4;

    // -- click tests --

    #[test]
    fn click_on_nothing_stays_idle() {
        let mut controller = DragController::new();
        let mut picker = ScriptedPicker::new(vec![]);
        let outcome = controller.click(&mut picker, NormalizedPointer::CENTER);
        assert_eq!(outcome, ClickOutcome::Missed);
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn click_on_ground_stays_idle() {
        let mut controller = DragController::new();
        let mut picker =
            ScriptedPicker::new(vec![hit(FLOOR, SceneRole::GroundSurface, Vec3::ZERO, 5.0)]);
        let outcome = controller.click(&mut picker, NormalizedPointer::CENTER);
        assert_eq!(outcome, ClickOutcome::NotDraggable(FLOOR));
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn only_the_nearest_hit_is_considered_for_picking() {
        // A decoration in front of the box shields it from the click.
        let mut controller = DragController::new();
        let mut picker = ScriptedPicker::new(vec![
            hit(MARKER, SceneRole::Decoration, Vec3::ZERO, 1.0),
            hit(BOX, SceneRole::Draggable, Vec3::ZERO, 2.0),
        ]);
        controller.click(&mut picker, NormalizedPointer::CENTER);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn click_picks_up_then_drops() {
        let mut controller = DragController::new();
        let mut picker = ScriptedPicker::new(vec![
            hit(BOX, SceneRole::Draggable, Vec3::ZERO, 1.0),
            hit(FLOOR, SceneRole::GroundSurface, Vec3::ZERO, 2.0),
        ]);
        assert_eq!(
            controller.click(&mut picker, NormalizedPointer::CENTER),
            ClickOutcome::PickedUp(BOX)
        );
        assert_eq!(controller.state(), DragState::Dragging(BOX));

        // The dropping click lands on the box again, but must not pick it back up.
        assert_eq!(
            controller.click(&mut picker, NormalizedPointer::CENTER),
            ClickOutcome::Dropped(BOX)
        );
        assert_eq!(controller.state(), DragState::Idle);
        assert_eq!(picker.casts, 1);
    }

    #[test]
    fn drop_while_idle_is_a_no_op() {
        let mut controller = DragController::<u32>::new();
        assert_eq!(controller.drop(), None);
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn pick_while_dragging_keeps_the_held_shape() {
        let mut controller = DragController::new();
        let mut picker =
            ScriptedPicker::new(vec![hit(BOX, SceneRole::Draggable, Vec3::ZERO, 1.0)]);
        controller.pick(&mut picker, NormalizedPointer::CENTER);

        let mut other = ScriptedPicker::new(vec![hit(9, SceneRole::Draggable, Vec3::ZERO, 1.0)]);
        assert_eq!(
            controller.pick(&mut other, NormalizedPointer::CENTER),
            ClickOutcome::Holding(BOX)
        );
        assert_eq!(controller.held(), Some(BOX));
        assert_eq!(other.casts, 0);
    }

    // -- advance tests --

    fn dragging_box() -> DragController<u32> {
        let mut controller = DragController::new();
        let mut picker =
            ScriptedPicker::new(vec![hit(BOX, SceneRole::Draggable, Vec3::ZERO, 1.0)]);
        controller.pick(&mut picker, NormalizedPointer::CENTER);
        controller
    }

    #[test]
    fn advance_moves_to_the_ground_hit_keeping_height() {
        let mut controller = dragging_box();
        let mut picker = ScriptedPicker::new(vec![hit(
            FLOOR,
            SceneRole::GroundSurface,
            Vec3::new(10.0, -1.0, 20.0),
            30.0,
        )]);
        let step = controller
            .advance(&mut picker, NormalizedPointer::CENTER)
            .unwrap();
        assert_eq!(step.entity, BOX);

        let mut translation = Vec3::new(15.0, 3.0, 15.0);
        step.apply(&mut translation);
        assert_eq!(translation, Vec3::new(10.0, 3.0, 20.0));
    }

    #[test]
    fn advance_skips_non_ground_hits() {
        let mut controller = dragging_box();
        let mut picker = ScriptedPicker::new(vec![
            hit(BOX, SceneRole::Draggable, Vec3::new(1.0, 3.0, 1.0), 10.0),
            hit(MARKER, SceneRole::Decoration, Vec3::new(2.0, 1.0, 2.0), 12.0),
            hit(FLOOR, SceneRole::GroundSurface, Vec3::new(3.0, 0.0, 3.0), 14.0),
        ]);
        let step = controller
            .advance(&mut picker, NormalizedPointer::CENTER)
            .unwrap();
        assert_eq!(step.target, Vec3::new(3.0, 0.0, 3.0));
    }

    #[test]
    fn advance_without_ground_does_nothing() {
        let mut controller = dragging_box();
        let mut picker =
            ScriptedPicker::new(vec![hit(MARKER, SceneRole::Decoration, Vec3::ZERO, 1.0)]);
        assert_eq!(controller.advance(&mut picker, NormalizedPointer::CENTER), None);
        assert!(controller.is_dragging());
    }

    #[test]
    fn advance_while_idle_never_casts() {
        let mut controller = DragController::new();
        let mut picker =
            ScriptedPicker::new(vec![hit(FLOOR, SceneRole::GroundSurface, Vec3::ONE, 1.0)]);
        for _ in 0..3 {
            assert_eq!(controller.advance(&mut picker, NormalizedPointer::CENTER), None);
        }
        assert_eq!(picker.casts, 0);
    }

    #[test]
    fn overlapping_ground_resolves_in_ray_order() {
        // Floor and water both lie under the pointer.  The floor is nearer along the ray, so it
        // wins even though the water might be the intended target.  This is ray-order resolution,
        // not topmost-surface resolution.
        let mut controller = dragging_box();
        let mut picker = ScriptedPicker::new(vec![
            hit(FLOOR, SceneRole::GroundSurface, Vec3::new(4.0, 0.0, 4.0), 20.0),
            hit(WATER, SceneRole::GroundSurface, Vec3::new(5.0, -1.5, 5.0), 22.0),
        ]);
        let step = controller
            .advance(&mut picker, NormalizedPointer::CENTER)
            .unwrap();
        assert_eq!(step.target, Vec3::new(4.0, 0.0, 4.0));
    }

    // -- recast policy tests --

    #[test]
    fn every_frame_policy_recasts_a_still_pointer() {
        let mut controller = dragging_box();
        let mut picker =
            ScriptedPicker::new(vec![hit(FLOOR, SceneRole::GroundSurface, Vec3::ONE, 1.0)]);
        for _ in 0..3 {
            assert!(controller.advance(&mut picker, NormalizedPointer::CENTER).is_some());
        }
        assert_eq!(picker.casts, 3);
    }

    #[test]
    fn pointer_change_policy_skips_a_still_pointer() {
        let mut controller = DragController::with_policy(RecastPolicy::OnPointerChange);
        let mut picker = ScriptedPicker::new(vec![
            hit(BOX, SceneRole::Draggable, Vec3::ZERO, 1.0),
            hit(FLOOR, SceneRole::GroundSurface, Vec3::ONE, 2.0),
        ]);
        controller.click(&mut picker, NormalizedPointer::CENTER);
        assert_eq!(picker.casts, 1);

        // The pointer has not moved since the pick, but the first frame still projects it.
        assert!(controller.advance(&mut picker, NormalizedPointer::CENTER).is_some());
        assert!(controller.advance(&mut picker, NormalizedPointer::CENTER).is_none());
        assert_eq!(picker.casts, 2);

        let moved = NormalizedPointer::new(Vec2::new(0.25, 0.0));
        assert!(controller.advance(&mut picker, moved).is_some());
        assert_eq!(picker.casts, 3);
    }

    #[test]
    fn pointer_change_policy_recasts_after_a_new_pick() {
        let mut controller = DragController::with_policy(RecastPolicy::OnPointerChange);
        let mut picker = ScriptedPicker::new(vec![
            hit(BOX, SceneRole::Draggable, Vec3::ZERO, 1.0),
            hit(FLOOR, SceneRole::GroundSurface, Vec3::ONE, 2.0),
        ]);
        controller.click(&mut picker, NormalizedPointer::CENTER);
        controller.advance(&mut picker, NormalizedPointer::CENTER);
        controller.click(&mut picker, NormalizedPointer::CENTER);
        controller.click(&mut picker, NormalizedPointer::CENTER);
        assert!(controller.advance(&mut picker, NormalizedPointer::CENTER).is_some());
    }
}

// End of File
