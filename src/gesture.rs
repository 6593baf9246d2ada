//! Gesture tracker: horizontal drag state machine for the current card

use crate::constants::{SWIPE_THRESHOLD, THROW_DISTANCE};
use crate::types::Direction;

/// What a finished gesture asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// Thrown off-screen; decision follows after the settle delay
    Swipe(Direction),
    /// Not far enough, card springs back to the center
    SnapBack,
    /// There was no gesture in progress
    Ignored,
}

/// Classify a horizontal drag distance. Strict: exactly ±threshold is no swipe.
pub fn classify(delta: f32) -> Option<Direction> {
    if delta > SWIPE_THRESHOLD {
        Some(Direction::Right)
    } else if delta < -SWIPE_THRESHOLD {
        Some(Direction::Left)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    drag_origin: Option<f32>,
    offset: f32,
    animate: bool,
}

impl GestureTracker {
    /// Idle -> Dragging. The card follows the pointer without easing.
    pub fn start(&mut self, x: f32) {
        self.drag_origin = Some(x);
        self.animate = false;
    }

    /// Ignored while idle (e.g. a move with no preceding press).
    pub fn drag_to(&mut self, x: f32) {
        if let Some(origin) = self.drag_origin {
            self.offset = x - origin;
        }
    }

    /// Dragging -> Idle. The origin is cleared immediately, so a new gesture
    /// may begin while the throw animation is still settling.
    pub fn end(&mut self, x: f32) -> GestureEnd {
        let Some(origin) = self.drag_origin.take() else {
            return GestureEnd::Ignored;
        };

        self.animate = true;
        match classify(x - origin) {
            Some(direction) => {
                self.offset = direction.sign() * THROW_DISTANCE;
                GestureEnd::Swipe(direction)
            }
            None => {
                self.offset = 0.0;
                GestureEnd::SnapBack
            }
        }
    }

    /// Back to a centered, idle card with no easing (new card on screen).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    #[cfg(test)]
    pub fn drag_origin(&self) -> Option<f32> {
        self.drag_origin
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn animate(&self) -> bool {
        self.animate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_strict_at_threshold() {
        assert_eq!(classify(100.0), None);
        assert_eq!(classify(-100.0), None);
        assert_eq!(classify(0.0), None);
        assert_eq!(classify(100.5), Some(Direction::Right));
        assert_eq!(classify(-100.5), Some(Direction::Left));
        assert_eq!(classify(150.0), Some(Direction::Right));
        assert_eq!(classify(-400.0), Some(Direction::Left));
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut g = GestureTracker::default();
        g.drag_to(250.0);
        assert_eq!(g.offset(), 0.0);
        assert!(!g.is_dragging());
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut g = GestureTracker::default();
        assert_eq!(g.end(300.0), GestureEnd::Ignored);
        assert_eq!(g.offset(), 0.0);
        assert!(!g.animate());
    }

    #[test]
    fn drag_tracks_pointer_without_animation() {
        let mut g = GestureTracker::default();
        g.start(200.0);
        assert!(g.is_dragging());
        assert!(!g.animate());
        g.drag_to(260.0);
        assert_eq!(g.offset(), 60.0);
        g.drag_to(140.0);
        assert_eq!(g.offset(), -60.0);
    }

    #[test]
    fn far_right_drag_throws_card_right() {
        let mut g = GestureTracker::default();
        g.start(100.0);
        g.drag_to(250.0);
        assert_eq!(g.end(250.0), GestureEnd::Swipe(Direction::Right));
        assert_eq!(g.offset(), THROW_DISTANCE);
        assert!(g.animate());
        assert_eq!(g.drag_origin(), None);
    }

    #[test]
    fn far_left_drag_throws_card_left() {
        let mut g = GestureTracker::default();
        g.start(400.0);
        assert_eq!(g.end(250.0), GestureEnd::Swipe(Direction::Left));
        assert_eq!(g.offset(), -THROW_DISTANCE);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut g = GestureTracker::default();
        g.start(300.0);
        g.drag_to(250.0);
        assert_eq!(g.end(250.0), GestureEnd::SnapBack);
        assert_eq!(g.offset(), 0.0);
        assert!(g.animate());
        assert!(!g.is_dragging());
    }

    #[test]
    fn classification_uses_end_position_not_last_move() {
        let mut g = GestureTracker::default();
        g.start(0.0);
        g.drag_to(300.0);
        assert_eq!(g.end(20.0), GestureEnd::SnapBack);
    }

    #[test]
    fn new_gesture_can_start_right_after_a_swipe() {
        let mut g = GestureTracker::default();
        g.start(0.0);
        g.end(200.0);
        g.start(10.0);
        assert!(g.is_dragging());
        assert!(!g.animate());
    }
}
