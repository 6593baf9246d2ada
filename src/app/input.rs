//! Translate egui input into swipe events

use super::App;
use crate::controller::SwipeEvent;
use crate::types::Direction;
use eframe::egui;
use tracing::debug;

/// Pointer facts for the card area, sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    pub drag_started: bool,
    pub dragged: bool,
    pub drag_stopped: bool,
    pub press_origin: Option<f32>,
    pub interact_x: Option<f32>,
    pub latest_x: Option<f32>,
    /// Button still held but the pointer is outside the window
    pub pointer_gone: bool,
}

/// Turns per-frame pointer samples into exactly one Down / Up pair per drag.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: bool,
    last_x: Option<f32>,
}

impl DragTracker {
    pub fn update(&mut self, frame: &PointerFrame) -> Vec<SwipeEvent> {
        let mut events = Vec::new();

        if frame.drag_started {
            if let Some(x) = frame.press_origin.or(frame.interact_x) {
                self.active = true;
                self.last_x = Some(x);
                events.push(SwipeEvent::PointerDown(x));
            }
        }

        if frame.dragged && self.active {
            if let Some(x) = frame.interact_x {
                self.last_x = Some(x);
                events.push(SwipeEvent::PointerMove(x));
            }
        }

        // Pointer left the window mid-drag: end the gesture where it was last seen
        if frame.pointer_gone && self.active {
            self.active = false;
            if let Some(x) = self.last_x {
                debug!(x, "Pointer left window while dragging");
                events.push(SwipeEvent::PointerUp(x));
            }
        }

        if frame.drag_stopped {
            if self.active {
                // touch releases carry no position
                if let Some(x) = frame.latest_x.or(self.last_x) {
                    events.push(SwipeEvent::PointerUp(x));
                }
            }
            self.active = false;
            self.last_x = None;
        }

        events
    }
}

impl App {
    /// Map press / drag / release over the card area onto gesture events.
    /// Touch arrives through the same pointer API.
    pub fn handle_card_input(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let frame = ctx.input(|i| PointerFrame {
            drag_started: response.drag_started(),
            dragged: response.dragged(),
            drag_stopped: response.drag_stopped(),
            press_origin: i.pointer.press_origin().map(|p| p.x),
            interact_x: response.interact_pointer_pos().map(|p| p.x),
            latest_x: i.pointer.latest_pos().map(|p| p.x),
            pointer_gone: i.pointer.hover_pos().is_none() && i.pointer.primary_down(),
        });
        for event in self.drag.update(&frame) {
            self.push_event(event);
        }
    }

    /// Arrow keys decide, Enter restarts from the summary.
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if !self.settings.keyboard_shortcuts {
            return;
        }

        let (left, right, enter) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Enter),
            )
        });

        if self.controller.deck().is_finished() {
            if enter {
                self.push_event(SwipeEvent::Restart);
            }
        } else if left {
            self.push_event(SwipeEvent::Decide(Direction::Left));
        } else if right {
            self.push_event(SwipeEvent::Decide(Direction::Right));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(press: f32, at: f32) -> PointerFrame {
        PointerFrame {
            drag_started: true,
            dragged: true,
            press_origin: Some(press),
            interact_x: Some(at),
            latest_x: Some(at),
            ..Default::default()
        }
    }

    fn moved(x: f32) -> PointerFrame {
        PointerFrame {
            dragged: true,
            interact_x: Some(x),
            latest_x: Some(x),
            ..Default::default()
        }
    }

    #[test]
    fn drag_maps_one_to_one_from_press_origin() {
        let mut tracker = DragTracker::default();
        assert_eq!(
            tracker.update(&started(100.0, 106.0)),
            vec![SwipeEvent::PointerDown(100.0), SwipeEvent::PointerMove(106.0)]
        );
        assert_eq!(tracker.update(&moved(180.0)), vec![SwipeEvent::PointerMove(180.0)]);
        let release = PointerFrame {
            drag_stopped: true,
            latest_x: Some(230.0),
            ..Default::default()
        };
        assert_eq!(tracker.update(&release), vec![SwipeEvent::PointerUp(230.0)]);
        assert!(tracker.update(&PointerFrame::default()).is_empty());
    }

    #[test]
    fn down_falls_back_to_interact_position() {
        let mut tracker = DragTracker::default();
        let frame = PointerFrame {
            drag_started: true,
            interact_x: Some(42.0),
            ..Default::default()
        };
        assert_eq!(tracker.update(&frame), vec![SwipeEvent::PointerDown(42.0)]);
    }

    #[test]
    fn touch_release_uses_last_seen_x() {
        let mut tracker = DragTracker::default();
        tracker.update(&started(50.0, 50.0));
        tracker.update(&moved(-80.0));
        let lifted = PointerFrame {
            drag_stopped: true,
            ..Default::default()
        };
        assert_eq!(tracker.update(&lifted), vec![SwipeEvent::PointerUp(-80.0)]);
    }

    #[test]
    fn leaving_window_ends_drag_exactly_once() {
        let mut tracker = DragTracker::default();
        tracker.update(&started(0.0, 0.0));
        tracker.update(&moved(140.0));

        let gone = PointerFrame {
            dragged: true,
            interact_x: Some(900.0),
            pointer_gone: true,
            ..Default::default()
        };
        // the move in the same frame still lands before the release
        assert_eq!(
            tracker.update(&gone),
            vec![SwipeEvent::PointerMove(900.0), SwipeEvent::PointerUp(900.0)]
        );

        // later frames of the same egui drag stay silent
        let still_gone = PointerFrame {
            pointer_gone: true,
            ..moved(950.0)
        };
        assert!(tracker.update(&still_gone).is_empty());
        let stopped = PointerFrame {
            drag_stopped: true,
            latest_x: Some(960.0),
            ..Default::default()
        };
        assert!(tracker.update(&stopped).is_empty());

        // and the next drag starts clean
        assert_eq!(
            tracker.update(&started(10.0, 10.0)),
            vec![SwipeEvent::PointerDown(10.0), SwipeEvent::PointerMove(10.0)]
        );
    }

    #[test]
    fn gone_without_drag_emits_nothing() {
        let mut tracker = DragTracker::default();
        let frame = PointerFrame {
            pointer_gone: true,
            ..Default::default()
        };
        assert!(tracker.update(&frame).is_empty());
    }
}
