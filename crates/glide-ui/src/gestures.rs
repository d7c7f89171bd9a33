use glide_core::{PointerEvent, PointerEventKind, Rect, SliderController, Vec2};

/// Adapts absolute-position pointer input to the controller's
/// cumulative-delta gesture contract. One tracker per slider handle.
///
/// A `Down` inside the touch surface grabs the handle and anchors the
/// gesture; every subsequent `Move` reports its offset from that anchor
/// (not from the previous frame). `Up` releases, `Cancel` force-ends.
pub struct DragTracker {
    grab: Option<Vec2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self { grab: None }
    }

    pub fn active(&self) -> bool {
        self.grab.is_some()
    }

    /// Feed one pointer event. `touch` is the slider's current touch surface
    /// (see `SliderFrame::touch`); only a `Down` inside it starts a drag.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        touch: Rect,
        slider: &mut SliderController,
    ) {
        match event.kind {
            PointerEventKind::Down => {
                if touch.contains(event.position) {
                    log::trace!("handle grabbed at {:?}", event.position);
                    self.grab = Some(event.position);
                    slider.gesture_start();
                }
            }
            PointerEventKind::Move => {
                if let Some(origin) = self.grab {
                    slider.gesture_move(
                        event.position.x - origin.x,
                        event.position.y - origin.y,
                    );
                }
            }
            PointerEventKind::Up => {
                if self.grab.take().is_some() {
                    slider.gesture_end();
                }
            }
            PointerEventKind::Cancel => {
                if self.grab.take().is_some() {
                    log::trace!("drag cancelled by platform");
                    slider.gesture_cancel();
                }
            }
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SliderFrame;
    use glide_core::{SliderConfig, SliderController};

    fn pe(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent {
            kind,
            position: Vec2::new(x, y),
        }
    }

    fn slider_at(value: f32) -> SliderController {
        SliderController::new(SliderConfig {
            value,
            ..SliderConfig::default()
        })
        .unwrap()
    }

    fn touch_of(slider: &SliderController) -> Rect {
        SliderFrame::compute(slider.output(), slider.config(), Vec2::default()).touch
    }

    #[test]
    fn test_down_move_up_drives_slider() {
        let mut slider = slider_at(5.0);
        let mut tracker = DragTracker::new();
        let touch = touch_of(&slider);

        tracker.handle_pointer(pe(PointerEventKind::Down, 140.0, 0.0), touch, &mut slider);
        assert!(tracker.active());
        assert!(slider.state().pressed);

        // absolute positions become deltas from the grab point
        tracker.handle_pointer(pe(PointerEventKind::Move, 168.0, 0.0), touch, &mut slider);
        assert_eq!(slider.state().position, 168.0);
        assert_eq!(slider.value(), 6.0);

        // releasing outside the touch surface still ends the gesture
        tracker.handle_pointer(pe(PointerEventKind::Up, 400.0, 90.0), touch, &mut slider);
        assert!(!tracker.active());
        assert!(!slider.state().pressed);
    }

    #[test]
    fn test_down_outside_touch_is_ignored() {
        let mut slider = slider_at(5.0);
        let mut tracker = DragTracker::new();
        let touch = touch_of(&slider);

        tracker.handle_pointer(pe(PointerEventKind::Down, 10.0, 0.0), touch, &mut slider);
        assert!(!tracker.active());
        assert!(!slider.state().pressed);

        // moves without a grab don't reach the controller
        tracker.handle_pointer(pe(PointerEventKind::Move, 168.0, 0.0), touch, &mut slider);
        assert_eq!(slider.state().position, 140.0);
    }

    #[test]
    fn test_cancel_releases_grab() {
        let mut slider = slider_at(5.0);
        let mut tracker = DragTracker::new();
        let touch = touch_of(&slider);

        tracker.handle_pointer(pe(PointerEventKind::Down, 140.0, 0.0), touch, &mut slider);
        tracker.handle_pointer(pe(PointerEventKind::Cancel, 140.0, 0.0), touch, &mut slider);
        assert!(!tracker.active());
        assert!(!slider.state().pressed);

        // a fresh grab works after the cancel
        tracker.handle_pointer(pe(PointerEventKind::Down, 140.0, 0.0), touch, &mut slider);
        assert!(tracker.active());
    }
}
