use std::rc::Rc;

use crate::config::{ConfigDelta, SliderConfig};
use crate::error::SliderError;
use crate::input::GestureEvent;
use crate::range::{self, OptionList};

pub type Callback = Rc<dyn Fn()>;
pub type ValuesCallback = Rc<dyn Fn(&[f32])>;

/// Live interaction state. One writer (the controller); renderers and hosts
/// read it through [`SliderController::state`] / [`SliderController::output`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    /// Last value reported through the change callbacks. Always a member of
    /// the active option list.
    pub value: f32,
    /// Pixel offset captured at the last gesture boundary; anchor for the
    /// cumulative deltas of the drag in flight.
    pub past_position: f32,
    /// Live pixel offset, always within `[0, track_length]`.
    pub position: f32,
    /// True exactly while a gesture is in flight.
    pub pressed: bool,
}

/// What the view layer needs after any mutation: two scalars and a flag,
/// plus the committed value for the marker label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderOutput {
    pub track_fill_length: f32,
    pub marker_offset: f32,
    pub pressed: bool,
    pub current_value: f32,
}

/// Drag state machine for one slider handle.
///
/// Two states: idle (`pressed == false`) and dragging. Gesture events drive
/// the transitions; external reconfiguration is only honoured while idle (an
/// in-flight gesture wins). Gesture handling itself never fails — noisy
/// coordinates are clamped to the track, never rejected.
pub struct SliderController {
    config: SliderConfig,
    options: OptionList,
    state: SliderState,
    on_start: Option<Callback>,
    on_change: Option<ValuesCallback>,
    on_finish: Option<ValuesCallback>,
}

impl SliderController {
    /// Fails fast on a malformed configuration: bad range, non-positive track
    /// length, or an initial value that is not a member of the option list.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        if config.track_length <= 0.0 {
            return Err(SliderError::invalid_range("track length must be positive"));
        }
        let options = config.option_list()?;
        let position = range::value_to_position(config.value, &options, config.track_length)?;
        Ok(Self {
            state: SliderState {
                value: config.value,
                past_position: position,
                position,
                pressed: false,
            },
            config,
            options,
            on_start: None,
            on_change: None,
            on_finish: None,
        })
    }

    pub fn on_values_change_start(mut self, f: impl Fn() + 'static) -> Self {
        self.on_start = Some(Rc::new(f));
        self
    }

    pub fn on_values_change(mut self, f: impl Fn(&[f32]) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn on_values_change_finish(mut self, f: impl Fn(&[f32]) + 'static) -> Self {
        self.on_finish = Some(Rc::new(f));
        self
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn value(&self) -> f32 {
        self.state.value
    }

    pub fn output(&self) -> SliderOutput {
        SliderOutput {
            track_fill_length: self.state.position,
            marker_offset: self.state.position,
            pressed: self.state.pressed,
            current_value: self.state.value,
        }
    }

    /// Enum-dispatch form of the gesture contract, for event-queue callers.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Start => self.gesture_start(),
            GestureEvent::Move { dx, dy } => self.gesture_move(dx, dy),
            GestureEvent::End => self.gesture_end(),
            GestureEvent::Cancel => self.gesture_cancel(),
        }
    }

    /// Idle → dragging. Fires the start callback (no payload). The position
    /// does not change until the first move.
    pub fn gesture_start(&mut self) {
        if self.state.pressed {
            log::warn!("gesture_start while already dragging; ignored");
            return;
        }
        self.state.pressed = true;
        if let Some(cb) = &self.on_start {
            cb();
        }
    }

    /// One move of the drag in flight. `dx`/`dy` are cumulative from the
    /// gesture origin; the horizontal delta is applied against the anchor
    /// recorded at the last gesture boundary and clamped to the track.
    pub fn gesture_move(&mut self, dx: f32, dy: f32) {
        if !self.state.pressed {
            log::warn!("gesture_move while idle; ignored");
            return;
        }

        let track = self.config.track_length;
        let confined = (self.state.past_position + dx).clamp(0.0, track);

        // Off-axis slip withholds the position update for this event only;
        // the drag stays active and may resume on a later move.
        let slip = self.config.touch.slip_displacement;
        if slip <= 0.0 || dy.abs() < slip {
            self.state.position = confined;
        }

        // Value detection is decoupled from the position update: it always
        // runs against the current (possibly unchanged) confined position.
        let new_value = range::position_to_value(self.state.position, &self.options, track);
        if new_value != self.state.value {
            self.state.value = new_value;
            self.config.value = new_value;
            log::debug!("committed value {new_value} at {}px", self.state.position);
            if let Some(cb) = &self.on_change {
                cb(&[new_value]);
            }
        }
    }

    /// Dragging → idle. Re-anchors the next drag at the released position and
    /// fires the finish callback with the committed value.
    pub fn gesture_end(&mut self) {
        if !self.state.pressed {
            log::warn!("gesture_end while idle; ignored");
            return;
        }
        self.state.past_position = self.state.position;
        self.state.pressed = false;
        if let Some(cb) = &self.on_finish {
            cb(&[self.state.value]);
        }
    }

    /// Forced termination is indistinguishable from a normal release.
    pub fn gesture_cancel(&mut self) {
        self.gesture_end();
    }

    /// Apply an externally changed configuration.
    ///
    /// Ignored entirely while dragging (the returned delta reports nothing
    /// applied). While idle, a non-empty delta rebuilds the option list if the
    /// range inputs changed, re-derives the pixel position if the value or
    /// track length changed, and overwrites `value`, `past_position` and
    /// `position` atomically. Silent: external sync fires no callbacks.
    pub fn reconfigure(&mut self, new: SliderConfig) -> Result<ConfigDelta, SliderError> {
        if self.state.pressed {
            log::debug!("reconfigure during drag ignored; in-flight gesture wins");
            return Ok(ConfigDelta::default());
        }

        let delta = self.config.reconcile(&new);
        if delta.is_empty() {
            return Ok(delta);
        }
        if new.track_length <= 0.0 {
            return Err(SliderError::invalid_range("track length must be positive"));
        }

        if delta.repositions() {
            let options = if delta.options {
                new.option_list()?
            } else {
                self.options.clone()
            };
            let position = range::value_to_position(new.value, &options, new.track_length)?;
            self.options = options;
            self.state.value = new.value;
            self.state.past_position = position;
            self.state.position = position;
        }
        self.config = new;
        Ok(delta)
    }

    /// Narrow external-props path: the host pushed a new value and/or track
    /// length. Same idle-only, silent, atomic semantics as [`reconfigure`];
    /// idempotent for inputs equal to the committed state.
    ///
    /// [`reconfigure`]: Self::reconfigure
    pub fn sync_value(&mut self, value: f32, track_length: f32) -> Result<ConfigDelta, SliderError> {
        let mut new = self.config.clone();
        new.value = value;
        new.track_length = track_length;
        self.reconfigure(new)
    }
}
