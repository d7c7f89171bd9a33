use crate::error::SliderError;
use crate::range::OptionList;

/// Touch-surface measurements, in the same pixel space as the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchDimensions {
    pub height: f32,
    pub width: f32,
    pub border_radius: f32,
    /// Off-axis drag distance beyond which horizontal position updates are
    /// suppressed ("the user dragged off the slider"). `<= 0` disables slip
    /// detection entirely.
    pub slip_displacement: f32,
}

impl Default for TouchDimensions {
    fn default() -> Self {
        Self {
            height: 50.0,
            width: 50.0,
            border_radius: 15.0,
            slip_displacement: 200.0,
        }
    }
}

/// Caller-supplied slider configuration. Immutable per render cycle;
/// `track_length` may change across the component's lifetime (layout change)
/// and triggers position re-derivation on [`reconcile`](Self::reconcile).
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Explicit option list; when present it overrides `min/max/step`.
    pub options: Option<Vec<f32>>,
    pub track_length: f32,
    pub touch: TouchDimensions,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 10.0,
            step: 1.0,
            options: None,
            track_length: 280.0,
            touch: TouchDimensions::default(),
        }
    }
}

impl SliderConfig {
    /// Build the active option list for this configuration.
    pub fn option_list(&self) -> Result<OptionList, SliderError> {
        match &self.options {
            Some(values) => OptionList::from_values(values.clone()),
            None => OptionList::from_steps(self.min, self.max, self.step),
        }
    }

    /// Compare against a newer configuration and report what a controller
    /// would have to redo. Pure; applying the delta is the controller's job
    /// and only happens while idle.
    pub fn reconcile(&self, new: &SliderConfig) -> ConfigDelta {
        ConfigDelta {
            options: self.min != new.min
                || self.max != new.max
                || self.step != new.step
                || self.options != new.options,
            value: self.value != new.value,
            track: self.track_length != new.track_length,
            touch: self.touch != new.touch,
        }
    }
}

/// Typed outcome of [`SliderConfig::reconcile`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigDelta {
    /// Range inputs changed; the option list must be rebuilt.
    pub options: bool,
    pub value: bool,
    pub track: bool,
    pub touch: bool,
}

impl ConfigDelta {
    pub fn is_empty(&self) -> bool {
        !(self.options || self.value || self.track || self.touch)
    }

    /// True when the committed value or its pixel position must be re-derived.
    pub fn repositions(&self) -> bool {
        self.options || self.value || self.track
    }
}
