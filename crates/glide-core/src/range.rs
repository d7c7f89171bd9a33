//! Pure conversion between the value domain and the pixel domain.
//!
//! Both directions divide the track into `len - 1` equal segments, so the
//! handle's first and last resting points are exactly the track endpoints and
//! `position_to_value(value_to_position(v)) == v` for every option.

use crate::error::SliderError;

/// Relative slack when deciding whether `(max - min)` divides evenly by
/// `step`, absorbing f32 representation error in the inputs.
const STEP_FIT_EPSILON: f32 = 1e-4;

/// Ordered set of legal discrete values the handle can commit to.
/// Strictly increasing, always at least two entries.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionList(Vec<f32>);

impl OptionList {
    /// Ascending sequence from `min` to `max` inclusive by `step`.
    ///
    /// When `(max - min)` is not a whole number of steps the final step is
    /// clamped to `max`, e.g. `(0, 10, 3)` yields `[0, 3, 6, 9, 10]`. Both
    /// bounds are always selectable.
    pub fn from_steps(min: f32, max: f32, step: f32) -> Result<Self, SliderError> {
        if step <= 0.0 {
            return Err(SliderError::invalid_range("step must be positive"));
        }
        if min >= max {
            return Err(SliderError::invalid_range("min must be below max"));
        }

        let exact = (max - min) / step;
        let whole = exact.round();
        let mut values: Vec<f32>;
        if (exact - whole).abs() < STEP_FIT_EPSILON * exact.max(1.0) {
            let n = whole as usize;
            values = (0..=n).map(|i| min + i as f32 * step).collect();
            // pin the endpoint so accumulated float error never leaks out
            values[n] = max;
        } else {
            let n = exact.floor() as usize;
            values = (0..=n).map(|i| min + i as f32 * step).collect();
            values.push(max);
        }
        Ok(Self(values))
    }

    /// Caller-supplied list, overriding the `min/max/step` derivation.
    pub fn from_values(values: impl Into<Vec<f32>>) -> Result<Self, SliderError> {
        let values = values.into();
        if values.len() < 2 {
            return Err(SliderError::invalid_range(
                "option list needs at least two entries",
            ));
        }
        if !values.windows(2).all(|w| w[0] < w[1]) {
            return Err(SliderError::invalid_range(
                "option list must be strictly increasing",
            ));
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }

    pub fn first(&self) -> f32 {
        self.0[0]
    }

    pub fn last(&self) -> f32 {
        self.0[self.0.len() - 1]
    }

    /// Index of an exact member, or `None`. Membership is exact by contract:
    /// committed values always come out of this list, and externally supplied
    /// values must match one.
    pub fn index_of(&self, value: f32) -> Option<usize> {
        self.0.iter().position(|v| *v == value)
    }

    pub fn get(&self, index: usize) -> f32 {
        self.0[index]
    }
}

/// Pixel width of one step band on a track of `track_length`.
pub fn step_length(options: &OptionList, track_length: f32) -> f32 {
    track_length / (options.len() - 1) as f32
}

/// Resting position for `value`: its index scaled by the step length.
/// Exact inverse of [`position_to_value`] for every member of `options`.
pub fn value_to_position(
    value: f32,
    options: &OptionList,
    track_length: f32,
) -> Result<f32, SliderError> {
    let index = options
        .index_of(value)
        .ok_or(SliderError::ValueNotInRange { value })?;
    Ok(index as f32 * step_length(options, track_length))
}

/// Nearest option for a pixel offset. Rounds half-up, so every option owns an
/// equal-width contiguous pixel band and a boundary pixel goes to the upper
/// neighbour. Out-of-track positions resolve to the nearest endpoint.
pub fn position_to_value(position: f32, options: &OptionList, track_length: f32) -> f32 {
    let step = step_length(options, track_length);
    let index = (position / step)
        .round()
        .clamp(0.0, (options.len() - 1) as f32) as usize;
    options.get(index)
}
