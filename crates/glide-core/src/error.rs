use thiserror::Error;

/// Configuration-time failures. Raised only while (re)building a slider's
/// configuration; live gesture handling clamps instead of failing, because a
/// touch in flight has no sensible error path back to the user.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SliderError {
    #[error("invalid range: {reason}")]
    InvalidRange { reason: String },

    #[error("value {value} is not a member of the option list")]
    ValueNotInRange { value: f32 },
}

impl SliderError {
    pub(crate) fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }
}
