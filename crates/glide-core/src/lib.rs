//! # Stepped slider core
//!
//! Everything behind a draggable single-handle slider except the pixels:
//! the bidirectional mapping between pixel offsets along a track and a
//! discrete option list, and the state machine that turns a raw drag
//! gesture into committed value changes.
//!
//! - [`OptionList`] — the legal discrete values, derived from `min/max/step`
//!   or supplied explicitly.
//! - [`range`] — pure position ↔ value conversion over a fixed track length.
//! - [`SliderController`] — owns the live [`SliderState`], consumes gesture
//!   events, and fires the start/change/finish callbacks.
//!
//! ```rust
//! use glide_core::{SliderConfig, SliderController};
//!
//! let config = SliderConfig {
//!     value: 5.0,
//!     ..SliderConfig::default()
//! };
//! let mut slider = SliderController::new(config)
//!     .unwrap()
//!     .on_values_change(|values| println!("now at {}", values[0]));
//!
//! slider.gesture_start();
//! slider.gesture_move(28.0, 0.0); // one step to the right on a 280px track
//! slider.gesture_end();
//! assert_eq!(slider.value(), 6.0);
//! ```
//!
//! Configuration errors (bad range, value outside the option list) surface
//! as [`SliderError`] at construction or reconfiguration. Gesture input is
//! never rejected: out-of-range positions are clamped to the track.
//!
//! Single-threaded by design — callbacks are `Rc<dyn Fn>` and run to
//! completion on the caller's event loop, in delivery order.

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod range;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use range::*;
