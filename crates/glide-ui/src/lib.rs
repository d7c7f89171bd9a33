//! Boundary layer around `glide-core`: pure geometry derivation for whatever
//! paints the slider, and a tracker that adapts absolute pointer input to the
//! controller's cumulative-delta gesture contract.

pub mod frame;
pub mod gestures;

pub use frame::*;
pub use gestures::*;
