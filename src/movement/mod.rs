//! Movement domain: player state, tuning and the kinematic controller.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, MotionState, Player};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use systems::read_input;
