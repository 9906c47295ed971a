//! Movement domain: controller passes and input sampling.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
