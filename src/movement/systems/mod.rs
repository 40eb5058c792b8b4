//! Movement domain: system modules for the per-tick update.

pub(crate) mod collisions;
pub(crate) mod controller;
pub(crate) mod input;

pub(crate) use collisions::detect_ground;
pub(crate) use controller::{apply_gravity, tick_controller};
pub(crate) use input::read_input;
