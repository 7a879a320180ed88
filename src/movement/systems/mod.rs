//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod step;

pub(crate) use collisions::detect_ground;
pub(crate) use input::{apply_input, read_input};
pub(crate) use step::step_controllers;
