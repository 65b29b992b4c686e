//! The training reel: five scenes, four transitions, a buffer and a thumbnail.

pub(crate) mod manifest;
pub(crate) mod reel;
