//! Reusable frame-driven building blocks shared by the scenes.

pub(crate) mod backdrop;
pub(crate) mod badge;
pub(crate) mod label;
pub(crate) mod panel;
pub(crate) mod progress_ring;
pub(crate) mod section;
pub(crate) mod shapes;
