//! Frame evaluation: which scenes are on screen at a reel frame, and how.

pub(crate) mod evaluator;
