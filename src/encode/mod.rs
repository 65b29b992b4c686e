//! Frame sinks and still-image writers.
//!
//! Sinks consume rendered frames in timeline order and are driven by
//! `RenderSession::render_range`.

pub(crate) mod ffmpeg;
pub(crate) mod png;
pub(crate) mod sink;
pub(crate) mod still;
