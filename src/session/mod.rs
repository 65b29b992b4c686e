//! Frame scheduling: single frames, ordered range rendering into sinks, artifact capture.

pub(crate) mod render_session;
