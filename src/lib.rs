//! training-reel renders a five-scene corporate training video frame by frame.
//!
//! The reel is a fixed [`TransitionSeries`] of scenes (title, scenario, quiz, guidelines,
//! closing) joined by slide, wipe and fade transitions, followed by a short buffer. Every
//! frame is a pure function of its index:
//!
//! - Build a [`Reel`] (optionally from a [`ReelConfig`])
//! - Resolve fonts into a [`FontBook`]
//! - Create a [`RenderSession`] and render single frames or stream a range into a
//!   [`FrameSink`] (PNG sequence, ffmpeg MP4, or memory)
//!
//! The thumbnail artifact is captured from frame 0.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compile;
pub(crate) mod components;
pub(crate) mod composition;
pub(crate) mod config;
/// Frame sinks and still writers.
pub mod encode;
pub(crate) mod eval;
/// CPU rendering backend.
pub mod render;
/// Display-list model drawn by the backend.
pub mod scene;
pub(crate) mod scenes;
/// Session-oriented rendering API.
pub mod session;
pub(crate) mod text;
pub(crate) mod timeline;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{Extrapolate, Tween};
pub use crate::animation::proc::{Oscillator, SpringConfig, spring};
pub use crate::compile::compiler::{compile_frame, design_to_canvas};
pub use crate::compile::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use crate::compile::plan::{
    CompositeOp, CompositePass, Pass, PixelFormat, RenderPlan, ScenePass, SurfaceDesc, SurfaceId,
};
pub use crate::composition::manifest::{ReelManifest, SceneEntry, TransitionEntry};
pub use crate::composition::reel::{ArtifactSpec, BUFFER_FRAMES, REEL_FPS, Reel, TRANSITION_FRAMES};
pub use crate::config::{CanvasConfig, FontsConfig, OutputConfig, ReelConfig, RenderConfig};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::still::{StillFormat, write_still, write_thumbnail_jpeg};
pub use crate::eval::evaluator::{ActiveTransition, EvaluatedFrame, Evaluator, Layer};
pub use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use crate::render::cpu::CpuBackend;
pub use crate::scene::icons::IconId;
pub use crate::scene::model::{Node, NodeKind, Paint, Shape};
pub use crate::scenes::{DESIGN_H, DESIGN_W, Scene, SceneCtx, SceneId};
pub use crate::session::render_session::{RenderSession, RenderSessionOpts, RenderStats};
pub use crate::text::fonts::{FontBook, FontFace, FontOrigin};
pub use crate::text::reveal::{Granularity, TextReveal};
pub use crate::text::style::{FontRole, TextAlign, TextStyle};
pub use crate::timeline::series::{Active, TransitionSeries, TransitionStep};
pub use crate::timeline::transition::{Direction, Presentation, Timing, TransitionSpec};
