//! JSON configuration of a render.
//!
//! Every field has a default, so an empty object (or no file at all) yields a working
//! configuration. Relative paths resolve against the directory of the config file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};
use crate::timeline::transition::TransitionSpec;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    /// Output size.
    pub canvas: CanvasConfig,
    /// Typeface resolution.
    pub fonts: FontsConfig,
    /// Frame scheduling.
    pub render: RenderConfig,
    /// Output locations and flattening color.
    pub output: OutputConfig,
    /// Replacement for the four transitions between the scenes, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<TransitionSpec>>,
}

/// Output canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl From<CanvasConfig> for Canvas {
    fn from(c: CanvasConfig) -> Self {
        Canvas {
            width: c.width,
            height: c.height,
        }
    }
}

/// Where heading and body faces come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Heading face file.
    pub heading: Option<PathBuf>,
    /// Body face file.
    pub body: Option<PathBuf>,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` files.
    pub dirs: Vec<PathBuf>,
    /// Query installed system fonts when a role has no explicit file.
    pub system_fallback: bool,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            heading: None,
            body: None,
            dirs: Vec::new(),
            system_fallback: true,
        }
    }
}

/// Frame scheduling knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Render chunks of frames in parallel.
    pub parallel: bool,
    /// Worker threads; `None` uses the rayon default.
    pub threads: Option<usize>,
    /// Frames per chunk.
    pub chunk_size: usize,
    /// Render identical frames once per chunk.
    pub static_frame_elision: bool,
    /// Frames buffered between the renderer and the encoder thread.
    pub channel_capacity: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            chunk_size: 64,
            static_frame_elision: true,
            channel_capacity: 4,
        }
    }
}

/// Output options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Color under transparent pixels, and of buffer frames.
    pub background: Color,
    /// Directory that receives artifacts such as the thumbnail.
    pub artifact_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            artifact_dir: PathBuf::from("out"),
        }
    }
}

impl ReelConfig {
    /// Parse from a JSON reader and validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON file and resolve relative paths against its directory.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        cfg.resolve_paths(base);
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Make relative font and output paths absolute against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(p) = self.fonts.heading.as_mut() {
            join(p);
        }
        if let Some(p) = self.fonts.body.as_mut() {
            join(p);
        }
        self.fonts.dirs.iter_mut().for_each(join);
        join(&mut self.output.artifact_dir);
    }

    /// Check value ranges.
    pub fn validate(&self) -> ReelResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.render.chunk_size == 0 {
            return Err(ReelError::validation("render.chunk_size must be >= 1"));
        }
        if self.render.channel_capacity == 0 {
            return Err(ReelError::validation(
                "render.channel_capacity must be >= 1",
            ));
        }
        if self.render.threads == Some(0) {
            return Err(ReelError::validation(
                "render.threads must be >= 1 when set",
            ));
        }
        if let Some(ts) = &self.transitions {
            if ts.len() != 4 {
                return Err(ReelError::validation(format!(
                    "transitions must list exactly 4 entries, got {}",
                    ts.len()
                )));
            }
            for (i, t) in ts.iter().enumerate() {
                t.resolve()
                    .map_err(|e| ReelError::validation(format!("transitions[{i}]: {e}")))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
