//! H.264 MP4 output through the system `ffmpeg`.
//!
//! Frames are flattened over the reel background and piped as raw `rgba` video. Audio is
//! never written.

use std::ffi::OsString;
use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::composition::reel::Reel;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::still::ensure_parent_dir;
use crate::foundation::color::Color;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;

const FFMPEG: &str = "ffmpeg";

/// How the reel is encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct FfmpegSinkOpts {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
    /// Color translucent pixels are flattened over.
    pub background: Color,
    /// x264 constant rate factor (0..=51, lower is better).
    pub crf: u8,
    /// x264 speed preset.
    pub preset: String,
}

impl FfmpegSinkOpts {
    /// Encode `reel` to `out_path`, flattening over the reel background.
    pub fn for_reel(out_path: impl Into<PathBuf>, reel: &Reel) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: reel.background,
            crf: 18,
            preset: "medium".to_owned(),
        }
    }

    /// Same options with `overwrite` replaced.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Command-line arguments for a `cfg`-shaped stream, output path last.
    pub fn ffmpeg_args(&self, cfg: &SinkConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            if self.overwrite { "-y" } else { "-n" },
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        // Input options must precede `-i`.
        args.push("-s".into());
        args.push(format!("{}x{}", cfg.width, cfg.height).into());
        args.push("-r".into());
        args.push(format!("{}/{}", cfg.fps.num, cfg.fps.den).into());
        args.extend(["-i", "pipe:0", "-an", "-c:v", "libx264"].map(OsString::from));
        args.push("-preset".into());
        args.push(self.preset.clone().into());
        args.push("-crf".into());
        args.push(self.crf.to_string().into());
        args.extend(["-pix_fmt", "yuv420p", "-movflags", "+faststart"].map(OsString::from));
        args.push(self.out_path.clone().into_os_string());
        args
    }

    fn check(&self, cfg: &SinkConfig) -> ReelResult<()> {
        if self.crf > 51 {
            return Err(ReelError::validation(format!(
                "crf must be in 0..=51, got {}",
                self.crf
            )));
        }
        if self.preset.trim().is_empty() {
            return Err(ReelError::validation("x264 preset must be non-empty"));
        }
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(ReelError::validation("fps must be non-zero"));
        }
        match (cfg.width, cfg.height) {
            (0, _) | (_, 0) => Err(ReelError::validation(
                "mp4 output needs a non-empty canvas",
            )),
            (w, h) if w % 2 == 1 || h % 2 == 1 => Err(ReelError::validation(format!(
                "mp4 output needs an even canvas for yuv420p, got {w}x{h}"
            ))),
            _ => Ok(()),
        }
    }
}

/// A running `ffmpeg` child with its stderr collected on a side thread.
struct FfmpegProcess {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<String>>>,
}

impl FfmpegProcess {
    fn spawn(args: &[OsString]) -> ReelResult<Self> {
        let mut child = Command::new(FFMPEG)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ReelError::encode(format!("spawn {FFMPEG}: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ReelError::encode("ffmpeg stdin is not piped"))?;
        // ffmpeg blocks once its stderr pipe fills, so it is drained concurrently.
        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut text = String::new();
                pipe.read_to_string(&mut text)?;
                Ok(text)
            })
        });
        Ok(Self {
            child,
            stdin: Some(stdin),
            stderr,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> ReelResult<()> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| ReelError::encode("ffmpeg stdin already closed"))?;
        stdin
            .write_all(bytes)
            .map_err(|e| ReelError::encode(format!("pipe frame to ffmpeg: {e}")))
    }

    /// Close stdin and wait; a non-zero exit reports ffmpeg's stderr.
    fn finish(mut self) -> ReelResult<()> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .map_err(|e| ReelError::encode(format!("wait for ffmpeg: {e}")))?;
        let log = match self.stderr.take() {
            Some(h) => h
                .join()
                .map_err(|_| ReelError::encode("ffmpeg stderr reader panicked"))?
                .unwrap_or_default(),
            None => String::new(),
        };
        if status.success() {
            Ok(())
        } else {
            Err(ReelError::encode(format!(
                "ffmpeg exited with {status}: {}",
                log.trim()
            )))
        }
    }
}

struct Running {
    process: FfmpegProcess,
    cfg: SinkConfig,
    last: Option<FrameIndex>,
    frames: u64,
}

/// [`FrameSink`] that encodes the streamed frames into an MP4.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    running: Option<Running>,
}

impl FfmpegSink {
    /// Sink for `opts`; ffmpeg starts on `begin`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            running: None,
        }
    }

    /// Encoding options.
    pub fn opts(&self) -> &FfmpegSinkOpts {
        &self.opts
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.opts.check(&cfg)?;
        if self.running.is_some() {
            return Err(ReelError::encode("ffmpeg sink already started"));
        }
        let out = &self.opts.out_path;
        if !self.opts.overwrite && out.exists() {
            return Err(ReelError::validation(format!(
                "output file '{}' already exists",
                out.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(ReelError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }
        ensure_parent_dir(out)?;

        let process = FfmpegProcess::spawn(&self.opts.ffmpeg_args(&cfg))?;
        tracing::debug!(out = %out.display(), width = cfg.width, height = cfg.height, crf = self.opts.crf, "ffmpeg started");
        self.running = Some(Running {
            process,
            cfg,
            last: None,
            frames: 0,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> ReelResult<()> {
        let run = self
            .running
            .as_mut()
            .ok_or_else(|| ReelError::encode("ffmpeg sink not started"))?;
        if run.last.is_some_and(|last| idx <= last) {
            return Err(ReelError::encode(format!(
                "ffmpeg sink got frame {} out of order",
                idx.0
            )));
        }
        if (frame.width, frame.height) != (run.cfg.width, run.cfg.height) {
            return Err(ReelError::validation(format!(
                "frame is {}x{}, stream is {}x{}",
                frame.width, frame.height, run.cfg.width, run.cfg.height
            )));
        }
        if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
            return Err(ReelError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        run.last = Some(idx);
        run.frames += 1;

        let opaque = frame.to_straight_rgba8(Some(self.opts.background.to_rgba8()));
        run.process.write(&opaque)
    }

    fn end(&mut self) -> ReelResult<()> {
        let run = self
            .running
            .take()
            .ok_or_else(|| ReelError::encode("ffmpeg sink not started"))?;
        let frames = run.frames;
        run.process.finish()?;
        tracing::debug!(out = %self.opts.out_path.display(), frames, "ffmpeg finished");
        Ok(())
    }
}

/// `true` when `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new(FFMPEG)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
