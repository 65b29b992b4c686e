use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};

use rayon::prelude::*;

use crate::compile::compiler::compile_frame;
use crate::compile::fingerprint::{FrameFingerprint, fingerprint_frame};
use crate::composition::reel::{ArtifactSpec, Reel};
use crate::config::RenderConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::still::write_still;
use crate::eval::evaluator::{EvaluatedFrame, Evaluator};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings, create_backend};
use crate::text::fonts::FontBook;

const MAX_REORDER_BUFFER_BYTES: u64 = 128 * 1024 * 1024;

/// Options controlling [`RenderSession`] range rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSessionOpts {
    /// Render frames of a chunk in parallel on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames per chunk of the render->encode pipeline.
    pub chunk_size: usize,
    /// Worker threads; `None` uses the rayon default.
    pub threads: Option<usize>,
    /// Render frames with identical fingerprints once per chunk.
    pub static_frame_elision: bool,
    /// Bounded channel capacity between render workers and the encoder thread.
    pub channel_capacity: usize,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
            channel_capacity: 4,
        }
    }
}

impl From<&RenderConfig> for RenderSessionOpts {
    fn from(cfg: &RenderConfig) -> Self {
        Self {
            parallel: cfg.parallel,
            chunk_size: cfg.chunk_size,
            threads: cfg.threads,
            static_frame_elision: cfg.static_frame_elision,
            channel_capacity: cfg.channel_capacity,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames served from an identical earlier frame of the same chunk.
    pub frames_elided: u64,
    /// Still artifacts written to the artifact directory.
    pub artifacts_written: u64,
}

/// Renders frames of a [`Reel`].
///
/// Holds the reel, its fonts and a lazily created backend for single-frame calls. Range
/// renders stream frames in order to a [`FrameSink`] through an encoder thread and write the
/// reel's artifacts (the thumbnail) when an artifact directory is set.
pub struct RenderSession {
    reel: Reel,
    fonts: FontBook,
    settings: RenderSettings,
    opts: RenderSessionOpts,
    artifact_dir: Option<PathBuf>,
    backend: Option<Box<dyn RenderBackend>>,
}

impl std::fmt::Debug for RenderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSession")
            .field("canvas", &self.reel.canvas)
            .field("opts", &self.opts)
            .field("artifact_dir", &self.artifact_dir)
            .finish_non_exhaustive()
    }
}

impl RenderSession {
    /// New session; frames are cleared to the reel's background color.
    pub fn new(reel: &Reel, fonts: FontBook, opts: RenderSessionOpts) -> ReelResult<Self> {
        reel.validate()?;
        if opts.threads == Some(0) {
            return Err(ReelError::validation(
                "render session 'threads' must be >= 1 when set",
            ));
        }
        Ok(Self {
            settings: RenderSettings {
                clear_rgba: Some(reel.background.to_rgba8()),
            },
            reel: reel.clone(),
            fonts,
            opts,
            artifact_dir: None,
            backend: None,
        })
    }

    /// Write artifacts into `dir` during range renders.
    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = Some(dir.into());
        self
    }

    /// The reel being rendered.
    pub fn reel(&self) -> &Reel {
        &self.reel
    }

    /// Render options.
    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    /// Full frame range of the reel.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.reel.duration_frames()),
        }
    }

    /// Render a single frame.
    pub fn render_frame(&mut self, frame: FrameIndex) -> ReelResult<FrameRGBA> {
        let eval = Evaluator::eval_frame(&self.reel, frame)?;
        let backend = self
            .backend
            .get_or_insert_with(|| create_backend(&self.settings, &self.fonts));
        render_eval(&self.reel, backend.as_mut(), &eval)
    }

    /// Render every artifact of the reel and write it into `dir`. Returns the written paths.
    pub fn render_artifacts(&mut self, dir: &Path) -> ReelResult<Vec<PathBuf>> {
        let specs = self.reel.thumbnail.iter().cloned().collect::<Vec<_>>();
        let bg = self.settings.clear_rgba.unwrap_or([0, 0, 0, 255]);
        let mut out = Vec::with_capacity(specs.len());
        for spec in specs {
            let frame = self.render_frame(spec.frame)?;
            out.push(write_artifact(dir, &spec, &frame, bg)?);
        }
        Ok(out)
    }

    /// Render `range` and stream it into `sink`.
    ///
    /// The sink receives frames in strictly increasing index order; out-of-order completion
    /// of parallel workers is reordered at the encoder thread (bounded channel backpressure).
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> ReelResult<RenderStats> {
        if range.is_empty() {
            return Err(ReelError::validation(
                "render_range range must be non-empty",
            ));
        }
        if range.end.0 > self.reel.duration_frames() {
            return Err(ReelError::validation(format!(
                "render_range range must be within the reel ({} frames)",
                self.reel.duration_frames()
            )));
        }

        let cfg = SinkConfig {
            width: self.reel.canvas.width,
            height: self.reel.canvas.height,
            fps: self.reel.fps,
        };

        let cap = self.opts.channel_capacity.max(1);
        let bytes_per_frame = u64::from(cfg.width)
            .saturating_mul(u64::from(cfg.height))
            .saturating_mul(4)
            .max(1);
        let max_chunk_by_mem = (MAX_REORDER_BUFFER_BYTES / bytes_per_frame).max(1);
        let chunk_size = normalized_chunk_size(self.opts.chunk_size)
            .min(max_chunk_by_mem)
            .min(range.len_frames());

        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };

        let artifacts = match &self.artifact_dir {
            Some(dir) => self
                .reel
                .thumbnail
                .iter()
                .filter(|a| range.contains(a.frame))
                .map(|a| (a.clone(), dir.clone()))
                .collect::<Vec<_>>(),
            None => Vec::new(),
        };
        let bg = self.settings.clear_rgba.unwrap_or([0, 0, 0, 255]);

        tracing::info!(
            start = range.start.0,
            end = range.end.0,
            chunk_size,
            parallel = self.opts.parallel,
            elision = self.opts.static_frame_elision,
            "render range"
        );

        let Self {
            reel,
            fonts,
            settings,
            opts,
            backend,
            ..
        } = self;
        let (reel, fonts, settings, opts): (&Reel, &FontBook, &RenderSettings, &RenderSessionOpts) =
            (reel, fonts, settings, opts);

        std::thread::scope(|scope| -> ReelResult<RenderStats> {
            let (tx, rx) = mpsc::sync_channel::<FrameMsg>(cap);
            let range_start = range.start.0;
            let range_end = range.end.0;
            let sink_ref: &mut dyn FrameSink = sink;

            let enc = scope.spawn(move || -> ReelResult<u64> {
                sink_ref.begin(cfg)?;

                let mut written = 0u64;
                let mut next = range_start;
                let mut pending = HashMap::<u64, Arc<FrameRGBA>>::new();
                while next < range_end {
                    let frame = match pending.remove(&next) {
                        Some(frame) => frame,
                        None => {
                            let msg = rx.recv().map_err(|_| {
                                ReelError::evaluation("encoder channel disconnected unexpectedly")
                            })?;
                            pending.insert(msg.idx.0, msg.frame);
                            continue;
                        }
                    };
                    sink_ref.push_frame(FrameIndex(next), &frame)?;
                    for (spec, dir) in artifacts.iter().filter(|(a, _)| a.frame.0 == next) {
                        let path = write_artifact(dir, spec, &frame, bg)?;
                        tracing::info!(path = %path.display(), frame = next, "artifact written");
                        written += 1;
                    }
                    next += 1;
                }

                sink_ref.end()?;
                Ok(written)
            });

            let mut stats = RenderStats::default();
            let produce_res = (|| -> ReelResult<()> {
                let mut chunk_start = range_start;
                while chunk_start < range_end {
                    let chunk_end = (chunk_start + chunk_size).min(range_end);
                    let chunk = ChunkCtx {
                        reel,
                        fonts,
                        settings,
                        start: chunk_start,
                        end: chunk_end,
                    };
                    let chunk_stats = match pool.as_ref() {
                        Some(pool) if opts.static_frame_elision => {
                            render_chunk_parallel_elided(&chunk, pool, &tx)?
                        }
                        Some(pool) => render_chunk_parallel(&chunk, pool, &tx)?,
                        None => {
                            let backend =
                                backend.get_or_insert_with(|| create_backend(settings, fonts));
                            render_chunk_sequential(
                                &chunk,
                                backend.as_mut(),
                                opts.static_frame_elision,
                                &tx,
                            )?
                        }
                    };
                    tracing::debug!(
                        start = chunk_start,
                        end = chunk_end,
                        rendered = chunk_stats.frames_rendered,
                        elided = chunk_stats.frames_elided,
                        "chunk done"
                    );
                    stats.frames_total += chunk_stats.frames_total;
                    stats.frames_rendered += chunk_stats.frames_rendered;
                    stats.frames_elided += chunk_stats.frames_elided;
                    chunk_start = chunk_end;
                }
                Ok(())
            })();

            drop(tx);
            let enc_res = enc
                .join()
                .map_err(|_| ReelError::encode("encoder thread panicked"))?;

            match (produce_res, enc_res) {
                (Ok(()), Ok(written)) => {
                    stats.artifacts_written = written;
                    tracing::info!(
                        total = stats.frames_total,
                        rendered = stats.frames_rendered,
                        elided = stats.frames_elided,
                        artifacts = written,
                        "render range done"
                    );
                    Ok(stats)
                }
                // A refused send means the encoder stopped first; its error is the cause.
                (Err(ReelError::Encode(_)), Err(enc_err)) => Err(enc_err),
                (Err(e), _) | (Ok(()), Err(e)) => Err(e),
            }
        })
    }
}

#[derive(Debug)]
struct FrameMsg {
    idx: FrameIndex,
    frame: Arc<FrameRGBA>,
}

struct ChunkCtx<'a> {
    reel: &'a Reel,
    fonts: &'a FontBook,
    settings: &'a RenderSettings,
    start: u64,
    end: u64,
}

impl ChunkCtx<'_> {
    fn len(&self) -> u64 {
        self.end - self.start
    }
}

fn render_eval(
    reel: &Reel,
    backend: &mut dyn RenderBackend,
    eval: &EvaluatedFrame,
) -> ReelResult<FrameRGBA> {
    let plan = compile_frame(eval, reel.canvas)?;
    backend.render_plan(&plan, eval)
}

fn send(tx: &mpsc::SyncSender<FrameMsg>, idx: u64, frame: Arc<FrameRGBA>) -> ReelResult<()> {
    tx.send(FrameMsg {
        idx: FrameIndex(idx),
        frame,
    })
    .map_err(|_| ReelError::encode("encoder thread is not accepting frames"))
}

fn write_artifact(
    dir: &Path,
    spec: &ArtifactSpec,
    frame: &FrameRGBA,
    bg: [u8; 4],
) -> ReelResult<PathBuf> {
    let path = dir.join(&spec.name);
    write_still(frame, &path, bg)?;
    Ok(path)
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render_range 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn render_chunk_sequential(
    chunk: &ChunkCtx<'_>,
    backend: &mut dyn RenderBackend,
    elide: bool,
    tx: &mpsc::SyncSender<FrameMsg>,
) -> ReelResult<RenderStats> {
    let mut stats = RenderStats {
        frames_total: chunk.len(),
        ..RenderStats::default()
    };
    let mut cache = HashMap::<FrameFingerprint, Arc<FrameRGBA>>::new();
    for f in chunk.start..chunk.end {
        let eval = Evaluator::eval_frame(chunk.reel, FrameIndex(f))?;
        let fp = elide.then(|| fingerprint_frame(&eval));
        if let Some(frame) = fp.and_then(|fp| cache.get(&fp)) {
            stats.frames_elided += 1;
            send(tx, f, frame.clone())?;
            continue;
        }

        let frame = Arc::new(render_eval(chunk.reel, backend, &eval)?);
        stats.frames_rendered += 1;
        if let Some(fp) = fp {
            cache.insert(fp, frame.clone());
        }
        send(tx, f, frame)?;
    }
    Ok(stats)
}

fn render_chunk_parallel(
    chunk: &ChunkCtx<'_>,
    pool: &rayon::ThreadPool,
    tx: &mpsc::SyncSender<FrameMsg>,
) -> ReelResult<RenderStats> {
    let tx = tx.clone();
    pool.install(|| {
        (chunk.start..chunk.end).into_par_iter().try_for_each_init(
            || create_backend(chunk.settings, chunk.fonts),
            move |backend, f| -> ReelResult<()> {
                let eval = Evaluator::eval_frame(chunk.reel, FrameIndex(f))?;
                let frame = render_eval(chunk.reel, backend.as_mut(), &eval)?;
                send(&tx, f, Arc::new(frame))
            },
        )
    })?;
    Ok(RenderStats {
        frames_total: chunk.len(),
        frames_rendered: chunk.len(),
        ..RenderStats::default()
    })
}

/// Fingerprint every frame of the chunk up front, render the unique ones in parallel, then
/// send all frames in order with shared payloads.
fn render_chunk_parallel_elided(
    chunk: &ChunkCtx<'_>,
    pool: &rayon::ThreadPool,
    tx: &mpsc::SyncSender<FrameMsg>,
) -> ReelResult<RenderStats> {
    let mut uniq = Vec::<EvaluatedFrame>::new();
    let mut map = Vec::<usize>::with_capacity(chunk.len() as usize);
    let mut seen = HashMap::<FrameFingerprint, usize>::new();

    for f in chunk.start..chunk.end {
        let eval = Evaluator::eval_frame(chunk.reel, FrameIndex(f))?;
        let fp = fingerprint_frame(&eval);
        let u = *seen.entry(fp).or_insert_with(|| {
            uniq.push(eval);
            uniq.len() - 1
        });
        map.push(u);
    }

    let rendered = pool.install(|| {
        uniq.par_iter()
            .map_init(
                || create_backend(chunk.settings, chunk.fonts),
                |backend, eval| -> ReelResult<Arc<FrameRGBA>> {
                    Ok(Arc::new(render_eval(chunk.reel, backend.as_mut(), eval)?))
                },
            )
            .collect::<ReelResult<Vec<_>>>()
    })?;

    for (f, &u) in (chunk.start..chunk.end).zip(&map) {
        send(tx, f, rendered[u].clone())?;
    }

    let rendered_count = rendered.len() as u64;
    Ok(RenderStats {
        frames_total: chunk.len(),
        frames_rendered: rendered_count,
        frames_elided: chunk.len().saturating_sub(rendered_count),
        ..RenderStats::default()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
