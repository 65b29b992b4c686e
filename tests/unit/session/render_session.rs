use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Canvas;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "training_reel_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn small_reel() -> Reel {
    Reel::training().unwrap().with_canvas(Canvas {
        width: 64,
        height: 36,
    })
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange {
        start: FrameIndex(start),
        end: FrameIndex(end),
    }
}

fn session(opts: RenderSessionOpts) -> RenderSession {
    RenderSession::new(&small_reel(), FontBook::empty(), opts).unwrap()
}

fn render(opts: RenderSessionOpts, r: FrameRange) -> (RenderStats, InMemorySink) {
    let mut sess = session(opts);
    let mut sink = InMemorySink::new();
    let stats = sess.render_range(r, &mut sink).unwrap();
    (stats, sink)
}

#[test]
fn sequential_range_is_ordered_and_varies_inside_a_transition() {
    let (stats, sink) = render(RenderSessionOpts::default(), range(98, 106));
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 8,
            frames_rendered: 8,
            frames_elided: 0,
            artifacts_written: 0,
        }
    );
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().width, 64);
    assert_eq!(sink.frames().len(), 8);
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, 98 + i as u64);
        assert_eq!((frame.width, frame.height), (64, 36));
    }
    assert_ne!(sink.frames()[2].1.data, sink.frames()[7].1.data);
}

#[test]
fn parallel_output_matches_sequential_output() {
    let r = range(95, 125);
    let (_, seq) = render(
        RenderSessionOpts {
            chunk_size: 7,
            ..RenderSessionOpts::default()
        },
        r,
    );
    let (stats, par) = render(
        RenderSessionOpts {
            parallel: true,
            threads: Some(2),
            chunk_size: 7,
            ..RenderSessionOpts::default()
        },
        r,
    );

    assert_eq!(stats.frames_rendered, 30);
    assert_eq!(seq.frames().len(), par.frames().len());
    for ((ia, a), (ib, b)) in seq.frames().iter().zip(par.frames()) {
        assert_eq!(ia, ib);
        assert_eq!(a.data, b.data);
    }
}

#[test]
fn buffer_frames_collapse_under_elision() {
    for parallel in [false, true] {
        let (stats, sink) = render(
            RenderSessionOpts {
                parallel,
                threads: Some(2),
                static_frame_elision: true,
                chunk_size: 1024,
                ..RenderSessionOpts::default()
            },
            range(880, 910),
        );
        assert_eq!(stats.frames_total, 30);
        assert_eq!(stats.frames_rendered, 1, "parallel={parallel}");
        assert_eq!(stats.frames_elided, 29, "parallel={parallel}");
        let first = &sink.frames()[0].1.data;
        assert!(sink.frames().iter().all(|(_, f)| &f.data == first));
        // Buffer frames show the opaque clear color.
        assert_eq!(&first[..4], &[0, 0, 0, 255]);
    }
}

#[test]
fn elision_is_per_chunk() {
    let (stats, _) = render(
        RenderSessionOpts {
            static_frame_elision: true,
            chunk_size: 10,
            ..RenderSessionOpts::default()
        },
        range(880, 910),
    );
    assert_eq!(stats.frames_rendered, 3);
    assert_eq!(stats.frames_elided, 27);
}

#[test]
fn thumbnail_is_written_when_frame_zero_is_rendered() {
    let dir = temp_dir("session_artifacts");
    let mut sess = session(RenderSessionOpts::default()).with_artifact_dir(&dir);

    let mut sink = InMemorySink::new();
    let stats = sess.render_range(range(0, 2), &mut sink).unwrap();
    assert_eq!(stats.artifacts_written, 1);
    let thumb = dir.join("thumbnail.jpeg");
    let img = image::open(&thumb).unwrap();
    assert_eq!((img.width(), img.height()), (64, 36));

    std::fs::remove_file(&thumb).unwrap();
    let stats = sess.render_range(range(1, 3), &mut sink).unwrap();
    assert_eq!(stats.artifacts_written, 0);
    assert!(!thumb.exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_artifacts_writes_thumbnail() {
    let dir = temp_dir("session_render_artifacts");
    let mut sess = session(RenderSessionOpts::default());
    let paths = sess.render_artifacts(&dir).unwrap();
    assert_eq!(paths, vec![dir.join("thumbnail.jpeg")]);
    assert!(paths[0].is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_frame_matches_range_output() {
    let mut sess = session(RenderSessionOpts::default());
    let single = sess.render_frame(FrameIndex(110)).unwrap();
    let mut sink = InMemorySink::new();
    sess.render_range(range(110, 111), &mut sink).unwrap();
    assert_eq!(single.data, sink.frames()[0].1.data);
}

#[test]
fn invalid_ranges_and_options_are_rejected() {
    let mut sess = session(RenderSessionOpts::default());
    let mut sink = InMemorySink::new();
    let err = sess.render_range(range(5, 5), &mut sink).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
    let err = sess.render_range(range(900, 911), &mut sink).unwrap_err();
    assert!(err.to_string().contains("within the reel"));
    assert!(sess.render_frame(FrameIndex(910)).is_err());

    let err = RenderSession::new(
        &small_reel(),
        FontBook::empty(),
        RenderSessionOpts {
            threads: Some(0),
            ..RenderSessionOpts::default()
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

struct FailingSink;

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> ReelResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA) -> ReelResult<()> {
        if idx.0 >= 2 {
            return Err(ReelError::encode("disk full"));
        }
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        Ok(())
    }
}

#[test]
fn sink_errors_surface_instead_of_channel_errors() {
    let mut sess = session(RenderSessionOpts {
        channel_capacity: 1,
        ..RenderSessionOpts::default()
    });
    let err = sess.render_range(range(0, 40), &mut FailingSink).unwrap_err();
    assert!(err.to_string().contains("disk full"), "{err}");
}

#[test]
fn opts_follow_render_config() {
    let cfg = RenderConfig::default();
    let opts = RenderSessionOpts::from(&cfg);
    assert!(opts.parallel);
    assert!(opts.static_frame_elision);
    assert_eq!(opts.chunk_size, 64);
    assert_eq!(opts.channel_capacity, 4);
}
