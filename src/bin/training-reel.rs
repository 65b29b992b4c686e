use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;
use training_reel::{
    FfmpegSink, FfmpegSinkOpts, FontBook, FontRole, FrameIndex, FrameRange, PngSequenceSink,
    Reel, ReelConfig, RenderSession, RenderSessionOpts, RenderStats, is_ffmpeg_on_path,
    write_still,
};

#[derive(Parser, Debug)]
#[command(name = "training-reel", version, about = "Render the corporate training reel")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Configuration JSON (canvas, fonts, render and output options).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scale the configured canvas by this factor (rounded to even dimensions).
    #[arg(long, global = true)]
    scale: Option<f64>,

    /// Print the resolved font faces (family + SHA-256 of font bytes) before rendering.
    #[arg(long, global = true)]
    dump_fonts: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the reel timeline.
    Info(InfoArgs),
    /// Render a single frame as a PNG (or JPEG, by extension).
    Frame(FrameArgs),
    /// Render the thumbnail still.
    Thumbnail(ThumbnailArgs),
    /// Render a frame range as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render the MP4 video (requires `ffmpeg` on PATH) and its artifacts.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Print the manifest as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ThumbnailArgs {
    /// Output JPEG path; defaults to the thumbnail name inside the artifact directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    /// Output directory for `frame_00000.png`...
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the end of the reel.
    #[arg(long)]
    end: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Overwrite the output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Force frame-level parallelism on.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Render every frame even when it repeats the previous one.
    #[arg(long, default_value_t = false)]
    no_elision: bool,

    /// x264 constant rate factor.
    #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u8).range(0..=51))]
    crf: u8,

    /// Directory for the thumbnail; defaults to `output.artifact_dir`.
    #[arg(long)]
    artifact_dir: Option<PathBuf>,
}

struct Loaded {
    cfg: ReelConfig,
    reel: Reel,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let loaded = load(&cli.global)?;
    match cli.cmd {
        Command::Info(args) => cmd_info(&loaded, args),
        Command::Frame(args) => cmd_frame(&loaded, &cli.global, args),
        Command::Thumbnail(args) => cmd_thumbnail(&loaded, &cli.global, args),
        Command::Frames(args) => cmd_frames(&loaded, &cli.global, args),
        Command::Render(args) => cmd_render(&loaded, &cli.global, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load(global: &GlobalArgs) -> anyhow::Result<Loaded> {
    let cfg = match &global.config {
        Some(path) => ReelConfig::from_path(path)?,
        None => ReelConfig::default(),
    };
    let mut reel = Reel::from_config(&cfg)?;
    if let Some(factor) = global.scale {
        anyhow::ensure!(
            factor.is_finite() && factor > 0.0,
            "--scale must be a positive number"
        );
        let canvas = reel.canvas.scaled(factor);
        reel = reel.with_canvas(canvas);
        reel.validate()?;
    }
    Ok(Loaded { cfg, reel })
}

fn load_fonts(loaded: &Loaded, global: &GlobalArgs) -> anyhow::Result<FontBook> {
    let fonts = FontBook::load(&loaded.cfg.fonts, Path::new("."))?;
    if global.dump_fonts {
        dump_font_diagnostics(&fonts);
    }
    Ok(fonts)
}

fn session(
    loaded: &Loaded,
    global: &GlobalArgs,
    opts: RenderSessionOpts,
) -> anyhow::Result<RenderSession> {
    let fonts = load_fonts(loaded, global)?;
    Ok(RenderSession::new(&loaded.reel, fonts, opts)?)
}

fn cmd_info(loaded: &Loaded, args: InfoArgs) -> anyhow::Result<()> {
    let manifest = loaded.reel.manifest();
    if args.json {
        let s = serde_json::to_string_pretty(&manifest).context("serialize manifest")?;
        println!("{s}");
        return Ok(());
    }

    println!(
        "canvas {}x{} @ {} fps, {} frames ({} series + {} buffer)",
        manifest.canvas.width,
        manifest.canvas.height,
        manifest.fps.as_f64(),
        manifest.total_frames,
        manifest.series_frames,
        manifest.buffer_frames
    );
    println!("{:<12} {:>6} {:>6} {:>6}", "scene", "start", "end", "frames");
    for s in &manifest.scenes {
        println!(
            "{:<12} {:>6} {:>6} {:>6}",
            s.id.as_str(),
            s.start,
            s.end,
            s.duration_frames
        );
    }
    for t in &manifest.transitions {
        println!(
            "{} -> {}: {:?} at {} for {} frames",
            t.from.as_str(),
            t.to.as_str(),
            t.presentation,
            t.window_start,
            t.timing.duration_frames()
        );
    }
    for a in &manifest.artifacts {
        println!("artifact {} at frame {}", a.name, a.frame.0);
    }
    Ok(())
}

fn cmd_frame(loaded: &Loaded, global: &GlobalArgs, args: FrameArgs) -> anyhow::Result<()> {
    let mut sess = session(loaded, global, RenderSessionOpts::default())?;
    let frame = sess.render_frame(FrameIndex(args.frame))?;
    write_still(
        &frame,
        &args.out,
        loaded.cfg.output.background.to_rgba8(),
    )?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_thumbnail(loaded: &Loaded, global: &GlobalArgs, args: ThumbnailArgs) -> anyhow::Result<()> {
    let spec = loaded
        .reel
        .thumbnail
        .clone()
        .context("the reel has no thumbnail")?;
    let out = args
        .out
        .unwrap_or_else(|| loaded.cfg.output.artifact_dir.join(&spec.name));

    let mut sess = session(loaded, global, RenderSessionOpts::default())?;
    let frame = sess.render_frame(spec.frame)?;
    write_still(&frame, &out, loaded.cfg.output.background.to_rgba8())?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_frames(loaded: &Loaded, global: &GlobalArgs, args: FramesArgs) -> anyhow::Result<()> {
    let end = args.end.unwrap_or(loaded.reel.duration_frames());
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let mut sess = session(loaded, global, RenderSessionOpts::from(&loaded.cfg.render))?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = sess.render_range(range, &mut sink)?;
    report(&stats);
    eprintln!("wrote {} frames to {}", sink.written(), args.out_dir.display());
    Ok(())
}

fn cmd_render(loaded: &Loaded, global: &GlobalArgs, args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        is_ffmpeg_on_path(),
        "ffmpeg was not found on PATH; install it or use `frames` to write a PNG sequence"
    );

    let mut opts = RenderSessionOpts::from(&loaded.cfg.render);
    opts.parallel |= args.parallel;
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if args.no_elision {
        opts.static_frame_elision = false;
    }

    let artifact_dir = args
        .artifact_dir
        .unwrap_or_else(|| loaded.cfg.output.artifact_dir.clone());
    let mut sess = session(loaded, global, opts)?.with_artifact_dir(&artifact_dir);

    let mut sink_opts =
        FfmpegSinkOpts::for_reel(&args.out, &loaded.reel).overwrite(args.overwrite);
    sink_opts.crf = args.crf;
    let mut sink = FfmpegSink::new(sink_opts);

    let range = sess.full_range();
    let stats = sess.render_range(range, &mut sink)?;
    report(&stats);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn report(stats: &RenderStats) {
    eprintln!(
        "frames: {} total, {} rendered, {} elided; artifacts: {}",
        stats.frames_total, stats.frames_rendered, stats.frames_elided, stats.artifacts_written
    );
}

fn dump_font_diagnostics(fonts: &FontBook) {
    eprintln!("text font diagnostics:");
    for role in FontRole::ALL {
        eprintln!("  {role:?}:");
        match fonts.face(role) {
            Some(face) => {
                eprintln!("    family:      {}", face.family);
                eprintln!("    origin:      {:?}", face.origin);
                eprintln!("    sha256:      {}", sha256_hex(&face.bytes));
            }
            None => eprintln!("    (none; text in this role is skipped)"),
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
