use super::*;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32, fps: Fps) -> SinkConfig {
    SinkConfig { width, height, fps }
}

fn opts() -> FfmpegSinkOpts {
    let reel = Reel::training()
        .unwrap()
        .with_background(Color::rgb8(10, 20, 30));
    FfmpegSinkOpts::for_reel("out/reel.mp4", &reel)
}

fn strings(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

#[test]
fn opts_take_the_reel_background() {
    let o = opts();
    assert_eq!(o.background.to_rgba8(), [10, 20, 30, 255]);
    assert!(o.overwrite);
    assert_eq!(o.crf, 18);
    assert!(!o.overwrite(false).overwrite);
}

#[test]
fn args_describe_a_raw_rgba_stream_into_x264() {
    let args = strings(&opts().ffmpeg_args(&cfg(1280, 720, Fps::whole(30))));
    let pos = |s: &str| args.iter().position(|a| a == s).unwrap();

    assert_eq!(args[0], "-y");
    assert_eq!(args[pos("-s") + 1], "1280x720");
    assert_eq!(args[pos("-r") + 1], "30/1");
    assert!(pos("-r") < pos("-i"));
    assert_eq!(args[pos("-i") + 1], "pipe:0");
    assert_eq!(args[pos("-crf") + 1], "18");
    assert_eq!(args[pos("-preset") + 1], "medium");
    assert!(args.contains(&"-an".to_owned()));
    assert!(args.contains(&"yuv420p".to_owned()));
    assert_eq!(args.last().unwrap(), "out/reel.mp4");

    let keep = strings(&opts().overwrite(false).ffmpeg_args(&cfg(2, 2, Fps::whole(30))));
    assert_eq!(keep[0], "-n");
}

#[test]
fn check_rejects_odd_or_empty_canvases() {
    let o = opts();
    let fps = Fps::whole(30);
    assert!(o.check(&cfg(1280, 720, fps)).is_ok());
    assert!(o.check(&cfg(0, 720, fps)).is_err());
    assert!(o.check(&cfg(641, 360, fps)).is_err());
    assert!(o.check(&cfg(640, 361, fps)).is_err());
    assert!(o.check(&cfg(640, 360, Fps { num: 0, den: 1 })).is_err());
}

#[test]
fn check_rejects_bad_encoder_settings() {
    let fps = Fps::whole(30);
    let mut o = opts();
    o.crf = 52;
    assert!(o.check(&cfg(640, 360, fps)).is_err());
    let mut o = opts();
    o.preset = " ".to_owned();
    assert!(o.check(&cfg(640, 360, fps)).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(opts());
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn begin_refuses_to_overwrite_when_asked_not_to() {
    let dir = std::env::temp_dir().join("training_reel_ffmpeg_keep");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("existing.mp4");
    std::fs::write(&out, b"x").unwrap();

    let mut o = opts().overwrite(false);
    o.out_path = out;
    let mut sink = FfmpegSink::new(o);
    let err = sink.begin(cfg(64, 36, Fps::whole(30))).unwrap_err();
    assert!(err.to_string().contains("already exists"), "{err}");
}
