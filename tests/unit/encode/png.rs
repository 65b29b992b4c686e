use super::*;
use crate::foundation::core::Fps;

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

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 2,
        data: [10u8, 20, 30, 255].repeat(4),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::whole(30),
    }
}

#[test]
fn writes_numbered_files() {
    let dir = temp_dir("png_seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame()).unwrap();
    sink.push_frame(FrameIndex(4), &frame()).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), 2);
    assert!(dir.join("frame_00003.png").is_file());
    assert!(dir.join("frame_00004.png").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_out_of_order_and_mismatched_frames() {
    let dir = temp_dir("png_seq_order");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(5), &frame()).unwrap();
    assert!(sink.push_frame(FrameIndex(5), &frame()).is_err());

    let big = FrameRGBA {
        width: 4,
        height: 2,
        data: vec![0; 32],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(9), &big).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::frame_file_name(FrameIndex(0)), "frame_00000.png");
    assert_eq!(PngSequenceSink::frame_file_name(FrameIndex(909)), "frame_00909.png");
}
