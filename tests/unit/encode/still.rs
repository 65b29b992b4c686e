use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "training_reel_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn frame(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn format_follows_extension() {
    assert_eq!(StillFormat::from_path(Path::new("a/thumb.JPEG")), StillFormat::Jpeg);
    assert_eq!(StillFormat::from_path(Path::new("a/thumb.jpg")), StillFormat::Jpeg);
    assert_eq!(StillFormat::from_path(Path::new("a/frame.png")), StillFormat::Png);
    assert_eq!(StillFormat::from_path(Path::new("noext")), StillFormat::Png);
}

#[test]
fn png_round_trips_pixels() {
    let dir = temp_dir("still_png");
    let path = dir.join("nested").join("f.png");
    write_png(&frame(4, 2, [255, 0, 0, 255]), &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(3, 1).0, [255, 0, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn thumbnail_is_an_opaque_jpeg() {
    let dir = temp_dir("still_jpeg");
    let path = dir.join("thumbnail.jpeg");
    write_thumbnail_jpeg(&frame(16, 16, [0, 0, 0, 0]), &path).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (16, 16));
    assert!(!img.color().has_alpha());
    let rgb = img.to_rgb8();
    assert!(rgb.pixels().all(|p| p.0.iter().all(|&c| c < 8)));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_inconsistent_frames() {
    let bad = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 10],
        premultiplied: true,
    };
    let path = temp_dir("still_bad").join("x.png");
    assert!(write_png(&bad, &path).is_err());
}
