use super::*;

#[test]
fn empty_object_is_the_default() {
    let cfg = ReelConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, ReelConfig::default());
    assert_eq!(Canvas::from(cfg.canvas), Canvas { width: 1280, height: 720 });
    assert!(cfg.fonts.system_fallback);
    assert_eq!(cfg.render.chunk_size, 64);
    assert_eq!(cfg.output.background, Color::BLACK);
}

#[test]
fn parses_full_document() {
    let json = serde_json::json!({
        "canvas": { "width": 640, "height": 360 },
        "fonts": { "heading": "fonts/Manrope.ttf", "system_fallback": false },
        "render": { "parallel": false, "threads": 2, "chunk_size": 8,
                    "static_frame_elision": false, "channel_capacity": 2 },
        "output": { "background": "#0F172A", "artifact_dir": "artifacts" },
        "transitions": [
            { "kind": "fade" },
            { "kind": "fade" },
            { "kind": "wipe", "params": { "direction": "from-top" }, "duration_frames": 10 },
            { "kind": "slide" }
        ]
    });
    let cfg = ReelConfig::from_reader(json.to_string().as_bytes()).unwrap();
    assert_eq!(cfg.canvas.width, 640);
    assert_eq!(cfg.render.threads, Some(2));
    assert_eq!(cfg.output.background, Color::rgb8(0x0f, 0x17, 0x2a));
    assert_eq!(cfg.transitions.as_ref().map(Vec::len), Some(4));
}

#[test]
fn rejects_unknown_fields_and_bad_ranges() {
    assert!(ReelConfig::from_reader(r#"{"canvass": {}}"#.as_bytes()).is_err());
    for bad in [
        r#"{"canvas": {"width": 0}}"#,
        r#"{"render": {"chunk_size": 0}}"#,
        r#"{"render": {"channel_capacity": 0}}"#,
        r#"{"render": {"threads": 0}}"#,
        r#"{"transitions": [{"kind": "fade"}]}"#,
    ] {
        let err = ReelConfig::from_reader(bad.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("validation error:"), "{bad}: {err}");
    }
}

#[test]
fn rejects_unparseable_transition() {
    let json = r#"{"transitions": [
        {"kind": "fade"}, {"kind": "spin"}, {"kind": "fade"}, {"kind": "fade"}
    ]}"#;
    let err = ReelConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("transitions[1]"));
}

#[test]
fn relative_paths_resolve_against_base() {
    let mut cfg = ReelConfig {
        fonts: FontsConfig {
            body: Some(PathBuf::from("fonts/Inter.ttf")),
            dirs: vec![PathBuf::from("more")],
            ..FontsConfig::default()
        },
        ..ReelConfig::default()
    };
    cfg.resolve_paths(Path::new("/cfg"));
    assert_eq!(cfg.fonts.body, Some(PathBuf::from("/cfg/fonts/Inter.ttf")));
    assert_eq!(cfg.fonts.dirs, vec![PathBuf::from("/cfg/more")]);
    assert_eq!(cfg.output.artifact_dir, PathBuf::from("/cfg/out"));
}
