use super::*;

#[test]
fn direction_parses_aliases() {
    assert_eq!(Direction::parse("from-right").unwrap(), Direction::FromRight);
    assert_eq!(Direction::parse(" From_Bottom ").unwrap(), Direction::FromBottom);
    assert_eq!(Direction::parse("ltr").unwrap(), Direction::FromLeft);
    assert!(Direction::parse("diagonal").is_err());
}

#[test]
fn presentation_parses_json_params() {
    let slide = parse_presentation("slide", &serde_json::json!({ "direction": "from-bottom" }));
    assert_eq!(slide.unwrap(), Presentation::Slide(Direction::FromBottom));

    let wipe = parse_presentation("WIPE", &serde_json::json!({ "dir": "rtl" }));
    assert_eq!(wipe.unwrap(), Presentation::Wipe(Direction::FromRight));

    assert_eq!(
        parse_presentation("slide", &serde_json::Value::Null).unwrap(),
        Presentation::Slide(Direction::FromRight)
    );
    assert_eq!(
        parse_presentation("fade", &serde_json::Value::Null).unwrap(),
        Presentation::Fade
    );
}

#[test]
fn presentation_rejects_bad_input() {
    assert!(parse_presentation("", &serde_json::Value::Null).is_err());
    assert!(parse_presentation("iris", &serde_json::Value::Null).is_err());
    assert!(parse_presentation("wipe", &serde_json::json!([1, 2])).is_err());
    assert!(parse_presentation("slide", &serde_json::json!({ "direction": 3 })).is_err());
}

#[test]
fn slide_pushes_exiting_scene_out_the_opposite_side() {
    let p = Presentation::Slide(Direction::FromRight);
    let enter0 = p.effect(Side::Entering, 0.0);
    let enter1 = p.effect(Side::Entering, 1.0);
    assert_eq!(enter0.offset, Vec2::new(1.0, 0.0));
    assert_eq!(enter1.offset, Vec2::ZERO);

    let exit = p.effect(Side::Exiting, 0.25);
    assert_eq!(exit.offset, Vec2::new(-0.25, 0.0));
    assert_eq!(exit.opacity, 1.0);

    let up = Presentation::Slide(Direction::FromBottom).effect(Side::Entering, 0.5);
    assert_eq!(up.offset, Vec2::new(0.0, 0.5));
}

#[test]
fn fade_and_wipe_leave_the_exiting_scene_alone() {
    for p in [Presentation::Fade, Presentation::Wipe(Direction::FromLeft)] {
        assert_eq!(p.effect(Side::Exiting, 0.6), SideEffect::IDENTITY);
    }
    assert_eq!(Presentation::Fade.effect(Side::Entering, 0.4).opacity, 0.4);
    let wipe = Presentation::Wipe(Direction::FromLeft).effect(Side::Entering, 0.3);
    assert_eq!(
        wipe.wipe,
        Some(WipeMask {
            from: Direction::FromLeft,
            t: 0.3
        })
    );
}

#[test]
fn linear_timing_progress() {
    let t = Timing::linear(20);
    assert_eq!(t.duration_frames(), 20);
    assert_eq!(t.progress(0), 0.0);
    assert_eq!(t.progress(10), 0.5);
    assert_eq!(t.progress(19), 0.95);
    assert_eq!(t.progress(40), 1.0);
}

#[test]
fn transition_spec_from_json() {
    let spec: TransitionSpec = serde_json::from_value(serde_json::json!({
        "kind": "slide",
        "params": { "direction": "from-bottom" },
        "ease": "power2.out"
    }))
    .unwrap();
    assert_eq!(spec.duration_frames, 20);
    let (p, timing) = spec.resolve().unwrap();
    assert_eq!(p, Presentation::Slide(Direction::FromBottom));
    assert_eq!(
        timing,
        Timing::Linear {
            duration_frames: 20,
            ease: Ease::OutCubic
        }
    );

    let bad = TransitionSpec {
        ease: Some("wobble".to_owned()),
        ..spec
    };
    assert!(bad.resolve().is_err());
}
