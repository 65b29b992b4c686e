use super::*;
use crate::foundation::core::Fps;

fn cx(frame: i64) -> SceneCtx {
    SceneCtx::new(frame, Fps::new(30, 1).unwrap(), 180)
}

#[test]
fn summary_items_enter_in_sequence() {
    let starts: Vec<i64> = (0..4)
        .map(|i| cx(0).frames(1.2 + 0.35 * i as f64))
        .collect();
    assert_eq!(starts[0], 36);
    assert!(starts.windows(2).all(|w| w[1] - w[0] >= 10));
    for (i, &s) in starts.iter().enumerate() {
        assert_eq!(ClosingScene::item_progress(&cx(s), i), 0.0);
        assert!(ClosingScene::item_progress(&cx(s + 4), i) > 0.0);
        assert!((ClosingScene::item_progress(&cx(179), i) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn cta_is_hidden_until_frame_120() {
    let before = ClosingScene.build(&cx(119));
    assert_eq!(before.find("cta").unwrap().opacity, 0.0);
    assert_eq!(ClosingScene::cta_glow(&cx(119)), 0.0);

    let after = ClosingScene.build(&cx(150));
    assert_eq!(after.find("cta").unwrap().opacity, 1.0);
    let g = ClosingScene::cta_glow(&cx(150));
    assert!((0.15..=0.45).contains(&g));
}

#[test]
fn cta_glow_pulses_around_its_resting_alpha() {
    assert!((ClosingScene::cta_glow(&cx(120)) - 0.3).abs() < 1e-12);
    // 15 frames in: 0.5 s at 3 rad/s.
    let g = ClosingScene::cta_glow(&cx(135));
    assert!((g - (0.3 + 0.15 * 1.5f64.sin())).abs() < 1e-12, "{g}");
}

#[test]
fn tagline_fades_in_after_the_cta() {
    assert_eq!(ClosingScene.build(&cx(144)).find("tagline").unwrap().opacity, 0.0);
    assert_eq!(ClosingScene.build(&cx(170)).find("tagline").unwrap().opacity, 1.0);
}

#[test]
fn ring_check_appears_after_fill() {
    assert_eq!(ClosingScene.build(&cx(60)).find("ring-check").unwrap().opacity, 0.0);
    assert_eq!(ClosingScene.build(&cx(75)).find("ring-check").unwrap().opacity, 1.0);
}

#[test]
fn carries_all_copy() {
    let texts = ClosingScene.build(&cx(179)).texts();
    for want in [HEADING, CTA_TITLE, CTA_BODY, CTA_BUTTON, TAGLINE, "04", "SUMMARY"] {
        assert!(texts.iter().any(|t| t == want), "missing {want:?}");
    }
    for it in &SUMMARY {
        assert!(texts.iter().any(|t| t == it.text));
    }
}
