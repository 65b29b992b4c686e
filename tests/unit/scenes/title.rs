use super::*;
use crate::foundation::core::Fps;

fn cx(frame: i64) -> SceneCtx {
    SceneCtx::new(frame, Fps::new(30, 1).unwrap(), 120)
}

#[test]
fn icon_is_hidden_until_frame_8_and_settles_at_28() {
    assert_eq!(TitleScene::icon_motion(&cx(0)), (0.0, -180.0));
    assert_eq!(TitleScene::icon_motion(&cx(8)), (0.0, -180.0));
    let (scale, rot) = TitleScene::icon_motion(&cx(28));
    assert!((scale - 1.0).abs() < 1e-12);
    assert!(rot.abs() < 1e-12);

    let node = TitleScene.build(&cx(28));
    let icon = node.find("title-icon").unwrap();
    let [a, b, ..] = icon.transform.as_coeffs();
    assert!((a - 1.0).abs() < 1e-9 && b.abs() < 1e-9);
}

#[test]
fn icon_overshoots_between_start_and_end() {
    let peak = (9..28)
        .map(|f| TitleScene::icon_motion(&cx(f)).0)
        .fold(0.0, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn divider_grows_to_320() {
    assert_eq!(TitleScene::divider_width(&cx(20)), 0.0);
    assert!((TitleScene::divider_width(&cx(50)) - 320.0).abs() < 1e-9);
}

#[test]
fn info_row_fades_in_between_60_and_80() {
    assert_eq!(TitleScene.build(&cx(30)).find("info-row").unwrap().opacity, 0.0);
    assert_eq!(TitleScene.build(&cx(90)).find("info-row").unwrap().opacity, 1.0);
}

#[test]
fn carries_all_copy() {
    let texts = TitleScene.build(&cx(119)).texts();
    for want in [
        "EMPLOYEE TRAINING PROGRAM",
        TITLE,
        SUBTITLE,
        "15 min",
        "All Teams",
        "Certificate",
    ] {
        assert!(texts.iter().any(|t| t == want), "missing {want:?}");
    }
}

#[test]
fn content_stays_on_canvas() {
    let node = TitleScene.build(&cx(119));
    let title = node.find("title-text").unwrap().origin_in(Affine::IDENTITY);
    let subtitle = node.find("subtitle").unwrap().origin_in(Affine::IDENTITY);
    assert!(title.y > 0.0 && subtitle.y > title.y && subtitle.y < DESIGN_H);
}
