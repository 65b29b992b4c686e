use super::*;

fn cx(frame: i64) -> SceneCtx {
    SceneCtx::new(frame, Fps::new(30, 1).unwrap(), 120)
}

#[test]
fn seconds_round_to_frames() {
    let c = cx(0);
    assert_eq!(c.frames(5.5), 165);
    assert_eq!(c.frames(1.5), 45);
    assert_eq!(c.frames(0.3), 9);
}

#[test]
fn progress_clamps_outside_window() {
    assert_eq!(cx(0).progress(10.0, 20.0, Ease::Linear), 0.0);
    assert_eq!(cx(20).progress(10.0, 20.0, Ease::Linear), 0.5);
    assert_eq!(cx(90).progress(10.0, 20.0, Ease::OutCubic), 1.0);
}

#[test]
fn local_time_in_seconds() {
    assert!((cx(45).secs() - 1.5).abs() < 1e-12);
    assert_eq!(cx(45).tween([0.0, 90.0], [0.0, 1.0]), 0.5);
}

#[test]
fn scene_ids_are_snake_case() {
    assert_eq!(SceneId::Guidelines.as_str(), "guidelines");
    assert_eq!(
        serde_json::to_value(SceneId::Closing).unwrap(),
        serde_json::json!("closing")
    );
}
