use super::*;
use crate::timeline::transition::Direction;

fn reel() -> Reel {
    Reel::training().unwrap()
}

#[test]
fn single_scene_frames_have_one_layer() {
    let r = reel();
    let f = Evaluator::eval_frame(&r, FrameIndex(50)).unwrap();
    assert_eq!(f.layers.len(), 1);
    assert_eq!(f.layers[0].scene, SceneId::Title);
    assert_eq!(f.layers[0].local_frame, 50);
    assert_eq!(f.layers[0].offset, Vec2::ZERO);
    assert!(f.transition.is_none());
}

#[test]
fn transition_frames_stack_exiting_below_entering() {
    let r = reel();
    let f = Evaluator::eval_frame(&r, FrameIndex(110)).unwrap();
    assert_eq!(f.layers.len(), 2);
    assert_eq!(f.layers[0].scene, SceneId::Title);
    assert_eq!(f.layers[1].scene, SceneId::Scenario);
    assert_eq!(f.layers[1].local_frame, 10);
    assert_eq!(f.layers[0].offset, Vec2::new(-640.0, 0.0));
    assert_eq!(f.layers[1].offset, Vec2::new(640.0, 0.0));
    assert_eq!(
        f.transition.map(|t| t.presentation),
        Some(Presentation::Slide(Direction::FromRight))
    );

    let wipe = Evaluator::eval_frame(&r, FrameIndex(295)).unwrap();
    assert_eq!(wipe.layers[1].scene, SceneId::Quiz);
    assert_eq!(wipe.layers[1].wipe.map(|w| w.from), Some(Direction::FromLeft));
    assert!(wipe.layers[0].wipe.is_none());

    let fade = Evaluator::eval_frame(&r, FrameIndex(515)).unwrap();
    assert_eq!(fade.layers[1].opacity, 0.25);
    assert_eq!(fade.layers[0].opacity, 1.0);
}

#[test]
fn buffer_frames_are_empty() {
    let r = reel();
    for f in [880, 900, 909] {
        let e = Evaluator::eval_frame(&r, FrameIndex(f)).unwrap();
        assert!(e.layers.is_empty(), "frame {f}");
    }
}

#[test]
fn out_of_range_is_an_error() {
    let err = Evaluator::eval_frame(&reel(), FrameIndex(910)).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn artifacts_follow_the_reel() {
    let r = reel();
    assert_eq!(Evaluator::eval_frame(&r, FrameIndex(0)).unwrap().artifacts.len(), 1);
    assert!(Evaluator::eval_frame(&r, FrameIndex(1)).unwrap().artifacts.is_empty());
}
