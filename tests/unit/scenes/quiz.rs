use super::*;
use crate::foundation::core::{Affine, Fps};
use crate::scene::model::NodeKind;

fn cx(frame: i64) -> SceneCtx {
    SceneCtx::new(frame, Fps::new(30, 1).unwrap(), 240)
}

/// Colors of the answer text runs (the letter badge uses a smaller size).
fn answer_colors(node: &Node) -> Vec<Color> {
    let mut out = Vec::new();
    node.visit(Affine::IDENTITY, 1.0, &mut |n, _, _| {
        if let NodeKind::Text(t) = &n.kind
            && t.style.size == 17.0
        {
            out.push(t.style.color);
        }
    });
    out
}

fn struck(node: &Node) -> bool {
    let mut any = false;
    node.visit(Affine::IDENTITY, 1.0, &mut |n, _, _| {
        if let NodeKind::Text(t) = &n.kind {
            any |= t.strike.is_some();
        }
    });
    any
}

#[test]
fn exactly_one_option_is_correct() {
    assert_eq!(OPTIONS.iter().filter(|o| o.correct).count(), 1);
    assert_eq!(OPTIONS.iter().find(|o| o.correct).unwrap().letter, "C");
    for o in &OPTIONS {
        assert!(!o.letter.is_empty() && !o.text.is_empty());
    }
}

#[test]
fn reveal_happens_at_frame_165() {
    assert_eq!(QuizScene::reveal_frame(&cx(0)), 165);
    assert!(!QuizScene::is_revealed(&cx(164)));
    assert!(QuizScene::is_revealed(&cx(165)));
    assert_eq!(QuizScene::reveal_progress(&cx(165)), 0.0);
    assert_eq!(QuizScene::reveal_progress(&cx(180)), 1.0);
    let mid = QuizScene::reveal_progress(&cx(170));
    assert!((mid - (1.0 - (2.0f64 / 3.0).powi(3))).abs() < 1e-9, "{mid}");
}

#[test]
fn option_text_is_muted_only_for_wrong_answers_after_reveal() {
    let before = QuizScene.build(&cx(100));
    for o in &OPTIONS {
        let opt = before.find(&format!("option-{}", o.letter)).unwrap();
        assert_eq!(answer_colors(opt), vec![palette::TEXT], "option {}", o.letter);
    }

    let after = QuizScene.build(&cx(200));
    for o in &OPTIONS {
        let opt = after.find(&format!("option-{}", o.letter)).unwrap();
        let expected = if o.correct {
            palette::TEXT
        } else {
            palette::TEXT_MUTED
        };
        assert_eq!(answer_colors(opt), vec![expected], "option {}", o.letter);
    }
}

#[test]
fn wrong_answers_are_struck_only_after_reveal() {
    let before = QuizScene.build(&cx(160));
    for letter in ["A", "B", "C", "D"] {
        let opt = before.find(&format!("option-{letter}")).unwrap();
        assert!(!struck(opt));
        assert!(opt.find("result").is_none());
    }

    let after = QuizScene.build(&cx(200));
    for o in &OPTIONS {
        let opt = after.find(&format!("option-{}", o.letter)).unwrap();
        assert_eq!(struck(opt), !o.correct, "option {}", o.letter);
        assert_eq!(opt.find("result").unwrap().opacity, 1.0);
    }
}

#[test]
fn options_enter_in_order() {
    let at = |f| {
        OPTIONS
            .iter()
            .map(|o| QuizScene::option_progress(&cx(f), o))
            .collect::<Vec<_>>()
    };
    assert!(at(36).iter().all(|&p| p == 0.0));
    let mid = at(50);
    assert!(mid[0] > 0.0 && mid[3] == 0.0);
    assert!(at(100).iter().all(|&p| (p - 1.0).abs() < 1e-12));
}

#[test]
fn explanation_appears_after_reveal() {
    let hidden = QuizScene.build(&cx(170));
    assert_eq!(hidden.find("explanation").unwrap().opacity, 0.0);
    let shown = QuizScene.build(&cx(239));
    let card = shown.find("explanation").unwrap();
    assert_eq!(card.opacity, 1.0);
    assert!(card.texts().iter().any(|t| t == "WHY THIS WORKS"));
}

#[test]
fn columns_do_not_overlap() {
    let node = QuizScene.build(&cx(239));
    let options = node.find("options").unwrap().origin_in(Affine::IDENTITY);
    assert!(options.x >= SIDE + COL_W);
    assert!(options.x + COL_W <= DESIGN_W - SIDE + 1e-9);
}
