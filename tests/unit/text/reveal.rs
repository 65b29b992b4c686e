use super::*;

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn words_reveal() -> TextReveal {
    TextReveal::FadeInWords {
        stagger_s: 0.12,
        duration_s: 0.7,
        ease: Ease::OutQuart,
        start_frame: 12,
    }
}

#[test]
fn static_text_splits_words_and_is_settled() {
    let r = reveal_units("Team  Meeting\nFeedback", TextReveal::Static, 0, fps());
    assert_eq!(r.granularity, Granularity::Words);
    assert_eq!(r.units.len(), 3);
    assert_eq!(r.joined(), "Team Meeting Feedback");
    assert!(r.is_settled());
}

#[test]
fn appear_at_is_a_hard_cut() {
    let before = reveal_units("Hi there", TextReveal::AppearAt { frame: 8 }, 7, fps());
    let at = reveal_units("Hi there", TextReveal::AppearAt { frame: 8 }, 8, fps());
    assert!(before.is_invisible());
    assert!(at.is_settled());
}

#[test]
fn words_are_staggered() {
    let text = "Effective Workplace Communication";
    let r = reveal_units(text, words_reveal(), 12, fps());
    assert!(r.is_invisible());

    // Second word starts at 12 + round(0.12 * 30) = 16.
    let r = reveal_units(text, words_reveal(), 16, fps());
    assert!(r.units[0].state.opacity > 0.0);
    assert_eq!(r.units[1].state.opacity, 0.0);
    assert!(r.units[1].state.rise > 0.3);

    // Last word starts at 12 + round(0.24 * 30) = 19, lasts 21 frames.
    let r = reveal_units(text, words_reveal(), 40, fps());
    assert!(r.is_settled());
}

#[test]
fn chars_keep_spaces_as_settled_spacers() {
    let reveal = TextReveal::FadeInChars {
        stagger_s: 0.02,
        duration_s: 0.5,
        ease: Ease::OutCubic,
        start_frame: 35,
    };
    let r = reveal_units("a b", reveal, 35, fps());
    assert_eq!(r.granularity, Granularity::Chars);
    assert_eq!(r.units.len(), 3);
    assert!(r.units[1].is_space);
    assert_eq!(r.units[1].state, UnitState::SETTLED);
    assert!(r.is_invisible());
    assert_eq!(r.joined(), "a b");

    let r = reveal_units("a b", reveal, 80, fps());
    assert!(r.is_settled());
}

#[test]
fn bounce_chars_drop_from_above() {
    let reveal = TextReveal::BounceChars {
        stagger_s: 0.04,
        duration_s: 0.7,
        start_frame: 126,
    };
    let r = reveal_units("Go!", reveal, 126, fps());
    assert!(r.is_invisible());

    let r = reveal_units("Go!", reveal, 128, fps());
    let s = r.units[0].state;
    assert!(s.opacity > 0.0);
    assert!(s.rise < 0.0);
    assert!(s.scale < 1.0);

    let r = reveal_units("Go!", reveal, 160, fps());
    assert!(r.is_settled());
}
