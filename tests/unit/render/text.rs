use super::*;
use crate::config::FontsConfig;
use crate::foundation::color::Color;

fn system_book() -> Option<FontBook> {
    let book = FontBook::load(&FontsConfig::default(), std::path::Path::new(".")).ok()?;
    (!book.is_empty()).then_some(book)
}

#[test]
fn missing_faces_fall_back_to_estimates() {
    let mut engine = TextEngine::new(&FontBook::empty());
    let style = TextStyle::body(20.0, Color::WHITE);
    assert!(engine.font(FontRole::Body).is_none());
    assert!(engine.shape("hello", &style).is_none());
    assert_eq!(
        engine.advance("hello", &style),
        ApproxMeasure.advance("hello", &style)
    );
}

#[test]
fn unreadable_bytes_leave_the_role_empty() {
    let book = FontBook::empty().with_face(FontRole::Heading, b"not a font".to_vec());
    let engine = TextEngine::new(&book);
    assert!(engine.font(FontRole::Heading).is_none());
}

#[test]
fn shaping_with_a_system_face_is_cached_and_monotonic() {
    let Some(book) = system_book() else {
        return;
    };
    let mut engine = TextEngine::new(&book);
    let role = FontRole::ALL
        .into_iter()
        .find(|&r| engine.font(r).is_some())
        .unwrap();
    let style = TextStyle {
        role,
        ..TextStyle::body(24.0, Color::WHITE)
    };

    let a = engine.shape("Respect", &style).unwrap();
    let b = engine.shape("Respect", &style).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(a.width > 0.0 && a.height > 0.0);

    let short = engine.advance("Re", &style);
    let long = engine.advance("Respect", &style);
    assert!(long > short);

    let spaced = TextStyle {
        letter_spacing: 2.0,
        ..style
    };
    let tracked = engine.shape("Respect", &spaced).unwrap();
    assert!(tracked.width > a.width);
}
