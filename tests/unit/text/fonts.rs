use super::*;

fn no_sources() -> FontsConfig {
    FontsConfig {
        heading: None,
        body: None,
        dirs: Vec::new(),
        system_fallback: false,
    }
}

#[test]
fn empty_book_has_no_faces() {
    let book = FontBook::empty();
    assert!(book.is_empty());
    assert!(book.face(FontRole::Heading).is_none());
}

#[test]
fn in_memory_face_is_stored_per_role() {
    let book = FontBook::empty().with_face(FontRole::Body, vec![1, 2, 3]);
    assert!(!book.is_empty());
    assert!(book.face(FontRole::Heading).is_none());
    let body = book.face(FontRole::Body).unwrap();
    assert_eq!(body.bytes.as_slice(), &[1, 2, 3]);
    assert_eq!(body.origin, FontOrigin::Memory);
}

#[test]
fn load_without_sources_yields_empty_book() {
    let book = FontBook::load(&no_sources(), Path::new(".")).unwrap();
    assert!(book.is_empty());
}

#[test]
fn load_rejects_missing_explicit_file() {
    let cfg = FontsConfig {
        heading: Some(PathBuf::from("definitely/missing/font.ttf")),
        ..no_sources()
    };
    let err = FontBook::load(&cfg, Path::new(".")).unwrap_err();
    assert!(err.to_string().contains("font.ttf"));
}

#[test]
fn load_reads_explicit_file_bytes() {
    let dir = std::env::temp_dir().join(format!("training_reel_fonts_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("body.ttf"), b"not really a font").unwrap();

    let cfg = FontsConfig {
        body: Some(PathBuf::from("body.ttf")),
        ..no_sources()
    };
    let book = FontBook::load(&cfg, &dir).unwrap();
    let body = book.face(FontRole::Body).unwrap();
    assert_eq!(body.bytes.as_slice(), b"not really a font");
    assert_eq!(body.origin, FontOrigin::File(dir.join("body.ttf")));
    assert!(book.face(FontRole::Heading).is_none());

    let _ = std::fs::remove_dir_all(&dir);
}
