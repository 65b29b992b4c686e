use super::*;

#[test]
fn tween_clamps_both_sides_by_default() {
    let t = Tween::new([20.0, 50.0], [0.0, 320.0]);
    assert_eq!(t.at(0.0), 0.0);
    assert_eq!(t.at(35.0), 160.0);
    assert_eq!(t.at(90.0), 320.0);
}

#[test]
fn tween_extend_and_identity() {
    let t = Tween::new([0.0, 10.0], [0.0, 1.0]).extend();
    assert!((t.at(-5.0) + 0.5).abs() < 1e-12);
    assert!((t.at(20.0) - 2.0).abs() < 1e-12);

    let id = Tween::new([0.0, 10.0], [100.0, 200.0]).right(Extrapolate::Identity);
    assert_eq!(id.at(42.0), 42.0);
    assert_eq!(id.at(-1.0), 100.0);
}

#[test]
fn eased_extension_continues_linearly() {
    let t = Tween::new([0.0, 10.0], [0.0, 1.0])
        .ease(Ease::OutCubic)
        .extend();
    assert!((t.at(10.0) - 1.0).abs() < 1e-12);
    assert!((t.at(15.0) - 1.5).abs() < 1e-12);
}

#[test]
fn degenerate_range_steps() {
    let t = Tween::new([5.0, 5.0], [0.0, 1.0]);
    assert_eq!(t.at(4.9), 0.0);
    assert_eq!(t.at(5.0), 1.0);
}

#[test]
fn eased_tween_matches_curve() {
    let t = Tween::unit(8.0, 28.0).ease(Ease::out_back(1.4));
    assert_eq!(t.at(8.0), 0.0);
    assert!((t.at(28.0) - 1.0).abs() < 1e-12);
    assert!(t.at(24.0) > 1.0);
}
