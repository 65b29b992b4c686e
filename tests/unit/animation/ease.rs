use super::*;

const ALL: [Ease; 12] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::OutBack { overshoot: 1.4 },
    Ease::OutBounce,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(7.0), 1.0);
}

#[test]
fn out_back_overshoots() {
    let e = Ease::out_back(1.4);
    let peak = (1..100)
        .map(|i| e.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!(peak < 1.2);
}

#[test]
fn out_curves_lead_linear() {
    for e in [Ease::OutQuad, Ease::OutCubic, Ease::OutQuart] {
        assert!(e.apply(0.5) > 0.5);
    }
    assert!(Ease::OutQuart.apply(0.3) > Ease::OutCubic.apply(0.3));
}

#[test]
fn parses_named_curves() {
    assert_eq!(Ease::parse("power2.out").unwrap(), Ease::OutCubic);
    assert_eq!(Ease::parse("power3.out").unwrap(), Ease::OutQuart);
    assert_eq!(Ease::parse("none").unwrap(), Ease::Linear);
    assert_eq!(Ease::parse("bounce.out").unwrap(), Ease::OutBounce);
    assert_eq!(Ease::parse("back.out(1.7)").unwrap(), Ease::out_back(1.7));
    assert_eq!(Ease::parse("back.out").unwrap(), Ease::out_back(1.70158));
    assert!(Ease::parse("back.out(x)").is_err());
    assert!(Ease::parse("elastic").is_err());
}
