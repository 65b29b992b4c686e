use super::*;

fn rect(w: f64, h: f64) -> Node {
    Node::fill(Shape::Rect { w, h }, Paint::Solid(Color::WHITE))
}

#[test]
fn find_is_depth_first_by_name() {
    let tree = Node::group(vec![
        rect(1.0, 1.0).named("a"),
        Node::group(vec![rect(2.0, 2.0).named("b")]).named("inner"),
    ]);
    assert!(tree.find("a").is_some());
    assert!(matches!(
        tree.find("b").map(|n| &n.kind),
        Some(NodeKind::Shape(ShapeNode {
            shape: Shape::Rect { w, .. },
            ..
        })) if *w == 2.0
    ));
    assert!(tree.find("missing").is_none());
    assert_eq!(tree.count(), 4);
}

#[test]
fn visit_composes_transforms_and_opacity() {
    let tree = Node::group(vec![rect(1.0, 1.0).named("leaf").at(5.0, 0.0).with_opacity(0.5)])
        .at(10.0, 20.0)
        .with_opacity(0.5);

    let mut seen = None;
    tree.visit(Affine::IDENTITY, 1.0, &mut |n, world, opacity| {
        if n.name.as_deref() == Some("leaf") {
            seen = Some((world * Point::ORIGIN, opacity));
        }
    });
    let (p, o) = seen.unwrap();
    assert_eq!(p, Point::new(15.0, 20.0));
    assert!((o - 0.25).abs() < 1e-12);
}

#[test]
fn then_applies_after_existing_transform() {
    let n = rect(1.0, 1.0).at(10.0, 0.0).then(Affine::scale(2.0));
    assert_eq!(n.origin_in(Affine::IDENTITY), Point::new(20.0, 0.0));

    let s = rect(1.0, 1.0).scaled_about(2.0, 5.0, 5.0);
    assert_eq!(s.origin_in(Affine::IDENTITY), Point::new(-5.0, -5.0));
}

#[test]
fn with_opacity_clamps_factor() {
    assert_eq!(rect(1.0, 1.0).with_opacity(2.0).opacity, 1.0);
    assert_eq!(rect(1.0, 1.0).with_opacity(-1.0).opacity, 0.0);
}

#[test]
fn gradient_helpers_space_stops_evenly() {
    let Paint::Linear { stops, .. } =
        Paint::linear(90.0, &[Color::BLACK, Color::WHITE, Color::BLACK])
    else {
        panic!("expected linear paint");
    };
    let offsets: Vec<f64> = stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);

    let Paint::Radial { stops, .. } = Paint::radial(Point::new(0.5, 0.5), &[Color::WHITE])
    else {
        panic!("expected radial paint");
    };
    assert_eq!(stops[0].offset, 0.0);
}
