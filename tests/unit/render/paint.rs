use super::*;
use crate::foundation::color::Color;
use crate::foundation::core::Point;

fn px(buf: &[u8], w: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * w + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

#[test]
fn linear_90deg_runs_left_to_right() {
    let paint = Paint::linear(90.0, &[Color::BLACK, Color::WHITE]);
    assert!((gradient_position(&paint, 0.0, 5.0, 100.0, 10.0) - 0.0).abs() < 1e-9);
    assert!((gradient_position(&paint, 100.0, 5.0, 100.0, 10.0) - 1.0).abs() < 1e-9);

    let img = gradient_premul_rgba8(&paint, 16, 4).unwrap();
    assert!(px(&img, 16, 0, 0)[0] < 20);
    assert!(px(&img, 16, 15, 0)[0] > 235);
    assert_eq!(px(&img, 16, 0, 0), px(&img, 16, 0, 3));
}

#[test]
fn linear_135deg_reaches_the_corners() {
    let paint = Paint::linear(135.0, &[Color::BLACK, Color::WHITE]);
    assert!(gradient_position(&paint, 0.0, 0.0, 200.0, 100.0).abs() < 1e-9);
    assert!((gradient_position(&paint, 200.0, 100.0, 200.0, 100.0) - 1.0).abs() < 1e-9);
}

#[test]
fn radial_is_zero_at_center_and_one_at_farthest_corner() {
    let paint = Paint::radial(Point::new(0.5, 0.5), &[Color::WHITE, Color::BLACK]);
    assert!(gradient_position(&paint, 50.0, 25.0, 100.0, 50.0).abs() < 1e-9);
    assert!((gradient_position(&paint, 100.0, 50.0, 100.0, 50.0) - 1.0).abs() < 1e-9);

    let off = Paint::radial(Point::new(0.0, 0.0), &[Color::WHITE, Color::BLACK]);
    assert!((gradient_position(&off, 100.0, 50.0, 100.0, 50.0) - 1.0).abs() < 1e-9);
}

#[test]
fn stops_interpolate_premultiplied() {
    let stops = [
        GradientStop {
            offset: 0.0,
            color: Color::rgba(1.0, 0.0, 0.0, 1.0),
        },
        GradientStop {
            offset: 1.0,
            color: Color::TRANSPARENT,
        },
    ];
    let mid = sample_stops(&stops, 0.5);
    assert!((mid[0] - 0.5).abs() < 1e-12);
    assert!((mid[3] - 0.5).abs() < 1e-12);
    assert_eq!(sample_stops(&stops, -1.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(sample_stops(&[], 0.3), [0.0; 4]);
}

#[test]
fn key_distinguishes_paints_and_sizes() {
    let a = Paint::linear(90.0, &[Color::BLACK, Color::WHITE]);
    let b = Paint::linear(45.0, &[Color::BLACK, Color::WHITE]);
    assert_eq!(GradientKey::new(&a, 10, 10), GradientKey::new(&a, 10, 10));
    assert_ne!(GradientKey::new(&a, 10, 10), GradientKey::new(&b, 10, 10));
    assert_ne!(GradientKey::new(&a, 10, 10), GradientKey::new(&a, 11, 10));
}

#[test]
fn rejects_solid_and_empty_sizes() {
    assert!(gradient_premul_rgba8(&Paint::Solid(Color::WHITE), 4, 4).is_err());
    let g = Paint::linear(0.0, &[Color::BLACK, Color::WHITE]);
    assert!(gradient_premul_rgba8(&g, 0, 4).is_err());
}
