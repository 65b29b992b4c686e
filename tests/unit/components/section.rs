use super::*;
use crate::foundation::core::{Affine, Fps, Point};

fn cx(frame: i64) -> SceneCtx {
    SceneCtx::new(frame, Fps::new(30, 1).unwrap(), 210)
}

const CHIP_COLORS: [Color; 2] = [palette::PRIMARY, palette::PRIMARY_LIGHT];

#[test]
fn slides_in_from_the_left() {
    let start = section_header(&cx(0), "01", "WORKPLACE SCENARIO", CHIP_COLORS);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(
        start.origin_in(Affine::IDENTITY),
        Point::new(HEADER_LEFT - 20.0, HEADER_TOP)
    );

    let done = section_header(&cx(20), "01", "WORKPLACE SCENARIO", CHIP_COLORS);
    assert_eq!(done.opacity, 1.0);
    assert_eq!(
        done.origin_in(Affine::IDENTITY),
        Point::new(HEADER_LEFT, HEADER_TOP)
    );
    assert_eq!(
        done.texts(),
        vec!["01".to_string(), "WORKPLACE SCENARIO".to_string()]
    );
}

#[test]
fn corner_ring_is_centered_in_its_slot() {
    let ring = ProgressRing::new(0.25, palette::PRIMARY, Some("1/4"), 0.5);
    let n = corner_ring(&cx(30), &ring);
    assert_eq!(
        n.origin_in(Affine::IDENTITY),
        Point::new(1280.0 - 60.0 - 24.0, 40.0 + 24.0)
    );
    assert_eq!(n.opacity, 1.0);
    assert_eq!(corner_ring(&cx(0), &ring).opacity, 0.0);
}
