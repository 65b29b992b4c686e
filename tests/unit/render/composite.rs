use super::*;

fn params(w: u32, h: u32, t: f32, dir: Direction) -> WipeParams {
    WipeParams {
        width: w,
        height: h,
        t,
        dir,
        soft_edge: 0.0,
    }
}

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_half_opacity_mixes() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 255], 0.5);
    assert!((126..=129).contains(&out[0]));
    assert_eq!(out[3], 255);
}

#[test]
fn over_in_place_rejects_length_mismatch() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4], 1.0).is_err());
}

#[test]
fn wipe_endpoints() {
    let red = [255u8, 0, 0, 255].repeat(8);
    let blue = [0u8, 0, 255, 255].repeat(8);

    let mut dst = red.clone();
    wipe_over_in_place(&mut dst, &blue, params(4, 2, 0.0, Direction::FromLeft)).unwrap();
    assert_eq!(dst, red);

    let mut dst = red.clone();
    wipe_over_in_place(&mut dst, &blue, params(4, 2, 1.0, Direction::FromLeft)).unwrap();
    assert_eq!(dst, blue);
}

#[test]
fn wipe_half_reveals_the_leading_side() {
    let red = [255u8, 0, 0, 255].repeat(4);
    let blue = [0u8, 0, 255, 255].repeat(4);
    let px = |buf: &[u8], x: usize| [buf[x * 4], buf[x * 4 + 1], buf[x * 4 + 2], buf[x * 4 + 3]];

    let mut dst = red.clone();
    wipe_over_in_place(&mut dst, &blue, params(4, 1, 0.5, Direction::FromLeft)).unwrap();
    assert_eq!(px(&dst, 0), [0, 0, 255, 255]);
    assert_eq!(px(&dst, 1), [0, 0, 255, 255]);
    assert_eq!(px(&dst, 2), [255, 0, 0, 255]);

    let mut dst = red.clone();
    wipe_over_in_place(&mut dst, &blue, params(4, 1, 0.5, Direction::FromRight)).unwrap();
    assert_eq!(px(&dst, 0), [255, 0, 0, 255]);
    assert_eq!(px(&dst, 3), [0, 0, 255, 255]);
}

#[test]
fn wipe_vertical_uses_rows() {
    let red = [255u8, 0, 0, 255].repeat(4);
    let blue = [0u8, 0, 255, 255].repeat(4);
    let mut dst = red.clone();
    wipe_over_in_place(&mut dst, &blue, params(1, 4, 0.25, Direction::FromBottom)).unwrap();
    assert_eq!(&dst[12..16], &[0, 0, 255, 255]);
    assert_eq!(&dst[8..12], &[255, 0, 0, 255]);
}

#[test]
fn premultiply_and_back() {
    assert_eq!(premul_rgba8(255, 128, 0, 255), [255, 128, 0, 255]);
    assert_eq!(premul_rgba8(200, 100, 50, 0), [0, 0, 0, 0]);
    let mut px = premul_rgba8(200, 100, 50, 128).to_vec();
    unpremultiply_in_place(&mut px);
    assert!((i32::from(px[0]) - 200).abs() <= 2);
    assert!((i32::from(px[1]) - 100).abs() <= 2);
    assert_eq!(px[3], 128);
}
