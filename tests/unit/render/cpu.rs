use super::*;
use crate::compile::compiler::compile_frame;
use crate::compile::plan::{Pass, PixelFormat};
use crate::composition::reel::Reel;
use crate::eval::evaluator::{Evaluator, Layer};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::render::backend::execute_plan;
use crate::scenes::SceneId;

const RED: Color = Color::rgb8(255, 0, 0);

fn layer(root: Node, opacity: f64) -> Layer {
    Layer {
        scene: SceneId::Title,
        local_frame: 0,
        root,
        offset: Vec2::ZERO,
        opacity,
        wipe: None,
    }
}

fn frame_of(layers: Vec<Layer>) -> EvaluatedFrame {
    EvaluatedFrame {
        frame: FrameIndex(0),
        layers,
        transition: None,
        artifacts: Vec::new(),
    }
}

fn direct_plan(w: u32, h: u32, layers: usize) -> RenderPlan {
    RenderPlan {
        canvas: Canvas {
            width: w,
            height: h,
        },
        surfaces: vec![SurfaceDesc {
            width: w,
            height: h,
            format: PixelFormat::Rgba8Premul,
        }],
        passes: (0..layers)
            .map(|layer| {
                Pass::Scene(ScenePass {
                    target: SurfaceId(0),
                    layer,
                    transform: Affine::IDENTITY,
                    clear_to_transparent: false,
                })
            })
            .collect(),
        final_surface: SurfaceId(0),
    }
}

fn backend(clear: Option<[u8; 4]>) -> CpuBackend {
    CpuBackend::new(RenderSettings { clear_rgba: clear }, &FontBook::empty())
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [frame.data[i], frame.data[i + 1], frame.data[i + 2], frame.data[i + 3]]
}

#[test]
fn empty_plan_reads_back_the_clear_color() {
    let mut be = backend(Some([0, 0, 255, 255]));
    let frame = execute_plan(&mut be, &direct_plan(8, 4, 0), &frame_of(Vec::new())).unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|p| p == [0, 0, 255, 255]));
}

#[test]
fn solid_rect_covers_the_surface() {
    let mut be = backend(Some([0, 0, 0, 255]));
    let root = Node::fill(Shape::Rect { w: 16.0, h: 8.0 }, Paint::Solid(RED));
    let frame = execute_plan(&mut be, &direct_plan(16, 8, 1), &frame_of(vec![layer(root, 1.0)]))
        .unwrap();
    assert_eq!(px(&frame, 0, 0), [255, 0, 0, 255]);
    assert_eq!(px(&frame, 15, 7), [255, 0, 0, 255]);
}

#[test]
fn partial_rect_keeps_the_background_elsewhere() {
    let mut be = backend(Some([0, 0, 0, 255]));
    let root = Node::fill(Shape::Rect { w: 8.0, h: 8.0 }, Paint::Solid(RED));
    let frame = execute_plan(&mut be, &direct_plan(16, 8, 1), &frame_of(vec![layer(root, 1.0)]))
        .unwrap();
    assert_eq!(px(&frame, 2, 2), [255, 0, 0, 255]);
    assert_eq!(px(&frame, 12, 2), [0, 0, 0, 255]);
}

#[test]
fn translucent_layer_is_composited_over_the_background() {
    let eval = frame_of(vec![layer(
        Node::fill(Shape::Rect { w: 1280.0, h: 720.0 }, Paint::Solid(Color::WHITE)),
        0.5,
    )]);
    let canvas = Canvas {
        width: 32,
        height: 18,
    };
    let plan = compile_frame(&eval, canvas).unwrap();
    assert_eq!(plan.surfaces.len(), 2);

    let mut be = backend(Some([0, 0, 0, 255]));
    let frame = be.render_plan(&plan, &eval).unwrap();
    let p = px(&frame, 16, 9);
    assert!((120..=135).contains(&p[0]), "{p:?}");
    assert_eq!(p[3], 255);
}

#[test]
fn group_opacity_and_gradients_render() {
    let grad = Node::fill(
        Shape::RoundedRect {
            w: 32.0,
            h: 16.0,
            radius: 4.0,
        },
        Paint::linear(90.0, &[Color::BLACK, Color::WHITE]),
    );
    let ring = Node::stroke(
        Shape::Ellipse { w: 10.0, h: 10.0 },
        Color::WHITE,
        2.0,
    );
    let root = Node::group(vec![grad, ring]).with_opacity(0.8);
    let mut be = backend(Some([0, 0, 0, 255]));
    let frame = execute_plan(&mut be, &direct_plan(32, 16, 1), &frame_of(vec![layer(root, 1.0)]))
        .unwrap();
    let left = px(&frame, 2, 14)[0];
    let right = px(&frame, 29, 14)[0];
    assert!(right > left, "left {left} right {right}");
}

#[test]
fn icons_and_glows_leave_ink() {
    let root = Node::group(vec![
        Node::icon(IconId::Check, 24.0, Color::WHITE),
        Node::glow(6.0, 4.0, RED).at(48.0, 12.0),
    ]);
    let mut be = backend(Some([0, 0, 0, 255]));
    let frame = execute_plan(&mut be, &direct_plan(64, 24, 1), &frame_of(vec![layer(root, 1.0)]))
        .unwrap();
    assert!((0..24).any(|x| (0..24).any(|y| px(&frame, x, y)[1] > 0)));
    assert!(px(&frame, 48, 12)[0] > 100);
    assert_eq!(px(&frame, 48, 12)[1], 0);
}

#[test]
fn text_without_fonts_is_skipped() {
    let reel = Reel::training().unwrap();
    let eval = Evaluator::eval_frame(&reel, FrameIndex(100)).unwrap();
    let canvas = Canvas {
        width: 160,
        height: 90,
    };
    let plan = compile_frame(&eval, canvas).unwrap();
    let mut be = backend(Some([0, 0, 0, 255]));
    let a = be.render_plan(&plan, &eval).unwrap();
    let b = be.render_plan(&plan, &eval).unwrap();
    assert_eq!(a.data, b.data);
    assert_eq!(a.data.len(), 160 * 90 * 4);
}

#[test]
fn scene_pass_with_unknown_layer_fails() {
    let mut be = backend(None);
    let err = execute_plan(&mut be, &direct_plan(4, 4, 1), &frame_of(Vec::new())).unwrap_err();
    assert!(err.to_string().contains("layer 0"));
}
