use super::*;
use crate::compile::plan::{Pass, PixelFormat};
use crate::foundation::core::{Canvas, FrameIndex};

#[derive(Default)]
struct Recorder {
    ensured: Vec<u32>,
    log: Vec<String>,
}

impl PassBackend for Recorder {
    fn ensure_surface(&mut self, id: SurfaceId, _desc: &SurfaceDesc) -> ReelResult<()> {
        self.ensured.push(id.0);
        Ok(())
    }

    fn exec_scene(&mut self, pass: &ScenePass, _eval: &EvaluatedFrame) -> ReelResult<()> {
        self.log.push(format!("scene {}", pass.layer));
        Ok(())
    }

    fn exec_composite(&mut self, pass: &CompositePass) -> ReelResult<()> {
        self.log.push(format!("composite {}", pass.ops.len()));
        Ok(())
    }

    fn readback_rgba8(&mut self, surface: SurfaceId, plan: &RenderPlan) -> ReelResult<FrameRGBA> {
        self.log.push(format!("readback {}", surface.0));
        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: vec![0; (plan.canvas.width * plan.canvas.height * 4) as usize],
            premultiplied: true,
        })
    }
}

#[test]
fn execute_plan_runs_passes_in_order() {
    let desc = SurfaceDesc {
        width: 2,
        height: 2,
        format: PixelFormat::Rgba8Premul,
    };
    let plan = RenderPlan {
        canvas: Canvas {
            width: 2,
            height: 2,
        },
        surfaces: vec![desc, desc],
        passes: vec![
            Pass::Scene(ScenePass {
                target: SurfaceId(1),
                layer: 3,
                transform: crate::foundation::core::Affine::IDENTITY,
                clear_to_transparent: true,
            }),
            Pass::Composite(CompositePass {
                target: SurfaceId(0),
                ops: Vec::new(),
            }),
        ],
        final_surface: SurfaceId(0),
    };
    let eval = EvaluatedFrame {
        frame: FrameIndex(0),
        layers: Vec::new(),
        transition: None,
        artifacts: Vec::new(),
    };

    let mut rec = Recorder::default();
    let frame = execute_plan(&mut rec, &plan, &eval).unwrap();
    assert_eq!(rec.ensured, vec![0, 1]);
    assert_eq!(rec.log, vec!["scene 3", "composite 0", "readback 0"]);
    assert_eq!(frame.data.len(), 16);
}

#[test]
fn straight_conversion_flattens_and_unpremultiplies() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8(None);
    assert_eq!(straight[3], 128);
    assert!(straight[0] >= 254);
    assert_eq!(&straight[4..], &[0, 0, 0, 0]);

    let flat = frame.to_straight_rgba8(Some([0, 0, 255, 255]));
    assert_eq!(&flat[4..], &[0, 0, 255, 255]);
    assert_eq!(flat[3], 255);
    assert!((126..=130).contains(&flat[0]));
    assert!((125..=129).contains(&flat[2]));
}
