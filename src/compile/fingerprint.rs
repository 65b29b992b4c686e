use kurbo::PathEl;
use xxhash_rust::xxh3::Xxh3;

use crate::eval::evaluator::{EvaluatedFrame, Layer};
use crate::foundation::color::Color;
use crate::foundation::core::Affine;
use crate::scene::model::{Node, NodeKind, Paint, Shape};
use crate::text::style::TextStyle;
use crate::timeline::transition::Direction;

const XXH3_SEED: u64 = 0x5f2c_91a7_3d84_e6b1;

/// 128-bit identity of a frame's visual content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Hash everything that affects the pixels of `eval`.
///
/// The frame index, scene-local frames, node names and artifacts are left out, so frames that
/// draw the same display lists collapse to the same fingerprint.
pub fn fingerprint_frame(eval: &EvaluatedFrame) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(eval.layers.len() as u32);
    for layer in &eval.layers {
        write_layer(&mut h, layer);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_layer(h: &mut StableHasher, layer: &Layer) {
    h.write_str(layer.scene.as_str());
    h.write_f64(layer.offset.x);
    h.write_f64(layer.offset.y);
    h.write_f64(layer.opacity);
    match layer.wipe {
        Some(w) => {
            h.write_u8(1);
            write_direction(h, w.from);
            h.write_f64(w.t);
        }
        None => h.write_u8(0),
    }
    write_node(h, &layer.root);
}

fn write_direction(h: &mut StableHasher, d: Direction) {
    h.write_u8(match d {
        Direction::FromLeft => 0,
        Direction::FromRight => 1,
        Direction::FromTop => 2,
        Direction::FromBottom => 3,
    });
}

fn write_affine(h: &mut StableHasher, a: Affine) {
    for c in a.as_coeffs() {
        h.write_f64(c);
    }
}

fn write_color(h: &mut StableHasher, c: Color) {
    for v in [c.r, c.g, c.b, c.a] {
        h.write_f64(v);
    }
}

fn write_node(h: &mut StableHasher, node: &Node) {
    write_affine(h, node.transform);
    h.write_f64(node.opacity);
    match &node.kind {
        NodeKind::Group(children) => {
            h.write_u8(0);
            h.write_u32(children.len() as u32);
            for c in children {
                write_node(h, c);
            }
        }
        NodeKind::Shape(s) => {
            h.write_u8(1);
            write_shape(h, &s.shape);
            match &s.fill {
                Some(p) => {
                    h.write_u8(1);
                    write_paint(h, p);
                }
                None => h.write_u8(0),
            }
            match &s.stroke {
                Some(st) => {
                    h.write_u8(1);
                    write_color(h, st.color);
                    h.write_f64(st.width);
                }
                None => h.write_u8(0),
            }
        }
        NodeKind::Text(t) => {
            h.write_u8(2);
            write_text_style(h, &t.style);
            match t.width {
                Some(w) => {
                    h.write_u8(1);
                    h.write_f64(w);
                }
                None => h.write_u8(0),
            }
            h.write_u8(t.align as u8);
            match t.strike {
                Some(c) => {
                    h.write_u8(1);
                    write_color(h, c);
                }
                None => h.write_u8(0),
            }
            h.write_u8(t.revealed.granularity as u8);
            h.write_u32(t.revealed.units.len() as u32);
            for u in &t.revealed.units {
                h.write_str(&u.text);
                h.write_bool(u.is_space);
                h.write_f64(u.state.opacity);
                h.write_f64(u.state.rise);
                h.write_f64(u.state.scale);
            }
        }
        NodeKind::Icon(i) => {
            h.write_u8(3);
            h.write_str(i.icon.name());
            h.write_f64(i.size);
            write_color(h, i.color);
        }
        NodeKind::Glow(g) => {
            h.write_u8(4);
            h.write_f64(g.radius);
            h.write_f64(g.blur);
            write_color(h, g.color);
        }
    }
}

fn write_text_style(h: &mut StableHasher, s: &TextStyle) {
    h.write_u8(s.role as u8);
    h.write_f64(s.size);
    h.write_u32(u32::from(s.weight));
    write_color(h, s.color);
    h.write_f64(s.line_height);
    h.write_f64(s.letter_spacing);
}

fn write_shape(h: &mut StableHasher, shape: &Shape) {
    match shape {
        Shape::Rect { w, h: hh } => {
            h.write_u8(0);
            h.write_f64(*w);
            h.write_f64(*hh);
        }
        Shape::RoundedRect { w, h: hh, radius } => {
            h.write_u8(1);
            h.write_f64(*w);
            h.write_f64(*hh);
            h.write_f64(*radius);
        }
        Shape::Ellipse { w, h: hh } => {
            h.write_u8(2);
            h.write_f64(*w);
            h.write_f64(*hh);
        }
        Shape::Path(p) => {
            h.write_u8(3);
            for el in p.elements() {
                match *el {
                    PathEl::MoveTo(a) => {
                        h.write_u8(0);
                        h.write_f64(a.x);
                        h.write_f64(a.y);
                    }
                    PathEl::LineTo(a) => {
                        h.write_u8(1);
                        h.write_f64(a.x);
                        h.write_f64(a.y);
                    }
                    PathEl::QuadTo(a, b) => {
                        h.write_u8(2);
                        for p in [a, b] {
                            h.write_f64(p.x);
                            h.write_f64(p.y);
                        }
                    }
                    PathEl::CurveTo(a, b, c) => {
                        h.write_u8(3);
                        for p in [a, b, c] {
                            h.write_f64(p.x);
                            h.write_f64(p.y);
                        }
                    }
                    PathEl::ClosePath => h.write_u8(4),
                }
            }
        }
    }
}

fn write_paint(h: &mut StableHasher, paint: &Paint) {
    match paint {
        Paint::Solid(c) => {
            h.write_u8(0);
            write_color(h, *c);
        }
        Paint::Linear { angle_deg, stops } => {
            h.write_u8(1);
            h.write_f64(*angle_deg);
            h.write_u32(stops.len() as u32);
            for s in stops {
                h.write_f64(s.offset);
                write_color(h, s.color);
            }
        }
        Paint::Radial { center, stops } => {
            h.write_u8(2);
            h.write_f64(center.x);
            h.write_f64(center.y);
            h.write_u32(stops.len() as u32);
            for s in stops {
                h.write_f64(s.offset);
                write_color(h, s.color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
