//! Summary of what was learned and a certificate call to action.

use crate::animation::ease::Ease;
use crate::animation::proc::Oscillator;
use crate::components::backdrop::{dot_grid, radial_backdrop};
use crate::components::label::Label;
use crate::components::panel::icon_tile;
use crate::components::progress_ring::ProgressRing;
use crate::components::section::{RING_RIGHT, RING_TOP, corner_ring, section_header};
use crate::components::shapes::{AmbientShape, Motion, Pin, ShapeKind};
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::scene::icons::IconId;
use crate::scene::model::{Node, Paint, Shape, ShapeNode, StrokeStyle};
use crate::scene::palette;
use crate::scenes::{DESIGN_H, DESIGN_W, Scene, SceneCtx, SceneId, fade_in_words};
use crate::text::reveal::TextReveal;
use crate::text::style::TextStyle;

/// One learned point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryItem {
    /// Tile icon.
    pub icon: IconId,
    /// Statement.
    pub text: &'static str,
    /// Tile color.
    pub color: Color,
}

/// Summary points, top to bottom.
pub const SUMMARY: [SummaryItem; 4] = [
    SummaryItem {
        icon: IconId::Ear,
        text: "Practice active listening in every interaction",
        color: palette::PRIMARY,
    },
    SummaryItem {
        icon: IconId::MessageSquare,
        text: "Communicate clearly and with empathy",
        color: palette::ACCENT,
    },
    SummaryItem {
        icon: IconId::ShieldCheck,
        text: "Give feedback privately and constructively",
        color: palette::PURPLE,
    },
    SummaryItem {
        icon: IconId::Target,
        text: "Focus on solutions, not blame",
        color: palette::ACCENT_YELLOW,
    },
];

const HEADING: &str = "What You Learned Today";
const CTA_TITLE: &str = "Training Complete!";
const CTA_BODY: &str =
    "Apply these skills in your next team interaction. Great communication starts with you.";
const CTA_BUTTON: &str = "Get Your Certificate";
const TAGLINE: &str = "\u{a9} 2025 Your Company \u{2014} Learning & Development";

/// Frame at which the call-to-action column starts popping in.
pub const CTA_FRAME: i64 = 120;

/// Glow alpha behind the medal after the call to action lands.
const CTA_GLOW: Oscillator = Oscillator::new(0.3, 0.15, 3.0);

const TOP: f64 = 120.0;
const SIDE: f64 = 60.0;
const BOTTOM: f64 = 660.0;
const ROW_GAP: f64 = 60.0;
const CTA_W: f64 = 380.0;
const LIST_W: f64 = DESIGN_W - SIDE * 2.0 - ROW_GAP - CTA_W;
const TILE: f64 = 44.0;
const MEDAL: f64 = 100.0;

const SHAPES: [AmbientShape; 3] = [
    AmbientShape {
        kind: ShapeKind::Star,
        motion: Motion::Rotate,
        size: 160.0,
        color: palette::ACCENT,
        speed: 0.1,
        opacity: 0.06,
        pin: Pin::TopLeft(80.0, 100.0),
    },
    AmbientShape {
        kind: ShapeKind::Circle,
        motion: Motion::Breathe,
        size: 240.0,
        color: palette::PRIMARY,
        speed: 0.3,
        opacity: 0.05,
        pin: Pin::BottomRight(100.0, 80.0),
    },
    AmbientShape {
        kind: ShapeKind::Hexagon,
        motion: Motion::Rotate,
        size: 120.0,
        color: palette::PURPLE,
        speed: 0.15,
        opacity: 0.04,
        pin: Pin::TopRight(300.0, 180.0),
    },
];

/// Closing summary: learned points on the left, medal and certificate button on the right.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosingScene;

impl ClosingScene {
    /// Entrance of summary item `i` (OutBack, may overshoot 1).
    pub fn item_progress(cx: &SceneCtx, i: usize) -> f64 {
        let start = cx.frames(1.2 + 0.35 * i as f64) as f64;
        cx.progress(start, 18.0, Ease::out_back(1.3))
    }

    /// Call-to-action entrance (OutBack, may overshoot 1).
    pub fn cta_progress(cx: &SceneCtx) -> f64 {
        cx.progress(CTA_FRAME as f64, 20.0, Ease::out_back(1.4))
    }

    /// Alpha of the pulsing glow behind the medal.
    pub fn cta_glow(cx: &SceneCtx) -> f64 {
        if cx.frame < CTA_FRAME {
            return 0.0;
        }
        CTA_GLOW.at(cx.fps.frames_to_secs((cx.frame - CTA_FRAME) as f64))
    }

    fn summary(&self, cx: &SceneCtx) -> Node {
        let heading_style = TextStyle::heading(38.0, palette::TEXT).weight(700);
        let item_style = TextStyle::body(17.0, palette::TEXT)
            .weight(500)
            .line_height(1.4);
        let text_w = LIST_W - TILE - 18.0;

        let rows: Vec<(Label<'_>, f64)> = SUMMARY
            .iter()
            .map(|it| {
                let l = Label::new(it.text, item_style).wrap(text_w);
                let h = l.approx_size().1.max(TILE);
                (l, h)
            })
            .collect();
        let heading_h = heading_style.line_px() + 8.0;
        let total = heading_h
            + 20.0
            + rows.iter().map(|(_, h)| h).sum::<f64>()
            + 18.0 * (rows.len() - 1) as f64;

        let mut y = 0.0;
        let mut children = vec![
            Label::new(HEADING, heading_style)
                .reveal(fade_in_words(0.1, 0.6, 8))
                .build(cx)
                .named("heading"),
        ];
        y += heading_h + 20.0;
        for (i, ((label, h), it)) in rows.into_iter().zip(&SUMMARY).enumerate() {
            let e = Self::item_progress(cx, i);
            let (_, th) = label.approx_size();
            children.push(
                Node::group(vec![
                    icon_tile(TILE, 12.0, it.color, 0x18, 0x30).at(0.0, (h - TILE) / 2.0),
                    Node::icon(it.icon, 22.0, it.color).at(11.0, (h - 22.0) / 2.0),
                    label.build(cx).at(TILE + 18.0, (h - th) / 2.0),
                ])
                .at((1.0 - e) * -30.0, y)
                .with_opacity(e)
                .named(format!("item-{}", i + 1)),
            );
            y += h + 18.0;
        }

        Node::group(children)
            .at(SIDE, TOP + ((BOTTOM - TOP) - total).max(0.0) / 2.0)
            .named("summary")
    }

    fn cta(&self, cx: &SceneCtx) -> Node {
        let p = Self::cta_progress(cx);
        let glow = Self::cta_glow(cx);
        let title_style = TextStyle::heading(24.0, palette::TEXT).weight(700);
        let body = Label::new(
            CTA_BODY,
            TextStyle::body(15.0, palette::TEXT_MUTED).line_height(1.5),
        )
        .centered(CTA_W);
        let (_, body_h) = body.approx_size();

        let button_style = TextStyle::heading(16.0, Color::WHITE).weight(700);
        let (label_w, _) = Label::new(CTA_BUTTON, button_style).approx_size();
        let button_h = 16.0 * 2.0 + button_style.line_px().max(18.0);
        let button_w = 36.0 * 2.0 + label_w + 10.0 + 18.0;
        let total = MEDAL + 24.0 + title_style.line_px() + 24.0 + body_h + 24.0 + button_h;
        let mid = CTA_W / 2.0;

        let mut y = 0.0;
        let medal = Node::group(vec![
            Node::glow(MEDAL / 2.0, 40.0, palette::ACCENT.with_alpha(glow)).at(mid, MEDAL / 2.0),
            Node::shape(ShapeNode {
                shape: Shape::Ellipse { w: MEDAL, h: MEDAL },
                fill: Some(Paint::linear(
                    135.0,
                    &[
                        palette::ACCENT.with_alpha_byte(0x20),
                        palette::ACCENT.with_alpha_byte(0x10),
                    ],
                )),
                stroke: Some(StrokeStyle {
                    color: palette::ACCENT.with_alpha_byte(0x40),
                    width: 2.0,
                }),
            })
            .at(mid - MEDAL / 2.0, 0.0),
            Node::icon(IconId::Award, 48.0, palette::ACCENT).at(mid - 24.0, MEDAL / 2.0 - 24.0),
        ])
        .named("medal");
        y += MEDAL + 24.0;

        let title = Label::new(CTA_TITLE, title_style)
            .reveal(TextReveal::BounceChars {
                stagger_s: 0.04,
                duration_s: 0.7,
                start_frame: cx.frames(4.2),
            })
            .centered(CTA_W)
            .build(cx)
            .at(0.0, y)
            .named("cta-title");
        y += title_style.line_px() + 24.0;

        let body = body.build(cx).at(0.0, y).with_opacity(p);
        y += body_h + 24.0;

        let label_y = (button_h - button_style.line_px()) / 2.0;
        let button = Node::group(vec![
            Node::fill(
                Shape::RoundedRect {
                    w: button_w,
                    h: button_h,
                    radius: 14.0,
                },
                Paint::linear(135.0, &[palette::PRIMARY, palette::PRIMARY_LIGHT]),
            ),
            Label::new(CTA_BUTTON, button_style)
                .build(cx)
                .at(36.0, label_y),
            Node::icon(IconId::ArrowRight, 18.0, Color::WHITE)
                .at(36.0 + label_w + 10.0, (button_h - 18.0) / 2.0),
        ])
        .at(mid - button_w / 2.0, y + (1.0 - p) * 10.0)
        .with_opacity(p)
        .named("button");

        Node::group(vec![medal, title, body, button])
            .scaled_about(0.9 + 0.1 * p, mid, total / 2.0)
            .at(
                SIDE + LIST_W + ROW_GAP,
                TOP + ((BOTTOM - TOP) - total).max(0.0) / 2.0,
            )
            .with_opacity(p)
            .named("cta")
    }

    fn tagline(&self, cx: &SceneCtx) -> Node {
        let style = TextStyle::body(13.0, palette::TEXT_MUTED.with_alpha_byte(0x88)).tracking_px(1.0);
        let start = cx.frames(4.8) as f64;
        Label::new(TAGLINE, style)
            .centered(DESIGN_W)
            .build(cx)
            .at(0.0, DESIGN_H - 28.0 - style.line_px())
            .with_opacity(cx.tween([start, start + 20.0], [0.0, 1.0]))
            .named("tagline")
    }

    fn ring(&self, cx: &SceneCtx) -> Node {
        let ring = ProgressRing {
            duration_s: 1.5,
            ..ProgressRing::new(1.0, palette::ACCENT, None, 0.5)
        };
        let r = ring.size / 2.0;
        let check_in = [cx.frames(2.0) as f64, cx.frames(2.5) as f64];
        Node::group(vec![
            corner_ring(cx, &ring),
            Node::icon(IconId::Check, 16.0, palette::ACCENT)
                .at(DESIGN_W - RING_RIGHT - r - 8.0, RING_TOP + r - 8.0)
                .with_opacity(cx.tween(check_in, [0.0, 1.0]))
                .named("ring-check"),
        ])
    }
}

impl Scene for ClosingScene {
    fn id(&self) -> SceneId {
        SceneId::Closing
    }

    fn build(&self, cx: &SceneCtx) -> Node {
        let mut children = vec![radial_backdrop(
            Point::new(0.5, 0.5),
            Color::rgb8(0x12, 0x21, 0x3a),
        )];
        children.extend(SHAPES.iter().map(|s| s.node(cx)));
        children.extend([
            dot_grid(36.0, palette::ACCENT.with_alpha(0.03)),
            section_header(
                cx,
                "04",
                "SUMMARY",
                [palette::ACCENT, palette::ACCENT.with_alpha_byte(0xcc)],
            ),
            self.ring(cx),
            self.summary(cx),
            self.cta(cx),
            self.tagline(cx),
        ]);
        Node::group(children).named("closing")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/closing.rs"]
mod tests;
