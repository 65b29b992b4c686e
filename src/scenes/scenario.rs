//! A short workplace conversation about delivering feedback.

use crate::animation::ease::Ease;
use crate::components::backdrop::{backdrop, dot_grid};
use crate::components::label::Label;
use crate::components::panel::{panel, rounded_corners};
use crate::components::progress_ring::ProgressRing;
use crate::components::section::{corner_ring, section_header};
use crate::components::shapes::{AmbientShape, Motion, Pin, ShapeKind};
use crate::foundation::color::Color;
use crate::scene::icons::IconId;
use crate::scene::model::{Node, Paint, Shape, ShapeNode, StrokeStyle};
use crate::scene::palette;
use crate::scenes::{DESIGN_W, Scene, SceneCtx, SceneId, fade_in_chars, fade_in_words};
use crate::text::style::{TextAlign, TextStyle};

/// Which side of the conversation a message sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Avatar on the left, bubble flowing right.
    Left,
    /// Avatar on the right, bubble flowing left.
    Right,
}

/// One chat message.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChatMessage {
    /// Speaker caption.
    pub sender: &'static str,
    /// Message body.
    pub text: &'static str,
    /// Placement.
    pub side: Side,
    /// Avatar color.
    pub color: Color,
    /// Avatar glyph.
    pub avatar: IconId,
    /// Entrance time in seconds.
    pub delay_s: f64,
}

/// The scripted conversation, in order.
pub const CONVERSATION: [ChatMessage; 3] = [
    ChatMessage {
        sender: "Manager",
        text: "The report was submitted late and had several errors. We need to discuss this.",
        side: Side::Left,
        color: palette::PRIMARY,
        avatar: IconId::User,
        delay_s: 1.5,
    },
    ChatMessage {
        sender: "Team Lead",
        text: "I appreciate your work on this project. Let's review the timeline together and find ways to improve accuracy.",
        side: Side::Right,
        color: palette::ACCENT,
        avatar: IconId::Users,
        delay_s: 3.5,
    },
    ChatMessage {
        sender: "Manager",
        text: "Good approach! Let's set up regular check-ins to prevent this going forward.",
        side: Side::Left,
        color: palette::PRIMARY,
        avatar: IconId::User,
        delay_s: 5.5,
    },
];

const TITLE: &str = "Team Meeting Feedback";
const PROMPT: &str = "How would you deliver constructive feedback?";
const TAKEAWAY: &str = "Focus on solutions, not blame. Collaborative feedback builds trust.";

/// Frame at which the key-takeaway banner starts rising in.
pub const VERDICT_FRAME: f64 = 170.0;

/// Messages show their text this many frames after their bubble starts entering.
pub const TYPING_FRAMES: i64 = 8;

const CONTENT_X: f64 = 60.0;
const CONTENT_Y: f64 = 120.0;
const CONTENT_W: f64 = DESIGN_W - 120.0;
const CONTENT_BOTTOM: f64 = 660.0;

const AVATAR: f64 = 48.0;
const ROW_GAP: f64 = 14.0;
const ROW_MAX_W: f64 = 600.0;
const BUBBLE_PAD_X: f64 = 20.0;
const BUBBLE_PAD_Y: f64 = 14.0;

const SHAPES: [AmbientShape; 2] = [
    AmbientShape {
        kind: ShapeKind::Ring,
        motion: Motion::Rotate,
        size: 300.0,
        color: palette::PRIMARY,
        speed: 0.1,
        opacity: 0.05,
        pin: Pin::TopRight(60.0, 60.0),
    },
    AmbientShape {
        kind: ShapeKind::Hexagon,
        motion: Motion::Breathe,
        size: 180.0,
        color: palette::ACCENT,
        speed: 0.3,
        opacity: 0.04,
        pin: Pin::BottomLeft(80.0, 80.0),
    },
];

/// Workplace scenario: a three-message exchange inside a conversation card, then a takeaway.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScenarioScene;

impl ScenarioScene {
    /// Entrance progress of `msg` (OutBack, may overshoot 1).
    pub fn bubble_progress(cx: &SceneCtx, msg: &ChatMessage) -> f64 {
        let start = cx.frames(msg.delay_s) as f64;
        cx.progress(start, 15.0, Ease::out_back(1.3))
    }

    /// Whether the message text of `msg` is shown yet.
    pub fn message_visible(cx: &SceneCtx, msg: &ChatMessage) -> bool {
        cx.frame >= cx.frames(msg.delay_s) + TYPING_FRAMES
    }

    /// Takeaway banner progress.
    pub fn verdict_progress(cx: &SceneCtx) -> f64 {
        cx.progress(VERDICT_FRAME, 25.0, Ease::out_back(1.2))
    }

    fn bubble(&self, cx: &SceneCtx, msg: &ChatMessage, inner_w: f64) -> (Node, f64) {
        let sender_style = TextStyle::body(12.0, palette::TEXT_MUTED)
            .weight(600)
            .tracking_px(1.0);
        let sender = msg.sender.to_uppercase();
        let (sender_w, sender_h) = Label::new(&sender, sender_style).approx_size();

        let max_text_w = ROW_MAX_W - AVATAR - ROW_GAP - BUBBLE_PAD_X * 2.0;
        let body_style = TextStyle::body(16.0, palette::TEXT).line_height(1.5);
        let body = Label::new(msg.text, body_style).wrap(max_text_w);
        let shown = Self::message_visible(cx, msg);
        let (text_w, text_h) = if shown { body.approx_fit() } else { (0.0, 0.0) };

        let box_w = sender_w.max(text_w + BUBBLE_PAD_X * 2.0);
        let box_h = text_h + BUBBLE_PAD_Y * 2.0;
        let col_h = sender_h + 4.0 + box_h;
        let row_w = AVATAR + ROW_GAP + box_w;
        let right = msg.side == Side::Right;

        let (fill, border, radii) = if right {
            (
                Paint::linear(
                    135.0,
                    &[
                        palette::PRIMARY.with_alpha_byte(0x22),
                        palette::PRIMARY.with_alpha_byte(0x11),
                    ],
                ),
                palette::PRIMARY.with_alpha_byte(0x33),
                [16.0, 4.0, 16.0, 16.0],
            )
        } else {
            (
                Paint::Solid(palette::SURFACE),
                palette::SURFACE_LIGHT,
                [4.0, 16.0, 16.0, 16.0],
            )
        };

        let avatar = Node::group(vec![
            Node::fill(
                Shape::Ellipse {
                    w: AVATAR,
                    h: AVATAR,
                },
                Paint::linear(135.0, &[msg.color, msg.color.with_alpha_byte(0x99)]),
            ),
            Node::icon(msg.avatar, 24.0, Color::WHITE).at(12.0, 12.0),
        ]);

        let mut column = vec![
            Label::new(&sender, sender_style)
                .align(if right { TextAlign::End } else { TextAlign::Start })
                .wrap(box_w)
                .build(cx),
            Node::shape(ShapeNode {
                shape: rounded_corners(box_w, box_h, radii),
                fill: Some(fill),
                stroke: Some(StrokeStyle {
                    color: border,
                    width: 1.0,
                }),
            })
            .at(0.0, sender_h + 4.0),
        ];
        if shown {
            column.push(
                body.build(cx)
                    .at(BUBBLE_PAD_X, sender_h + 4.0 + BUBBLE_PAD_Y)
                    .named("message"),
            );
        }
        let column = Node::group(column);

        let (avatar, column, x) = if right {
            (
                avatar.at(box_w + ROW_GAP, 0.0),
                column,
                inner_w - row_w,
            )
        } else {
            (avatar, column.at(AVATAR + ROW_GAP, 0.0), 0.0)
        };

        let p = Self::bubble_progress(cx, msg);
        let slide = if right { 40.0 } else { -40.0 };
        let node = Node::group(vec![avatar, column])
            .at(x + (1.0 - p) * slide, 0.0)
            .with_opacity(p)
            .named("bubble");
        (node, col_h.max(AVATAR))
    }

    fn conversation(&self, cx: &SceneCtx, top: f64) -> Node {
        let h = CONTENT_BOTTOM - top;
        let pad_x = 32.0;
        let pad_y = 28.0;
        let inner_w = CONTENT_W - pad_x * 2.0;

        let mut children = vec![panel(
            CONTENT_W,
            h,
            20.0,
            Paint::Solid(Color::rgb8(15, 23, 42).with_alpha(0.6)),
            Some(palette::SURFACE_LIGHT),
        )];
        let mut y = pad_y;
        for msg in &CONVERSATION {
            let (node, bh) = self.bubble(cx, msg, inner_w);
            children.push(node.at(pad_x, y));
            y += bh + 20.0;
        }

        let scale = 0.9 + 0.1 * cx.progress(25.0, 25.0, Ease::OutCubic);
        let opacity = cx.tween([25.0, 45.0], [0.0, 1.0]);
        Node::group(children)
            .scaled_about(scale, CONTENT_W / 2.0, h / 2.0)
            .at(CONTENT_X, top)
            .with_opacity(opacity)
            .named("conversation")
    }

    fn verdict(&self, cx: &SceneCtx) -> Node {
        let p = Self::verdict_progress(cx);
        let x = CONTENT_X + 60.0;
        let w = CONTENT_W - 120.0;
        let h = 28.0 + 32.0;
        let label_style = TextStyle::body(15.0, palette::ACCENT).weight(600);
        let text_style = TextStyle::body(15.0, palette::TEXT);
        let label = "KEY TAKEAWAY:";
        let (label_w, _) = Label::new(label, label_style).approx_size();
        let ty = (h - text_style.line_px()) / 2.0;

        Node::group(vec![
            panel(
                w,
                h,
                14.0,
                Paint::linear(
                    135.0,
                    &[
                        palette::ACCENT.with_alpha_byte(0x15),
                        palette::ACCENT.with_alpha_byte(0x08),
                    ],
                ),
                Some(palette::ACCENT.with_alpha_byte(0x33)),
            ),
            Node::icon(IconId::CircleCheck, 28.0, palette::ACCENT).at(24.0, 16.0),
            Label::new(label, label_style).build(cx).at(24.0 + 28.0 + 16.0, ty),
            Label::new(TAKEAWAY, text_style)
                .build(cx)
                .at(24.0 + 28.0 + 16.0 + label_w + 16.0, ty),
        ])
        .at(x, CONTENT_BOTTOM - 20.0 - h + (1.0 - p) * 20.0)
        .with_opacity(p)
        .named("verdict")
    }
}

impl Scene for ScenarioScene {
    fn id(&self) -> SceneId {
        SceneId::Scenario
    }

    fn build(&self, cx: &SceneCtx) -> Node {
        let title_style = TextStyle::heading(36.0, palette::TEXT);
        let prompt_style = TextStyle::body(16.0, palette::TEXT_MUTED);
        let title = Label::new(TITLE, title_style)
            .reveal(fade_in_words(0.1, 0.6, 10))
            .build(cx)
            .at(CONTENT_X, CONTENT_Y);
        let prompt_y = CONTENT_Y + title_style.line_px() + 8.0;
        let prompt = Label::new(PROMPT, prompt_style)
            .reveal(fade_in_chars(0.015, 0.4, 22))
            .build(cx)
            .at(CONTENT_X, prompt_y);
        let card_top = prompt_y + prompt_style.line_px() + 32.0;

        let ring = ProgressRing::new(0.25, palette::PRIMARY, Some("1/4"), 0.5);

        let mut children = vec![backdrop(Paint::linear(
            160.0,
            &[
                Color::rgb8(0x0d, 0x1b, 0x2a),
                palette::BG,
                Color::rgb8(0x0a, 0x19, 0x29),
            ],
        ))];
        children.extend(SHAPES.iter().map(|s| s.node(cx)));
        children.extend([
            dot_grid(40.0, palette::PRIMARY.with_alpha(0.04)),
            section_header(
                cx,
                "01",
                "WORKPLACE SCENARIO",
                [palette::PRIMARY, palette::PRIMARY_LIGHT],
            ),
            corner_ring(cx, &ring),
            title,
            prompt,
            self.conversation(cx, card_top),
            self.verdict(cx),
        ]);
        Node::group(children).named("scenario")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/scenario.rs"]
mod tests;
