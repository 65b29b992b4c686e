//! A four-option knowledge check with a timed answer reveal.

use crate::animation::ease::Ease;
use crate::animation::proc::Oscillator;
use crate::components::backdrop::{dot_grid, radial_backdrop};
use crate::components::label::Label;
use crate::components::panel::panel;
use crate::components::progress_ring::ProgressRing;
use crate::components::section::{corner_ring, header_progress, section_header};
use crate::components::shapes::{AmbientShape, Motion, Pin, ShapeKind};
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::scene::icons::IconId;
use crate::scene::model::{Node, Paint, Shape, ShapeNode, StrokeStyle};
use crate::scene::palette;
use crate::scenes::{DESIGN_W, Scene, SceneCtx, SceneId, fade_in_words};
use crate::text::style::TextStyle;

/// One answer option.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizOption {
    /// Letter shown in the option's badge.
    pub letter: &'static str,
    /// Answer text.
    pub text: &'static str,
    /// Whether this is the right answer.
    pub correct: bool,
    /// Entrance time in seconds.
    pub delay_s: f64,
}

/// The question's options, top to bottom. Exactly one is correct.
pub const OPTIONS: [QuizOption; 4] = [
    QuizOption {
        letter: "A",
        text: "Correct them immediately in front of everyone",
        correct: false,
        delay_s: 1.2,
    },
    QuizOption {
        letter: "B",
        text: "Ignore it \u{2014} it's not your problem",
        correct: false,
        delay_s: 1.5,
    },
    QuizOption {
        letter: "C",
        text: "Speak with them privately after the meeting and offer to help",
        correct: true,
        delay_s: 1.8,
    },
    QuizOption {
        letter: "D",
        text: "Send an email to their manager about the mistake",
        correct: false,
        delay_s: 2.1,
    },
];

const QUESTION: &str =
    "A colleague makes an error in their presentation. What is the best approach?";
const EXPLANATION: &str = "Private, constructive feedback preserves dignity and trust. It creates a safe environment where team members feel comfortable taking risks and growing.";

/// Breathing scale of the explanation card once revealed.
const EXPLAIN_PULSE: Oscillator = Oscillator::new(1.0, 0.02, 4.0);

/// Time of the answer reveal, in seconds.
pub const REVEAL_AT_S: f64 = 5.5;

const TOP: f64 = 120.0;
const SIDE: f64 = 80.0;
const BOTTOM: f64 = 660.0;
const COL_GAP: f64 = 48.0;
const COL_W: f64 = (DESIGN_W - SIDE * 2.0 - COL_GAP) / 2.0;

const OPT_PAD_X: f64 = 24.0;
const OPT_PAD_Y: f64 = 18.0;
const OPT_GAP: f64 = 18.0;
const LETTER_BOX: f64 = 40.0;
const RESULT_ICON: f64 = 22.0;

const SHAPES: [AmbientShape; 2] = [
    AmbientShape {
        kind: ShapeKind::Star,
        motion: Motion::Rotate,
        size: 150.0,
        color: palette::ACCENT_YELLOW,
        speed: 0.12,
        opacity: 0.06,
        pin: Pin::TopRight(100.0, 140.0),
    },
    AmbientShape {
        kind: ShapeKind::Ring,
        motion: Motion::Breathe,
        size: 200.0,
        color: palette::PRIMARY,
        speed: 0.3,
        opacity: 0.04,
        pin: Pin::BottomLeft(100.0, 100.0),
    },
];

/// Knowledge check: question and explanation on the left, options on the right.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuizScene;

impl QuizScene {
    /// Scene-local frame of the answer reveal.
    pub fn reveal_frame(cx: &SceneCtx) -> i64 {
        cx.frames(REVEAL_AT_S)
    }

    /// Whether the correct answer is being shown.
    pub fn is_revealed(cx: &SceneCtx) -> bool {
        cx.frame >= Self::reveal_frame(cx)
    }

    /// Fade of the reveal styling (OutCubic over 15 frames).
    pub fn reveal_progress(cx: &SceneCtx) -> f64 {
        let r = Self::reveal_frame(cx) as f64;
        cx.progress(r, 15.0, Ease::OutCubic)
    }

    /// Entrance of `opt` (OutBack, may overshoot 1).
    pub fn option_progress(cx: &SceneCtx, opt: &QuizOption) -> f64 {
        let start = cx.frames(opt.delay_s) as f64;
        cx.progress(start, 18.0, Ease::out_back(1.2))
    }

    /// Explanation card progress.
    pub fn explain_progress(cx: &SceneCtx) -> f64 {
        let r = Self::reveal_frame(cx) as f64;
        cx.progress(r + 10.0, 25.0, Ease::OutCubic)
    }

    fn option(&self, cx: &SceneCtx, opt: &QuizOption) -> (Node, f64) {
        let revealed = Self::is_revealed(cx);
        let p = Self::reveal_progress(cx);
        let show_right = revealed && opt.correct;
        let show_wrong = revealed && !opt.correct;

        let text_w = COL_W - OPT_PAD_X * 2.0 - LETTER_BOX - RESULT_ICON - OPT_GAP * 2.0;
        let mut style = TextStyle::body(17.0, palette::TEXT).line_height(1.4);
        if show_right {
            style = style.weight(600);
        }
        if show_wrong {
            style.color = palette::TEXT_MUTED;
        }
        let label = Label::new(opt.text, style)
            .wrap(text_w)
            .strike(show_wrong.then(|| palette::DANGER.with_alpha_byte(0x44)));
        let (_, text_h) = label.approx_size();
        let h = text_h.max(LETTER_BOX) + OPT_PAD_Y * 2.0;

        let (fill, border) = match (revealed, opt.correct) {
            (false, _) => (palette::SURFACE, palette::SURFACE_LIGHT),
            (true, true) => (
                palette::ACCENT.with_alpha(0.15 * p),
                palette::ACCENT.with_alpha(0.5 * p),
            ),
            (true, false) => (
                palette::DANGER.with_alpha(0.08 * p),
                palette::DANGER.with_alpha(0.15 * p),
            ),
        };

        let letter_paint = if show_right {
            Paint::linear(
                135.0,
                &[palette::ACCENT, palette::ACCENT.with_alpha_byte(0xcc)],
            )
        } else {
            Paint::linear(
                135.0,
                &[
                    palette::PRIMARY.with_alpha_byte(0x33),
                    palette::PRIMARY.with_alpha_byte(0x22),
                ],
            )
        };
        let letter_glyph = if show_right {
            Node::icon(IconId::Check, 20.0, Color::WHITE).at(10.0, 10.0)
        } else {
            let s = TextStyle::heading(16.0, palette::PRIMARY_LIGHT).weight(800);
            Label::new(opt.letter, s)
                .centered(LETTER_BOX)
                .build(cx)
                .at(0.0, (LETTER_BOX - s.line_px()) / 2.0)
        };
        let mid = h / 2.0;
        let letter = Node::group(vec![
            Node::fill(
                Shape::RoundedRect {
                    w: LETTER_BOX,
                    h: LETTER_BOX,
                    radius: 12.0,
                },
                letter_paint,
            ),
            letter_glyph,
        ])
        .at(OPT_PAD_X, mid - LETTER_BOX / 2.0);

        let mut children = vec![
            Node::shape(ShapeNode {
                shape: Shape::RoundedRect {
                    w: COL_W,
                    h,
                    radius: 14.0,
                },
                fill: Some(Paint::Solid(fill)),
                stroke: Some(StrokeStyle {
                    color: border,
                    width: 1.5,
                }),
            }),
            letter,
            label
                .build(cx)
                .at(OPT_PAD_X + LETTER_BOX + OPT_GAP, mid - text_h / 2.0),
        ];
        if revealed {
            let (icon, color) = if opt.correct {
                (IconId::CircleCheck, palette::ACCENT)
            } else {
                (IconId::CircleX, palette::DANGER)
            };
            children.push(
                Node::icon(icon, RESULT_ICON, color)
                    .at(COL_W - OPT_PAD_X - RESULT_ICON, mid - RESULT_ICON / 2.0)
                    .with_opacity(p)
                    .named("result"),
            );
        }

        let e = Self::option_progress(cx, opt);
        let node = Node::group(children)
            .at((1.0 - e) * 40.0, 0.0)
            .with_opacity(e)
            .named(format!("option-{}", opt.letter));
        (node, h)
    }

    fn options(&self, cx: &SceneCtx) -> Node {
        let built: Vec<(Node, f64)> = OPTIONS.iter().map(|o| self.option(cx, o)).collect();
        let total = built.iter().map(|(_, h)| h).sum::<f64>() + 14.0 * (OPTIONS.len() - 1) as f64;
        let mut y = TOP + ((BOTTOM - TOP) - total).max(0.0) / 2.0;
        let mut children = Vec::with_capacity(built.len());
        for (node, h) in built {
            children.push(node.at(0.0, y));
            y += h + 14.0;
        }
        Node::group(children)
            .at(SIDE + COL_W + COL_GAP, 0.0)
            .named("options")
    }

    fn explanation(&self, cx: &SceneCtx) -> Node {
        let p = Self::explain_progress(cx);
        let reveal = Self::reveal_frame(cx);
        let pulse = if cx.frame >= reveal {
            EXPLAIN_PULSE.at(cx.fps.frames_to_secs((cx.frame - reveal) as f64))
        } else {
            1.0
        };

        let pad_x = 22.0;
        let pad_y = 18.0;
        let head_style = TextStyle::heading(14.0, palette::ACCENT).weight(700);
        let body = Label::new(
            EXPLANATION,
            TextStyle::body(14.0, palette::TEXT_MUTED).line_height(1.6),
        )
        .wrap(COL_W - pad_x * 2.0);
        let (_, body_h) = body.approx_size();
        let head_h = head_style.line_px().max(20.0);
        let h = pad_y * 2.0 + head_h + 10.0 + body_h;

        Node::group(vec![
            panel(
                COL_W,
                h,
                14.0,
                Paint::linear(
                    135.0,
                    &[
                        palette::ACCENT.with_alpha_byte(0x12),
                        palette::ACCENT.with_alpha_byte(0x06),
                    ],
                ),
                Some(palette::ACCENT.with_alpha_byte(0x30)),
            ),
            Node::icon(IconId::Lightbulb, 20.0, palette::ACCENT).at(pad_x, pad_y + (head_h - 20.0) / 2.0),
            Label::new("WHY THIS WORKS", head_style)
                .build(cx)
                .at(pad_x + 30.0, pad_y + (head_h - head_style.line_px()) / 2.0),
            body.build(cx).at(pad_x, pad_y + head_h + 10.0),
        ])
        .scaled_about(pulse, COL_W / 2.0, h / 2.0)
        .at(0.0, (1.0 - p) * 15.0)
        .with_opacity(p)
        .named("explanation")
    }

    fn question_column(&self, cx: &SceneCtx) -> Node {
        let tile = Node::group(vec![
            panel(
                56.0,
                56.0,
                16.0,
                Paint::linear(
                    135.0,
                    &[
                        palette::ACCENT_YELLOW.with_alpha_byte(0x22),
                        palette::ACCENT_YELLOW.with_alpha_byte(0x11),
                    ],
                ),
                Some(palette::ACCENT_YELLOW.with_alpha_byte(0x33)),
            ),
            Node::icon(IconId::HelpCircle, 28.0, palette::ACCENT_YELLOW).at(14.0, 14.0),
        ])
        .with_opacity(header_progress(cx));

        let question = Label::new(
            QUESTION,
            TextStyle::heading(32.0, palette::TEXT)
                .weight(700)
                .line_height(1.3),
        )
        .reveal(fade_in_words(0.08, 0.6, 8))
        .wrap(COL_W);
        let (_, q_h) = question.approx_size();

        let mut y = 0.0;
        let tile = tile.at(0.0, y);
        y += 56.0 + 20.0;
        let question = question.build(cx).at(0.0, y).named("question");
        y += q_h + 20.0 + 8.0;
        let explanation = self.explanation(cx).at(0.0, y);

        Node::group(vec![tile, question, explanation]).at(SIDE, TOP)
    }
}

impl Scene for QuizScene {
    fn id(&self) -> SceneId {
        SceneId::Quiz
    }

    fn build(&self, cx: &SceneCtx) -> Node {
        let ring = ProgressRing::new(0.5, palette::ACCENT_YELLOW, Some("2/4"), 0.3);
        let mut children = vec![radial_backdrop(
            Point::new(0.3, 0.6),
            Color::rgb8(0x11, 0x1d, 0x33),
        )];
        children.extend(SHAPES.iter().map(|s| s.node(cx)));
        children.extend([
            dot_grid(32.0, palette::PRIMARY.with_alpha(0.04)),
            section_header(
                cx,
                "02",
                "KNOWLEDGE CHECK",
                [
                    palette::ACCENT_YELLOW,
                    palette::ACCENT_YELLOW.with_alpha_byte(0xcc),
                ],
            ),
            corner_ring(cx, &ring),
            self.question_column(cx),
            self.options(cx),
        ]);
        Node::group(children).named("quiz")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/quiz.rs"]
mod tests;
