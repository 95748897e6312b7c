// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run detection for underline, strikethrough and highlight decorations.
//!
//! Each decoration is a two state machine stepped once per character, after the character
//! has been moved into place. A run opens on the first eligible character of a line and emits a
//! [`Decoration`] when it closes.

use alloc::vec::Vec;

use peniko::kurbo::{Point, Rect};
use peniko::Color;
use rich_markup::{FontId, FontStyles};

use crate::classify::{is_line_break, is_separator};
use crate::{CharacterPlacement, HighlightState, LineInfo};

/// Kind of a [`Decoration`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Line under the text.
    Underline,
    /// Line through the text.
    Strikethrough,
    /// Box behind the text.
    Highlight,
}

/// A drawable decoration run.
///
/// Lines run from `start` to `end` along a constant y. Highlights are boxes with `start` at the
/// bottom left corner and `end` at the top right corner, padding included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decoration {
    /// What to draw.
    pub kind: DecorationKind,
    /// Start of the run.
    pub start: Point,
    /// End of the run.
    pub end: Point,
    /// Scale of the first character of the run.
    pub start_scale: f64,
    /// Scale of the last character of the run.
    pub end_scale: f64,
    /// Largest scale over the run.
    pub max_scale: f64,
    /// Line thickness. Zero for highlights.
    pub thickness: f64,
    /// Fill color.
    pub color: Color,
}

impl Decoration {
    /// Bounds of the run. Lines are centered on their y with the given thickness.
    pub fn bounds(&self) -> Rect {
        match self.kind {
            DecorationKind::Highlight => Rect::from_points(self.start, self.end),
            _ => {
                let half = self.thickness * 0.5;
                Rect::new(
                    self.start.x,
                    self.start.y - half,
                    self.end.x,
                    self.start.y + half,
                )
            }
        }
    }
}

/// What the decoration machines see of the current character.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    pub(crate) placements: &'a [CharacterPlacement],
    pub(crate) index: usize,
    pub(crate) line: &'a LineInfo,
    /// The character survived the visibility limits.
    pub(crate) shown: bool,
    /// Vertical offset applied to the block, used to compare against characters not yet moved.
    pub(crate) y_offset: f64,
    pub(crate) vertex_padding: f64,
}

impl<'a> Cursor<'a> {
    fn current(&self) -> &'a CharacterPlacement {
        &self.placements[self.index]
    }

    fn previous(&self) -> &'a CharacterPlacement {
        &self.placements[self.index.saturating_sub(1)]
    }

    fn next(&self) -> Option<&'a CharacterPlacement> {
        self.placements.get(self.index + 1)
    }

    fn last_visible(&self) -> &'a CharacterPlacement {
        &self.placements[self.line.last_visible]
    }

    fn is_single_character(&self) -> bool {
        self.placements.len() == 1
    }

    fn is_whitespace(&self) -> bool {
        let ch = self.current().character;
        ch.is_whitespace() || ch == '\u{200b}'
    }

    fn can_start(&self) -> bool {
        let ch = self.current().character;
        self.shown
            && self.index <= self.line.last_visible
            && !is_line_break(ch)
            && !(self.index == self.line.last_visible && is_separator(ch))
    }

    /// The character that closes a run ending on this line, skipping trailing whitespace.
    fn line_end(&self) -> &'a CharacterPlacement {
        if self.is_whitespace() {
            self.last_visible()
        } else {
            self.current()
        }
    }
}

const BASELINE_TOLERANCE: f64 = 1e-4;

/// A horizontal line run, shared by underline and strikethrough.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineRun {
    start_x: f64,
    y: f64,
    start_scale: f64,
    max_scale: f64,
    thickness: f64,
    color: Color,
}

impl LineRun {
    fn finish(self, kind: DecorationKind, end: &CharacterPlacement, padding: f64) -> Decoration {
        let decoration = Decoration {
            kind,
            start: Point::new(self.start_x - padding * self.start_scale, self.y),
            end: Point::new(end.top_right.x + padding * end.scale, self.y),
            start_scale: self.start_scale,
            end_scale: end.scale,
            max_scale: self.max_scale.max(end.scale),
            thickness: self.thickness,
            color: self.color,
        };
        log::trace!("{kind:?} {:?} to {:?}", decoration.start, decoration.end);
        decoration
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) enum Underline {
    #[default]
    Idle,
    Active(LineRun),
}

impl Underline {
    pub(crate) fn step(&mut self, cx: &Cursor<'_>, out: &mut Vec<Decoration>) {
        let ch = cx.current();
        if !ch.has_style(FontStyles::UNDERLINE) {
            if let Self::Active(run) = *self {
                out.push(run.finish(DecorationKind::Underline, cx.previous(), cx.vertex_padding));
                *self = Self::Idle;
            }
            return;
        }

        if let Self::Active(run) = self {
            if !cx.is_whitespace() {
                run.y = run.y.min(ch.baseline + ch.underline_offset);
                run.max_scale = run.max_scale.max(ch.scale);
            }
        } else if cx.can_start() {
            *self = Self::Active(LineRun {
                start_x: ch.bottom_left.x,
                y: ch.baseline + ch.underline_offset,
                start_scale: ch.scale,
                max_scale: ch.scale,
                thickness: ch.underline_thickness,
                color: ch.underline_color,
            });
        }

        let Self::Active(run) = *self else {
            return;
        };
        let end = if cx.is_single_character() {
            Some(ch)
        } else if !cx.shown {
            Some(cx.previous())
        } else if cx.index == cx.line.last || cx.index >= cx.line.last_visible {
            Some(cx.line_end())
        } else if cx
            .next()
            .is_some_and(|next| next.underline_color != run.color)
        {
            Some(ch)
        } else {
            None
        };
        if let Some(end) = end {
            out.push(run.finish(DecorationKind::Underline, end, cx.vertex_padding));
            *self = Self::Idle;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct StrikethroughRun {
    line: LineRun,
    point_size: f64,
    baseline: f64,
    font: FontId,
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) enum Strikethrough {
    #[default]
    Idle,
    Active(StrikethroughRun),
}

impl Strikethrough {
    pub(crate) fn step(&mut self, cx: &Cursor<'_>, out: &mut Vec<Decoration>) {
        let ch = cx.current();
        if !ch.has_style(FontStyles::STRIKETHROUGH) {
            if let Self::Active(run) = *self {
                out.push(run.line.finish(
                    DecorationKind::Strikethrough,
                    cx.previous(),
                    cx.vertex_padding,
                ));
                *self = Self::Idle;
            }
            return;
        }

        if let Self::Active(run) = self {
            run.line.max_scale = run.line.max_scale.max(ch.scale);
        } else if cx.can_start() {
            *self = Self::Active(StrikethroughRun {
                line: LineRun {
                    start_x: ch.bottom_left.x,
                    y: ch.baseline + ch.strikethrough_offset,
                    start_scale: ch.scale,
                    max_scale: ch.scale,
                    thickness: ch.underline_thickness,
                    color: ch.strikethrough_color,
                },
                point_size: ch.point_size,
                baseline: ch.baseline,
                font: ch.font,
            });
        }

        let Self::Active(run) = *self else {
            return;
        };
        let changes = |next: &CharacterPlacement| {
            next.point_size != run.point_size
                || (next.baseline + cx.y_offset - run.baseline).abs() > BASELINE_TOLERANCE
                || next.strikethrough_color != run.line.color
                || next.font != run.font
        };
        let end = if cx.is_single_character() {
            Some(ch)
        } else if !cx.shown {
            Some(cx.previous())
        } else if cx.index == cx.line.last {
            Some(cx.line_end())
        } else if cx.next().is_some_and(changes) {
            if cx.index > cx.line.last_visible {
                Some(cx.last_visible())
            } else {
                Some(ch)
            }
        } else {
            None
        };
        if let Some(end) = end {
            out.push(
                run.line
                    .finish(DecorationKind::Strikethrough, end, cx.vertex_padding),
            );
            *self = Self::Idle;
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct HighlightRun {
    state: HighlightState,
    bounds: Rect,
    start_scale: f64,
    end_scale: f64,
    max_scale: f64,
}

impl HighlightRun {
    fn open(state: HighlightState, scale: f64) -> Self {
        Self {
            state,
            bounds: Rect::new(
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            start_scale: scale,
            end_scale: scale,
            max_scale: scale,
        }
    }

    fn include(&mut self, ch: &CharacterPlacement, is_whitespace: bool) {
        let pad = self.state.padding;
        let (left, right) = if is_whitespace {
            (ch.origin, ch.x_advance)
        } else {
            (ch.bottom_left.x, ch.top_right.x)
        };
        self.bounds.x0 = self.bounds.x0.min(left - pad.x0);
        self.bounds.x1 = self.bounds.x1.max(right + pad.x1);
        self.bounds.y0 = self.bounds.y0.min(ch.descender - pad.y1);
        self.bounds.y1 = self.bounds.y1.max(ch.ascender + pad.y0);
        self.end_scale = ch.scale;
        self.max_scale = self.max_scale.max(ch.scale);
    }

    fn finish(self) -> Decoration {
        let decoration = Decoration {
            kind: DecorationKind::Highlight,
            start: Point::new(self.bounds.x0, self.bounds.y0),
            end: Point::new(self.bounds.x1, self.bounds.y1),
            start_scale: self.start_scale,
            end_scale: self.end_scale,
            max_scale: self.max_scale,
            thickness: 0.0,
            color: self.state.color,
        };
        log::trace!("highlight {:?}", self.bounds);
        decoration
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) enum Highlight {
    #[default]
    Idle,
    Active(HighlightRun),
}

impl Highlight {
    pub(crate) fn step(&mut self, cx: &Cursor<'_>, out: &mut Vec<Decoration>) {
        let ch = cx.current();
        if !ch.has_style(FontStyles::HIGHLIGHT) || !cx.shown {
            if let Self::Active(run) = *self {
                out.push(run.finish());
                *self = Self::Idle;
            }
            return;
        }

        if let Self::Idle = self {
            if cx.can_start() {
                *self = Self::Active(HighlightRun::open(ch.highlight, ch.scale));
            }
        }
        let Self::Active(run) = self else {
            return;
        };

        if run.state != ch.highlight {
            // Close the previous box halfway into the gap before this character.
            let boundary = if cx.is_whitespace() {
                ch.origin
            } else {
                ch.bottom_left.x
            };
            let mut closed = *run;
            closed.bounds.x1 = (closed.bounds.x1 - closed.state.padding.x1 + boundary) * 0.5;
            closed.bounds.y0 = closed.bounds.y0.min(ch.descender);
            closed.bounds.y1 = closed.bounds.y1.max(ch.ascender);
            out.push(closed.finish());

            let mut next = HighlightRun::open(ch.highlight, ch.scale);
            next.include(ch, cx.is_whitespace());
            next.bounds.x0 = closed.bounds.x1;
            *run = next;
        } else {
            run.include(ch, cx.is_whitespace());
        }

        if cx.is_single_character() || cx.index == cx.line.last || cx.index >= cx.line.last_visible
        {
            out.push(run.finish());
            *self = Self::Idle;
        }
    }
}

/// The three decoration machines stepped together.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Decorator {
    underline: Underline,
    strikethrough: Strikethrough,
    highlight: Highlight,
}

impl Decorator {
    pub(crate) fn step(&mut self, cx: &Cursor<'_>, out: &mut Vec<Decoration>) {
        self.underline.step(cx, out);
        self.strikethrough.step(cx, out);
        self.highlight.step(cx, out);
    }
}
