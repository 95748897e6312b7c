// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Insets, Point, Vec2};
use peniko::Color;
use rich_markup::{FontId, FontStyles};

/// Color and padding of a highlight box. Adjacent characters with different states produce
/// separate, abutting highlight decorations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HighlightState {
    /// Fill color.
    pub color: Color,
    /// Extra space around the box: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub padding: Insets,
}

impl HighlightState {
    /// Creates a highlight state without padding.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            padding: Insets::ZERO,
        }
    }
}

/// The shaped geometry of one character, as produced by a [`Shaper`](crate::Shaper).
///
/// Positions are in layout units with y pointing up, relative to the start of the block. The
/// layout pass moves every character into place, culls characters past the visibility limits
/// and writes [`packed_scale`](Self::packed_scale).
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterPlacement {
    /// The source character.
    pub character: char,
    /// Font asset the glyph comes from.
    pub font: FontId,
    /// Style bits of the span the character belongs to.
    pub styles: FontStyles,
    /// Point size the glyph was shaped at.
    pub point_size: f64,
    /// Ratio between layout units and font units for this glyph.
    pub scale: f64,
    /// The glyph is emboldened at render time rather than taken from a bold face.
    pub synthetic_bold: bool,
    /// Quad corner.
    pub bottom_left: Point,
    /// Quad corner.
    pub top_left: Point,
    /// Quad corner.
    pub top_right: Point,
    /// Quad corner.
    pub bottom_right: Point,
    /// Pen position before the character.
    pub origin: f64,
    /// Pen position after the character.
    pub x_advance: f64,
    /// Ascender line of the character's line.
    pub ascender: f64,
    /// Baseline of the character's line, including sub/superscript shifts.
    pub baseline: f64,
    /// Descender line of the character's line.
    pub descender: f64,
    /// Text color.
    pub color: Color,
    /// Underline color.
    pub underline_color: Color,
    /// Strikethrough color.
    pub strikethrough_color: Color,
    /// Highlight box state.
    pub highlight: HighlightState,
    /// Underline position relative to the baseline.
    pub underline_offset: f64,
    /// Thickness of underline and strikethrough.
    pub underline_thickness: f64,
    /// Strikethrough position relative to the baseline.
    pub strikethrough_offset: f64,
    /// The character has a glyph quad that is drawn. Whitespace is shaped invisible.
    pub is_visible: bool,
    /// Index of the character's line.
    pub line_number: usize,
    /// Signed scale for the glyph's UV channel. Written by the layout pass.
    pub packed_scale: f64,
}

impl CharacterPlacement {
    /// Returns `true` if the character belongs to a span with any of `styles`.
    pub fn has_style(&self, styles: FontStyles) -> bool {
        self.styles.intersects(styles)
    }

    /// Width of the glyph quad.
    pub fn quad_width(&self) -> f64 {
        self.top_right.x - self.bottom_left.x
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.bottom_left += offset;
        self.top_left += offset;
        self.top_right += offset;
        self.bottom_right += offset;
        self.origin += offset.x;
        self.x_advance += offset.x;
        self.baseline += offset.y;
        self.ascender += offset.y;
        self.descender += offset.y;
    }

    pub(crate) fn collapse(&mut self) {
        self.bottom_left = Point::ZERO;
        self.top_left = Point::ZERO;
        self.top_right = Point::ZERO;
        self.bottom_right = Point::ZERO;
        self.is_visible = false;
    }

    pub(crate) fn pack_scale(&mut self, scale_factor: f64) {
        let scale = self.scale * scale_factor.abs();
        self.packed_scale = if self.synthetic_bold { -scale } else { scale };
    }
}
