// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Insets, Rect};

/// Horizontal placement of each line within the layout rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Lines start at the left margin.
    #[default]
    Left,
    /// Lines are centered on their advance.
    Center,
    /// Lines end at the right margin.
    Right,
    /// Slack is distributed across the line, except on the last line of the block and on lines
    /// ending in a control character.
    Justified,
    /// Slack is distributed across every line, including the last one.
    Flush,
    /// Lines are centered on the extents of their glyph geometry rather than their advance.
    Geometry,
}

/// Vertical placement of the block within the layout rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The first line's ascender touches the top margin.
    #[default]
    Top,
    /// The block's ascender to descender span is centered.
    Middle,
    /// The last line's descender touches the bottom margin.
    Bottom,
    /// The first baseline sits at the vertical center of the rectangle.
    Baseline,
    /// The block's mesh extents are centered.
    Midline,
    /// The cap height of the first line is centered.
    Capline,
}

/// Horizontal and vertical alignment of a text block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextAlignment {
    /// How lines are placed horizontally.
    pub horizontal: HorizontalAlignment,
    /// How the block is placed vertically.
    pub vertical: VerticalAlignment,
}

impl TextAlignment {
    /// Creates an alignment from its two axes.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Resolved base direction of the text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left. Placements advance towards negative x from the line start.
    Rtl,
}

impl TextDirection {
    pub(crate) fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Line wrapping and whitespace handling mode used by the shaper.
///
/// The layout pass only looks at whether whitespace is preserved: in the preserving modes the
/// trailing whitespace of a line contributes to its extents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// No wrapping.
    NoWrap,
    /// Wrap at word boundaries, collapsing trailing whitespace.
    #[default]
    Normal,
    /// Wrap at word boundaries, keeping whitespace.
    PreserveWhitespace,
    /// Keep whitespace and never wrap.
    PreserveWhitespaceNoWrap,
}

impl WrapMode {
    /// Returns `true` if trailing whitespace is kept in line metrics.
    pub fn preserves_whitespace(self) -> bool {
        matches!(
            self,
            Self::PreserveWhitespace | Self::PreserveWhitespaceNoWrap
        )
    }
}

/// Truncation limits. Characters beyond any limit are culled: their quad collapses to the
/// origin and they are marked invisible, but they are still counted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisibilityLimits {
    /// Maximum number of characters shown.
    pub max_characters: usize,
    /// Maximum number of completed words shown.
    pub max_words: usize,
    /// Maximum number of lines shown.
    pub max_lines: usize,
}

impl VisibilityLimits {
    /// No truncation.
    pub const UNLIMITED: Self = Self {
        max_characters: usize::MAX,
        max_words: usize::MAX,
        max_lines: usize::MAX,
    };

    /// Sets the character limit.
    pub fn with_max_characters(mut self, max_characters: usize) -> Self {
        self.max_characters = max_characters;
        self
    }

    /// Sets the word limit.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Sets the line limit.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub(crate) fn culls(&self, index: usize, completed_words: usize, line: usize) -> bool {
        index >= self.max_characters
            || completed_words >= self.max_words
            || line >= self.max_lines
    }
}

impl Default for VisibilityLimits {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

/// Options for [`layout_pass`](crate::layout_pass).
///
/// Coordinates are y-up: `rect.y1` is the top edge of the layout rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutSettings {
    /// Block alignment.
    pub alignment: TextAlignment,
    /// Base direction.
    pub direction: TextDirection,
    /// Wrapping mode the placements were shaped with.
    pub wrap_mode: WrapMode,
    /// Share of justification slack given to non-separator characters, in `0.0..=1.0`.
    pub wrapping_ratio: f64,
    /// Truncation limits.
    pub visibility: VisibilityLimits,
    /// Extra padding around each glyph quad, in font units before scaling.
    pub vertex_padding: f64,
    /// Scale applied on top of each character's own scale when packing UVs.
    pub scale_factor: f64,
    /// The layout rectangle.
    pub rect: Rect,
    /// Margins inside `rect`: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub margins: Insets,
}

impl LayoutSettings {
    /// Sets the alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the base direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the wrap mode.
    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    /// Sets the wrapping ratio.
    pub fn with_wrapping_ratio(mut self, ratio: f64) -> Self {
        self.wrapping_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the truncation limits.
    pub fn with_visibility(mut self, visibility: VisibilityLimits) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the layout rectangle.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Sets the vertex padding.
    pub fn with_vertex_padding(mut self, padding: f64) -> Self {
        self.vertex_padding = padding;
        self
    }

    /// Width available to lines between the margins.
    pub fn content_width(&self) -> f64 {
        self.rect.width() - self.margins.x0 - self.margins.x1
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            alignment: TextAlignment::default(),
            direction: TextDirection::Ltr,
            wrap_mode: WrapMode::Normal,
            wrapping_ratio: 0.4,
            visibility: VisibilityLimits::UNLIMITED,
            vertex_padding: 0.0,
            scale_factor: 1.0,
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            margins: Insets::ZERO,
        }
    }
}

/// Block-level metrics produced by the shaper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlockMetrics {
    /// Ascender of the first line, relative to the first baseline.
    pub max_ascender: f64,
    /// Descender of the last line, relative to the first baseline. Usually negative.
    pub max_descender: f64,
    /// Cap height of the first line.
    pub cap_height: f64,
    /// Bounds of all glyph quads before alignment.
    pub mesh_extents: Rect,
}
