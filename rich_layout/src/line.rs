// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Rect;

use crate::classify::is_control;
use crate::CharacterPlacement;

/// Geometry of one line, read by the layout pass and corrected in place.
///
/// Character indices are inclusive and index into the placement array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineInfo {
    /// Index of the first character.
    pub first: usize,
    /// Index of the last character, including trailing whitespace and line breaks.
    pub last: usize,
    /// Index of the first character with a drawn glyph.
    pub first_visible: usize,
    /// Index of the last character with a drawn glyph.
    pub last_visible: usize,
    /// Number of characters on the line.
    pub character_count: usize,
    /// Number of characters with a drawn glyph.
    pub visible_character_count: usize,
    /// Number of control characters.
    pub control_character_count: usize,
    /// Number of completed words ending on the line. Written by the layout pass.
    pub word_count: usize,
    /// Width available to the line.
    pub width: f64,
    /// Natural advance of the line, up to its last visible character.
    pub max_advance: f64,
    /// Left margin.
    pub margin_left: f64,
    /// Right margin.
    pub margin_right: f64,
    /// Ascender line.
    pub ascender: f64,
    /// Baseline.
    pub baseline: f64,
    /// Descender line.
    pub descender: f64,
    /// Bounds of the line's shown glyphs.
    pub line_extents: Rect,
}

impl LineInfo {
    /// Measures the characters `first..=last` of `placements` as one line.
    ///
    /// Visible indices fall back to `first` when the line has no drawn glyph.
    ///
    /// # Panics
    ///
    /// If `last` is out of bounds or `first > last`.
    pub fn measure(
        placements: &[CharacterPlacement],
        first: usize,
        last: usize,
        baseline: f64,
    ) -> Self {
        let chars = &placements[first..=last];
        let first_visible = chars
            .iter()
            .position(|p| p.is_visible)
            .map_or(first, |ix| first + ix);
        let last_visible = chars
            .iter()
            .rposition(|p| p.is_visible)
            .map_or(first, |ix| first + ix);

        let ascender = chars
            .iter()
            .map(|p| p.ascender)
            .fold(f64::NEG_INFINITY, f64::max);
        let descender = chars
            .iter()
            .map(|p| p.descender)
            .fold(f64::INFINITY, f64::min);
        let start = placements[first].origin;
        let end = placements[last_visible].x_advance;
        let line_extents = Rect::new(
            placements[first].bottom_left.x.min(placements[last_visible].top_right.x),
            descender,
            placements[first].bottom_left.x.max(placements[last_visible].top_right.x),
            ascender,
        );

        Self {
            first,
            last,
            first_visible,
            last_visible,
            character_count: chars.len(),
            visible_character_count: chars.iter().filter(|p| p.is_visible).count(),
            control_character_count: chars.iter().filter(|p| is_control(p.character)).count(),
            word_count: 0,
            width: 0.0,
            max_advance: (end - start).abs(),
            margin_left: 0.0,
            margin_right: 0.0,
            ascender,
            baseline,
            descender,
            line_extents,
        }
    }

    /// Sets the available width and the margins.
    pub fn with_width(mut self, width: f64, margin_left: f64, margin_right: f64) -> Self {
        self.width = width;
        self.margin_left = margin_left;
        self.margin_right = margin_right;
        self
    }

    /// The line's last character is a control character such as a hard break.
    pub(crate) fn ends_in_control(&self, placements: &[CharacterPlacement]) -> bool {
        is_control(placements[self.last].character)
    }
}

/// A word found by the layout pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordInfo {
    /// Index of the first character.
    pub first: usize,
    /// Index of the last character, inclusive.
    pub last: usize,
    /// Number of characters.
    pub count: usize,
}

impl WordInfo {
    pub(crate) fn new(first: usize, last: usize) -> Self {
        Self {
            first,
            last,
            count: last - first + 1,
        }
    }
}
