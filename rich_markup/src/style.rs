// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base style and font vocabulary.

use core::fmt;

use peniko::Color;

bitflags::bitflags! {
    /// Style bits carried by a [`TextSpan`](crate::TextSpan) and, after shaping, by each
    /// character placement.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyles: u16 {
        /// Bold face, real or synthesized.
        const BOLD = 1 << 0;
        /// Italic face.
        const ITALIC = 1 << 1;
        /// Draw an underline under the run.
        const UNDERLINE = 1 << 2;
        /// Draw a line through the run.
        const STRIKETHROUGH = 1 << 3;
        /// Lowered, reduced size glyphs.
        const SUBSCRIPT = 1 << 4;
        /// Raised, reduced size glyphs.
        const SUPERSCRIPT = 1 << 5;
        /// Render characters upper cased.
        const UPPERCASE = 1 << 6;
        /// Render characters lower cased.
        const LOWERCASE = 1 << 7;
        /// Draw a highlight box behind the run.
        const HIGHLIGHT = 1 << 8;
    }
}

/// Opaque reference to a font asset owned by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(pub u32);

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The style every span starts from before tags are applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseStyle {
    /// Font asset.
    pub font: FontId,
    /// Point size.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Font weight.
    pub weight: FontWeight,
    /// Highlight color used by `<mark>` without a value.
    pub highlight_color: Color,
}

impl BaseStyle {
    /// Sets the font asset.
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    /// Sets the point size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the default highlight color.
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }
}

impl Default for BaseStyle {
    fn default() -> Self {
        Self {
            font: FontId::default(),
            font_size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::NORMAL,
            highlight_color: Color::from_rgba8(0xff, 0xff, 0x00, 0x40),
        }
    }
}
