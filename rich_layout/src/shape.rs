// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use rich_markup::{create_spans, BaseStyle, MarkupSettings, MarkupText, TextSpan};

use crate::{
    layout_pass, BlockMetrics, CharacterPlacement, GenerateError, LayoutSettings, LayoutSummary,
    LineInfo,
};

/// Shaped text ready for [`layout_pass`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedText {
    /// One placement per character of the plain text, in document order.
    pub placements: Vec<CharacterPlacement>,
    /// Line geometry, indexed by [`CharacterPlacement::line_number`].
    pub lines: Vec<LineInfo>,
    /// Block metrics used for vertical alignment.
    pub metrics: BlockMetrics,
}

/// Glyph shaping, bidi resolution and line breaking.
///
/// Implementations place every character of `text` relative to the block origin, carry each
/// span's style bits and colors onto its characters and break lines to fit
/// [`LayoutSettings::content_width`].
pub trait Shaper {
    /// Shapes `text` styled by `spans`.
    fn shape(&mut self, text: &str, spans: &[TextSpan], settings: &LayoutSettings) -> ShapedText;
}

/// Everything produced by [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedText {
    /// Plain text, spans, links and advisory errors.
    pub markup: MarkupText,
    /// Placements and lines after the layout pass.
    pub shaped: ShapedText,
    /// Decorations and counts.
    pub summary: LayoutSummary,
}

/// Parses `markup`, shapes it with `shaper` and runs the layout pass.
///
/// # Errors
///
/// Returns [`GenerateError::Layout`] if the shaper's output breaks the layout pass
/// preconditions, and [`GenerateError::Markup`] if the markup pipeline breaks its own.
pub fn generate<S: Shaper + ?Sized>(
    markup: &str,
    base: &BaseStyle,
    markup_settings: &MarkupSettings,
    shaper: &mut S,
    settings: &LayoutSettings,
) -> Result<GeneratedText, GenerateError> {
    let markup = create_spans(markup, base, markup_settings)?;
    let mut shaped = shaper.shape(&markup.text, &markup.spans, settings);
    let summary = layout_pass(
        &mut shaped.placements,
        &mut shaped.lines,
        &shaped.metrics,
        settings,
    )?;
    log::trace!(
        "generated {} characters on {} lines with {} decorations",
        summary.character_count,
        summary.line_count,
        summary.decorations.len()
    );
    Ok(GeneratedText {
        markup,
        shaped,
        summary,
    })
}
