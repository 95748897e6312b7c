// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use peniko::kurbo::{Point, Rect};
use rich_layout::{
    BlockMetrics, CharacterPlacement, HighlightState, LayoutSettings, LineInfo, ShapedText,
    Shaper, TextDirection, WrapMode,
};
use rich_markup::{FontStyles, TextSpan};

/// A shaper where every character is one fixed-width cell.
///
/// Glyph quads are inset by one unit on each side and span `baseline - 2 ..= baseline + 7`.
/// Lines break after `\n` and, when the wrap mode allows it, after the last space that fits.
/// Spaces hang past the line width instead of wrapping.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MonospaceShaper {
    pub(crate) advance: f64,
    pub(crate) line_height: f64,
}

impl Default for MonospaceShaper {
    fn default() -> Self {
        Self {
            advance: 10.0,
            line_height: 10.0,
        }
    }
}

pub(crate) const ASCENDER: f64 = 8.0;
pub(crate) const DESCENDER: f64 = -2.0;
pub(crate) const CAP_HEIGHT: f64 = 7.0;

impl MonospaceShaper {
    fn break_lines(&self, chars: &[char], settings: &LayoutSettings) -> Vec<Range<usize>> {
        let wraps = matches!(
            settings.wrap_mode,
            WrapMode::Normal | WrapMode::PreserveWhitespace
        );
        let max_columns = ((settings.content_width() / self.advance) as usize).max(1);

        let mut lines = Vec::new();
        let mut start = 0;
        let mut last_space = None;
        let mut ix = 0;
        while ix < chars.len() {
            match chars[ix] {
                '\n' => {
                    lines.push(start..ix + 1);
                    start = ix + 1;
                    last_space = None;
                }
                ' ' => last_space = Some(ix),
                _ if wraps && ix - start >= max_columns => {
                    let end = match last_space {
                        Some(space) => space + 1,
                        None => ix,
                    };
                    lines.push(start..end);
                    start = end;
                    last_space = None;
                    continue;
                }
                _ => {}
            }
            ix += 1;
        }
        if start < chars.len() {
            lines.push(start..chars.len());
        }
        lines
    }
}

fn span_for(spans: &[TextSpan], offset: usize) -> Option<&TextSpan> {
    let ix = spans.partition_point(|span| span.range.end <= offset);
    spans.get(ix)
}

impl Shaper for MonospaceShaper {
    fn shape(&mut self, text: &str, spans: &[TextSpan], settings: &LayoutSettings) -> ShapedText {
        let offsets: Vec<(usize, char)> = text.char_indices().collect();
        let chars: Vec<char> = offsets.iter().map(|&(_, ch)| ch).collect();
        let sign = match settings.direction {
            TextDirection::Ltr => 1.0,
            TextDirection::Rtl => -1.0,
        };

        let mut placements = Vec::with_capacity(chars.len());
        let mut lines = Vec::new();
        let mut mesh: Option<Rect> = None;
        for (line_number, range) in self.break_lines(&chars, settings).into_iter().enumerate() {
            let baseline = -self.line_height * line_number as f64;
            for (column, ix) in range.clone().enumerate() {
                let (offset, character) = offsets[ix];
                let span = span_for(spans, offset).expect("spans cover the text");
                let origin = sign * self.advance * column as f64;
                let x_advance = sign * self.advance * (column + 1) as f64;
                let (left, right) = (origin.min(x_advance) + 1.0, origin.max(x_advance) - 1.0);
                let is_visible = !character.is_whitespace();
                let placement = CharacterPlacement {
                    character,
                    font: span.font,
                    styles: span.styles,
                    point_size: f64::from(span.font_size),
                    scale: 1.0,
                    synthetic_bold: span.styles.contains(FontStyles::BOLD),
                    bottom_left: Point::new(left, baseline + DESCENDER),
                    top_left: Point::new(left, baseline + CAP_HEIGHT),
                    top_right: Point::new(right, baseline + CAP_HEIGHT),
                    bottom_right: Point::new(right, baseline + DESCENDER),
                    origin,
                    x_advance,
                    ascender: baseline + ASCENDER,
                    baseline,
                    descender: baseline + DESCENDER,
                    color: span.color,
                    underline_color: span.color,
                    strikethrough_color: span.color,
                    highlight: HighlightState::new(span.highlight_color),
                    underline_offset: -1.0,
                    underline_thickness: 1.0,
                    strikethrough_offset: 3.0,
                    is_visible,
                    line_number,
                    packed_scale: 0.0,
                };
                if is_visible {
                    let quad = Rect::from_points(placement.bottom_left, placement.top_right);
                    mesh = Some(mesh.map_or(quad, |mesh| mesh.union(quad)));
                }
                placements.push(placement);
            }
            lines.push(
                LineInfo::measure(&placements, range.start, range.end - 1, baseline).with_width(
                    settings.content_width(),
                    0.0,
                    0.0,
                ),
            );
        }

        let depth = self.line_height * lines.len().saturating_sub(1) as f64;
        ShapedText {
            placements,
            lines,
            metrics: BlockMetrics {
                max_ascender: ASCENDER,
                max_descender: DESCENDER - depth,
                cap_height: CAP_HEIGHT,
                mesh_extents: mesh.unwrap_or(Rect::ZERO),
            },
        }
    }
}
