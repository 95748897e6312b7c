// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;
use peniko::kurbo::{Point, Rect, Vec2};

use crate::anchor::anchor;
use crate::decoration::{Cursor, Decorator};
use crate::justify::LineJustifier;
use crate::words::WordTracker;
use crate::{
    BlockMetrics, CharacterPlacement, Decoration, LayoutError, LayoutSettings, LineInfo, WordInfo,
};

/// Output of [`layout_pass`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSummary {
    /// Decoration runs in the order they closed.
    pub decorations: Vec<Decoration>,
    /// Words in document order.
    pub words: Vec<WordInfo>,
    /// One past the line number of the last character, so lines without characters in between
    /// are counted too.
    pub line_count: usize,
    /// Number of words, culled ones included.
    pub word_count: usize,
    /// Number of characters, culled ones included.
    pub character_count: usize,
    /// Number of drawn glyphs that survived the visibility limits.
    pub visible_character_count: usize,
    /// Bounds of all drawn glyph quads after alignment.
    pub mesh_extents: Rect,
}

/// Aligns, justifies, truncates and decorates shaped text in place.
///
/// `placements` must be in document order with non-decreasing line numbers, each indexing into
/// `lines`. Each character is moved by the rounded sum of the block anchor and its line's
/// justification offset. Characters past the [visibility limits](crate::VisibilityLimits) are
/// collapsed but still counted. Line metrics are corrected to the final positions.
///
/// # Errors
///
/// Returns a [`LayoutError`] without modifying anything if a precondition does not hold.
pub fn layout_pass(
    placements: &mut [CharacterPlacement],
    lines: &mut [LineInfo],
    metrics: &BlockMetrics,
    settings: &LayoutSettings,
) -> Result<LayoutSummary, LayoutError> {
    validate(placements, lines).inspect_err(|err| log::debug!("layout rejected: {err}"))?;

    let mut summary = LayoutSummary {
        character_count: placements.len(),
        line_count: placements.last().map_or(0, |p| p.line_number + 1),
        ..Default::default()
    };
    if placements.is_empty() {
        return Ok(summary);
    }

    let anchor = anchor(metrics, settings);
    let y_offset = anchor.y.round();
    let limits = settings.visibility;

    let mut mesh: Option<Rect> = None;
    let mut first_culled: Option<usize> = None;
    let mut words = WordTracker::default();
    let mut decorator = Decorator::default();
    let mut current_line = placements[0].line_number;
    let mut justifier = LineJustifier::new(
        &lines[current_line],
        current_line + 1 == summary.line_count,
        placements,
        settings,
    );

    for index in 0..placements.len() {
        let line_number = placements[index].line_number;
        if line_number != current_line {
            finish_line(
                &mut lines[current_line],
                placements,
                first_culled,
                settings,
                y_offset,
            );
            current_line = line_number;
            justifier = LineJustifier::new(
                &lines[current_line],
                current_line + 1 == summary.line_count,
                placements,
                settings,
            );
        }

        let x = justifier.offset(index, placements[index].character);
        let offset = Vec2::new((anchor.x + x).round(), y_offset);
        let placement = &mut placements[index];
        placement.translate(offset);
        placement.pack_scale(settings.scale_factor);

        let shown = first_culled.is_none() && !limits.culls(index, words.completed(), line_number);
        if !shown {
            if first_culled.is_none() {
                log::trace!("culling from character {index}");
                first_culled = Some(index);
            }
            placement.collapse();
        } else if placement.is_visible {
            summary.visible_character_count += 1;
            let quad = Rect::from_points(placement.bottom_left, placement.top_right);
            mesh = Some(mesh.map_or(quad, |mesh| mesh.union(quad)));
        }

        if let Some(word) = words.step(placements, index) {
            lines[placements[word.last].line_number].word_count += 1;
            summary.words.push(word);
        }

        let cursor = Cursor {
            placements: &*placements,
            index,
            line: &lines[current_line],
            shown,
            y_offset,
            vertex_padding: settings.vertex_padding,
        };
        decorator.step(&cursor, &mut summary.decorations);
    }
    finish_line(
        &mut lines[current_line],
        placements,
        first_culled,
        settings,
        y_offset,
    );

    summary.word_count = words.completed();
    summary.mesh_extents = mesh.unwrap_or(Rect::ZERO);
    Ok(summary)
}

fn validate(placements: &[CharacterPlacement], lines: &[LineInfo]) -> Result<(), LayoutError> {
    let mut previous = 0;
    for (index, placement) in placements.iter().enumerate() {
        let line = placement.line_number;
        if line >= lines.len() {
            return Err(LayoutError::line_number_out_of_range(
                index,
                line,
                lines.len(),
            ));
        }
        if line < previous {
            return Err(LayoutError::line_number_decreasing(index, line, previous));
        }
        previous = line;
    }

    let used = placements.last().map_or(0, |p| p.line_number + 1);
    for (ix, line) in lines[..used].iter().enumerate() {
        let within = |i: usize| (line.first..=line.last).contains(&i);
        if line.first > line.last
            || line.last >= placements.len()
            || !within(line.first_visible)
            || !within(line.last_visible)
        {
            return Err(LayoutError::line_index_out_of_bounds(ix, placements.len()));
        }
    }
    for (index, placement) in placements.iter().enumerate() {
        let line = &lines[placement.line_number];
        if index < line.first || index > line.last {
            return Err(LayoutError::line_index_out_of_bounds(
                placement.line_number,
                placements.len(),
            ));
        }
    }
    Ok(())
}

/// Moves line metrics to the final character positions and re-derives the advance and
/// extents from the characters that are still shown.
fn finish_line(
    line: &mut LineInfo,
    placements: &[CharacterPlacement],
    first_culled: Option<usize>,
    settings: &LayoutSettings,
    y_offset: f64,
) {
    line.baseline += y_offset;
    line.ascender += y_offset;
    line.descender += y_offset;

    let end = if settings.wrap_mode.preserves_whitespace() {
        line.last
    } else {
        line.last_visible
    };
    let end = match first_culled {
        Some(culled) if culled <= line.first => None,
        Some(culled) if culled <= end => Some(culled - 1),
        _ => Some(end),
    };

    let Some(end) = end else {
        let x = placements[line.first].origin;
        line.max_advance = 0.0;
        line.line_extents = Rect::new(x, line.descender, x, line.ascender);
        return;
    };

    let mut x0 = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    for placement in &placements[line.first..=end] {
        let (left, right) = if placement.is_visible {
            (placement.bottom_left.x, placement.top_right.x)
        } else {
            (
                placement.origin.min(placement.x_advance),
                placement.origin.max(placement.x_advance),
            )
        };
        x0 = x0.min(left);
        x1 = x1.max(right);
    }
    line.max_advance = (placements[end].x_advance - placements[line.first].origin).abs();
    line.line_extents = Rect::from_points(
        Point::new(x0, line.descender),
        Point::new(x1, line.ascender),
    );
}
