// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::classify::{justify_class, JustifyClass};
use crate::{CharacterPlacement, HorizontalAlignment, LayoutSettings, LineInfo};

/// Horizontal offsets for the characters of one line.
///
/// Created when the pass enters a line; [`offset`](Self::offset) is then queried once per
/// character in order.
#[derive(Clone, Debug)]
pub(crate) struct LineJustifier {
    start: f64,
    accumulated: f64,
    separator_step: f64,
    other_step: f64,
    first_visible: usize,
    last_visible: usize,
}

impl LineJustifier {
    pub(crate) fn new(
        line: &LineInfo,
        is_last_line: bool,
        placements: &[CharacterPlacement],
        settings: &LayoutSettings,
    ) -> Self {
        let rtl = settings.direction.is_rtl();
        let ml = line.margin_left;
        let width = line.width;
        let advance = line.max_advance;
        let mut justifier = Self {
            start: ml,
            accumulated: 0.0,
            separator_step: 0.0,
            other_step: 0.0,
            first_visible: line.first_visible,
            last_visible: line.last_visible,
        };

        justifier.start = match (settings.alignment.horizontal, rtl) {
            (HorizontalAlignment::Left, false) => ml,
            (HorizontalAlignment::Left, true) => ml + advance,
            (HorizontalAlignment::Right, false) => ml + width - advance,
            (HorizontalAlignment::Right, true) => ml + width,
            (HorizontalAlignment::Center, false) => ml + width * 0.5 - advance * 0.5,
            (HorizontalAlignment::Center, true) => ml + width * 0.5 + advance * 0.5,
            (HorizontalAlignment::Geometry, _) => {
                let extents = line.line_extents;
                ml + width * 0.5 - (extents.x0 + extents.x1) * 0.5
            }
            (alignment @ (HorizontalAlignment::Justified | HorizontalAlignment::Flush), _) => {
                let exempt = alignment == HorizontalAlignment::Justified
                    && (is_last_line || line.ends_in_control(placements))
                    && advance <= width;
                if !exempt {
                    justifier.distribute(width - advance, placements, settings);
                }
                if rtl {
                    ml + width
                } else {
                    ml
                }
            }
        };
        justifier
    }

    fn distribute(&mut self, gap: f64, placements: &[CharacterPlacement], settings: &LayoutSettings) {
        if self.last_visible <= self.first_visible {
            return;
        }
        let (mut separators, mut others) = (0_usize, 0_usize);
        for placement in &placements[self.first_visible + 1..=self.last_visible] {
            match justify_class(placement.character) {
                JustifyClass::Separator => separators += 1,
                JustifyClass::Other => others += 1,
                JustifyClass::Skip => {}
            }
        }
        let ratio = if separators == 0 {
            1.0
        } else if others == 0 {
            0.0
        } else {
            settings.wrapping_ratio
        };
        let gap = if settings.direction.is_rtl() { -gap } else { gap };
        if separators > 0 {
            self.separator_step = gap * (1.0 - ratio) / separators as f64;
        }
        if others > 0 {
            self.other_step = gap * ratio / others as f64;
        }
        log::trace!(
            "justify {separators} separators by {}, {others} others by {}",
            self.separator_step,
            self.other_step
        );
    }

    /// Returns the horizontal offset for the character at `index`.
    pub(crate) fn offset(&mut self, index: usize, ch: char) -> f64 {
        if index > self.first_visible && index <= self.last_visible {
            self.accumulated += match justify_class(ch) {
                JustifyClass::Separator => self.separator_step,
                JustifyClass::Other => self.other_step,
                JustifyClass::Skip => 0.0,
            };
        }
        self.start + self.accumulated
    }

    /// Total slack applied so far.
    #[cfg(test)]
    pub(crate) fn accumulated(&self) -> f64 {
        self.accumulated
    }
}
