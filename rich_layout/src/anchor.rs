// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Vec2;

use crate::{BlockMetrics, LayoutSettings, VerticalAlignment};

/// Computes the block anchor: where the first line's origin lands in the layout rectangle.
///
/// The x component is the left edge of the content area. Horizontal alignment is applied per
/// line on top of it.
pub(crate) fn anchor(metrics: &BlockMetrics, settings: &LayoutSettings) -> Vec2 {
    let rect = settings.rect;
    let m = settings.margins;
    let (top, bottom) = (m.y0, m.y1);
    let mid_y = (rect.y0 + rect.y1) * 0.5;

    let y = match settings.alignment.vertical {
        VerticalAlignment::Top => rect.y1 - metrics.max_ascender - top,
        VerticalAlignment::Middle => {
            mid_y - (metrics.max_ascender + top + metrics.max_descender - bottom) * 0.5
        }
        VerticalAlignment::Bottom => rect.y0 - metrics.max_descender + bottom,
        VerticalAlignment::Baseline => mid_y,
        VerticalAlignment::Midline => {
            let extents = metrics.mesh_extents;
            mid_y - (extents.y1 + top + extents.y0 - bottom) * 0.5
        }
        VerticalAlignment::Capline => mid_y - (metrics.cap_height - top - bottom) * 0.5,
    };
    Vec2::new(rect.x0 + m.x0, y)
}
