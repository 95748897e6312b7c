// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod shaper;

pub(crate) use shaper::MonospaceShaper;

use peniko::kurbo::Rect;
use rich_layout::{
    generate, Decoration, DecorationKind, GeneratedText, HorizontalAlignment, LayoutSettings,
    TextAlignment, VerticalAlignment,
};
use rich_markup::{BaseStyle, MarkupSettings};

/// Top aligned settings over a 100 by 100 rectangle at the origin.
pub(crate) fn settings(horizontal: HorizontalAlignment) -> LayoutSettings {
    LayoutSettings::default()
        .with_rect(Rect::new(0.0, 0.0, 100.0, 100.0))
        .with_alignment(TextAlignment::new(horizontal, VerticalAlignment::Top))
}

/// Runs the whole pipeline with the default base style and a [`MonospaceShaper`].
pub(crate) fn generate_text(markup: &str, settings: &LayoutSettings) -> GeneratedText {
    generate(
        markup,
        &BaseStyle::default(),
        &MarkupSettings::default(),
        &mut MonospaceShaper::default(),
        settings,
    )
    .expect("the monospace shaper satisfies the layout preconditions")
}

/// Decorations of one kind, in emission order.
pub(crate) fn decorations(text: &GeneratedText, kind: DecorationKind) -> Vec<Decoration> {
    text.summary
        .decorations
        .iter()
        .filter(|d| d.kind == kind)
        .copied()
        .collect()
}

/// The plain text of each line.
pub(crate) fn line_texts(text: &GeneratedText) -> Vec<String> {
    text.shaped
        .lines
        .iter()
        .map(|line| {
            text.shaped.placements[line.first..=line.last]
                .iter()
                .map(|p| p.character)
                .collect()
        })
        .collect()
}
