// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `create_spans` front door.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;

use crate::{
    build_span, scan, segment, BaseStyle, Error, Link, LinkId, LinkTable, ParseError, TextSpan,
};

/// Options for [`create_spans`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkupSettings {
    /// Color forced onto `<a href>` text.
    pub hyperlink_color: Color,
    /// When `false`, markup is taken as plain text and no tags are recognized.
    pub parse_markup: bool,
}

impl MarkupSettings {
    /// Sets the hyperlink color.
    pub fn with_hyperlink_color(mut self, color: Color) -> Self {
        self.hyperlink_color = color;
        self
    }

    /// Enables or disables tag recognition.
    pub fn with_parse_markup(mut self, parse_markup: bool) -> Self {
        self.parse_markup = parse_markup;
        self
    }
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            hyperlink_color: Color::from_rgb8(0x00, 0x00, 0xee),
            parse_markup: true,
        }
    }
}

/// The result of [`create_spans`].
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupText {
    /// The markup with every recognized tag removed.
    pub text: String,
    /// Styled spans covering `text` contiguously, in order.
    pub spans: Vec<TextSpan>,
    /// Distinct link targets, indexed by [`LinkId::index`].
    pub links: Vec<Link>,
    /// Advisory problems found in the markup.
    pub errors: Vec<ParseError>,
}

impl MarkupText {
    /// Returns the span at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange) if `index >= spans.len()`.
    pub fn span(&self, index: usize) -> Result<&TextSpan, Error> {
        self.spans
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.spans.len()))
    }

    /// Returns the span covering the plain text byte `offset`, if any.
    pub fn span_at(&self, offset: usize) -> Option<&TextSpan> {
        let ix = self
            .spans
            .partition_point(|span| span.range.end <= offset);
        self.spans.get(ix).filter(|span| span.range.contains(&offset))
    }

    /// Looks up a link target.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.index())
    }
}

/// Parses `markup` into plain text and styled spans.
///
/// Every span starts from `base`; tags are folded in by [`build_span`]. The returned spans cover
/// the plain text contiguously. Malformed markup is recorded in [`MarkupText::errors`] and left in
/// the text verbatim.
///
/// # Errors
///
/// Only contract violations inside the pipeline surface as [`Error`]; they cannot be triggered
/// by markup content.
pub fn create_spans(
    markup: &str,
    base: &BaseStyle,
    settings: &MarkupSettings,
) -> Result<MarkupText, Error> {
    if !settings.parse_markup {
        return Ok(MarkupText {
            text: String::from(markup),
            spans: vec![TextSpan::from_base(0..markup.len(), base)],
            links: Vec::new(),
            errors: Vec::new(),
        });
    }

    let (tags, errors) = scan(markup);
    let segments = segment(markup.len(), &tags);

    let mut text = String::with_capacity(markup.len());
    let mut links = LinkTable::new();
    let mut spans = Vec::with_capacity(segments.len());
    for segment in &segments {
        text.push_str(&markup[segment.source.clone()]);
        let span = build_span(segment, &tags, base, &mut links, settings)?;
        log::trace!(
            "span {:?} styles {:?} link {:?}",
            span.range,
            span.styles,
            span.link
        );
        spans.push(span);
    }

    Ok(MarkupText {
        text,
        spans,
        links: links.into_links(),
        errors,
    })
}
