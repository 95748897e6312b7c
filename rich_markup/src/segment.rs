// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segmentation of markup into runs sharing one active tag set.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{ActiveTags, NestingResolver, Tag};

/// A maximal run of text between tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Byte range of the run in the markup.
    pub source: Range<usize>,
    /// Byte range of the run in the plain text (markup with tags removed).
    pub text: Range<usize>,
    /// Tags active over the run, as indices into the tag list.
    pub active: ActiveTags,
}

/// Splits markup of `markup_len` bytes into text segments around `tags`.
///
/// The text before the first tag, between consecutive tags and after the last tag each form a
/// segment unless empty. Markup without tags yields exactly one segment covering all of it.
pub fn segment(markup_len: usize, tags: &[Tag]) -> Vec<Segment> {
    if tags.is_empty() {
        return vec![Segment {
            source: 0..markup_len,
            text: 0..markup_len,
            active: ActiveTags::new(),
        }];
    }

    let mut resolver = NestingResolver::new(tags);
    let mut segments = Vec::with_capacity(tags.len() + 1);
    let mut text_len = 0;
    let mut push = |source: Range<usize>| {
        resolver.advance_to(source.start);
        let len = source.len();
        segments.push(Segment {
            source,
            text: text_len..text_len + len,
            active: resolver.active(),
        });
        text_len += len;
    };

    let mut cursor = 0;
    for tag in tags {
        if tag.start > cursor {
            push(cursor..tag.start);
        }
        cursor = tag.end + 1;
    }
    if cursor < markup_len {
        push(cursor..markup_len);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::segment;
    use crate::scan;

    #[test]
    fn no_tags_is_one_segment() {
        let segments = segment(5, &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].source, 0..5);
        assert!(segments[0].active.is_empty());
    }

    #[test]
    fn adjacent_tags_produce_no_empty_segment() {
        let markup = "<b><i>x</i></b>";
        let (tags, _) = scan(markup);
        let segments = segment(markup.len(), &tags);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].source, 6..7);
        assert_eq!(segments[0].text, 0..1);
        assert_eq!(segments[0].active.as_slice(), &[0, 1]);
    }

    #[test]
    fn leading_and_trailing_text() {
        let markup = "ab<u>cd</u>ef";
        let (tags, _) = scan(markup);
        let segments = segment(markup.len(), &tags);
        let texts: alloc::vec::Vec<_> = segments.iter().map(|s| s.text.clone()).collect();
        assert_eq!(texts, [0..2, 2..4, 4..6]);
        assert!(segments[0].active.is_empty());
        assert_eq!(segments[1].active.as_slice(), &[0]);
        assert!(segments[2].active.is_empty());
    }

    #[test]
    fn unknown_markup_stays_in_segments() {
        let markup = "<foo>x";
        let (tags, _) = scan(markup);
        let segments = segment(markup.len(), &tags);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].source, 0..6);
    }
}
