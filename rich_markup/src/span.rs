// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style spans and link deduplication.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashMap;
use peniko::Color;
use smallvec::SmallVec;

use crate::{
    BaseStyle, Error, FontId, FontStyles, FontWeight, MarkupSettings, Segment, Tag, TagKind,
    TagValue, TagValueType,
};

/// A resolved style record for a contiguous range of plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// Byte range in the plain text.
    pub range: Range<usize>,
    /// Font asset.
    pub font: FontId,
    /// Point size.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Style bits.
    pub styles: FontStyles,
    /// Font weight.
    pub weight: FontWeight,
    /// Highlight color, meaningful when [`FontStyles::HIGHLIGHT`] is set.
    pub highlight_color: Color,
    /// The link this text belongs to, if any.
    pub link: Option<LinkId>,
}

impl TextSpan {
    /// A span over `range` carrying `base` and no tag effects.
    pub fn from_base(range: Range<usize>, base: &BaseStyle) -> Self {
        Self {
            range,
            font: base.font,
            font_size: base.font_size,
            color: base.color,
            styles: FontStyles::empty(),
            weight: base.weight,
            highlight_color: base.highlight_color,
            link: None,
        }
    }

    /// First byte of the span in the plain text.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Identifier of a deduplicated link target within one [`create_spans`](crate::create_spans)
/// call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(u32);

impl LinkId {
    /// Position of the link in [`MarkupText::links`](crate::MarkupText::links).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which tag introduced a link.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `<a href="...">`, drawn underlined in the hyperlink color.
    Hyperlink,
    /// `<link="...">`, carrying an identifier only.
    Link,
}

/// A link target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    /// The tag that introduced the link.
    pub kind: LinkKind,
    /// The unvalidated target string.
    pub target: Arc<str>,
}

/// Deduplicates links so identical `(kind, target)` pairs share one [`LinkId`].
#[derive(Clone, Debug, Default)]
pub struct LinkTable {
    links: Vec<Link>,
    ids: HashMap<(LinkKind, Arc<str>), LinkId>,
}

impl LinkTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `(kind, target)`, allocating one on first sight.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct links are interned.
    pub fn intern(&mut self, kind: LinkKind, target: &Arc<str>) -> LinkId {
        let links = &mut self.links;
        *self
            .ids
            .entry((kind, Arc::clone(target)))
            .or_insert_with(|| {
                let id = LinkId(u32::try_from(links.len()).expect("link count overflow"));
                links.push(Link {
                    kind,
                    target: Arc::clone(target),
                });
                id
            })
    }

    /// Looks up a link by id.
    pub fn get(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.index())
    }

    /// Number of distinct links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether no link has been interned.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Consumes the table, returning links in id order.
    pub fn into_links(self) -> Vec<Link> {
        self.links
    }
}

/// Builds the span for `segment` by folding its active tags over `base`.
///
/// Tags apply in a fixed order by kind, whatever their order in the markup: bold and
/// `font-weight`, then the style bits, then `color`, then hyperlinks, then links. A hyperlink
/// therefore keeps its forced color even around an inner `<color>`. Tags that have no effect
/// yet are accepted silently.
///
/// # Errors
///
/// - [`InvalidTag`](crate::ErrorKind::InvalidTag) if a `noparse` or `unknown` tag is active.
/// - [`TypeMismatch`](crate::ErrorKind::TypeMismatch) if a tag carries the wrong value variant.
/// - [`IndexOutOfRange`](crate::ErrorKind::IndexOutOfRange) if an active index is past `tags`.
pub fn build_span(
    segment: &Segment,
    tags: &[Tag],
    base: &BaseStyle,
    links: &mut LinkTable,
    settings: &MarkupSettings,
) -> Result<TextSpan, Error> {
    let mut active = segment
        .active
        .iter()
        .map(|&index| {
            tags.get(index)
                .ok_or_else(|| Error::index_out_of_range(index, tags.len()))
        })
        .collect::<Result<SmallVec<[&Tag; 8]>, _>>()?;
    active.sort_by_key(|tag| fold_rank(tag.kind));

    let mut span = TextSpan::from_base(segment.text.clone(), base);
    for tag in active {
        apply_tag(&mut span, tag, links, settings).map_err(|e| e.with_tag(tag.kind))?;
    }
    Ok(span)
}

/// Position of `kind` in the fold order of [`build_span`].
fn fold_rank(kind: TagKind) -> u8 {
    match kind {
        TagKind::Bold => 0,
        TagKind::FontWeight => 1,
        TagKind::Italic
        | TagKind::Underline
        | TagKind::Strikethrough
        | TagKind::Subscript
        | TagKind::Superscript
        | TagKind::AllCaps
        | TagKind::Uppercase
        | TagKind::SmallCaps
        | TagKind::Lowercase
        | TagKind::Mark => 2,
        TagKind::Color => 3,
        TagKind::Hyperlink => 4,
        TagKind::Link => 5,
        _ => 6,
    }
}

fn apply_tag(
    span: &mut TextSpan,
    tag: &Tag,
    links: &mut LinkTable,
    settings: &MarkupSettings,
) -> Result<(), Error> {
    match tag.kind {
        TagKind::Bold => {
            span.weight = FontWeight::BOLD;
            span.styles |= FontStyles::BOLD;
        }
        TagKind::Italic => span.styles |= FontStyles::ITALIC,
        TagKind::Underline => span.styles |= FontStyles::UNDERLINE,
        TagKind::Strikethrough => span.styles |= FontStyles::STRIKETHROUGH,
        TagKind::Subscript => span.styles |= FontStyles::SUBSCRIPT,
        TagKind::Superscript => span.styles |= FontStyles::SUPERSCRIPT,
        TagKind::AllCaps | TagKind::Uppercase => span.styles |= FontStyles::UPPERCASE,
        TagKind::SmallCaps | TagKind::Lowercase => span.styles |= FontStyles::LOWERCASE,
        TagKind::Mark => {
            span.styles |= FontStyles::HIGHLIGHT;
            if tag.value != TagValue::None {
                span.highlight_color = tag.value.as_color()?;
            }
        }
        TagKind::Color => span.color = tag.value.as_color()?,
        TagKind::Hyperlink => {
            let target = link_target(&tag.value)?;
            span.link = Some(links.intern(LinkKind::Hyperlink, &target));
            span.styles |= FontStyles::UNDERLINE;
            span.color = settings.hyperlink_color;
        }
        TagKind::Link => {
            let target = link_target(&tag.value)?;
            span.link = Some(links.intern(LinkKind::Link, &target));
        }
        TagKind::FontWeight => {
            if tag.value != TagValue::None {
                span.weight = FontWeight::new(tag.value.as_numeric()?);
            }
        }
        // Recognized, no effect on the span yet.
        TagKind::Font
        | TagKind::Style
        | TagKind::Sprite
        | TagKind::Size
        | TagKind::CharSpace
        | TagKind::LineBreak
        | TagKind::Monospace
        | TagKind::Indent
        | TagKind::LineIndent
        | TagKind::Space
        | TagKind::NoBreak
        | TagKind::Align
        | TagKind::LineHeight
        | TagKind::Alpha => {}
        TagKind::NoParse | TagKind::Unknown => return Err(Error::invalid_tag(tag.kind)),
    }
    Ok(())
}

/// A link without a value targets the empty string.
fn link_target(value: &TagValue) -> Result<Arc<str>, Error> {
    match value {
        TagValue::String(target) => Ok(Arc::clone(target)),
        TagValue::None => Ok(Arc::from("")),
        other => Err(Error::type_mismatch(TagValueType::String, other.value_type())),
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use peniko::Color;

    use super::{build_span, LinkKind, LinkTable};
    use crate::{
        ActiveTags, BaseStyle, ErrorKind, FontStyles, FontWeight, MarkupSettings, Segment, Tag,
        TagKind, TagValue,
    };

    fn tag(kind: TagKind, value: TagValue) -> Tag {
        Tag {
            kind,
            is_closing: false,
            start: 0,
            end: 0,
            value,
        }
    }

    fn segment_over(active: &[usize]) -> Segment {
        Segment {
            source: 0..1,
            text: 0..1,
            active: ActiveTags::from_slice(active),
        }
    }

    #[test]
    fn link_ids_are_deduplicated() {
        let mut links = LinkTable::new();
        let x: Arc<str> = Arc::from("x");
        let y: Arc<str> = Arc::from("y");
        let a = links.intern(LinkKind::Link, &x);
        let b = links.intern(LinkKind::Link, &Arc::from("x"));
        let c = links.intern(LinkKind::Link, &y);
        let d = links.intern(LinkKind::Hyperlink, &x);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(links.len(), 3);
        assert_eq!(links.get(c).map(|l| &*l.target), Some("y"));
    }

    #[test]
    fn noparse_in_active_set_is_rejected() {
        let tags = [tag(TagKind::NoParse, TagValue::None)];
        let err = build_span(
            &segment_over(&[0]),
            &tags,
            &BaseStyle::default(),
            &mut LinkTable::new(),
            &MarkupSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTag);
        assert_eq!(err.tag(), Some(TagKind::NoParse));
    }

    #[test]
    fn wrong_color_variant_is_rejected() {
        let tags = [tag(TagKind::Color, TagValue::Numeric(1.0))];
        let err = build_span(
            &segment_over(&[0]),
            &tags,
            &BaseStyle::default(),
            &mut LinkTable::new(),
            &MarkupSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.tag(), Some(TagKind::Color));
    }

    #[test]
    fn active_index_past_the_tags_is_rejected() {
        let err = build_span(
            &segment_over(&[3]),
            &[],
            &BaseStyle::default(),
            &mut LinkTable::new(),
            &MarkupSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(err.index(), 3);
        assert_eq!(err.len(), 0);
    }

    #[test]
    fn placeholder_tags_are_no_ops() {
        let tags = [
            tag(TagKind::Size, TagValue::Numeric(30.0)),
            tag(TagKind::Font, TagValue::String(Arc::from("Mono"))),
            tag(TagKind::Alpha, TagValue::String(Arc::from("#80"))),
        ];
        let base = BaseStyle::default();
        let span = build_span(
            &segment_over(&[0, 1, 2]),
            &tags,
            &base,
            &mut LinkTable::new(),
            &MarkupSettings::default(),
        )
        .unwrap();
        assert_eq!(span.font_size, base.font_size);
        assert_eq!(span.styles, FontStyles::empty());
    }

    #[test]
    fn hyperlink_forces_underline_and_color() {
        let settings = MarkupSettings::default();
        let tags = [tag(TagKind::Hyperlink, TagValue::String(Arc::from("u")))];
        let span = build_span(
            &segment_over(&[0]),
            &tags,
            &BaseStyle::default(),
            &mut LinkTable::new(),
            &settings,
        )
        .unwrap();
        assert!(span.styles.contains(FontStyles::UNDERLINE));
        assert_eq!(span.color, settings.hyperlink_color);
        assert!(span.link.is_some());
    }

    #[test]
    fn hyperlink_color_wins_over_inner_color() {
        let settings = MarkupSettings::default();
        let red = TagValue::Color(Color::from_rgb8(0xff, 0x00, 0x00));
        // `<a href="x"><color=red>` and `<color=red><a href="x">`.
        for (tags, active) in [
            (
                [
                    tag(TagKind::Hyperlink, TagValue::String(Arc::from("x"))),
                    tag(TagKind::Color, red.clone()),
                ],
                [0, 1],
            ),
            (
                [
                    tag(TagKind::Color, red),
                    tag(TagKind::Hyperlink, TagValue::String(Arc::from("x"))),
                ],
                [0, 1],
            ),
        ] {
            let span = build_span(
                &segment_over(&active),
                &tags,
                &BaseStyle::default(),
                &mut LinkTable::new(),
                &settings,
            )
            .unwrap();
            assert_eq!(span.color, settings.hyperlink_color);
        }
    }

    #[test]
    fn font_weight_sets_weight() {
        let tags = [tag(TagKind::FontWeight, TagValue::Numeric(300.0))];
        let span = build_span(
            &segment_over(&[0]),
            &tags,
            &BaseStyle::default(),
            &mut LinkTable::new(),
            &MarkupSettings::default(),
        )
        .unwrap();
        assert_eq!(span.weight, FontWeight::new(300.0));
        assert!(!span.styles.contains(FontStyles::BOLD));
    }
}
