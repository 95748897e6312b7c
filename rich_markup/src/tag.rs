// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tag vocabulary and its static registry.

use alloc::sync::Arc;

use peniko::color::{parse_color, Srgb};
use peniko::Color;

use crate::Error;

/// The kind of a markup tag.
///
/// Every kind except [`TagKind::Unknown`] has exactly one entry in the [tag table](tag_table).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<a href="...">`
    Hyperlink,
    /// `<align=...>`
    Align,
    /// `<allcaps>`
    AllCaps,
    /// `<alpha=...>`
    Alpha,
    /// `<b>`
    Bold,
    /// `<br>`
    LineBreak,
    /// `<color=...>` and the `<#rrggbb>` shorthand.
    Color,
    /// `<cspace=...>`
    CharSpace,
    /// `<font=...>`
    Font,
    /// `<font-weight=...>`
    FontWeight,
    /// `<i>`
    Italic,
    /// `<indent=...>`
    Indent,
    /// `<line-height=...>`
    LineHeight,
    /// `<line-indent=...>`
    LineIndent,
    /// `<link=...>`
    Link,
    /// `<lowercase>`
    Lowercase,
    /// `<mark>` or `<mark=...>`
    Mark,
    /// `<mspace=...>`
    Monospace,
    /// `<nobr>`
    NoBreak,
    /// `<noparse>`
    NoParse,
    /// `<s>`
    Strikethrough,
    /// `<size=...>`
    Size,
    /// `<smallcaps>`
    SmallCaps,
    /// `<space=...>`
    Space,
    /// `<sprite=...>`
    Sprite,
    /// `<style=...>`
    Style,
    /// `<sub>`
    Subscript,
    /// `<sup>`
    Superscript,
    /// `<u>`
    Underline,
    /// `<uppercase>`
    Uppercase,
    /// Sentinel; never produced by a successful match.
    Unknown,
}

impl TagKind {
    /// Number of tag kinds, including [`TagKind::Unknown`].
    pub const COUNT: usize = 31;

    /// Dense index of this kind, in `0..TagKind::COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The markup name of this kind, as written between `<` and `>`.
    pub fn name(self) -> &'static str {
        TAG_TABLE[self.index()].name
    }
}

/// The value type a tag declares for its attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TagValueType {
    /// The tag takes no value.
    None,
    /// A decimal number, e.g. `<size=12>`.
    Numeric,
    /// A free-form string, e.g. `<link="id">`.
    String,
    /// An HTML color, e.g. `<color=#ff0000>`.
    Color,
}

/// One entry in the [tag table](tag_table).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagInfo {
    /// The kind this entry resolves to.
    pub kind: TagKind,
    /// The name matched against markup.
    pub name: &'static str,
    /// The declared attribute value type.
    pub value_type: TagValueType,
}

const fn info(kind: TagKind, name: &'static str, value_type: TagValueType) -> TagInfo {
    TagInfo {
        kind,
        name,
        value_type,
    }
}

// Entries are laid out in `TagKind` order; lookups rely on it and so does first-match name
// resolution, which makes the order part of the markup grammar.
static TAG_TABLE: [TagInfo; TagKind::COUNT] = [
    info(TagKind::Hyperlink, "a", TagValueType::String),
    info(TagKind::Align, "align", TagValueType::String),
    info(TagKind::AllCaps, "allcaps", TagValueType::None),
    info(TagKind::Alpha, "alpha", TagValueType::String),
    info(TagKind::Bold, "b", TagValueType::None),
    info(TagKind::LineBreak, "br", TagValueType::None),
    info(TagKind::Color, "color", TagValueType::Color),
    info(TagKind::CharSpace, "cspace", TagValueType::Numeric),
    info(TagKind::Font, "font", TagValueType::String),
    info(TagKind::FontWeight, "font-weight", TagValueType::Numeric),
    info(TagKind::Italic, "i", TagValueType::None),
    info(TagKind::Indent, "indent", TagValueType::Numeric),
    info(TagKind::LineHeight, "line-height", TagValueType::Numeric),
    info(TagKind::LineIndent, "line-indent", TagValueType::Numeric),
    info(TagKind::Link, "link", TagValueType::String),
    info(TagKind::Lowercase, "lowercase", TagValueType::None),
    info(TagKind::Mark, "mark", TagValueType::Color),
    info(TagKind::Monospace, "mspace", TagValueType::Numeric),
    info(TagKind::NoBreak, "nobr", TagValueType::None),
    info(TagKind::NoParse, "noparse", TagValueType::None),
    info(TagKind::Strikethrough, "s", TagValueType::None),
    info(TagKind::Size, "size", TagValueType::Numeric),
    info(TagKind::SmallCaps, "smallcaps", TagValueType::None),
    info(TagKind::Space, "space", TagValueType::Numeric),
    info(TagKind::Sprite, "sprite", TagValueType::String),
    info(TagKind::Style, "style", TagValueType::String),
    info(TagKind::Subscript, "sub", TagValueType::None),
    info(TagKind::Superscript, "sup", TagValueType::None),
    info(TagKind::Underline, "u", TagValueType::None),
    info(TagKind::Uppercase, "uppercase", TagValueType::None),
    info(TagKind::Unknown, "unknown", TagValueType::None),
];

/// The static tag registry, in registration order.
///
/// Name resolution walks this table front to back and takes the first entry whose name is a
/// prefix of the candidate and is not followed by a letter or `-`. That is how `<sub>` skips
/// `s` and `<font-weight=700>` skips `font`.
pub fn tag_table() -> &'static [TagInfo] {
    &TAG_TABLE
}

/// Resolves the start of a tag body to a table entry.
///
/// Matching is case-sensitive. [`TagKind::Unknown`] never matches.
pub(crate) fn match_tag(candidate: &str) -> Option<&'static TagInfo> {
    TAG_TABLE.iter().find(|entry| {
        if entry.kind == TagKind::Unknown {
            return false;
        }
        let Some(rest) = candidate.strip_prefix(entry.name) else {
            return false;
        };
        match rest.chars().next() {
            Some(next) => !next.is_alphabetic() && next != '-',
            None => true,
        }
    })
}

/// The attribute value carried by a [`Tag`].
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    /// No value.
    None,
    /// A decimal number.
    Numeric(f32),
    /// A string, stored without surrounding quotes.
    String(Arc<str>),
    /// A parsed color.
    Color(Color),
}

impl TagValue {
    /// The variant of this value.
    pub fn value_type(&self) -> TagValueType {
        match self {
            Self::None => TagValueType::None,
            Self::Numeric(_) => TagValueType::Numeric,
            Self::String(_) => TagValueType::String,
            Self::Color(_) => TagValueType::Color,
        }
    }

    /// Returns the number, or a [`TypeMismatch`](crate::ErrorKind::TypeMismatch) error.
    pub fn as_numeric(&self) -> Result<f32, Error> {
        match self {
            Self::Numeric(value) => Ok(*value),
            other => Err(Error::type_mismatch(
                TagValueType::Numeric,
                other.value_type(),
            )),
        }
    }

    /// Returns the string, or a [`TypeMismatch`](crate::ErrorKind::TypeMismatch) error.
    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Self::String(value) => Ok(value),
            other => Err(Error::type_mismatch(TagValueType::String, other.value_type())),
        }
    }

    /// Returns the color, or a [`TypeMismatch`](crate::ErrorKind::TypeMismatch) error.
    pub fn as_color(&self) -> Result<Color, Error> {
        match self {
            Self::Color(value) => Ok(*value),
            other => Err(Error::type_mismatch(TagValueType::Color, other.value_type())),
        }
    }
}

/// A tag found in markup.
///
/// `start` and `end` are the byte offsets of the delimiting `<` and `>` in the markup, so the
/// tag occupies `start..=end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    /// What this tag does.
    pub kind: TagKind,
    /// Whether this is a `</...>` tag.
    pub is_closing: bool,
    /// Offset of the `<`.
    pub start: usize,
    /// Offset of the `>`.
    pub end: usize,
    /// The attribute value; always [`TagValue::None`] on closing tags.
    pub value: TagValue,
}

/// Parses an HTML/CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a named color.
pub(crate) fn parse_html_color(s: &str) -> Option<Color> {
    parse_color(s).ok().map(|c| c.to_alpha_color::<Srgb>())
}

#[cfg(test)]
mod tests {
    use super::{match_tag, tag_table, TagKind, TagValue, TagValueType};
    use crate::ErrorKind;

    #[test]
    fn table_is_in_kind_order() {
        for (index, entry) in tag_table().iter().enumerate() {
            assert_eq!(entry.kind.index(), index, "{:?} is out of place", entry.kind);
        }
        assert_eq!(tag_table().len(), TagKind::COUNT);
    }

    #[test]
    fn prefix_match_requires_a_delimiter() {
        assert_eq!(match_tag("b").map(|e| e.kind), Some(TagKind::Bold));
        assert_eq!(match_tag("br").map(|e| e.kind), Some(TagKind::LineBreak));
        assert_eq!(match_tag("bold"), None);
        assert_eq!(match_tag("sub").map(|e| e.kind), Some(TagKind::Subscript));
        assert_eq!(match_tag("s").map(|e| e.kind), Some(TagKind::Strikethrough));
        assert_eq!(
            match_tag("font-weight=700").map(|e| e.kind),
            Some(TagKind::FontWeight)
        );
        assert_eq!(match_tag("font=\"Mono\"").map(|e| e.kind), Some(TagKind::Font));
        assert_eq!(
            match_tag("a href=\"x\"").map(|e| e.kind),
            Some(TagKind::Hyperlink)
        );
        assert_eq!(match_tag("B"), None);
        assert!(match_tag("Sub").is_none());
    }

    #[test]
    fn unknown_never_matches() {
        assert_eq!(match_tag("unknown"), None);
        assert_eq!(match_tag("foo"), None);
        assert_eq!(match_tag(""), None);
    }

    #[test]
    fn wrong_variant_is_a_type_mismatch() {
        let value = TagValue::Numeric(3.0);
        let err = value.as_str().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let mismatch = err.mismatch().expect("mismatch info");
        assert_eq!(mismatch.expected, TagValueType::String);
        assert_eq!(mismatch.found, TagValueType::Numeric);
        assert_eq!(value.as_numeric(), Ok(3.0));
        assert!(TagValue::None.as_color().is_err());
    }
}
