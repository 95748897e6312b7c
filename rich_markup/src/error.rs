// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{TagKind, TagValueType};

/// Contract violation raised by the span pipeline.
///
/// These errors indicate that an invariant was broken upstream (for example a tag list that was
/// not produced by [`scan`](crate::scan)), not that the markup itself was malformed. Malformed
/// markup is reported through [`ParseError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The tag kind involved, for tag-related errors.
    tag: Option<TagKind>,

    /// Expected and found value types for [`ErrorKind::TypeMismatch`].
    mismatch: Option<ValueMismatch>,

    /// The offending index for [`ErrorKind::IndexOutOfRange`].
    index: usize,

    /// The length of the indexed collection for [`ErrorKind::IndexOutOfRange`].
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the indexed collection; `is_empty` would be meaningless."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The tag kind involved, if any.
    pub fn tag(&self) -> Option<TagKind> {
        self.tag
    }

    /// Expected and found value types, for [`ErrorKind::TypeMismatch`].
    pub fn mismatch(&self) -> Option<ValueMismatch> {
        self.mismatch
    }

    /// The offending index, for [`ErrorKind::IndexOutOfRange`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the indexed collection, for [`ErrorKind::IndexOutOfRange`].
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn type_mismatch(expected: TagValueType, found: TagValueType) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            tag: None,
            mismatch: Some(ValueMismatch { expected, found }),
            index: 0,
            len: 0,
        }
    }

    pub(crate) fn invalid_tag(tag: TagKind) -> Self {
        Self {
            kind: ErrorKind::InvalidTag,
            tag: Some(tag),
            mismatch: None,
            index: 0,
            len: 0,
        }
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::IndexOutOfRange,
            tag: None,
            mismatch: None,
            index,
            len,
        }
    }

    pub(crate) fn with_tag(mut self, tag: TagKind) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::TypeMismatch => {
                if let Some(m) = self.mismatch {
                    write!(
                        f,
                        "tag value type mismatch: expected {:?}, found {:?}",
                        m.expected, m.found
                    )?;
                } else {
                    f.write_str("tag value type mismatch")?;
                }
                if let Some(tag) = self.tag {
                    write!(f, " on <{}>", tag.name())?;
                }
                Ok(())
            }
            ErrorKind::InvalidTag => match self.tag {
                Some(tag) => write!(f, "tag <{}> cannot contribute to a span", tag.name()),
                None => f.write_str("tag cannot contribute to a span"),
            },
            ErrorKind::IndexOutOfRange => write!(
                f,
                "index {} out of range for length {}",
                self.index, self.len
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A [`TagValue`](crate::TagValue) was accessed as the wrong variant.
    TypeMismatch,

    /// A `noparse` or `unknown` tag reached the span builder.
    InvalidTag,

    /// A span or tag lookup used an index past the end of its collection.
    IndexOutOfRange,
}

/// Expected and found value types of a [`ErrorKind::TypeMismatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValueMismatch {
    /// The variant the caller asked for.
    pub expected: TagValueType,

    /// The variant the value actually holds.
    pub found: TagValueType,
}

/// An advisory, non-fatal problem found while scanning markup.
///
/// The scanner recovers from every one of these by either skipping a single character or
/// dropping the one malformed tag, so the returned text and spans are always usable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The category of this error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset of the `<` that opened the offending tag, in the markup.
    pub fn position(&self) -> usize {
        self.position
    }

    /// A short human readable description.
    pub fn message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::EmptyTag => "empty tag",
            ParseErrorKind::UnknownTag => "unknown tag",
            ParseErrorKind::UnknownClosingTag => "unknown closing tag",
            ParseErrorKind::InvalidColor => "invalid color value",
            ParseErrorKind::InvalidNumber => "invalid numeric value",
            ParseErrorKind::UnclosedNoParse => "noparse tag is never closed",
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.message(), self.position)
    }
}

impl core::error::Error for ParseError {}

/// The non-exhaustive category of a [`ParseError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// `<>` with nothing inside.
    EmptyTag,

    /// An opening tag whose name is not in the tag table.
    UnknownTag,

    /// A closing tag whose name is not in the tag table.
    UnknownClosingTag,

    /// A color attribute that does not parse as an HTML color.
    InvalidColor,

    /// A numeric attribute with no leading number.
    InvalidNumber,

    /// `<noparse>` without a matching `</noparse>`; the rest of the markup is left verbatim.
    UnclosedNoParse,
}
