// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Input handed to [`layout_pass`](crate::layout_pass) that breaks its preconditions.
///
/// The pass checks every precondition before touching any placement, so on error the inputs
/// are left unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutError {
    /// The non-exhaustive category describing this error.
    kind: LayoutErrorKind,

    /// Index of the offending character, if the error concerns one.
    character: Option<usize>,

    /// Index of the offending line.
    line: usize,

    /// The bound that was exceeded.
    bound: usize,
}

impl LayoutError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> LayoutErrorKind {
        self.kind
    }

    /// Index of the offending character, if any.
    pub fn character(&self) -> Option<usize> {
        self.character
    }

    /// Index of the offending line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The bound that was exceeded: the line count for
    /// [`LineNumberOutOfRange`](LayoutErrorKind::LineNumberOutOfRange), the previous line
    /// number for [`LineNumberDecreasing`](LayoutErrorKind::LineNumberDecreasing) and the
    /// character count for [`LineIndexOutOfBounds`](LayoutErrorKind::LineIndexOutOfBounds).
    pub fn bound(&self) -> usize {
        self.bound
    }

    pub(crate) fn line_number_out_of_range(character: usize, line: usize, lines: usize) -> Self {
        Self {
            kind: LayoutErrorKind::LineNumberOutOfRange,
            character: Some(character),
            line,
            bound: lines,
        }
    }

    pub(crate) fn line_number_decreasing(character: usize, line: usize, previous: usize) -> Self {
        Self {
            kind: LayoutErrorKind::LineNumberDecreasing,
            character: Some(character),
            line,
            bound: previous,
        }
    }

    pub(crate) fn line_index_out_of_bounds(line: usize, characters: usize) -> Self {
        Self {
            kind: LayoutErrorKind::LineIndexOutOfBounds,
            character: None,
            line,
            bound: characters,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LayoutErrorKind::LineNumberOutOfRange => write!(
                f,
                "character {} is on line {} but only {} lines were given",
                self.character.unwrap_or_default(),
                self.line,
                self.bound
            ),
            LayoutErrorKind::LineNumberDecreasing => write!(
                f,
                "character {} is on line {} after a character on line {}",
                self.character.unwrap_or_default(),
                self.line,
                self.bound
            ),
            LayoutErrorKind::LineIndexOutOfBounds => write!(
                f,
                "line {} has character indices outside 0..{} or out of order",
                self.line, self.bound
            ),
        }
    }
}

impl core::error::Error for LayoutError {}

/// The non-exhaustive category of a [`LayoutError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutErrorKind {
    /// A placement refers to a line past the end of the line list.
    LineNumberOutOfRange,

    /// Line numbers of consecutive placements go backwards.
    LineNumberDecreasing,

    /// A line's first, last or visible indices are out of bounds or out of order.
    LineIndexOutOfBounds,
}

/// Failure of [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The markup stage broke one of its contracts.
    Markup(rich_markup::Error),
    /// The shaper produced placements the layout pass rejects.
    Layout(LayoutError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(err) => write!(f, "markup: {err}"),
            Self::Layout(err) => write!(f, "layout: {err}"),
        }
    }
}

impl core::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Markup(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<rich_markup::Error> for GenerateError {
    fn from(err: rich_markup::Error) -> Self {
        Self::Markup(err)
    }
}

impl From<LayoutError> for GenerateError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
