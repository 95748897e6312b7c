// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline rich-text markup parsing.
//!
//! `rich_markup` turns a string with inline tags such as `<b>`, `<color=#f00>` or
//! `<link="id">` into plain text plus a list of [`TextSpan`]s carrying resolved style records.
//!
//! The pipeline is split into small stages that can also be used on their own:
//!
//! - [`scan`] finds tags, resolves them against the static [tag table](tag_table) and extracts
//!   attribute values, collecting advisory [`ParseError`]s on the side.
//! - [`NestingResolver`] computes the innermost open tag per [`TagKind`] at a position.
//! - [`segment`] splits the markup into maximal runs of text sharing one active tag set.
//! - [`build_span`] folds a segment's active tags into a [`TextSpan`].
//! - [`create_spans`] runs all of the above.
//!
//! ## Indices
//!
//! Tag and error positions are byte offsets into the *markup*. Span ranges are byte offsets
//! into the produced *plain text*.
//!
//! ## Recovery
//!
//! Malformed markup never aborts parsing. Unknown tags, empty tags and malformed values are
//! reported as [`ParseError`]s and the offending markup is left verbatim in the plain text.
//!
//! ## Example
//!
//! ```
//! use rich_markup::{create_spans, BaseStyle, FontStyles, MarkupSettings};
//!
//! let base = BaseStyle::default();
//! let settings = MarkupSettings::default();
//! let parsed = create_spans("<b>A<i>B</i>C</b>", &base, &settings).unwrap();
//!
//! assert_eq!(parsed.text, "ABC");
//! assert_eq!(parsed.spans.len(), 3);
//! assert!(parsed.spans.iter().all(|s| s.styles.contains(FontStyles::BOLD)));
//! assert!(parsed.spans[1].styles.contains(FontStyles::ITALIC));
//! assert!(parsed.errors.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `peniko` for color parsing.
//! - `libm`: Use floating point implementations from `libm` in `no_std` builds.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod error;
mod markup;
mod nesting;
mod scan;
mod segment;
mod span;
mod style;
mod tag;

#[cfg(test)]
mod tests;

pub use crate::error::{Error, ErrorKind, ParseError, ParseErrorKind, ValueMismatch};
pub use crate::markup::{create_spans, MarkupSettings, MarkupText};
pub use crate::nesting::{active_tags, ActiveTags, NestingResolver};
pub use crate::scan::scan;
pub use crate::segment::{segment, Segment};
pub use crate::span::{build_span, Link, LinkId, LinkKind, LinkTable, TextSpan};
pub use crate::style::{BaseStyle, FontId, FontStyles, FontWeight};
pub use crate::tag::{tag_table, Tag, TagInfo, TagKind, TagValue, TagValueType};

pub use peniko::Color;
