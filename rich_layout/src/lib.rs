// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment, justification, truncation and decoration of shaped rich text.
//!
//! `rich_layout` picks up where a shaper leaves off. Given one [`CharacterPlacement`] per
//! character and the [`LineInfo`] of each line, [`layout_pass`] makes a single forward pass
//! that:
//!
//! - anchors the block in the layout rectangle according to its [`VerticalAlignment`],
//! - offsets each line according to its [`HorizontalAlignment`], distributing slack for
//!   justified and flush text,
//! - collapses characters past the [`VisibilityLimits`],
//! - finds words and emits [`Decoration`] runs for underline, strikethrough and highlight,
//! - corrects line metrics to the final positions.
//!
//! [`generate`] runs the complete pipeline from markup through a [`Shaper`] to the layout pass.
//!
//! Coordinates are y-up throughout.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `libm`: Use floating point implementations from `libm` in `no_std` builds.
//!
//! At least one of `std` and `libm` is required.

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
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("rich_layout requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod anchor;
mod classify;
mod decoration;
mod error;
mod justify;
mod line;
mod pass;
mod placement;
mod settings;
mod shape;
mod words;


pub use crate::decoration::{Decoration, DecorationKind};
pub use crate::error::{GenerateError, LayoutError, LayoutErrorKind};
pub use crate::line::{LineInfo, WordInfo};
pub use crate::pass::{layout_pass, LayoutSummary};
pub use crate::placement::{CharacterPlacement, HighlightState};
pub use crate::settings::{
    BlockMetrics, HorizontalAlignment, LayoutSettings, TextAlignment, TextDirection,
    VerticalAlignment, VisibilityLimits, WrapMode,
};
pub use crate::shape::{generate, GeneratedText, ShapedText, Shaper};

pub use peniko::kurbo;
pub use rich_markup;
