// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_markup` and `rich_layout`.
//!
//! - The `util` module contains a deterministic monospace [`Shaper`](rich_layout::Shaper) and
//!   shared assertions used by the other modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, which makes sharing the utilities simple.
//! - For test naming, put the "topic" of the test at the start of the name, for example
//!   `justify_wrapped_paragraph` rather than `wrapped_paragraph_is_justified`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
