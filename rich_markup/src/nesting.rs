// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active tag resolution.

use alloc::vec;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Tag, TagKind};

/// Indices into a tag list, in original tag order.
pub type ActiveTags = SmallVec<[usize; 8]>;

/// Sweeps a tag list left to right, tracking the innermost open tag of every kind.
///
/// Each kind keeps its own chain: an opening tag records the previously open tag of the same
/// kind as its parent, and a closing tag restores that parent. Kinds never interact, so there is
/// no shared stack; the chains live in a `parent` array indexed like the tag list.
///
/// The sweep only moves forward. Querying at increasing offsets, as the segmenter does, costs
/// one pass over the tags in total.
#[derive(Clone, Debug)]
pub struct NestingResolver<'a> {
    tags: &'a [Tag],
    parent: Vec<Option<usize>>,
    last_open: [Option<usize>; TagKind::COUNT],
    cursor: usize,
}

impl<'a> NestingResolver<'a> {
    /// Creates a resolver positioned before the first tag.
    pub fn new(tags: &'a [Tag]) -> Self {
        Self {
            tags,
            parent: vec![None; tags.len()],
            last_open: [None; TagKind::COUNT],
            cursor: 0,
        }
    }

    /// Applies every tag that ends before `offset`.
    ///
    /// Offsets earlier than a previous call are a no-op; tags are never re-applied.
    pub fn advance_to(&mut self, offset: usize) {
        while let Some(tag) = self.tags.get(self.cursor) {
            if tag.end >= offset {
                break;
            }
            self.apply(self.cursor);
            self.cursor += 1;
        }
    }

    fn apply(&mut self, index: usize) {
        let tag = &self.tags[index];
        if matches!(tag.kind, TagKind::NoParse | TagKind::Unknown) {
            return;
        }
        let slot = tag.kind.index();
        if tag.is_closing {
            if let Some(open) = self.last_open[slot] {
                self.last_open[slot] = self.parent[open];
            }
        } else {
            self.parent[index] = self.last_open[slot];
            self.last_open[slot] = Some(index);
        }
    }

    /// The innermost open tag of each kind, as indices in original tag order.
    pub fn active(&self) -> ActiveTags {
        let mut active: ActiveTags = self.last_open.iter().flatten().copied().collect();
        active.sort_unstable();
        active
    }
}

/// Computes the active tags at `offset` in a single sweep.
///
/// Prefer [`NestingResolver`] when querying many increasing offsets.
pub fn active_tags(tags: &[Tag], offset: usize) -> ActiveTags {
    let mut resolver = NestingResolver::new(tags);
    resolver.advance_to(offset);
    resolver.active()
}
