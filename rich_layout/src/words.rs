// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::classify::{is_alphanumeric, is_apostrophe, is_hyphen};
use crate::{CharacterPlacement, WordInfo};

/// Incremental word boundary detection.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WordTracker {
    start: Option<usize>,
    completed: usize,
}

impl WordTracker {
    /// Number of words completed so far.
    pub(crate) fn completed(&self) -> usize {
        self.completed
    }

    /// Feeds the character at `index`, returning a word if one ends.
    pub(crate) fn step(
        &mut self,
        placements: &[CharacterPlacement],
        index: usize,
    ) -> Option<WordInfo> {
        let ch = placements[index].character;
        let is_last = index + 1 == placements.len();

        if is_alphanumeric(ch) || is_hyphen(ch) {
            let first = *self.start.get_or_insert(index);
            return is_last.then(|| self.complete(first, index));
        }

        let first = self.start?;
        if is_apostrophe(ch)
            && !is_last
            && index > 0
            && is_alphanumeric(placements[index - 1].character)
            && is_alphanumeric(placements[index + 1].character)
        {
            return None;
        }
        Some(self.complete(first, index - 1))
    }

    fn complete(&mut self, first: usize, last: usize) -> WordInfo {
        self.start = None;
        self.completed += 1;
        WordInfo::new(first, last)
    }
}
