// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character classes used by justification, word detection and decorations.

use icu_properties::props::{GeneralCategory, GeneralCategoryGroup};
use icu_properties::CodePointMapData;

const NO_BREAK_SPACE: char = '\u{a0}';

fn general_category(ch: char) -> GeneralCategory {
    CodePointMapData::<GeneralCategory>::new().get(ch)
}

/// How a character takes part in justification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum JustifyClass {
    /// Inter-word gap: tab or a separator other than the no-break space.
    Separator,
    /// Receives no share of the slack.
    Skip,
    /// Any other character.
    Other,
}

pub(crate) fn justify_class(ch: char) -> JustifyClass {
    match ch {
        '\n' | '\u{3}' | '\u{ad}' | '\u{200b}' | '\u{2060}' => JustifyClass::Skip,
        '\t' => JustifyClass::Separator,
        NO_BREAK_SPACE => JustifyClass::Other,
        _ if is_separator(ch) => JustifyClass::Separator,
        _ => JustifyClass::Other,
    }
}

/// Space, line and paragraph separators.
pub(crate) fn is_separator(ch: char) -> bool {
    GeneralCategoryGroup::Separator.contains(general_category(ch))
}

pub(crate) fn is_control(ch: char) -> bool {
    general_category(ch) == GeneralCategory::Control
}

/// Letters and decimal digits.
pub(crate) fn is_alphanumeric(ch: char) -> bool {
    let gc = general_category(ch);
    GeneralCategoryGroup::Letter.contains(gc) || gc == GeneralCategory::DecimalNumber
}

pub(crate) fn is_hyphen(ch: char) -> bool {
    matches!(ch, '-' | '\u{ad}' | '\u{2010}' | '\u{2011}')
}

pub(crate) fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

/// Characters that never start a decoration run.
pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\u{b}' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        assert_eq!(justify_class(' '), JustifyClass::Separator);
        assert_eq!(justify_class('\t'), JustifyClass::Separator);
        assert_eq!(justify_class('\u{3000}'), JustifyClass::Separator);
        assert_eq!(justify_class('\u{a0}'), JustifyClass::Other);
        assert_eq!(justify_class('\u{200b}'), JustifyClass::Skip);
        assert_eq!(justify_class('x'), JustifyClass::Other);
    }

    #[test]
    fn word_characters() {
        assert!(is_alphanumeric('a'));
        assert!(is_alphanumeric('ß'));
        assert!(is_alphanumeric('7'));
        assert!(!is_alphanumeric('½'));
        assert!(!is_alphanumeric('\''));
        assert!(is_hyphen('\u{2011}'));
        assert!(is_control('\n'));
        assert!(!is_control(' '));
    }
}
