// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup scanning.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::tag::{match_tag, parse_html_color};
use crate::{ParseError, ParseErrorKind, Tag, TagInfo, TagKind, TagValue, TagValueType};

const NO_PARSE_CLOSE: &str = "</noparse>";

/// Scans `markup` for tags.
///
/// Returns the recognized tags ordered by position, and the advisory errors found along the
/// way. Markup that does not produce a tag (unknown names, `<>`, malformed values) stays in
/// the text verbatim.
///
/// ```
/// use rich_markup::{scan, TagKind};
///
/// let (tags, errors) = scan("<b>bold</b> <foo>");
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[0].kind, TagKind::Bold);
/// assert!(tags[1].is_closing);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].position(), 12);
/// ```
pub fn scan(markup: &str) -> (Vec<Tag>, Vec<ParseError>) {
    let mut scanner = Scanner {
        markup,
        tags: Vec::new(),
        errors: Vec::new(),
    };
    scanner.run();
    (scanner.tags, scanner.errors)
}

struct Scanner<'a> {
    markup: &'a str,
    tags: Vec<Tag>,
    errors: Vec<ParseError>,
}

impl Scanner<'_> {
    fn run(&mut self) {
        let mut pos = 0;
        while let Some(open) = find_from(self.markup, pos, '<') {
            let Some(close) = find_from(self.markup, open + 1, '>') else {
                break;
            };
            let Some(tag) = self.read_tag(open, close) else {
                pos = open + 1;
                continue;
            };
            if tag.kind == TagKind::NoParse && !tag.is_closing {
                match find_no_parse_close(self.markup, close + 1) {
                    Some(end_open) => {
                        let end_close = end_open + NO_PARSE_CLOSE.len() - 1;
                        self.tags.push(tag);
                        self.tags.push(Tag {
                            kind: TagKind::NoParse,
                            is_closing: true,
                            start: end_open,
                            end: end_close,
                            value: TagValue::None,
                        });
                        pos = end_close + 1;
                    }
                    None => {
                        // Everything from the opener on stays verbatim.
                        self.error(ParseErrorKind::UnclosedNoParse, open);
                        break;
                    }
                }
                continue;
            }
            self.tags.push(tag);
            pos = close + 1;
        }
    }

    fn read_tag(&mut self, open: usize, close: usize) -> Option<Tag> {
        let content = &self.markup[open + 1..close];
        if content.is_empty() {
            self.error(ParseErrorKind::EmptyTag, open);
            return None;
        }
        let (is_closing, body) = match content.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, content),
        };

        if !is_closing && body.starts_with('#') && body.len() >= 4 {
            let color = self.color_value(body, TagKind::Color, open)?;
            return Some(Tag {
                kind: TagKind::Color,
                is_closing: false,
                start: open,
                end: close,
                value: color,
            });
        }

        let Some(info) = match_tag(body) else {
            let kind = if is_closing {
                ParseErrorKind::UnknownClosingTag
            } else {
                ParseErrorKind::UnknownTag
            };
            self.error(kind, open);
            return None;
        };

        let value = if is_closing {
            TagValue::None
        } else {
            self.extract_value(info, &body[info.name.len()..], open)?
        };
        Some(Tag {
            kind: info.kind,
            is_closing,
            start: open,
            end: close,
            value,
        })
    }

    /// Extracts the value from the attribute slice that follows a tag name.
    ///
    /// `None` means the tag is malformed and must be dropped.
    fn extract_value(&mut self, info: &TagInfo, attribute: &str, open: usize) -> Option<TagValue> {
        match info.value_type {
            TagValueType::None => Some(TagValue::None),
            TagValueType::Color => self.color_value(attribute, info.kind, open),
            TagValueType::String => {
                let attribute = if info.kind == TagKind::Hyperlink {
                    attribute.strip_prefix(" href=").unwrap_or(attribute)
                } else {
                    attribute
                };
                let raw = attribute_text(attribute);
                if raw.is_empty() {
                    Some(TagValue::None)
                } else {
                    Some(TagValue::String(Arc::from(raw)))
                }
            }
            TagValueType::Numeric => {
                let raw = attribute_text(attribute);
                if raw.is_empty() {
                    return Some(TagValue::None);
                }
                match leading_number(raw) {
                    Some(value) => Some(TagValue::Numeric(value)),
                    None => {
                        self.error(ParseErrorKind::InvalidNumber, open);
                        None
                    }
                }
            }
        }
    }

    fn color_value(&mut self, attribute: &str, kind: TagKind, open: usize) -> Option<TagValue> {
        let raw = attribute_text(attribute);
        // Highlight color is optional; text color is not.
        if raw.is_empty() && kind == TagKind::Mark {
            return Some(TagValue::None);
        }
        match parse_html_color(raw) {
            Some(color) => Some(TagValue::Color(color)),
            None => {
                self.error(ParseErrorKind::InvalidColor, open);
                None
            }
        }
    }

    fn error(&mut self, kind: ParseErrorKind, position: usize) {
        let error = ParseError::new(kind, position);
        log::debug!("markup: {error}");
        self.errors.push(error);
    }
}

/// Strips a leading `=`, then a pair of surrounding double quotes.
fn attribute_text(attribute: &str) -> &str {
    let s = attribute.strip_prefix('=').unwrap_or(attribute);
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Parses the decimal number at the start of `s`, ignoring any unit suffix.
fn leading_number(s: &str) -> Option<f32> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }
    let number = &s[..end];
    if !number[digits_start..].bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

fn find_from(haystack: &str, from: usize, needle: char) -> Option<usize> {
    haystack[from..].find(needle).map(|ix| ix + from)
}

fn find_no_parse_close(markup: &str, from: usize) -> Option<usize> {
    markup[from..].find(NO_PARSE_CLOSE).map(|ix| ix + from)
}
