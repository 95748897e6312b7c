// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

use crate::{
    create_spans, scan, segment, BaseStyle, ErrorKind, FontStyles, LinkKind, MarkupSettings,
    MarkupText, ParseErrorKind, TagKind, TagValue,
};

fn parse(markup: &str) -> MarkupText {
    create_spans(markup, &BaseStyle::default(), &MarkupSettings::default())
        .expect("markup pipeline never violates its own contracts")
}

/// Spans must tile the plain text exactly.
fn assert_contiguous(parsed: &MarkupText) {
    let mut end = 0;
    for span in &parsed.spans {
        assert_eq!(span.range.start, end, "gap or overlap before {:?}", span.range);
        end = span.range.end;
    }
    assert_eq!(end, parsed.text.len(), "spans do not reach the end of the text");
}

#[test]
fn plain_text_is_identity() {
    for markup in ["", "hello", "a > b", "x = 1 & y", "trailing <"] {
        let parsed = parse(markup);
        assert_eq!(parsed.text, markup);
        assert_eq!(parsed.spans.len(), 1, "{markup:?}");
        assert!(parsed.errors.is_empty(), "{markup:?}");

        let (tags, _) = scan(markup);
        let segments = segment(markup.len(), &tags);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, 0..markup.len());
        assert!(segments[0].active.is_empty());
    }
}

#[test]
fn nesting_bold_and_italic() {
    let parsed = parse("<b>A<i>B</i>C</b>");
    assert_eq!(parsed.text, "ABC");
    assert_eq!(parsed.spans.len(), 3);
    for span in &parsed.spans {
        assert!(span.styles.contains(FontStyles::BOLD));
    }
    let italic: Vec<_> = parsed
        .spans
        .iter()
        .map(|s| s.styles.contains(FontStyles::ITALIC))
        .collect();
    assert_eq!(italic, [false, true, false]);
    assert_contiguous(&parsed);
}

#[test]
fn unknown_tag_is_kept_verbatim() {
    let parsed = parse("<foo>x");
    assert_eq!(parsed.text, "<foo>x");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].position(), 0);
    assert_eq!(parsed.errors[0].kind(), ParseErrorKind::UnknownTag);
    assert_contiguous(&parsed);
}

#[test]
fn color_forms_all_parse() {
    for markup in ["<color=#112233>x", "<color=\"red\">x", "<#112233>x"] {
        let (tags, errors) = scan(markup);
        assert!(errors.is_empty(), "{markup:?}: {errors:?}");
        assert_eq!(tags.len(), 1, "{markup:?}");
        assert_eq!(tags[0].kind, TagKind::Color);
        assert!(matches!(tags[0].value, TagValue::Color(_)), "{markup:?}");
    }
    let parsed = parse("<#112233>x</color>y");
    assert_eq!(parsed.text, "xy");
    assert_eq!(
        parsed.spans[0].color.to_rgba8(),
        Color::from_rgb8(0x11, 0x22, 0x33).to_rgba8()
    );
    assert_eq!(parsed.spans[1].color, BaseStyle::default().color);
}

#[test]
fn unterminated_noparse_halts_scanning() {
    let parsed = parse("<b>x</b><noparse><i>y<>z");
    assert_eq!(parsed.text, "x<noparse><i>y<>z");
    assert!(parsed.spans[0].styles.contains(FontStyles::BOLD));
    let tail = parsed.span_at(1).expect("span over the unparsed tail");
    assert!(tail.styles.is_empty());
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].kind(), ParseErrorKind::UnclosedNoParse);
    assert_contiguous(&parsed);
}

#[test]
fn noparse_content_is_verbatim_and_unstyled() {
    let parsed = parse("<u>a<noparse><b>b</b></noparse>c</u>");
    assert_eq!(parsed.text, "a<b>b</b>c");
    assert!(parsed
        .spans
        .iter()
        .all(|s| s.styles == FontStyles::UNDERLINE));
    assert!(parsed.errors.is_empty());
}

#[test]
fn link_targets_are_deduplicated() {
    let parsed = parse("<link=\"x\">a</link> <link=\"x\">b</link> <link=\"y\">c</link>");
    assert_eq!(parsed.text, "a b c");
    let a = parsed.span_at(0).and_then(|s| s.link).expect("link on a");
    let b = parsed.span_at(2).and_then(|s| s.link).expect("link on b");
    let c = parsed.span_at(4).and_then(|s| s.link).expect("link on c");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(parsed.links.len(), 2);
    assert_eq!(parsed.link(c).map(|l| &*l.target), Some("y"));
    assert_eq!(parsed.link(a).map(|l| l.kind), Some(LinkKind::Link));
    assert!(parsed.span_at(1).and_then(|s| s.link).is_none());
}

#[test]
fn hyperlink_and_link_with_same_target_differ() {
    let parsed = parse("<a href=\"x\">a</a><link=x>b</link>");
    let a = parsed.spans[0].link.expect("hyperlink id");
    let b = parsed.spans[1].link.expect("link id");
    assert_ne!(a, b);
    assert!(parsed.spans[0].styles.contains(FontStyles::UNDERLINE));
    assert!(!parsed.spans[1].styles.contains(FontStyles::UNDERLINE));
}

#[test]
fn hyperlink_color_survives_inner_color() {
    let settings = MarkupSettings::default();
    for markup in [
        "<a href=\"x\"><color=\"red\">t</color></a>",
        "<color=\"red\"><a href=\"x\">t</a></color>",
    ] {
        let parsed = create_spans(markup, &BaseStyle::default(), &settings).unwrap();
        assert_eq!(parsed.text, "t", "{markup:?}");
        assert_eq!(parsed.spans[0].color, settings.hyperlink_color, "{markup:?}");
        assert!(parsed.spans[0].styles.contains(FontStyles::UNDERLINE));
    }
    // Outside the hyperlink the color tag still applies.
    let parsed = parse("<color=\"red\">a<a href=\"x\">b</a></color>");
    assert_eq!(
        parsed.spans[0].color.to_rgba8(),
        Color::from_rgb8(0xff, 0x00, 0x00).to_rgba8()
    );
    assert_eq!(parsed.spans[1].color, MarkupSettings::default().hyperlink_color);
}

#[test]
fn case_and_decoration_bits() {
    let parsed = parse("<allcaps>a</allcaps><smallcaps>b</smallcaps><s><sub>c</sub></s><mark>d");
    assert_eq!(parsed.text, "abcd");
    assert_eq!(parsed.spans[0].styles, FontStyles::UPPERCASE);
    assert_eq!(parsed.spans[1].styles, FontStyles::LOWERCASE);
    assert_eq!(
        parsed.spans[2].styles,
        FontStyles::STRIKETHROUGH | FontStyles::SUBSCRIPT
    );
    assert_eq!(parsed.spans[3].styles, FontStyles::HIGHLIGHT);
    assert_eq!(
        parsed.spans[3].highlight_color,
        BaseStyle::default().highlight_color
    );
}

#[test]
fn disabled_parsing_keeps_markup() {
    let settings = MarkupSettings::default().with_parse_markup(false);
    let parsed = create_spans("<b>x</b>", &BaseStyle::default(), &settings).unwrap();
    assert_eq!(parsed.text, "<b>x</b>");
    assert_eq!(parsed.spans.len(), 1);
    assert!(parsed.spans[0].styles.is_empty());
}

#[test]
fn span_lookup_out_of_range() {
    let parsed = parse("<b>x</b>y");
    assert!(parsed.span(1).is_ok());
    let err = parsed.span(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(err.index(), 2);
    assert_eq!(err.len(), 2);
}

#[test]
fn multibyte_text_keeps_byte_ranges() {
    let parsed = parse("é<b>ü</b>");
    assert_eq!(parsed.text, "éü");
    assert_eq!(parsed.spans[0].range, 0..2);
    assert_eq!(parsed.spans[1].range, 2..4);
}
