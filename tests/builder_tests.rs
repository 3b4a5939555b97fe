//! Integration tests for the builder API

use tagstack::domain::{repeat, CustomTag, HtmlTag, Tag, TagBuilder};
use tagstack::{CloseMode, TagstackError};

/// A caller-supplied tag with attributes baked into its opening marker
struct Link {
    opening: String,
}

impl Link {
    fn to(href: &str) -> Self {
        Link {
            opening: format!("<a href=\"{}\">", href),
        }
    }
}

impl Tag for Link {
    fn opening_marker(&self) -> &str {
        &self.opening
    }

    fn closing_marker(&self) -> Option<&str> {
        Some("</a>")
    }
}

const NESTABLE: [HtmlTag; 6] = [
    HtmlTag::Html,
    HtmlTag::Body,
    HtmlTag::Pre,
    HtmlTag::Span,
    HtmlTag::B,
    HtmlTag::U,
];

#[test]
fn test_reverse_order_closes_balance_for_every_depth() {
    for depth in 0..=NESTABLE.len() {
        let tags = &NESTABLE[..depth];
        let mut builder = TagBuilder::manual_closing();
        for tag in tags {
            builder.open(tag);
        }
        for tag in tags.iter().rev() {
            builder.close(tag).unwrap();
        }

        let expected_open: String = tags.iter().map(|t| t.opening_marker()).collect();
        let expected_close: String = tags
            .iter()
            .rev()
            .map(|t| t.closing_marker().unwrap())
            .collect();

        assert_eq!(builder.depth(), 0);
        assert_eq!(builder.render(), expected_open + &expected_close);
    }
}

#[test]
fn test_auto_render_drains_any_number_of_open_tags() {
    for depth in 0..=NESTABLE.len() {
        let tags = &NESTABLE[..depth];
        let mut builder = TagBuilder::auto_closing();
        for tag in tags {
            builder.open(tag);
        }
        assert_eq!(builder.depth(), depth);

        let rendered = builder.render();
        let expected_close: String = tags
            .iter()
            .rev()
            .map(|t| t.closing_marker().unwrap())
            .collect();

        assert!(rendered.ends_with(&expected_close));
        assert_eq!(builder.depth(), 0);
    }
}

#[test]
fn test_mismatch_regardless_of_buffer_contents() {
    for prefix in ["", "text", "<p>already closed</p>"] {
        let mut builder = TagBuilder::manual_closing();
        builder.content(prefix).open(&HtmlTag::Span);

        for wrong in [HtmlTag::P, HtmlTag::Body, HtmlTag::Br] {
            match builder.close(&wrong) {
                Err(TagstackError::StructuralMismatch { expected, actual }) => {
                    assert_eq!(expected, wrong.closing_marker().unwrap_or_default());
                    assert_eq!(actual, "</span>");
                }
                other => panic!("Expected mismatch, got {:?}", other.is_ok()),
            }
        }
    }
}

#[test]
fn test_documented_scenarios() {
    let mut auto = TagBuilder::auto_closing();
    auto.open(&HtmlTag::Html).open(&HtmlTag::Body).content("hi");
    assert_eq!(auto.render(), "<html><body>hi</body></html>");

    let mut manual = TagBuilder::manual_closing();
    manual.open(&HtmlTag::P).content("a").close(&HtmlTag::P).unwrap();
    assert_eq!(manual.render(), "<p>a</p>");

    let mut mismatch = TagBuilder::manual_closing();
    mismatch.open(&HtmlTag::P);
    let err = mismatch.close(&HtmlTag::Span).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_caller_supplied_tags() {
    let link = Link::to("https://example.org");
    let aside = CustomTag::new("aside", "<aside>", Some("</aside>".to_string()));

    let mut builder = TagBuilder::manual_closing();
    builder
        .open(&aside)
        .open(&link)
        .content("home")
        .close(&link)
        .unwrap()
        .close(&aside)
        .unwrap();

    assert_eq!(
        builder.render(),
        "<aside><a href=\"https://example.org\">home</a></aside>"
    );
}

#[test]
fn test_dyn_tags() {
    let tags: Vec<Box<dyn Tag>> = vec![Box::new(HtmlTag::P), Box::new(Link::to("/x"))];

    let mut builder = TagBuilder::auto_closing();
    for tag in &tags {
        builder.open(&**tag);
    }
    builder.content("x");

    assert_eq!(builder.render(), "<p><a href=\"/x\">x</a></p>");
}

#[test]
fn test_document_with_convenience_methods() {
    let mut builder = TagBuilder::auto_closing();
    builder.html().head().content("");
    builder.body().heading(1).unwrap().content("Title");
    builder.paragraph().bold().content("bold");
    builder.nbsp(2).line_break();

    assert_eq!(
        builder.render(),
        "<html><head></head><body><h1>Title</h1><p><b>bold</b>&nbsp;&nbsp;<br></p></body></html>"
    );
}

#[test]
fn test_mode_can_change_after_construction() {
    let mut builder = TagBuilder::auto_closing();
    builder.set_mode(CloseMode::Manual);
    builder.open(&HtmlTag::P).content("x");
    assert_eq!(builder.render(), "<p>x");
    assert_eq!(builder.depth(), 1);
}

#[test]
fn test_character_view_without_render() {
    let mut builder = TagBuilder::auto_closing();
    builder.open(&HtmlTag::I).content("ok");

    let text: &str = builder.as_ref();
    assert_eq!(text, "<i>ok</i>");
    assert_eq!(builder.len(), text.chars().count());
    assert_eq!(builder.char_at(3), Some('o'));
    assert_eq!(builder.sub_sequence(3..5), Some("ok"));
}

#[test]
fn test_repeat_properties() {
    for unit in ["", " ", "&nbsp;", "ab"] {
        assert_eq!(repeat(unit, 0), "");
        assert_eq!(repeat(unit, 1), unit);
        for k in 0..5 {
            assert_eq!(repeat(unit, k).len(), k * unit.len());
        }
    }
}
