//! Comprehensive tests for ancillary-html
//!
//! Parsing into the arena tree and serializing back out.

use ancillary_html::{HtmlParser, HtmlSerializer};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("").unwrap();
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
    assert!(doc.body().is_valid());
}

#[test]
fn test_parse_body_classes() {
    let html = r#"<html><body class="home ancillary-theme-logo-position-header"></body></html>"#;
    let doc = HtmlParser::new().parse(html).unwrap();

    let classes = doc.tree().class_list(doc.body());
    assert_eq!(classes.length(), 2);
    assert!(classes.contains("ancillary-theme-logo-position-header"));
}

#[test]
fn test_parse_with_url() {
    let doc = HtmlParser::new()
        .parse_with_url("<p>hi</p>", "https://example.com/shop")
        .unwrap();
    assert_eq!(doc.url(), "https://example.com/shop");
}

#[test]
fn test_parse_malformed_html() {
    let html = r#"
        <div data-nc-base="theme">
            <p>Unclosed paragraph
            <span data-nc-element="cart">Unclosed span
        </div>
    "#;

    let doc = HtmlParser::new().parse(html).unwrap();
    let base = doc.query_attribute("data-nc-base", "theme").unwrap();
    let cart = doc.query_attribute("data-nc-element", "cart").unwrap();
    assert!(doc.tree().is_ancestor(base, cart));
}

#[test]
fn test_round_trip_body() {
    let html = r#"<body><header data-nc-container="header"><a href="/?a=1&amp;b=2">Home</a></header></body>"#;
    let doc = HtmlParser::new().parse(html).unwrap();

    let out = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
    assert_eq!(
        out,
        r#"<header data-nc-container="header"><a href="/?a=1&amp;b=2">Home</a></header>"#
    );
}

#[test]
fn test_serialize_doctype_and_comment() {
    let doc = ancillary_html::parse("<!DOCTYPE html><!-- note --><p>x</p>").unwrap();
    let out = HtmlSerializer::new().serialize_outer(doc.tree(), doc.tree().root());

    assert!(out.starts_with("<!DOCTYPE html><!-- note --><html>"));
    assert!(out.contains("<body><p>x</p></body>"));
}
