//! Full-page rendering against the loader's typed output.

mod common;

use std::path::Path;

use common::full_page;
use sitewright::render::{RenderContext, render_page, render_section};
use sitewright::section::loader::parse_sections;

const KIND_ORDER: [&str; 17] = [
    "header",
    "hero",
    "about",
    "services",
    "pricing",
    "testimonial",
    "faq",
    "gallery",
    "portfolio",
    "team",
    "timeline",
    "stats",
    "newsletter",
    "cta",
    "contact",
    "footer",
    "slider",
];

fn parse_one(json: &str) -> sitewright::section::schema::SectionConfig {
    parse_sections(json, Path::new("inline.json"))
        .expect("inline fixture parses")
        .sections
        .remove(0)
}

#[test]
fn full_page_renders_every_kind_in_order() {
    let sections = full_page();
    assert_eq!(sections.len(), KIND_ORDER.len());

    let page = render_page(&sections, &RenderContext::with_year(2026));
    assert_eq!(page.tag, "main");
    assert_eq!(page.attrs["class"], "page");
    assert_eq!(page.children.len(), KIND_ORDER.len());

    for (node, kind) in page.children.iter().zip(KIND_ORDER) {
        assert_eq!(
            node.attrs["class"],
            format!("section section--{kind}"),
            "unexpected section class for {kind}"
        );
    }
}

#[test]
fn interactive_sections_render_their_mount_state() {
    let page = render_page(&full_page(), &RenderContext::with_year(2026));
    let html = page.to_html();

    // Carousel: first quote only.
    assert!(html.contains("They just get it."));
    assert!(!html.contains("Fast and exact."));

    // Accordion: first answer open, second closed.
    assert!(html.contains("Six to ten weeks."));
    assert!(html.contains("How long does a project take?"));
    assert!(html.contains("Do you work with agencies?"));
    assert!(!html.contains("Often."));

    // Counters: numeric stats start at zero, verbatim ones display as-is.
    assert!(html.contains(">0<"));
    assert!(!html.contains("180"));
    assert!(html.contains("24/7"));

    // Filter: the synthetic All chip leads and is selected.
    assert!(html.contains(r#"data-category="All""#));
    assert!(html.contains("chip chip--active"));

    // Forms: inputs present, confirmations absent.
    assert!(html.contains("Your email"));
    assert!(!html.contains("Thanks for subscribing!"));
    assert!(!html.contains("form__confirmation"));
}

#[test]
fn footer_year_comes_from_the_render_context() {
    let footer = parse_one(r#"{ "kind": "footer", "content": { "companyName": "Northlight" } }"#);

    let node = render_section(&footer, &RenderContext::with_year(2031));
    let html = node.to_html();
    assert!(html.contains("\u{a9} 2031 Northlight. All rights reserved."));

    let node = render_section(&footer, &RenderContext::with_year(1999));
    assert!(node.to_html().contains("\u{a9} 1999 Northlight"));
}

#[test]
fn theme_overrides_reach_inline_styles() {
    let hero = parse_one(
        r##"{
            "kind": "hero",
            "content": { "title": "Hi" },
            "theme": { "bgColor": "#123456", "accentColor": "#abcdef" }
        }"##,
    );

    let node = render_section(&hero, &RenderContext::with_year(2026));
    assert_eq!(node.style["background-color"], "#123456");
    // Unoverridden tokens fall back to the kind default (hero is dark).
    assert_eq!(node.style["color"], "#f9fafb");
    assert!(node.to_html().contains("background-color: #123456"));
}

#[test]
fn text_and_attribute_values_are_escaped() {
    let hero = parse_one(
        r#"{
            "kind": "hero",
            "content": {
                "title": "Works & <Friends>",
                "ctaLabel": "Go",
                "ctaHref": "/a?b=1&c=\"2\""
            }
        }"#,
    );

    let html = render_section(&hero, &RenderContext::with_year(2026)).to_html();
    assert!(html.contains("Works &amp; &lt;Friends&gt;"));
    assert!(html.contains("/a?b=1&amp;c=&quot;2&quot;"));
    assert!(!html.contains("<Friends>"));
}

#[test]
fn optional_fields_omit_their_fragments() {
    let minimal = parse_one(r#"{ "kind": "hero", "content": { "title": "Hi" } }"#);
    let node = render_section(&minimal, &RenderContext::with_year(2026));
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].tag, "h1");

    let contact = parse_one(r#"{ "kind": "contact", "content": { "title": "Contact" } }"#);
    let html = render_section(&contact, &RenderContext::with_year(2026)).to_html();
    assert!(!html.contains("mailto:"));
    assert!(!html.contains("tel:"));
}

#[test]
fn empty_page_renders_an_empty_main() {
    let page = render_page(&[], &RenderContext::with_year(2026));
    assert_eq!(page.to_html(), r#"<main class="page"></main>"#);
}
