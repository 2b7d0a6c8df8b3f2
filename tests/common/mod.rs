//! Shared fixtures and helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use sitewright::section::loader::parse_sections;
use sitewright::section::schema::SectionConfig;

/// A page touching every section kind once, in a plausible page order.
pub const FULL_PAGE_JSON: &str = r##"[
  { "kind": "header", "content": {
      "brand": "Northlight",
      "links": [
        { "label": "Work", "href": "#portfolio" },
        { "label": "Contact", "href": "#contact" }
      ],
      "ctaLabel": "Start a project",
      "ctaHref": "#contact"
  } },
  { "kind": "hero", "content": {
      "title": "Design that earns trust",
      "subtitle": "Brand systems for growing teams",
      "ctaLabel": "See our work",
      "ctaHref": "#portfolio"
  } },
  { "kind": "about", "content": {
      "title": "Who we are",
      "body": "A small studio with a long memory.",
      "highlights": ["Founded 2015", "Remote first"]
  } },
  { "kind": "services", "content": {
      "title": "What we do",
      "services": [
        { "title": "Identity", "description": "Naming and brand systems." },
        { "title": "Web", "description": "Design systems and sites.", "icon": "globe" }
      ]
  } },
  { "kind": "pricing", "content": {
      "title": "Plans",
      "plans": [
        { "name": "Starter", "price": "$900", "period": "/project",
          "features": ["One concept", "Two revisions"] },
        { "name": "Studio", "price": "$2400",
          "features": ["Three concepts", "Brand book"], "highlighted": true }
      ]
  } },
  { "kind": "testimonial", "content": {
      "title": "Kind words",
      "testimonials": [
        { "quote": "They just get it.", "author": "Mara Chen", "role": "COO, Fieldnote" },
        { "quote": "Fast and exact.", "author": "Tomas Rivera" }
      ]
  } },
  { "kind": "faq", "content": {
      "entries": [
        { "question": "How long does a project take?", "answer": "Six to ten weeks." },
        { "question": "Do you work with agencies?", "answer": "Often." }
      ]
  } },
  { "kind": "gallery", "content": {
      "categories": ["Web", "Print"],
      "items": [
        { "imageUrl": "https://cdn.example.com/g1.jpg", "caption": "Launch page", "category": "Web" },
        { "imageUrl": "https://cdn.example.com/g2.jpg", "category": "Print" }
      ]
  } },
  { "kind": "portfolio", "content": {
      "title": "Selected work",
      "categories": ["Brand", "Web"],
      "projects": [
        { "title": "Fieldnote", "category": "Brand", "href": "/work/fieldnote" }
      ]
  } },
  { "kind": "team", "content": {
      "title": "The team",
      "members": [
        { "name": "Iris Kahn", "role": "Principal",
          "socials": [ { "network": "linkedin", "href": "https://linkedin.com/in/iriskahn" } ] }
      ]
  } },
  { "kind": "timeline", "content": {
      "title": "Milestones",
      "events": [
        { "date": "2015", "title": "Founded" },
        { "date": "2019", "title": "First retainer", "description": "Three-year brand program." }
      ]
  } },
  { "kind": "stats", "content": {
      "stats": [
        { "label": "Projects", "value": "180" },
        { "label": "Support", "value": "24/7" }
      ]
  } },
  { "kind": "newsletter", "content": {
      "title": "Studio notes",
      "description": "One letter a month."
  } },
  { "kind": "cta", "content": {
      "title": "Ready when you are",
      "buttonLabel": "Book a call",
      "buttonHref": "#contact"
  } },
  { "kind": "contact", "content": {
      "title": "Contact",
      "address": "14 Harbor Lane, Portland",
      "email": "hello@northlight.studio",
      "phone": "+1 555 0134"
  } },
  { "kind": "footer", "content": {
      "companyName": "Northlight",
      "tagline": "Design that earns trust",
      "links": [ { "label": "Privacy", "href": "/privacy" } ],
      "socials": [ { "network": "instagram", "href": "https://instagram.com/northlight" } ]
  } },
  { "kind": "slider", "content": {
      "slides": [
        { "title": "Spring collection", "imageUrl": "https://cdn.example.com/s1.jpg" },
        { "title": "Summer collection" }
      ]
  } }
]"##;

/// Parses the full-page fixture into typed configs.
#[allow(clippy::missing_panics_doc)]
pub fn full_page() -> Vec<SectionConfig> {
    parse_sections(FULL_PAGE_JSON, Path::new("full_page.json"))
        .expect("full-page fixture parses")
        .sections
}

/// Writes a config fixture into `dir` and returns its path.
#[allow(clippy::missing_panics_doc)]
pub fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("fixture write");
    path
}

/// Runs the sitewright binary and captures its output.
#[allow(clippy::missing_panics_doc)]
pub fn run_sitewright(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitewright"))
        .args(args)
        .output()
        .expect("failed to run sitewright")
}
