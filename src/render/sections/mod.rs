//! Per-kind section renderers.
//!
//! Each renderer is a pure function from a content record, resolved
//! theme tokens, and (for interactive kinds) a state snapshot to a
//! render tree. Shared building blocks live here; everything
//! kind-specific lives in the kind's own module.

mod about;
mod contact;
mod cta;
mod faq;
mod footer;
mod gallery;
mod header;
mod hero;
mod newsletter;
mod portfolio;
mod pricing;
mod services;
mod slider;
mod stats;
mod team;
mod testimonial;
mod timeline;

pub use about::render_about;
pub use contact::render_contact;
pub use cta::render_cta;
pub use faq::render_faq;
pub use footer::render_footer;
pub use gallery::render_gallery;
pub use header::render_header;
pub use hero::render_hero;
pub use newsletter::render_newsletter;
pub use portfolio::render_portfolio;
pub use pricing::render_pricing;
pub use services::render_services;
pub use slider::render_slider;
pub use stats::{counter_targets, render_stats, stat_display};
pub use team::render_team;
pub use testimonial::render_testimonial;
pub use timeline::render_timeline;

use crate::interact::{CategoryFilter, CyclicIndex};
use crate::render::node::RenderNode;
use crate::section::SectionKind;
use crate::theme::ThemeTokens;

/// The root element of a section: kind class plus the background and
/// text tokens as inline styles.
pub(crate) fn shell(tag: &str, kind: SectionKind, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new(tag)
        .attr("class", format!("section section--{}", kind.as_str()))
        .style("background-color", &tokens.bg_color)
        .style("color", &tokens.text_color)
}

/// Section heading.
pub(crate) fn heading(text: &str) -> RenderNode {
    RenderNode::new("h2").attr("class", "section__title").text(text)
}

/// Supporting line under a heading, in the secondary text color.
pub(crate) fn lede(text: &str, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("p")
        .attr("class", "section__lede")
        .style("color", &tokens.secondary_text_color)
        .text(text)
}

/// Accent-colored call-to-action link. A missing href points at `#`.
pub(crate) fn link_button(label: &str, href: Option<&str>, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("a")
        .attr("class", "button")
        .attr("href", href.unwrap_or("#"))
        .style("background-color", &tokens.accent_color)
        .style("color", &tokens.bg_color)
        .text(label)
}

/// Carousel position dots, one button per slide.
pub(crate) fn dots(position: &CyclicIndex, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("div")
        .attr("class", "carousel__dots")
        .children((0..position.len()).map(|index| {
            let active = index == position.current();
            let class = if active { "dot dot--active" } else { "dot" };
            let dot = RenderNode::new("button")
                .attr("class", class)
                .attr("data-index", index.to_string());
            if active {
                dot.style("background-color", &tokens.accent_color)
            } else {
                dot
            }
        }))
}

/// Filter chip row, "All" first, selected chip highlighted.
pub(crate) fn chip_row(filter: &CategoryFilter, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("div")
        .attr("class", "filter__chips")
        .children(filter.chips().into_iter().map(|chip| {
            let active = chip == filter.selected();
            let class = if active { "chip chip--active" } else { "chip" };
            let node = RenderNode::new("button")
                .attr("class", class)
                .attr("data-category", chip)
                .text(chip);
            if active {
                node.style("background-color", &tokens.accent_color)
                    .style("color", &tokens.bg_color)
            } else {
                node.style("border", format!("1px solid {}", tokens.border_color))
            }
        }))
}

/// Post-submit confirmation line shown in place of a form.
pub(crate) fn confirmation(message: &str, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("p")
        .attr("class", "form__confirmation")
        .attr("role", "status")
        .style("color", &tokens.accent_color)
        .text(message)
}
