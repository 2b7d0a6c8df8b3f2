//! Navigation header renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{link_button, shell};
use crate::section::SectionKind;
use crate::section::schema::HeaderContent;
use crate::theme::ThemeTokens;

/// Renders the top navigation bar. A configured logo replaces the brand
/// text; the brand still labels the image.
#[must_use]
pub fn render_header(content: &HeaderContent, tokens: &ThemeTokens) -> RenderNode {
    let brand = match &content.logo_url {
        Some(url) => RenderNode::new("img")
            .attr("class", "header__logo")
            .attr("src", url)
            .attr("alt", &content.brand),
        None => RenderNode::new("span")
            .attr("class", "header__brand")
            .text(&content.brand),
    };

    let nav = RenderNode::new("nav")
        .attr("class", "header__nav")
        .children(content.links.iter().map(|link| {
            RenderNode::new("a")
                .attr("class", "header__link")
                .attr("href", &link.href)
                .text(&link.label)
        }));

    shell("header", SectionKind::Header, tokens)
        .child(brand)
        .child(nav)
        .child_if(content.cta_label.as_deref(), |label| {
            link_button(label, content.cta_href.as_deref(), tokens)
        })
}
