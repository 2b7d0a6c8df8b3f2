//! Call-to-action banner renderer.

use crate::render::node::RenderNode;
use crate::render::sections::shell;
use crate::section::SectionKind;
use crate::section::schema::CtaContent;
use crate::theme::{ThemeTokens, with_alpha};

#[must_use]
pub fn render_cta(content: &CtaContent, tokens: &ThemeTokens) -> RenderNode {
    let gradient = format!(
        "linear-gradient(135deg, {}, {})",
        tokens.accent_color,
        with_alpha(&tokens.accent_color, 0.87)
    );

    shell("section", SectionKind::Cta, tokens)
        .style("background-image", gradient)
        .child(
            RenderNode::new("h2")
                .attr("class", "cta__title")
                .text(&content.title),
        )
        .child_if(content.subtitle.as_deref(), |subtitle| {
            RenderNode::new("p").text(subtitle)
        })
        .child(
            RenderNode::new("a")
                .attr("class", "button")
                .attr("href", content.button_href.as_deref().unwrap_or("#"))
                .style("background-color", &tokens.bg_color)
                .style("color", &tokens.text_color)
                .text(&content.button_label),
        )
}
