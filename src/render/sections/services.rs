//! Services grid renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{heading, lede, shell};
use crate::section::SectionKind;
use crate::section::schema::{ServiceItem, ServicesContent};
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_services(content: &ServicesContent, tokens: &ThemeTokens) -> RenderNode {
    shell("section", SectionKind::Services, tokens)
        .child(heading(&content.title))
        .child_if(content.subtitle.as_deref(), |subtitle| {
            lede(subtitle, tokens)
        })
        .child(
            RenderNode::new("div")
                .attr("class", "services__grid")
                .children(content.services.iter().map(|service| card(service, tokens))),
        )
}

fn card(service: &ServiceItem, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("article")
        .attr("class", "card")
        .style("background-color", &tokens.surface_color)
        .style("border", format!("1px solid {}", tokens.border_color))
        .child_if(service.icon.as_deref(), |icon| {
            RenderNode::new("span")
                .attr("class", "card__icon")
                .style("color", &tokens.accent_color)
                .text(icon)
        })
        .child(RenderNode::new("h3").text(&service.title))
        .child(
            RenderNode::new("p")
                .style("color", &tokens.secondary_text_color)
                .text(&service.description),
        )
}
