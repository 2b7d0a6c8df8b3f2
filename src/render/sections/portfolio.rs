//! Filterable portfolio renderer.

use crate::interact::CategoryFilter;
use crate::render::node::RenderNode;
use crate::render::sections::{chip_row, heading, shell};
use crate::section::SectionKind;
use crate::section::schema::{PortfolioContent, PortfolioProject};
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_portfolio(
    content: &PortfolioContent,
    tokens: &ThemeTokens,
    filter: &CategoryFilter,
) -> RenderNode {
    let mut root = shell("section", SectionKind::Portfolio, tokens)
        .child_if(content.title.as_deref(), heading);

    if !content.categories.is_empty() {
        root = root.child(chip_row(filter, tokens));
    }

    root.child(
        RenderNode::new("div")
            .attr("class", "portfolio__grid")
            .children(
                filter
                    .visible(&content.projects)
                    .into_iter()
                    .map(|project| project_card(project, tokens)),
            ),
    )
}

fn project_card(project: &PortfolioProject, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("article")
        .attr("class", "portfolio__card")
        .style("background-color", &tokens.surface_color)
        .style("border", format!("1px solid {}", tokens.border_color))
        .child_if(project.image_url.as_deref(), |url| {
            RenderNode::new("img").attr("src", url).attr("alt", &project.title)
        })
        .child(RenderNode::new("h3").text(&project.title))
        .child_if(project.description.as_deref(), |description| {
            RenderNode::new("p")
                .style("color", &tokens.secondary_text_color)
                .text(description)
        })
        .child_if(project.href.as_deref(), |href| {
            RenderNode::new("a")
                .attr("class", "portfolio__link")
                .attr("href", href)
                .style("color", &tokens.accent_color)
                .text("View project")
        })
}
