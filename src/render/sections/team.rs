//! Team cards renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{heading, shell};
use crate::section::SectionKind;
use crate::section::schema::{TeamContent, TeamMember};
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_team(content: &TeamContent, tokens: &ThemeTokens) -> RenderNode {
    shell("section", SectionKind::Team, tokens)
        .child_if(content.title.as_deref(), heading)
        .child(
            RenderNode::new("div")
                .attr("class", "team__grid")
                .children(content.members.iter().map(|member| card(member, tokens))),
        )
}

fn card(member: &TeamMember, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("article")
        .attr("class", "team__card")
        .style("background-color", &tokens.surface_color)
        .child_if(member.photo_url.as_deref(), |url| {
            RenderNode::new("img")
                .attr("class", "team__photo")
                .attr("src", url)
                .attr("alt", &member.name)
        })
        .child(RenderNode::new("h3").text(&member.name))
        .child(
            RenderNode::new("p")
                .attr("class", "team__role")
                .style("color", &tokens.secondary_text_color)
                .text(&member.role),
        )
        .child_if(
            (!member.socials.is_empty()).then_some(&member.socials),
            |socials| {
                RenderNode::new("div")
                    .attr("class", "team__socials")
                    .children(socials.iter().map(|social| {
                        RenderNode::new("a")
                            .attr("href", &social.href)
                            .style("color", &tokens.accent_color)
                            .text(&social.network)
                    }))
            },
        )
}
