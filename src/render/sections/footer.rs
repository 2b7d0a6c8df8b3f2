//! Site footer renderer.

use crate::render::RenderContext;
use crate::render::node::RenderNode;
use crate::render::sections::shell;
use crate::section::SectionKind;
use crate::section::schema::FooterContent;
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_footer(
    content: &FooterContent,
    tokens: &ThemeTokens,
    ctx: &RenderContext,
) -> RenderNode {
    let copyright = format!(
        "\u{a9} {} {}. All rights reserved.",
        ctx.current_year, content.company_name
    );

    let mut root = shell("footer", SectionKind::Footer, tokens)
        .child(
            RenderNode::new("span")
                .attr("class", "footer__company")
                .text(&content.company_name),
        )
        .child_if(content.tagline.as_deref(), |tagline| {
            RenderNode::new("p")
                .attr("class", "footer__tagline")
                .style("color", &tokens.secondary_text_color)
                .text(tagline)
        });

    if !content.links.is_empty() {
        root = root.child(
            RenderNode::new("nav")
                .attr("class", "footer__links")
                .children(content.links.iter().map(|link| {
                    RenderNode::new("a")
                        .attr("href", &link.href)
                        .style("color", &tokens.secondary_text_color)
                        .text(&link.label)
                })),
        );
    }
    if !content.socials.is_empty() {
        root = root.child(
            RenderNode::new("div")
                .attr("class", "footer__socials")
                .children(content.socials.iter().map(|social| {
                    RenderNode::new("a")
                        .attr("href", &social.href)
                        .style("color", &tokens.accent_color)
                        .text(&social.network)
                })),
        );
    }

    root.child(
        RenderNode::new("p")
            .attr("class", "footer__copyright")
            .style("color", &tokens.secondary_text_color)
            .text(copyright),
    )
}
