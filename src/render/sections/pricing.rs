//! Pricing plans renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{heading, lede, link_button, shell};
use crate::section::SectionKind;
use crate::section::schema::{Plan, PricingContent};
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_pricing(content: &PricingContent, tokens: &ThemeTokens) -> RenderNode {
    shell("section", SectionKind::Pricing, tokens)
        .child(heading(&content.title))
        .child_if(content.subtitle.as_deref(), |subtitle| {
            lede(subtitle, tokens)
        })
        .child(
            RenderNode::new("div")
                .attr("class", "pricing__grid")
                .children(content.plans.iter().map(|plan| plan_card(plan, tokens))),
        )
}

fn plan_card(plan: &Plan, tokens: &ThemeTokens) -> RenderNode {
    let class = if plan.highlighted {
        "plan plan--highlighted"
    } else {
        "plan"
    };
    let border = if plan.highlighted {
        format!("2px solid {}", tokens.accent_color)
    } else {
        format!("1px solid {}", tokens.border_color)
    };

    let price = RenderNode::new("div")
        .attr("class", "plan__price")
        .child(RenderNode::new("span").text(&plan.price))
        .child_if(plan.period.as_deref(), |period| {
            RenderNode::new("span")
                .attr("class", "plan__period")
                .style("color", &tokens.secondary_text_color)
                .text(period)
        });

    RenderNode::new("article")
        .attr("class", class)
        .style("background-color", &tokens.surface_color)
        .style("border", border)
        .child(RenderNode::new("h3").text(&plan.name))
        .child(price)
        .child_if(
            (!plan.features.is_empty()).then_some(&plan.features),
            |features| {
                RenderNode::new("ul").attr("class", "plan__features").children(
                    features
                        .iter()
                        .map(|feature| RenderNode::new("li").text(feature)),
                )
            },
        )
        .child_if(plan.cta_label.as_deref(), |label| {
            link_button(label, plan.cta_href.as_deref(), tokens)
        })
}
