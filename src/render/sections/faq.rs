//! FAQ accordion renderer.

use crate::interact::Accordion;
use crate::render::node::RenderNode;
use crate::render::sections::{heading, shell};
use crate::section::SectionKind;
use crate::section::schema::FaqContent;
use crate::theme::ThemeTokens;

/// Renders the entry list with at most one answer expanded. Question
/// rows are always present; the answer node exists only for the open
/// entry.
#[must_use]
pub fn render_faq(content: &FaqContent, tokens: &ThemeTokens, accordion: &Accordion) -> RenderNode {
    shell("section", SectionKind::Faq, tokens)
        .child_if(content.title.as_deref(), heading)
        .child(
            RenderNode::new("div").attr("class", "faq__list").children(
                content.entries.iter().enumerate().map(|(index, entry)| {
                    let open = accordion.is_open(index);
                    let class = if open {
                        "faq__item faq__item--open"
                    } else {
                        "faq__item"
                    };

                    let item = RenderNode::new("div")
                        .attr("class", class)
                        .style("border-bottom", format!("1px solid {}", tokens.border_color))
                        .child(
                            RenderNode::new("button")
                                .attr("class", "faq__question")
                                .attr("data-index", index.to_string())
                                .attr("aria-expanded", open.to_string())
                                .text(&entry.question),
                        );

                    if open {
                        item.child(
                            RenderNode::new("div")
                                .attr("class", "faq__answer")
                                .style("color", &tokens.secondary_text_color)
                                .text(&entry.answer),
                        )
                    } else {
                        item
                    }
                }),
            ),
        )
}
