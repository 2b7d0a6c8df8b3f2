//! Newsletter signup renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{confirmation, heading, lede, shell};
use crate::section::SectionKind;
use crate::section::schema::NewsletterContent;
use crate::theme::ThemeTokens;

const DEFAULT_PLACEHOLDER: &str = "Your email";
const DEFAULT_BUTTON_LABEL: &str = "Subscribe";
const CONFIRMATION_TEXT: &str = "Thanks for subscribing!";

#[must_use]
pub fn render_newsletter(
    content: &NewsletterContent,
    tokens: &ThemeTokens,
    submitted: bool,
) -> RenderNode {
    let node = shell("section", SectionKind::Newsletter, tokens)
        .child(heading(&content.title))
        .child_if(content.description.as_deref(), |description| {
            lede(description, tokens)
        });

    if submitted {
        node.child(confirmation(CONFIRMATION_TEXT, tokens))
    } else {
        node.child(signup_form(content, tokens))
    }
}

fn signup_form(content: &NewsletterContent, tokens: &ThemeTokens) -> RenderNode {
    let placeholder = content.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER);
    let label = content
        .button_label
        .as_deref()
        .unwrap_or(DEFAULT_BUTTON_LABEL);

    RenderNode::new("form")
        .attr("class", "newsletter__form")
        .child(
            RenderNode::new("input")
                .attr("type", "email")
                .attr("name", "email")
                .attr("placeholder", placeholder),
        )
        .child(
            RenderNode::new("button")
                .attr("type", "submit")
                .style("background-color", &tokens.accent_color)
                .style("color", &tokens.bg_color)
                .text(label),
        )
}
