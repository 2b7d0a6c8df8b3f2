//! Contact section renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{confirmation, heading, lede, shell};
use crate::section::SectionKind;
use crate::section::schema::ContactContent;
use crate::theme::ThemeTokens;

const CONFIRMATION_TEXT: &str = "Thanks! We'll be in touch.";

#[must_use]
pub fn render_contact(
    content: &ContactContent,
    tokens: &ThemeTokens,
    submitted: bool,
) -> RenderNode {
    let mut root = shell("section", SectionKind::Contact, tokens)
        .child(heading(&content.title))
        .child_if(content.subtitle.as_deref(), |subtitle| {
            lede(subtitle, tokens)
        });

    let details = details(content, tokens);
    if !details.children.is_empty() {
        root = root.child(details);
    }

    if submitted {
        root.child(confirmation(CONFIRMATION_TEXT, tokens))
    } else {
        root.child(contact_form(tokens))
    }
}

/// Address, email, and phone links. Empty when the config has none.
fn details(content: &ContactContent, tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("div")
        .attr("class", "contact__details")
        .child_if(content.address.as_deref(), |address| {
            RenderNode::new("span").text(address)
        })
        .child_if(content.email.as_deref(), |email| {
            RenderNode::new("a")
                .attr("href", format!("mailto:{email}"))
                .style("color", &tokens.accent_color)
                .text(email)
        })
        .child_if(content.phone.as_deref(), |phone| {
            RenderNode::new("a")
                .attr("href", format!("tel:{phone}"))
                .style("color", &tokens.accent_color)
                .text(phone)
        })
}

fn contact_form(tokens: &ThemeTokens) -> RenderNode {
    RenderNode::new("form")
        .attr("class", "contact__form")
        .child(
            RenderNode::new("input")
                .attr("type", "text")
                .attr("name", "name")
                .attr("placeholder", "Name"),
        )
        .child(
            RenderNode::new("input")
                .attr("type", "email")
                .attr("name", "email")
                .attr("placeholder", "Email"),
        )
        .child(
            RenderNode::new("textarea")
                .attr("name", "message")
                .attr("placeholder", "Message"),
        )
        .child(
            RenderNode::new("button")
                .attr("type", "submit")
                .style("background-color", &tokens.accent_color)
                .style("color", &tokens.bg_color)
                .text("Send message"),
        )
}
