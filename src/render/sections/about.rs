//! About block renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{heading, shell};
use crate::section::SectionKind;
use crate::section::schema::AboutContent;
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_about(content: &AboutContent, tokens: &ThemeTokens) -> RenderNode {
    shell("section", SectionKind::About, tokens)
        .child(heading(&content.title))
        .child_if(content.image_url.as_deref(), |url| {
            RenderNode::new("img")
                .attr("class", "about__image")
                .attr("src", url)
                .attr("alt", &content.title)
        })
        .child(
            RenderNode::new("p")
                .attr("class", "about__body")
                .text(&content.body),
        )
        .child_if(
            (!content.highlights.is_empty()).then_some(&content.highlights),
            |highlights| {
                RenderNode::new("ul")
                    .attr("class", "about__highlights")
                    .children(
                        highlights
                            .iter()
                            .map(|highlight| RenderNode::new("li").text(highlight)),
                    )
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn tokens() -> ThemeTokens {
        theme::resolve(SectionKind::About, &theme::ThemeOverrides::default())
    }

    #[test]
    fn title_then_body() {
        let content = AboutContent {
            title: "Who we are".to_string(),
            body: "A small studio.".to_string(),
            image_url: None,
            highlights: vec![],
        };
        let node = render_about(&content, &tokens());
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].text.as_deref(), Some("Who we are"));
        assert_eq!(node.children[1].text.as_deref(), Some("A small studio."));
    }

    #[test]
    fn highlights_render_as_a_list() {
        let content = AboutContent {
            title: "Who we are".to_string(),
            body: "A small studio.".to_string(),
            image_url: Some("/team.jpg".to_string()),
            highlights: vec!["Founded 2019".to_string(), "Fully remote".to_string()],
        };
        let node = render_about(&content, &tokens());
        assert_eq!(node.children.len(), 4);

        let list = &node.children[3];
        assert_eq!(list.tag, "ul");
        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[0].text.as_deref(), Some("Founded 2019"));
    }
}
