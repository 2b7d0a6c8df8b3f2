//! Testimonial carousel renderer.

use crate::interact::CyclicIndex;
use crate::render::node::RenderNode;
use crate::render::sections::{dots, heading, shell};
use crate::section::SectionKind;
use crate::section::schema::{Testimonial, TestimonialContent};
use crate::theme::ThemeTokens;

/// Renders the quote at the carousel position. Only the active quote is
/// in the tree; advancing the position re-renders with the next one.
#[must_use]
pub fn render_testimonial(
    content: &TestimonialContent,
    tokens: &ThemeTokens,
    position: &CyclicIndex,
) -> RenderNode {
    let mut root = shell("section", SectionKind::Testimonial, tokens)
        .child_if(content.title.as_deref(), heading);

    if let Some(active) = content.testimonials.get(position.current()) {
        root = root.child(quote(active, tokens));
    }
    if content.testimonials.len() > 1 {
        root = root.child(dots(position, tokens));
    }
    root
}

fn quote(testimonial: &Testimonial, tokens: &ThemeTokens) -> RenderNode {
    let attribution = RenderNode::new("footer")
        .child_if(testimonial.avatar_url.as_deref(), |url| {
            RenderNode::new("img")
                .attr("class", "testimonial__avatar")
                .attr("src", url)
                .attr("alt", &testimonial.author)
        })
        .child(RenderNode::new("cite").text(&testimonial.author))
        .child_if(testimonial.role.as_deref(), |role| {
            RenderNode::new("span")
                .attr("class", "testimonial__role")
                .style("color", &tokens.secondary_text_color)
                .text(role)
        });

    RenderNode::new("blockquote")
        .attr("class", "testimonial__quote")
        .child(RenderNode::new("p").text(&testimonial.quote))
        .child(attribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn tokens() -> ThemeTokens {
        theme::resolve(SectionKind::Testimonial, &theme::ThemeOverrides::default())
    }

    fn content(count: usize) -> TestimonialContent {
        TestimonialContent {
            title: None,
            testimonials: (0..count)
                .map(|i| Testimonial {
                    quote: format!("Quote {i}"),
                    author: format!("Author {i}"),
                    role: None,
                    avatar_url: None,
                })
                .collect(),
        }
    }

    #[test]
    fn only_the_active_quote_renders() {
        let content = content(3);
        let mut position = CyclicIndex::new(3);
        position.advance();

        let node = render_testimonial(&content, &tokens(), &position);
        let quotes: Vec<_> = node
            .children
            .iter()
            .filter(|child| child.tag == "blockquote")
            .collect();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].children[0].text.as_deref(), Some("Quote 1"));
    }

    #[test]
    fn dots_mark_the_active_slide() {
        let content = content(3);
        let mut position = CyclicIndex::new(3);
        position.advance();
        position.advance();

        let node = render_testimonial(&content, &tokens(), &position);
        let dots = node.children.last().unwrap();
        assert_eq!(dots.attrs["class"], "carousel__dots");
        assert_eq!(dots.children.len(), 3);
        assert_eq!(dots.children[2].attrs["class"], "dot dot--active");
        assert_eq!(dots.children[0].attrs["class"], "dot");
    }

    #[test]
    fn single_quote_has_no_dots() {
        let content = content(1);
        let node = render_testimonial(&content, &tokens(), &CyclicIndex::new(1));
        assert!(node.children.iter().all(|child| child.tag != "div"));
    }

    #[test]
    fn empty_carousel_renders_an_empty_shell() {
        let content = content(0);
        let node = render_testimonial(&content, &tokens(), &CyclicIndex::new(0));
        assert!(node.children.is_empty());
    }
}
