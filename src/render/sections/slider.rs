//! Full-width slider renderer.
//!
//! Renders the active slide only; the host swaps slides by re-rendering
//! with an advanced [`CyclicIndex`].

use crate::interact::CyclicIndex;
use crate::render::node::RenderNode;
use crate::render::sections::{dots, link_button, shell};
use crate::section::SectionKind;
use crate::section::schema::SliderContent;
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_slider(
    content: &SliderContent,
    tokens: &ThemeTokens,
    position: &CyclicIndex,
) -> RenderNode {
    let node = shell("section", SectionKind::Slider, tokens).child_if(
        content.slides.get(position.current()),
        |slide| {
            RenderNode::new("div")
                .attr("class", "slide")
                .child_if(slide.image_url.as_deref(), |url| {
                    RenderNode::new("img")
                        .attr("class", "slide__image")
                        .attr("src", url)
                        .attr("alt", slide.title.as_str())
                })
                .child(RenderNode::new("h2").text(&slide.title))
                .child_if(slide.subtitle.as_deref(), |subtitle| {
                    RenderNode::new("p").text(subtitle)
                })
                .child_if(slide.cta_label.as_deref(), |label| {
                    link_button(label, slide.cta_href.as_deref(), tokens)
                })
        },
    );

    if content.slides.len() > 1 {
        node.child(dots(position, tokens))
    } else {
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::schema::Slide;
    use crate::theme;

    fn slide(title: &str) -> Slide {
        Slide {
            title: title.to_string(),
            subtitle: None,
            image_url: None,
            cta_label: None,
            cta_href: None,
        }
    }

    fn tokens() -> ThemeTokens {
        theme::resolve(SectionKind::Slider, &theme::ThemeOverrides::default())
    }

    #[test]
    fn only_the_active_slide_renders() {
        let content = SliderContent {
            slides: vec![slide("First"), slide("Second"), slide("Third")],
        };
        let mut position = CyclicIndex::new(3);
        position.advance();
        let node = render_slider(&content, &tokens(), &position);

        let active = &node.children[0];
        assert_eq!(active.attrs["class"], "slide");
        assert_eq!(active.children[0].text.as_deref(), Some("Second"));
        assert!(!node.to_html().contains("First"));
    }

    #[test]
    fn dots_track_the_active_position() {
        let content = SliderContent {
            slides: vec![slide("First"), slide("Second")],
        };
        let position = CyclicIndex::new(2);
        let node = render_slider(&content, &tokens(), &position);

        let row = node.children.last().unwrap();
        assert_eq!(row.children.len(), 2);
        assert!(row.children[0].attrs["class"].contains("dot--active"));
    }

    #[test]
    fn single_slide_gets_no_dots() {
        let content = SliderContent {
            slides: vec![slide("Only")],
        };
        let node = render_slider(&content, &tokens(), &CyclicIndex::new(1));
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn empty_slider_renders_an_empty_shell() {
        let content = SliderContent { slides: Vec::new() };
        let node = render_slider(&content, &tokens(), &CyclicIndex::new(0));
        assert!(node.children.is_empty());
    }

    #[test]
    fn full_slide_renders_image_subtitle_and_cta() {
        let content = SliderContent {
            slides: vec![Slide {
                title: "Launch week".to_string(),
                subtitle: Some("Seven days of releases.".to_string()),
                image_url: Some("https://img.example/launch.jpg".to_string()),
                cta_label: Some("See the lineup".to_string()),
                cta_href: Some("/launch".to_string()),
            }],
        };
        let node = render_slider(&content, &tokens(), &CyclicIndex::new(1));
        let slide = &node.children[0];
        assert_eq!(slide.children.len(), 4);
        assert_eq!(slide.children[0].tag, "img");
        assert_eq!(slide.children[3].attrs["href"], "/launch");
    }
}
