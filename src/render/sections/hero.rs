//! Hero banner renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{link_button, shell};
use crate::section::SectionKind;
use crate::section::schema::HeroContent;
use crate::theme::{ThemeTokens, with_alpha};

/// Renders the opening banner. A configured background image sits under
/// a scrim tinted from the background token so the headline stays
/// readable.
#[must_use]
pub fn render_hero(content: &HeroContent, tokens: &ThemeTokens) -> RenderNode {
    let mut root = shell("section", SectionKind::Hero, tokens);

    if let Some(url) = &content.background_image_url {
        let scrim = with_alpha(&tokens.bg_color, 0.87);
        root = root.style(
            "background-image",
            format!("linear-gradient({scrim}, {scrim}), url({url})"),
        );
    }

    root.child(
        RenderNode::new("h1")
            .attr("class", "hero__title")
            .text(&content.title),
    )
    .child_if(content.subtitle.as_deref(), |subtitle| {
        RenderNode::new("p")
            .attr("class", "hero__subtitle")
            .style("color", &tokens.secondary_text_color)
            .text(subtitle)
    })
    .child_if(content.cta_label.as_deref(), |label| {
        link_button(label, content.cta_href.as_deref(), tokens)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn content(title: &str) -> HeroContent {
        HeroContent {
            title: title.to_string(),
            subtitle: None,
            cta_label: None,
            cta_href: None,
            background_image_url: None,
        }
    }

    fn tokens() -> ThemeTokens {
        theme::resolve(SectionKind::Hero, &theme::ThemeOverrides::default())
    }

    #[test]
    fn minimal_hero_is_just_the_title() {
        let node = render_hero(&content("Build faster"), &tokens());
        assert_eq!(node.attrs["class"], "section section--hero");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].tag, "h1");
        assert_eq!(node.children[0].text.as_deref(), Some("Build faster"));
    }

    #[test]
    fn subtitle_and_cta_render_when_present() {
        let mut hero = content("Build faster");
        hero.subtitle = Some("Ship today".to_string());
        hero.cta_label = Some("Get started".to_string());
        hero.cta_href = Some("/signup".to_string());

        let node = render_hero(&hero, &tokens());
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[1].text.as_deref(), Some("Ship today"));
        assert_eq!(node.children[2].attrs["href"], "/signup");
    }

    #[test]
    fn cta_without_href_points_at_hash() {
        let mut hero = content("Hi");
        hero.cta_label = Some("Go".to_string());

        let node = render_hero(&hero, &tokens());
        assert_eq!(node.children[1].attrs["href"], "#");
    }

    #[test]
    fn background_image_gets_a_scrim() {
        let mut hero = content("Hi");
        hero.background_image_url = Some("https://cdn.example.com/hero.jpg".to_string());

        let node = render_hero(&hero, &tokens());
        let background = &node.style["background-image"];
        assert!(background.contains("url(https://cdn.example.com/hero.jpg)"));
        // The scrim is the bg token with alpha applied.
        assert!(background.contains("#111827de"));
    }
}
