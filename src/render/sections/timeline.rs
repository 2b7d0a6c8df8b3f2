//! Milestone timeline renderer.

use crate::render::node::RenderNode;
use crate::render::sections::{heading, shell};
use crate::section::SectionKind;
use crate::section::schema::TimelineContent;
use crate::theme::ThemeTokens;

#[must_use]
pub fn render_timeline(content: &TimelineContent, tokens: &ThemeTokens) -> RenderNode {
    shell("section", SectionKind::Timeline, tokens)
        .child_if(content.title.as_deref(), heading)
        .child(
            RenderNode::new("ol").attr("class", "timeline").children(
                content.events.iter().map(|event| {
                    RenderNode::new("li")
                        .attr("class", "timeline__event")
                        .style("border-left", format!("2px solid {}", tokens.border_color))
                        .child(
                            RenderNode::new("span")
                                .attr("class", "timeline__date")
                                .style("color", &tokens.accent_color)
                                .text(&event.date),
                        )
                        .child(RenderNode::new("h3").text(&event.title))
                        .child_if(event.description.as_deref(), |description| {
                            RenderNode::new("p")
                                .style("color", &tokens.secondary_text_color)
                                .text(description)
                        })
                }),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::schema::TimelineEvent;
    use crate::theme;

    fn tokens() -> ThemeTokens {
        theme::resolve(SectionKind::Timeline, &theme::ThemeOverrides::default())
    }

    #[test]
    fn events_render_in_order_as_list_items() {
        let content = TimelineContent {
            title: Some("Our story".to_string()),
            events: vec![
                TimelineEvent {
                    date: "2019".to_string(),
                    title: "Founded".to_string(),
                    description: Some("Two people, one laptop.".to_string()),
                },
                TimelineEvent {
                    date: "2022".to_string(),
                    title: "First hundred customers".to_string(),
                    description: None,
                },
            ],
        };
        let node = render_timeline(&content, &tokens());

        let list = &node.children[1];
        assert_eq!(list.tag, "ol");
        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[0].children[0].text.as_deref(), Some("2019"));
        assert_eq!(list.children[0].children.len(), 3);
        assert_eq!(list.children[1].children.len(), 2);
    }

    #[test]
    fn dates_take_the_accent_color() {
        let content = TimelineContent {
            title: None,
            events: vec![TimelineEvent {
                date: "2019".to_string(),
                title: "Founded".to_string(),
                description: None,
            }],
        };
        let node = render_timeline(&content, &tokens());
        let date = &node.children[0].children[0].children[0];
        assert_eq!(date.style["color"], tokens().accent_color);
    }
}
