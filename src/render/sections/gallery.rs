//! Filterable gallery renderer.

use crate::interact::CategoryFilter;
use crate::render::node::RenderNode;
use crate::render::sections::{chip_row, heading, shell};
use crate::section::SectionKind;
use crate::section::schema::GalleryContent;
use crate::theme::ThemeTokens;

/// Renders the chip row and the items visible under the selected chip.
/// Hidden items are left out of the tree entirely.
#[must_use]
pub fn render_gallery(
    content: &GalleryContent,
    tokens: &ThemeTokens,
    filter: &CategoryFilter,
) -> RenderNode {
    let mut root =
        shell("section", SectionKind::Gallery, tokens).child_if(content.title.as_deref(), heading);

    if !content.categories.is_empty() {
        root = root.child(chip_row(filter, tokens));
    }

    root.child(
        RenderNode::new("div")
            .attr("class", "gallery__grid")
            .children(filter.visible(&content.items).into_iter().map(|item| {
                RenderNode::new("figure")
                    .attr("class", "gallery__item")
                    .child(
                        RenderNode::new("img")
                            .attr("src", &item.image_url)
                            .attr("alt", item.caption.as_deref().unwrap_or_default()),
                    )
                    .child_if(item.caption.as_deref(), |caption| {
                        RenderNode::new("figcaption")
                            .style("color", &tokens.secondary_text_color)
                            .text(caption)
                    })
            })),
    )
}
