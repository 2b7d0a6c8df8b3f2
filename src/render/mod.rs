//! Section rendering.
//!
//! Turns validated section configs into [`RenderNode`] trees. Rendering
//! is pure: a config, resolved theme tokens, and an interaction-state
//! snapshot map to the same tree every time. Hosts drive interactivity
//! by mutating controllers from [`crate::interact`] and re-rendering.

pub mod node;
pub mod sections;

pub use node::RenderNode;

use chrono::{Datelike, Utc};

use crate::interact::{Accordion, CategoryFilter, CyclicIndex};
use crate::section::schema::{SectionConfig, SectionContent};
use crate::theme;

/// Ambient inputs shared by every section in a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Year stamped into the footer copyright line.
    pub current_year: i32,
}

impl RenderContext {
    /// Context for the current wall-clock year.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_year: Utc::now().year(),
        }
    }

    /// Context pinned to a specific year.
    #[must_use]
    pub const fn with_year(current_year: i32) -> Self {
        Self { current_year }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one section with its kind's initial interaction state.
///
/// Theme tokens resolve from the config's overrides against the kind's
/// default palette. Interactive kinds render as first mounted: carousels
/// at slide zero, filters on "All", the first FAQ entry open, counters
/// at zero, forms unsubmitted.
#[must_use]
pub fn render_section(config: &SectionConfig, ctx: &RenderContext) -> RenderNode {
    let tokens = theme::resolve(config.kind(), &config.theme);
    match &config.content {
        SectionContent::Hero(content) => sections::render_hero(content, &tokens),
        SectionContent::Header(content) => sections::render_header(content, &tokens),
        SectionContent::About(content) => sections::render_about(content, &tokens),
        SectionContent::Services(content) => sections::render_services(content, &tokens),
        SectionContent::Pricing(content) => sections::render_pricing(content, &tokens),
        SectionContent::Testimonial(content) => {
            let position = CyclicIndex::new(content.testimonials.len());
            sections::render_testimonial(content, &tokens, &position)
        }
        SectionContent::Faq(content) => {
            let accordion = Accordion::with_open(content.entries.len(), 0);
            sections::render_faq(content, &tokens, &accordion)
        }
        SectionContent::Gallery(content) => {
            let filter = CategoryFilter::new(content.categories.clone());
            sections::render_gallery(content, &tokens, &filter)
        }
        SectionContent::Portfolio(content) => {
            let filter = CategoryFilter::new(content.categories.clone());
            sections::render_portfolio(content, &tokens, &filter)
        }
        SectionContent::Team(content) => sections::render_team(content, &tokens),
        SectionContent::Timeline(content) => sections::render_timeline(content, &tokens),
        SectionContent::Stats(content) => {
            let values = vec![0.0; content.stats.len()];
            sections::render_stats(content, &tokens, &values)
        }
        SectionContent::Newsletter(content) => {
            sections::render_newsletter(content, &tokens, false)
        }
        SectionContent::Cta(content) => sections::render_cta(content, &tokens),
        SectionContent::Contact(content) => sections::render_contact(content, &tokens, false),
        SectionContent::Footer(content) => sections::render_footer(content, &tokens, ctx),
        SectionContent::Slider(content) => {
            let position = CyclicIndex::new(content.slides.len());
            sections::render_slider(content, &tokens, &position)
        }
    }
}

/// Renders a list of sections into one `main` container, in order.
#[must_use]
pub fn render_page(configs: &[SectionConfig], ctx: &RenderContext) -> RenderNode {
    RenderNode::new("main")
        .attr("class", "page")
        .children(configs.iter().map(|config| render_section(config, ctx)))
}
