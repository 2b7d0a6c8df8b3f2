//! Statistics band renderer.
//!
//! Stat values render from a live snapshot so counters can climb toward
//! their configured targets. [`counter_targets`] extracts the numeric
//! goals a [`crate::interact::StatCounter`] animates, and [`stat_display`]
//! formats the in-flight value while leaving non-numeric stats (for
//! example `"24/7"`) verbatim.

use crate::render::node::RenderNode;
use crate::render::sections::{heading, shell};
use crate::section::SectionKind;
use crate::section::schema::StatsContent;
use crate::theme::ThemeTokens;

/// Numeric targets for the counter animation, one per stat.
///
/// Stats whose value does not parse as a number get a target of zero;
/// [`stat_display`] shows their configured text unchanged instead.
#[must_use]
pub fn counter_targets(content: &StatsContent) -> Vec<f64> {
    content
        .stats
        .iter()
        .map(|stat| stat.value.parse().unwrap_or(0.0))
        .collect()
}

/// Display text for a single stat given the animation's current value.
#[must_use]
pub fn stat_display(configured: &str, current: f64) -> String {
    if configured.parse::<f64>().is_ok() {
        format!("{current:.0}")
    } else {
        configured.to_string()
    }
}

#[must_use]
pub fn render_stats(content: &StatsContent, tokens: &ThemeTokens, values: &[f64]) -> RenderNode {
    shell("section", SectionKind::Stats, tokens)
        .child_if(content.title.as_deref(), heading)
        .child(
            RenderNode::new("div").attr("class", "stats__row").children(
                content.stats.iter().enumerate().map(|(i, stat)| {
                    let current = values.get(i).copied().unwrap_or_default();
                    RenderNode::new("div")
                        .attr("class", "stat")
                        .child(
                            RenderNode::new("span")
                                .attr("class", "stat__value")
                                .style("color", &tokens.accent_color)
                                .text(stat_display(&stat.value, current)),
                        )
                        .child(
                            RenderNode::new("span")
                                .attr("class", "stat__label")
                                .style("color", &tokens.secondary_text_color)
                                .text(&stat.label),
                        )
                }),
            ),
        )
}
