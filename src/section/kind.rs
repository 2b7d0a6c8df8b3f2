//! Section kind tags.
//!
//! The closed set of section kinds the renderer understands. The tag is
//! the `kind` discriminant in section config JSON.

use serde::{Deserialize, Serialize};

/// A section kind tag.
///
/// Every page section belongs to exactly one kind; the kind selects the
/// content schema, the default theme palette, and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Full-width opening banner with headline and call to action.
    Hero,
    /// Top navigation bar with brand and links.
    Header,
    /// Company/about block with body copy and highlights.
    About,
    /// Grid of service cards.
    Services,
    /// Pricing plan comparison.
    Pricing,
    /// Testimonial carousel.
    Testimonial,
    /// Accordion of questions and answers.
    Faq,
    /// Filterable image grid.
    Gallery,
    /// Filterable project grid.
    Portfolio,
    /// Team member cards.
    Team,
    /// Chronological milestone list.
    Timeline,
    /// Animated numeric counters.
    Stats,
    /// Newsletter signup form.
    Newsletter,
    /// Standalone call-to-action banner.
    Cta,
    /// Contact details plus message form.
    Contact,
    /// Page footer with link columns.
    Footer,
    /// Generic slide carousel.
    Slider,
}

impl SectionKind {
    /// All known kinds, in catalog order.
    pub const ALL: [Self; 17] = [
        Self::Hero,
        Self::Header,
        Self::About,
        Self::Services,
        Self::Pricing,
        Self::Testimonial,
        Self::Faq,
        Self::Gallery,
        Self::Portfolio,
        Self::Team,
        Self::Timeline,
        Self::Stats,
        Self::Newsletter,
        Self::Cta,
        Self::Contact,
        Self::Footer,
        Self::Slider,
    ];

    /// The JSON tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Header => "header",
            Self::About => "about",
            Self::Services => "services",
            Self::Pricing => "pricing",
            Self::Testimonial => "testimonial",
            Self::Faq => "faq",
            Self::Gallery => "gallery",
            Self::Portfolio => "portfolio",
            Self::Team => "team",
            Self::Timeline => "timeline",
            Self::Stats => "stats",
            Self::Newsletter => "newsletter",
            Self::Cta => "cta",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::Slider => "slider",
        }
    }

    /// Looks up a kind by its JSON tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == tag)
    }

    /// Returns the known kind closest to `tag` by string similarity,
    /// for "did you mean" diagnostics on typo'd tags.
    #[must_use]
    pub fn suggest(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .map(|k| (k, strsim::jaro_winkler(tag, k.as_str())))
            .filter(|&(_, score)| score >= 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(k, _)| k)
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_tag(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&SectionKind::Faq).unwrap();
        assert_eq!(json, "\"faq\"");
        let kind: SectionKind = serde_json::from_str("\"gallery\"").unwrap();
        assert_eq!(kind, SectionKind::Gallery);
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(SectionKind::from_tag("sidebar"), None);
    }

    #[test]
    fn suggest_catches_typos() {
        assert_eq!(SectionKind::suggest("galery"), Some(SectionKind::Gallery));
        assert_eq!(SectionKind::suggest("herro"), Some(SectionKind::Hero));
        assert_eq!(
            SectionKind::suggest("testimonials"),
            Some(SectionKind::Testimonial)
        );
    }

    #[test]
    fn suggest_gives_up_on_garbage() {
        assert_eq!(SectionKind::suggest("zzzzqqqq"), None);
    }

    #[test]
    fn all_covers_every_tag_once() {
        let mut tags: Vec<&str> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), SectionKind::ALL.len());
    }
}
