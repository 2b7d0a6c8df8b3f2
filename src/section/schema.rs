//! Section content schemas.
//!
//! Every section kind defines its own fixed content schema. Required
//! fields are plain types enforced at deserialization; optional fields
//! are `Option`s (or defaulted lists) whose absence silently omits the
//! dependent fragment at render time. Unknown JSON keys are ignored for
//! forward compatibility.
//!
//! The wire shape is `{ "kind": <tag>, "content": { ... }, "theme": { ... } }`
//! with camelCase content keys.

use serde::{Deserialize, Serialize};

use crate::section::kind::SectionKind;
use crate::theme::ThemeOverrides;

// ============================================================================
// Section Config
// ============================================================================

/// One configured section instance: typed content plus theme overrides.
///
/// Constructed by the editor/database layer, handed to the renderer on
/// every paint, and discarded. Renderers hold no owned persistent data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Kind tag plus the kind-specific content record.
    #[serde(flatten)]
    pub content: SectionContent,

    /// Per-instance theme token overrides.
    #[serde(default, skip_serializing_if = "ThemeOverrides::is_empty")]
    pub theme: ThemeOverrides,
}

impl SectionConfig {
    /// Wraps a content record with no theme overrides.
    #[must_use]
    pub fn new(content: SectionContent) -> Self {
        Self {
            content,
            theme: ThemeOverrides::default(),
        }
    }

    /// The section kind this config renders as.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}

/// Kind-tagged content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum SectionContent {
    /// Opening banner.
    Hero(HeroContent),
    /// Top navigation bar.
    Header(HeaderContent),
    /// About block.
    About(AboutContent),
    /// Service card grid.
    Services(ServicesContent),
    /// Pricing plans.
    Pricing(PricingContent),
    /// Testimonial carousel.
    Testimonial(TestimonialContent),
    /// FAQ accordion.
    Faq(FaqContent),
    /// Filterable image grid.
    Gallery(GalleryContent),
    /// Filterable project grid.
    Portfolio(PortfolioContent),
    /// Team member cards.
    Team(TeamContent),
    /// Milestone timeline.
    Timeline(TimelineContent),
    /// Animated counters.
    Stats(StatsContent),
    /// Newsletter signup.
    Newsletter(NewsletterContent),
    /// Call-to-action banner.
    Cta(CtaContent),
    /// Contact details and form.
    Contact(ContactContent),
    /// Page footer.
    Footer(FooterContent),
    /// Generic slide carousel.
    Slider(SliderContent),
}

impl SectionContent {
    /// The kind tag of this content record.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        match self {
            Self::Hero(_) => SectionKind::Hero,
            Self::Header(_) => SectionKind::Header,
            Self::About(_) => SectionKind::About,
            Self::Services(_) => SectionKind::Services,
            Self::Pricing(_) => SectionKind::Pricing,
            Self::Testimonial(_) => SectionKind::Testimonial,
            Self::Faq(_) => SectionKind::Faq,
            Self::Gallery(_) => SectionKind::Gallery,
            Self::Portfolio(_) => SectionKind::Portfolio,
            Self::Team(_) => SectionKind::Team,
            Self::Timeline(_) => SectionKind::Timeline,
            Self::Stats(_) => SectionKind::Stats,
            Self::Newsletter(_) => SectionKind::Newsletter,
            Self::Cta(_) => SectionKind::Cta,
            Self::Contact(_) => SectionKind::Contact,
            Self::Footer(_) => SectionKind::Footer,
            Self::Slider(_) => SectionKind::Slider,
        }
    }
}

// ============================================================================
// Shared Sub-Records
// ============================================================================

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    /// Visible link text.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Network name (e.g. "twitter", "linkedin").
    pub network: String,
    /// Profile URL.
    pub href: String,
}

// ============================================================================
// Per-Kind Content
// ============================================================================

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    /// Headline.
    pub title: String,
    /// Supporting line under the headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Call-to-action button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// Call-to-action target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    /// Full-bleed background image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
}

/// Header/navigation content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    /// Brand name shown when no logo is supplied.
    pub brand: String,
    /// Logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Navigation links, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<NavLink>,
    /// Optional trailing call-to-action button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// Call-to-action target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
}

/// About block content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    /// Block heading.
    pub title: String,
    /// Body copy.
    pub body: String,
    /// Side image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Short bullet highlights.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

/// One service card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// Card heading.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Icon name or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Services grid content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesContent {
    /// Section heading.
    pub title: String,
    /// Supporting line under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Service cards, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceItem>,
}

/// One pricing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Plan name.
    pub name: String,
    /// Price display string (e.g. "$29").
    pub price: String,
    /// Billing period (e.g. "/month").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Feature lines, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Call-to-action button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// Call-to-action target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
    /// Visually emphasized plan.
    #[serde(default)]
    pub highlighted: bool,
}

/// Pricing section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContent {
    /// Section heading.
    pub title: String,
    /// Supporting line under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Plans, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plans: Vec<Plan>,
}

/// One testimonial quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// The quote itself.
    pub quote: String,
    /// Who said it.
    pub author: String,
    /// Author's role or company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Testimonial carousel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Quotes, in carousel order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
}

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    /// The question line (always visible).
    pub question: String,
    /// The answer (visible while the entry is open).
    pub answer: String,
}

/// FAQ accordion content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entries, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<FaqEntry>,
}

/// One gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Image URL.
    pub image_url: String,
    /// Caption under the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Filter category this item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Filterable gallery content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Filter chip labels, in display order. Callers supply these
    /// deduplicated; duplicates render as given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Images, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<GalleryItem>,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    /// Project title.
    pub title: String,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Filter category this project belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Case-study link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Filterable portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Filter chip labels, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Projects, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<PortfolioProject>,
}

/// One team member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Member name.
    pub name: String,
    /// Role or title.
    pub role: String,
    /// Photo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Social profile links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<SocialLink>,
}

/// Team section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Members, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<TeamMember>,
}

/// One timeline milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Display date (free-form, e.g. "2019" or "March 2021").
    pub date: String,
    /// Milestone title.
    pub title: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Timeline section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Milestones, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TimelineEvent>,
}

/// One stat.
///
/// Numeric values (parseable as a number) animate from zero at mount;
/// anything else displays verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    /// Label under the number.
    pub label: String,
    /// Target value as a display string (e.g. "1500" or "24/7").
    pub value: String,
}

/// Stats band content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsContent {
    /// Section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Stats, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
}

/// Newsletter signup content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterContent {
    /// Section heading.
    pub title: String,
    /// Supporting line under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Email input placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Submit button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
}

/// Call-to-action banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    /// Banner headline.
    pub title: String,
    /// Supporting line under the headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Button text.
    pub button_label: String,
    /// Button target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_href: Option<String>,
}

/// Contact section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    /// Section heading.
    pub title: String,
    /// Supporting line under the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Footer content.
///
/// The copyright year is never part of the content record; the renderer
/// derives it from the render context at paint time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    /// Company name in the copyright line.
    pub company_name: String,
    /// Short tagline next to the brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Footer links, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<NavLink>,
    /// Social profile links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<SocialLink>,
}

/// One slide in the generic slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Slide headline.
    pub title: String,
    /// Supporting line under the headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Slide image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Call-to-action button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// Call-to-action target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_href: Option<String>,
}

/// Generic slide carousel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderContent {
    /// Slides, in carousel order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slides: Vec<Slide>,
}

// ============================================================================
// Tests
// ============================================================================
