//! Semantic validation for section configs.
//!
//! The typed deserializer already enforces structure (required fields
//! present, correct types). This pass catches what the types cannot:
//! required text that is present but blank, filter chip lists that do
//! not match their items, carousels with nothing to cycle, and theme
//! overrides that silently fall back.
//!
//! All issues are collected in one pass. Errors block loading; warnings
//! are reported and the config loads anyway.

use std::collections::HashSet;

use crate::error::{Severity, ValidationIssue};
use crate::section::schema::{
    FaqContent, GalleryContent, PortfolioContent, PricingContent, SectionConfig, SectionContent,
    ServicesContent, SliderContent, StatsContent, TeamContent, TestimonialContent,
    TimelineContent,
};
use crate::theme::ThemeOverrides;

// ============================================================================
// Validation Result
// ============================================================================

/// Result of validating a list of section configs.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Section config validator.
///
/// Checks every section in one pass, accumulating all errors and
/// warnings rather than stopping at the first issue. Paths use JSON
/// key names, e.g. `sections[2].content.plans[0].name`.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a list of section configs and returns the result.
    pub fn validate(&mut self, sections: &[SectionConfig]) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        for (index, section) in sections.iter().enumerate() {
            let path = format!("sections[{index}]");
            self.check_content(&path, &section.content);
            self.check_theme(&path, &section.theme);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Content Checks
    // ========================================================================

    fn check_content(&mut self, path: &str, content: &SectionContent) {
        let path = format!("{path}.content");
        match content {
            SectionContent::Hero(hero) => {
                self.require_text(&format!("{path}.title"), "title", &hero.title);
                self.check_cta_pair(&path, hero.cta_label.as_deref(), hero.cta_href.as_deref());
            }
            SectionContent::Header(header) => {
                self.require_text(&format!("{path}.brand"), "brand", &header.brand);
                for (i, link) in header.links.iter().enumerate() {
                    self.require_text(&format!("{path}.links[{i}].label"), "label", &link.label);
                }
                self.check_cta_pair(
                    &path,
                    header.cta_label.as_deref(),
                    header.cta_href.as_deref(),
                );
            }
            SectionContent::About(about) => {
                self.require_text(&format!("{path}.title"), "title", &about.title);
                self.require_text(&format!("{path}.body"), "body", &about.body);
            }
            SectionContent::Services(services) => self.check_services(&path, services),
            SectionContent::Pricing(pricing) => self.check_pricing(&path, pricing),
            SectionContent::Testimonial(testimonial) => {
                self.check_testimonial(&path, testimonial);
            }
            SectionContent::Faq(faq) => self.check_faq(&path, faq),
            SectionContent::Gallery(gallery) => self.check_gallery(&path, gallery),
            SectionContent::Portfolio(portfolio) => self.check_portfolio(&path, portfolio),
            SectionContent::Team(team) => self.check_team(&path, team),
            SectionContent::Timeline(timeline) => self.check_timeline(&path, timeline),
            SectionContent::Stats(stats) => self.check_stats(&path, stats),
            SectionContent::Newsletter(newsletter) => {
                self.require_text(&format!("{path}.title"), "title", &newsletter.title);
            }
            SectionContent::Cta(cta) => {
                self.require_text(&format!("{path}.title"), "title", &cta.title);
                self.require_text(
                    &format!("{path}.buttonLabel"),
                    "buttonLabel",
                    &cta.button_label,
                );
            }
            SectionContent::Contact(contact) => {
                self.require_text(&format!("{path}.title"), "title", &contact.title);
            }
            SectionContent::Footer(footer) => {
                self.require_text(
                    &format!("{path}.companyName"),
                    "companyName",
                    &footer.company_name,
                );
                for (i, link) in footer.links.iter().enumerate() {
                    self.require_text(&format!("{path}.links[{i}].label"), "label", &link.label);
                }
            }
            SectionContent::Slider(slider) => self.check_slider(&path, slider),
        }
    }

    fn check_services(&mut self, path: &str, services: &ServicesContent) {
        self.require_text(&format!("{path}.title"), "title", &services.title);
        for (i, item) in services.services.iter().enumerate() {
            let item_path = format!("{path}.services[{i}]");
            self.require_text(&format!("{item_path}.title"), "title", &item.title);
            self.require_text(
                &format!("{item_path}.description"),
                "description",
                &item.description,
            );
        }
    }

    fn check_pricing(&mut self, path: &str, pricing: &PricingContent) {
        self.require_text(&format!("{path}.title"), "title", &pricing.title);
        if pricing.plans.is_empty() {
            self.add_error(&format!("{path}.plans"), "pricing section has no plans");
        }
        for (i, plan) in pricing.plans.iter().enumerate() {
            let plan_path = format!("{path}.plans[{i}]");
            self.require_text(&format!("{plan_path}.name"), "name", &plan.name);
            self.require_text(&format!("{plan_path}.price"), "price", &plan.price);
            self.check_cta_pair(&plan_path, plan.cta_label.as_deref(), plan.cta_href.as_deref());
        }
    }

    fn check_testimonial(&mut self, path: &str, testimonial: &TestimonialContent) {
        if testimonial.testimonials.is_empty() {
            self.add_warning(
                &format!("{path}.testimonials"),
                "carousel has no slides and renders an empty section",
            );
        }
        for (i, quote) in testimonial.testimonials.iter().enumerate() {
            let quote_path = format!("{path}.testimonials[{i}]");
            self.require_text(&format!("{quote_path}.quote"), "quote", &quote.quote);
            self.require_text(&format!("{quote_path}.author"), "author", &quote.author);
        }
    }

    fn check_faq(&mut self, path: &str, faq: &FaqContent) {
        for (i, entry) in faq.entries.iter().enumerate() {
            let entry_path = format!("{path}.entries[{i}]");
            self.require_text(&format!("{entry_path}.question"), "question", &entry.question);
            self.require_text(&format!("{entry_path}.answer"), "answer", &entry.answer);
        }
    }

    fn check_gallery(&mut self, path: &str, gallery: &GalleryContent) {
        self.check_category_chips(path, &gallery.categories);
        for (i, item) in gallery.items.iter().enumerate() {
            let item_path = format!("{path}.items[{i}]");
            self.require_text(&format!("{item_path}.imageUrl"), "imageUrl", &item.image_url);
            self.check_item_category(&item_path, item.category.as_deref(), &gallery.categories);
        }
    }

    fn check_portfolio(&mut self, path: &str, portfolio: &PortfolioContent) {
        self.check_category_chips(path, &portfolio.categories);
        for (i, project) in portfolio.projects.iter().enumerate() {
            let project_path = format!("{path}.projects[{i}]");
            self.require_text(&format!("{project_path}.title"), "title", &project.title);
            self.check_item_category(
                &project_path,
                project.category.as_deref(),
                &portfolio.categories,
            );
        }
    }

    fn check_team(&mut self, path: &str, team: &TeamContent) {
        for (i, member) in team.members.iter().enumerate() {
            let member_path = format!("{path}.members[{i}]");
            self.require_text(&format!("{member_path}.name"), "name", &member.name);
            self.require_text(&format!("{member_path}.role"), "role", &member.role);
        }
    }

    fn check_timeline(&mut self, path: &str, timeline: &TimelineContent) {
        for (i, event) in timeline.events.iter().enumerate() {
            let event_path = format!("{path}.events[{i}]");
            self.require_text(&format!("{event_path}.date"), "date", &event.date);
            self.require_text(&format!("{event_path}.title"), "title", &event.title);
        }
    }

    fn check_stats(&mut self, path: &str, stats: &StatsContent) {
        for (i, stat) in stats.stats.iter().enumerate() {
            let stat_path = format!("{path}.stats[{i}]");
            self.require_text(&format!("{stat_path}.label"), "label", &stat.label);
            self.require_text(&format!("{stat_path}.value"), "value", &stat.value);
        }
    }

    fn check_slider(&mut self, path: &str, slider: &SliderContent) {
        if slider.slides.is_empty() {
            self.add_warning(
                &format!("{path}.slides"),
                "carousel has no slides and renders an empty section",
            );
        }
        for (i, slide) in slider.slides.iter().enumerate() {
            let slide_path = format!("{path}.slides[{i}]");
            self.require_text(&format!("{slide_path}.title"), "title", &slide.title);
            self.check_cta_pair(&slide_path, slide.cta_label.as_deref(), slide.cta_href.as_deref());
        }
    }

    // ========================================================================
    // Theme Checks
    // ========================================================================

    fn check_theme(&mut self, path: &str, theme: &ThemeOverrides) {
        let fields = [
            ("bgColor", theme.bg_color.as_deref()),
            ("textColor", theme.text_color.as_deref()),
            ("accentColor", theme.accent_color.as_deref()),
            ("secondaryTextColor", theme.secondary_text_color.as_deref()),
            ("surfaceColor", theme.surface_color.as_deref()),
            ("borderColor", theme.border_color.as_deref()),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    self.add_warning(
                        &format!("{path}.theme.{name}"),
                        "empty override falls back to the palette default",
                    );
                }
            }
        }
    }

    // ========================================================================
    // Shared Checks
    // ========================================================================

    /// Errors when a required text field is blank or whitespace-only.
    fn require_text(&mut self, path: &str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.add_error(path, &format!("{label} must not be empty"));
        }
    }

    /// Warns when a CTA href is supplied without a label. The renderer
    /// keys the button on the label, so the href alone is dead data.
    fn check_cta_pair(&mut self, path: &str, label: Option<&str>, href: Option<&str>) {
        if href.is_some() && label.is_none() {
            self.add_warning(
                &format!("{path}.ctaHref"),
                "ctaHref has no effect without ctaLabel",
            );
        }
    }

    /// Warns on duplicate filter chip labels. The chip row renders the
    /// list as given, so duplicates produce two identical chips.
    fn check_category_chips(&mut self, path: &str, categories: &[String]) {
        let mut seen = HashSet::new();
        for (i, category) in categories.iter().enumerate() {
            if !seen.insert(category.as_str()) {
                self.add_warning(
                    &format!("{path}.categories[{i}]"),
                    &format!("duplicate filter category '{category}'"),
                );
            }
        }
    }

    /// Warns when an item references a category absent from the chip
    /// list; such items only appear under "All".
    fn check_item_category(&mut self, path: &str, category: Option<&str>, chips: &[String]) {
        if let Some(category) = category {
            if !chips.is_empty() && !chips.iter().any(|c| c == category) {
                self.add_warning(
                    &format!("{path}.category"),
                    &format!("category '{category}' is not in the filter chip list"),
                );
            }
        }
    }

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
