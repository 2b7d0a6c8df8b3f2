//! Stock catalog content.
//!
//! Typed content records for the six stock sections, the header
//! variant, and the sample website. Everything here is built from the
//! section schema types and serialized at insert time, so a schema
//! change that breaks the catalog fails to compile instead of seeding
//! garbage.
//!
//! No copyright year is baked into any record; the footer renderer
//! stamps the year at render time.

use crate::section::schema::{
    AboutContent, ContactContent, FooterContent, HeaderContent, HeroContent, NavLink,
    SectionConfig, SectionContent, ServiceItem, ServicesContent, SocialLink,
};

/// Inert placeholder hash for seeded accounts. Not a usable credential;
/// real hashes are written by the account layer, which is out of scope
/// here.
pub const PLACEHOLDER_HASH: &str = "$placeholder$not-a-real-credential";

/// Seeded administrator account.
pub const ADMIN_USER: (&str, &str) = ("admin", "admin@sitewright.dev");

/// Seeded regular account; owns the sample website.
pub const DEMO_USER: (&str, &str) = ("demo", "demo@sitewright.dev");

/// Sample website display name and URL slug.
pub const SAMPLE_WEBSITE: (&str, &str) = ("Acme Studio", "acme-studio");

/// Display label of the stock header's alternate record.
pub const HEADER_VARIANT_NAME: &str = "Transparent Header";

/// One stock section as it goes into the catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Category the section files under.
    pub category: &'static str,
    /// Display name of the section.
    pub name: &'static str,
    /// Default content record.
    pub content: SectionContent,
}

/// Catalog categories in display order.
#[must_use]
pub const fn categories() -> [&'static str; 6] {
    [
        "Headers",
        "Heroes",
        "About",
        "Services",
        "Contact",
        "Footers",
    ]
}

/// The six stock sections, one per category, in category order.
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            category: "Headers",
            name: "Classic Header",
            content: SectionContent::Header(default_header()),
        },
        CatalogEntry {
            category: "Heroes",
            name: "Banner Hero",
            content: SectionContent::Hero(default_hero()),
        },
        CatalogEntry {
            category: "About",
            name: "Company Story",
            content: SectionContent::About(default_about()),
        },
        CatalogEntry {
            category: "Services",
            name: "Service Grid",
            content: SectionContent::Services(default_services()),
        },
        CatalogEntry {
            category: "Contact",
            name: "Contact Card",
            content: SectionContent::Contact(default_contact()),
        },
        CatalogEntry {
            category: "Footers",
            name: "Simple Footer",
            content: SectionContent::Footer(default_footer()),
        },
    ]
}

/// Alternate record for the stock header: brand only, links kept
/// minimal so the bar can sit over a hero image.
#[must_use]
pub fn transparent_header() -> SectionContent {
    SectionContent::Header(HeaderContent {
        brand: "Acme Studio".to_string(),
        logo_url: None,
        links: vec![
            NavLink {
                label: "Work".to_string(),
                href: "#portfolio".to_string(),
            },
            NavLink {
                label: "Contact".to_string(),
                href: "#contact".to_string(),
            },
        ],
        cta_label: None,
        cta_href: None,
    })
}

/// Pages of the sample website: the six stock sections assembled into
/// one landing page, no theme overrides.
#[must_use]
pub fn sample_pages() -> Vec<SectionConfig> {
    catalog()
        .into_iter()
        .map(|entry| SectionConfig::new(entry.content))
        .collect()
}

fn default_header() -> HeaderContent {
    HeaderContent {
        brand: "Acme Studio".to_string(),
        logo_url: None,
        links: vec![
            NavLink {
                label: "Home".to_string(),
                href: "#home".to_string(),
            },
            NavLink {
                label: "About".to_string(),
                href: "#about".to_string(),
            },
            NavLink {
                label: "Services".to_string(),
                href: "#services".to_string(),
            },
            NavLink {
                label: "Contact".to_string(),
                href: "#contact".to_string(),
            },
        ],
        cta_label: Some("Get started".to_string()),
        cta_href: Some("#contact".to_string()),
    }
}

fn default_hero() -> HeroContent {
    HeroContent {
        title: "Websites that work as hard as you do".to_string(),
        subtitle: Some("Launch a polished site in an afternoon, not a quarter.".to_string()),
        cta_label: Some("See our work".to_string()),
        cta_href: Some("#portfolio".to_string()),
        background_image_url: None,
    }
}

fn default_about() -> AboutContent {
    AboutContent {
        title: "About us".to_string(),
        body: "We are a small studio that builds fast, accessible websites \
               for teams that would rather ship than fiddle with tooling."
            .to_string(),
        image_url: None,
        highlights: vec![
            "Founded in 2019".to_string(),
            "Over 150 sites launched".to_string(),
            "Performance budget on every build".to_string(),
        ],
    }
}

fn default_services() -> ServicesContent {
    ServicesContent {
        title: "What we do".to_string(),
        subtitle: Some("Three ways we can help.".to_string()),
        services: vec![
            ServiceItem {
                title: "Design".to_string(),
                description: "Layouts and visual systems that scale with your content."
                    .to_string(),
                icon: Some("pen".to_string()),
            },
            ServiceItem {
                title: "Build".to_string(),
                description: "Hand-tuned pages that load fast on any connection.".to_string(),
                icon: Some("hammer".to_string()),
            },
            ServiceItem {
                title: "Support".to_string(),
                description: "Updates, fixes, and a human on the other end of the line."
                    .to_string(),
                icon: Some("lifebuoy".to_string()),
            },
        ],
    }
}

fn default_contact() -> ContactContent {
    ContactContent {
        title: "Get in touch".to_string(),
        subtitle: Some("We answer within one business day.".to_string()),
        address: Some("1 Main Street, Springfield".to_string()),
        email: Some("hello@acme-studio.example".to_string()),
        phone: Some("+1 555 0100".to_string()),
    }
}

fn default_footer() -> FooterContent {
    FooterContent {
        company_name: "Acme Studio".to_string(),
        tagline: Some("Websites that work.".to_string()),
        links: vec![
            NavLink {
                label: "Privacy".to_string(),
                href: "/privacy".to_string(),
            },
            NavLink {
                label: "Terms".to_string(),
                href: "/terms".to_string(),
            },
        ],
        socials: vec![
            SocialLink {
                network: "twitter".to_string(),
                href: "https://twitter.com/acmestudio".to_string(),
            },
            SocialLink {
                network: "github".to_string(),
                href: "https://github.com/acmestudio".to_string(),
            },
        ],
    }
}
