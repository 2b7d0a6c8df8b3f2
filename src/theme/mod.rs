//! Theme tokens and resolution.
//!
//! Every section kind carries a compile-time default palette. A section
//! config may override individual tokens; resolution picks the override
//! when it is present and non-empty, and the default otherwise. Token
//! values are never validated or coerced: any non-empty string reaches
//! the style layer verbatim.

pub mod color;

pub use color::{Rgba, with_alpha};

use serde::{Deserialize, Serialize};

use crate::section::SectionKind;

// ---------------------------------------------------------------------------
// Overrides (per-instance, partial)
// ---------------------------------------------------------------------------

/// Per-instance theme overrides.
///
/// A partial, keyed structure of named optional tokens. Unknown keys in
/// the JSON are ignored, so configs produced by newer editors still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    /// Section background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Primary text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Accent color for buttons, links, and highlights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    /// Secondary/muted text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text_color: Option<String>,
    /// Card/surface background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_color: Option<String>,
    /// Border and divider color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl ThemeOverrides {
    /// Returns `true` when no token is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bg_color.is_none()
            && self.text_color.is_none()
            && self.accent_color.is_none()
            && self.secondary_text_color.is_none()
            && self.surface_color.is_none()
            && self.border_color.is_none()
    }
}

impl From<ThemeTokens> for ThemeOverrides {
    /// Reinterprets resolved tokens as a full override set.
    fn from(tokens: ThemeTokens) -> Self {
        Self {
            bg_color: Some(tokens.bg_color),
            text_color: Some(tokens.text_color),
            accent_color: Some(tokens.accent_color),
            secondary_text_color: Some(tokens.secondary_text_color),
            surface_color: Some(tokens.surface_color),
            border_color: Some(tokens.border_color),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved tokens
// ---------------------------------------------------------------------------

/// Fully resolved theme tokens for one section instance.
///
/// Produced by [`resolve`]; every token holds a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    /// Section background color.
    pub bg_color: String,
    /// Primary text color.
    pub text_color: String,
    /// Accent color for buttons, links, and highlights.
    pub accent_color: String,
    /// Secondary/muted text color.
    pub secondary_text_color: String,
    /// Card/surface background color.
    pub surface_color: String,
    /// Border and divider color.
    pub border_color: String,
}

// ---------------------------------------------------------------------------
// Default palettes
// ---------------------------------------------------------------------------

/// A compile-time default palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefaults {
    /// Section background color.
    pub bg_color: &'static str,
    /// Primary text color.
    pub text_color: &'static str,
    /// Accent color.
    pub accent_color: &'static str,
    /// Secondary/muted text color.
    pub secondary_text_color: &'static str,
    /// Card/surface background color.
    pub surface_color: &'static str,
    /// Border and divider color.
    pub border_color: &'static str,
}

impl ThemeDefaults {
    /// Materializes the palette as owned tokens.
    #[must_use]
    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens {
            bg_color: self.bg_color.to_string(),
            text_color: self.text_color.to_string(),
            accent_color: self.accent_color.to_string(),
            secondary_text_color: self.secondary_text_color.to_string(),
            surface_color: self.surface_color.to_string(),
            border_color: self.border_color.to_string(),
        }
    }
}

/// White background, dark text. The default for content-heavy sections.
pub const LIGHT: ThemeDefaults = ThemeDefaults {
    bg_color: "#ffffff",
    text_color: "#1f2937",
    accent_color: "#2563eb",
    secondary_text_color: "#6b7280",
    surface_color: "#f3f4f6",
    border_color: "#e5e7eb",
};

/// Dark background, light text. Opening and closing bands.
pub const DARK: ThemeDefaults = ThemeDefaults {
    bg_color: "#111827",
    text_color: "#f9fafb",
    accent_color: "#60a5fa",
    secondary_text_color: "#9ca3af",
    surface_color: "#1f2937",
    border_color: "#374151",
};

/// Soft gray background with white cards. Alternating mid-page bands.
pub const TINTED: ThemeDefaults = ThemeDefaults {
    bg_color: "#f9fafb",
    text_color: "#1f2937",
    accent_color: "#2563eb",
    secondary_text_color: "#4b5563",
    surface_color: "#ffffff",
    border_color: "#e5e7eb",
};

/// Returns the default palette for a section kind.
#[must_use]
pub const fn defaults_for(kind: SectionKind) -> &'static ThemeDefaults {
    match kind {
        SectionKind::Hero
        | SectionKind::Stats
        | SectionKind::Cta
        | SectionKind::Footer
        | SectionKind::Slider => &DARK,
        SectionKind::Services
        | SectionKind::Testimonial
        | SectionKind::Team
        | SectionKind::Newsletter => &TINTED,
        SectionKind::Header
        | SectionKind::About
        | SectionKind::Pricing
        | SectionKind::Faq
        | SectionKind::Gallery
        | SectionKind::Portfolio
        | SectionKind::Timeline
        | SectionKind::Contact => &LIGHT,
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolves theme tokens for a section instance.
///
/// For every token the resolved value is the override when present and
/// non-empty, else the kind's default. Deterministic and idempotent:
/// feeding resolved tokens back in as overrides yields the same tokens.
#[must_use]
pub fn resolve(kind: SectionKind, overrides: &ThemeOverrides) -> ThemeTokens {
    let defaults = defaults_for(kind);
    ThemeTokens {
        bg_color: pick(overrides.bg_color.as_deref(), defaults.bg_color),
        text_color: pick(overrides.text_color.as_deref(), defaults.text_color),
        accent_color: pick(overrides.accent_color.as_deref(), defaults.accent_color),
        secondary_text_color: pick(
            overrides.secondary_text_color.as_deref(),
            defaults.secondary_text_color,
        ),
        surface_color: pick(overrides.surface_color.as_deref(), defaults.surface_color),
        border_color: pick(overrides.border_color.as_deref(), defaults.border_color),
    }
}

/// Override wins only when present and non-empty.
fn pick(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_all_defaults() {
        let tokens = resolve(SectionKind::Hero, &ThemeOverrides::default());
        assert_eq!(tokens.bg_color, DARK.bg_color);
        assert_eq!(tokens.accent_color, DARK.accent_color);
    }

    #[test]
    fn resolve_override_wins() {
        let overrides = ThemeOverrides {
            accent_color: Some("#ff00ff".to_string()),
            ..ThemeOverrides::default()
        };
        let tokens = resolve(SectionKind::About, &overrides);
        assert_eq!(tokens.accent_color, "#ff00ff");
        assert_eq!(tokens.bg_color, LIGHT.bg_color);
    }

    #[test]
    fn resolve_empty_override_falls_back() {
        let overrides = ThemeOverrides {
            bg_color: Some(String::new()),
            ..ThemeOverrides::default()
        };
        let tokens = resolve(SectionKind::Pricing, &overrides);
        assert_eq!(tokens.bg_color, LIGHT.bg_color);
    }

    #[test]
    fn resolve_accepts_arbitrary_strings() {
        // No validation: the style layer gets whatever the editor sent.
        let overrides = ThemeOverrides {
            bg_color: Some("linear-gradient(90deg, red, blue)".to_string()),
            ..ThemeOverrides::default()
        };
        let tokens = resolve(SectionKind::Hero, &overrides);
        assert_eq!(tokens.bg_color, "linear-gradient(90deg, red, blue)");
    }

    #[test]
    fn resolve_is_idempotent() {
        let overrides = ThemeOverrides {
            bg_color: Some("#101010".to_string()),
            text_color: Some(String::new()),
            ..ThemeOverrides::default()
        };
        let once = resolve(SectionKind::Footer, &overrides);
        let twice = resolve(SectionKind::Footer, &ThemeOverrides::from(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn overrides_camel_case_and_unknown_keys() {
        let json = r##"{"bgColor": "#123456", "glowColor": "#ffffff"}"##;
        let overrides: ThemeOverrides = serde_json::from_str(json).unwrap();
        assert_eq!(overrides.bg_color.as_deref(), Some("#123456"));
        assert!(overrides.text_color.is_none());
    }

    #[test]
    fn overrides_is_empty() {
        assert!(ThemeOverrides::default().is_empty());
        let overrides = ThemeOverrides {
            border_color: Some("#000".to_string()),
            ..ThemeOverrides::default()
        };
        assert!(!overrides.is_empty());
    }

    #[test]
    fn every_kind_has_a_palette() {
        for kind in SectionKind::ALL {
            let defaults = defaults_for(kind);
            assert!(defaults.bg_color.starts_with('#'));
        }
    }

    #[test]
    fn tokens_serialize_camel_case() {
        let tokens = resolve(SectionKind::Header, &ThemeOverrides::default());
        let json = serde_json::to_value(&tokens).unwrap();
        assert!(json.get("bgColor").is_some());
        assert!(json.get("secondaryTextColor").is_some());
    }
}
