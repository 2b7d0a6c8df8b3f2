//! List command handler.
//!
//! Prints the section catalog: the known kinds with their default
//! palettes, and the palettes themselves.

use serde::Serialize;

use crate::cli::args::{ListArgs, ListCategory, OutputFormat};
use crate::error::SitewrightError;
use crate::section::kind::SectionKind;
use crate::theme::{self, ThemeDefaults, ThemeTokens};

const PALETTES: [(&str, &ThemeDefaults); 3] = [
    ("light", &theme::LIGHT),
    ("dark", &theme::DARK),
    ("tinted", &theme::TINTED),
];

/// One section kind with its default palette name.
#[derive(Debug, Serialize)]
struct KindEntry {
    kind: &'static str,
    palette: &'static str,
}

/// One named palette with its token values.
#[derive(Debug, Serialize)]
struct PaletteEntry {
    name: &'static str,
    #[serde(flatten)]
    tokens: ThemeTokens,
}

/// The listed catalog slice.
#[derive(Debug, Serialize)]
struct Catalog {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    kinds: Vec<KindEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    palettes: Vec<PaletteEntry>,
}

/// List the section catalog.
///
/// # Errors
///
/// Returns a JSON error if serializing the catalog fails.
pub fn run(args: &ListArgs) -> Result<(), SitewrightError> {
    let catalog = build_catalog(args.category);
    match args.format {
        OutputFormat::Human => print_human(&catalog),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }
    Ok(())
}

fn build_catalog(category: ListCategory) -> Catalog {
    let kinds = if matches!(category, ListCategory::Kinds | ListCategory::All) {
        SectionKind::ALL
            .iter()
            .map(|&kind| KindEntry {
                kind: kind.as_str(),
                palette: palette_name(theme::defaults_for(kind)),
            })
            .collect()
    } else {
        Vec::new()
    };

    let palettes = if matches!(category, ListCategory::Palettes | ListCategory::All) {
        PALETTES
            .iter()
            .map(|&(name, palette)| PaletteEntry {
                name,
                tokens: palette.tokens(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Catalog { kinds, palettes }
}

fn palette_name(palette: &ThemeDefaults) -> &'static str {
    if *palette == theme::DARK {
        "dark"
    } else if *palette == theme::TINTED {
        "tinted"
    } else {
        "light"
    }
}

fn print_human(catalog: &Catalog) {
    if !catalog.kinds.is_empty() {
        println!("kinds:");
        for entry in &catalog.kinds {
            println!("  {:<12} {}", entry.kind, entry.palette);
        }
    }

    if !catalog.palettes.is_empty() {
        if !catalog.kinds.is_empty() {
            println!();
        }
        println!("palettes:");
        for entry in &catalog.palettes {
            println!("  {}:", entry.name);
            for (label, value) in token_rows(&entry.tokens) {
                println!("    {label:<20} {value}");
            }
        }
    }
}

fn token_rows(tokens: &ThemeTokens) -> [(&'static str, &str); 6] {
    [
        ("bgColor", tokens.bg_color.as_str()),
        ("textColor", tokens.text_color.as_str()),
        ("accentColor", tokens.accent_color.as_str()),
        ("secondaryTextColor", tokens.secondary_text_color.as_str()),
        ("surfaceColor", tokens.surface_color.as_str()),
        ("borderColor", tokens.border_color.as_str()),
    ]
}
