//! Hex color parsing and the color-with-alpha helper.
//!
//! Theme token values are passed through to the style layer verbatim, so
//! parsing here is best-effort: values that are not hex colors are left
//! untouched rather than rejected.

/// An RGBA color parsed from a hex token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Parses `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    ///
    /// Returns `None` for anything else (named colors, `rgb()` functions,
    /// gradients); such values flow through the theme untouched.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 | 4 => {
                // "f" expands to 0xff, matching CSS shorthand
                let expand = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .ok()
                        .map(|n| (n << 4) | n)
                };
                Some(Self {
                    r: expand(0)?,
                    g: expand(1)?,
                    b: expand(2)?,
                    a: if hex.len() == 4 { expand(3)? } else { 0xff },
                })
            }
            6 | 8 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self {
                    r: byte(0)?,
                    g: byte(2)?,
                    b: byte(4)?,
                    a: if hex.len() == 8 { byte(6)? } else { 0xff },
                })
            }
            _ => None,
        }
    }

    /// Formats as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Returns the same color with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Applies an alpha to a hex color token value.
///
/// `alpha` is clamped to `0.0..=1.0` and mapped to the nearest alpha byte.
/// Non-hex input is returned unchanged so arbitrary token values keep
/// flowing through to the style layer.
#[must_use]
pub fn with_alpha(value: &str, alpha: f32) -> String {
    Rgba::parse(value).map_or_else(
        || value.to_string(),
        |color| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            color.with_alpha(byte).to_hex()
        },
    )
}
