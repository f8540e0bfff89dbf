//! Color type and CSS color string parsing
//!
//! Cells resolve to 8-bit RGB. Background colors come in as strings:
//! - Hex: `#RGB`, `#RRGGBB`
//! - Functional and named CSS colors: `rgb(...)`, `hsl(...)`, `red`, ...

use image::{Rgb, Rgba};
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

/// An 8-bit-per-channel RGB color.
pub type Color = Rgb<u8>;

/// Pure black.
pub const BLACK: Color = Rgb([0, 0, 0]);

/// Pure white.
pub const WHITE: Color = Rgb([255, 255, 255]);

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3 or 6 hex chars after #)
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// Parse a CSS color string into an RGB color. Alpha, if present, is dropped.
///
/// ```
/// use layerpaint::color::parse_color;
///
/// assert_eq!(parse_color("#F00").unwrap(), image::Rgb([255, 0, 0]));
/// assert_eq!(parse_color("#102030").unwrap(), image::Rgb([16, 32, 48]));
/// assert_eq!(parse_color("blue").unwrap(), image::Rgb([0, 0, 255]));
/// ```
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    parse_css_color(s)
}

fn parse_hex_color(hex: &str) -> Result<Color, ColorError> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    let digits: Vec<u8> = hex.chars().map(hex_value).collect();
    match digits.as_slice() {
        [r, g, b] => Ok(Rgb([r * 17, g * 17, b * 17])),
        [r1, r2, g1, g2, b1, b2] => Ok(Rgb([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2])),
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Value of an ASCII hex digit. Callers have already validated the digit.
fn hex_value(c: char) -> u8 {
    c.to_digit(16).unwrap_or(0) as u8
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, named colors)
fn parse_css_color(s: &str) -> Result<Color, ColorError> {
    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb_color = css_color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Rgb([rgba.red, rgba.green, rgba.blue])),
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

/// Widen to an opaque RGBA pixel for image output.
pub fn to_rgba(color: Color) -> Rgba<u8> {
    let Rgb([r, g, b]) = color;
    Rgba([r, g, b, 255])
}

/// Format as `#RRGGBB`.
pub fn to_hex(color: Color) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
