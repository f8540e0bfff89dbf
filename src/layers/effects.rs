//! Builtin layer effects
//!
//! Each function here has the [`EffectFn`](super::EffectFn) signature and is
//! registered, in [`BUILTIN`] order, by `LayerCatalog::builtin()`.

use image::Rgb;

use super::blend::BlendMode;
use super::EffectFn;
use crate::color::{Color, BLACK, WHITE};

/// Builtin effects in catalog index order.
pub const BUILTIN: &[(&str, EffectFn)] = &[
    ("rainbow", rainbow),
    ("black", black),
    ("lighten", lighten),
    ("invert", invert),
    ("red", red),
    ("green", green),
    ("blue", blue),
    ("greyscale", greyscale),
    ("sparkle", sparkle),
    ("darken", darken),
];

/// Degrees the rainbow hue advances per cell step and per timestamp tick.
const RAINBOW_CELL_STEP: u64 = 15;
const RAINBOW_TIME_STEP: u64 = 5;

/// Wash the cell with a hue that drifts across the canvas and over time.
pub fn rainbow(color: Color, timestamp: u64, x: usize, y: usize) -> Color {
    let cells = (x as u64 % 360 + y as u64 % 360) % 360;
    let hue = (cells * RAINBOW_CELL_STEP + (timestamp % 360) * RAINBOW_TIME_STEP) % 360;
    BlendMode::Normal.blend(color, hue_to_rgb(hue as f32), 0.5)
}

pub fn black(_color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    BLACK
}

pub fn lighten(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    BlendMode::Screen.blend(color, WHITE, 0.4)
}

/// Channel-wise `255 - c`. Also the transform behind the Set store's special mode.
pub fn invert(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    let Rgb([r, g, b]) = color;
    Rgb([255 - r, 255 - g, 255 - b])
}

pub fn red(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    BlendMode::Add.blend(color, Rgb([128, 0, 0]), 1.0)
}

pub fn green(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    BlendMode::Add.blend(color, Rgb([0, 128, 0]), 1.0)
}

pub fn blue(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    BlendMode::Add.blend(color, Rgb([0, 0, 128]), 1.0)
}

pub fn greyscale(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    let Rgb([r, g, b]) = color;
    let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
    Rgb([avg, avg, avg])
}

/// Roughly one cell in four flashes white; which ones depends on position and time.
pub fn sparkle(color: Color, timestamp: u64, x: usize, y: usize) -> Color {
    let h = (x as u64).wrapping_mul(73_856_093)
        ^ (y as u64).wrapping_mul(19_349_663)
        ^ timestamp.wrapping_mul(83_492_791);
    if h % 4 == 0 {
        WHITE
    } else {
        color
    }
}

pub fn darken(color: Color, _timestamp: u64, _x: usize, _y: usize) -> Color {
    BlendMode::Multiply.blend(color, BLACK, 0.4)
}

/// Fully saturated, full value color for `hue` in degrees.
fn hue_to_rgb(hue: f32) -> Color {
    let h = (hue % 360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let to_u8 = |v: f32| (v * 255.0).round() as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_unique() {
        let mut names: Vec<&str> = BUILTIN.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN.len());
    }

    #[test]
    fn test_invert_is_involution() {
        let c = Rgb([12, 200, 77]);
        assert_eq!(invert(invert(c, 0, 0, 0), 0, 0, 0), c);
        assert_eq!(invert(BLACK, 0, 0, 0), WHITE);
    }

    #[test]
    fn test_primary_tints() {
        assert_eq!(red(BLACK, 0, 0, 0), Rgb([128, 0, 0]));
        assert_eq!(green(BLACK, 0, 0, 0), Rgb([0, 128, 0]));
        assert_eq!(blue(Rgb([0, 0, 200]), 0, 0, 0), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_lighten_and_darken_move_in_opposite_directions() {
        let grey = Rgb([100, 100, 100]);
        let Rgb([l, _, _]) = lighten(grey, 0, 0, 0);
        let Rgb([d, _, _]) = darken(grey, 0, 0, 0);
        assert!(l > 100);
        assert!(d < 100);
        assert_eq!(darken(grey, 0, 0, 0), Rgb([60, 60, 60]));
    }

    #[test]
    fn test_greyscale_averages() {
        assert_eq!(greyscale(Rgb([30, 60, 90]), 0, 0, 0), Rgb([60, 60, 60]));
    }

    #[test]
    fn test_sparkle_is_deterministic() {
        let c = Rgb([1, 2, 3]);
        for x in 0..8 {
            let out = sparkle(c, 7, x, 3);
            assert_eq!(out, sparkle(c, 7, x, 3));
            assert!(out == c || out == WHITE);
        }
        // origin at time zero hashes to zero
        assert_eq!(sparkle(c, 0, 0, 0), WHITE);
    }

    #[test]
    fn test_hue_to_rgb_primaries() {
        assert_eq!(hue_to_rgb(0.0), Rgb([255, 0, 0]));
        assert_eq!(hue_to_rgb(120.0), Rgb([0, 255, 0]));
        assert_eq!(hue_to_rgb(240.0), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_rainbow_varies_with_position() {
        assert_ne!(rainbow(BLACK, 0, 0, 0), rainbow(BLACK, 0, 4, 0));
        assert_eq!(rainbow(BLACK, 0, 0, 0), Rgb([128, 0, 0]));
    }

    #[test]
    fn test_rainbow_extreme_inputs() {
        let _ = rainbow(BLACK, u64::MAX, usize::MAX, usize::MAX);
        // u64::MAX is 15 mod 360
        assert_eq!(rainbow(BLACK, u64::MAX, 0, 0), rainbow(BLACK, 15, 0, 0));
        assert_eq!(rainbow(BLACK, 360, 24, 0), rainbow(BLACK, 0, 0, 0));
    }
}
