//! Blend modes used by the builtin effects

use image::Rgb;

use crate::color::Color;

/// Per-channel blend modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Replace: result = blend
    #[default]
    Normal,
    /// Darkens underlying colors: result = base * blend
    Multiply,
    /// Lightens underlying colors: result = 1 - (1 - base) * (1 - blend)
    Screen,
    /// Additive blending: result = min(1, base + blend)
    Add,
}

impl BlendMode {
    /// Apply blend mode to a single color channel (values are 0.0-1.0)
    pub(crate) fn blend_channel(&self, base: f32, blend: f32) -> f32 {
        match self {
            BlendMode::Normal => blend,
            BlendMode::Multiply => base * blend,
            BlendMode::Screen => 1.0 - (1.0 - base) * (1.0 - blend),
            BlendMode::Add => (base + blend).min(1.0),
        }
    }

    /// Blend `over` onto `base`, then mix the result back toward `base` by
    /// `1 - opacity`.
    pub fn blend(&self, base: Color, over: Color, opacity: f32) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        let mix = |b: u8, o: u8| -> u8 {
            let b = b as f32 / 255.0;
            let blended = self.blend_channel(b, o as f32 / 255.0);
            let out = b + (blended - b) * opacity;
            (out.clamp(0.0, 1.0) * 255.0).round() as u8
        };

        let Rgb([br, bg, bb]) = base;
        let Rgb([or, og, ob]) = over;
        Rgb([mix(br, or), mix(bg, og), mix(bb, ob)])
    }
}
