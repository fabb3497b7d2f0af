//! Solid disc layers: the highlight and the core.

use image::Rgba;
use palette::Srgb;

use super::{LayerConfig, LayerEffect, RenderContext};

/// Badge blue, used by the gradient and the core.
pub const CORE_BLUE: Srgb<u8> = Srgb::<u8>::new(33, 150, 243);

/// Lighter blue used by the highlight disc.
pub const HIGHLIGHT_BLUE: Srgb<u8> = Srgb::<u8>::new(100, 181, 246);

/// Configuration for a single filled disc centred on the badge.
///
/// The radius is `round(outer_radius * radius_ratio)`, so the disc scales
/// with the gradient rather than with the raw icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscConfig {
    /// Fill colour.
    pub color: Srgb<u8>,

    /// Fill alpha; 255 paints the disc fully opaque.
    pub alpha: u8,

    /// Radius as a fraction of the outer radius (0.0-1.0).
    pub radius_ratio: f32,
}

impl DiscConfig {
    /// Creates a disc config. The ratio is clamped to 0.0-1.0.
    pub fn new(color: Srgb<u8>, alpha: u8, radius_ratio: f32) -> Self {
        Self {
            color,
            alpha,
            radius_ratio: radius_ratio.clamp(0.0, 1.0),
        }
    }

    /// The translucent highlight: (100, 181, 246) at alpha 200, 60% radius.
    pub fn highlight() -> Self {
        Self::new(HIGHLIGHT_BLUE, 200, 0.6)
    }

    /// The opaque core: (33, 150, 243) at alpha 255, 30% radius.
    pub fn core() -> Self {
        Self::new(CORE_BLUE, 255, 0.3)
    }

    fn rgba(&self) -> Rgba<u8> {
        Rgba([self.color.red, self.color.green, self.color.blue, self.alpha])
    }
}

impl LayerConfig for DiscConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color != other.color
            || self.alpha != other.alpha
            || (self.radius_ratio - other.radius_ratio).abs() > 0.0001
    }
}

impl LayerEffect for DiscConfig {
    const NAME: &'static str = "disc";

    fn paint(&self, ctx: &mut RenderContext) {
        let geometry = ctx.geometry;
        let radius = geometry.inner_radius(self.radius_ratio);
        ctx.canvas
            .fill_disc(geometry.center, geometry.center, radius, self.rgba());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_badge_palette() {
        let highlight = DiscConfig::highlight();
        assert_eq!(highlight.rgba().0, [100, 181, 246, 200]);
        assert_eq!(highlight.radius_ratio, 0.6);

        let core = DiscConfig::core();
        assert_eq!(core.rgba().0, [33, 150, 243, 255]);
        assert_eq!(core.radius_ratio, 0.3);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(DiscConfig::new(CORE_BLUE, 255, 1.5).radius_ratio, 1.0);
    }

    #[test]
    fn core_radius_follows_outer_radius() {
        let mut ctx = RenderContext::new(128, 0.4).unwrap();
        DiscConfig::core().paint(&mut ctx);

        // outer radius 51, core radius round(15.3) = 15
        assert_eq!(ctx.canvas.pixel(64 + 15, 64).0, [33, 150, 243, 255]);
        assert_eq!(ctx.canvas.pixel(64 + 16, 64).0, [0, 0, 0, 0]);
    }

    #[test]
    fn highlight_replaces_what_is_beneath() {
        let mut ctx = RenderContext::new(16, 0.4).unwrap();
        ctx.canvas.fill_disc(8, 8, 6, Rgba([33, 150, 243, 255]));
        DiscConfig::highlight().paint(&mut ctx);

        // outer radius 6, highlight radius round(3.6) = 4
        let inside = ctx.canvas.pixel(8 + 4, 8);
        assert_eq!(inside.0, [100, 181, 246, 200]);

        let outside = ctx.canvas.pixel(8 + 5, 8);
        assert_eq!(outside.0, [33, 150, 243, 255]);
    }

    #[test]
    fn zero_radius_disc_paints_centre() {
        let mut ctx = RenderContext::new(1, 0.4).unwrap();
        DiscConfig::core().paint(&mut ctx);
        assert_eq!(ctx.canvas.pixel(0, 0).0, [33, 150, 243, 255]);
    }
}
