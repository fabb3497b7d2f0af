//! Radial gradient layer built from concentric discs.

use image::Rgba;
use palette::Srgb;

use super::{LayerConfig, LayerEffect, RenderContext};
use crate::layer::disc::CORE_BLUE;

/// Default opacity of the innermost gradient disc.
pub const DEFAULT_PEAK_OPACITY: f64 = 0.9;

// ============================================================================
// GradientConfig
// ============================================================================

/// Configuration for the radial gradient.
///
/// The gradient is painted as `outer_radius` filled discs, from the outer
/// radius down to 1, all sharing one colour. A disc of radius `r` has alpha
/// `round(255 * (r / outer_radius) * peak_opacity)`. Each smaller disc
/// overwrites the larger one beneath it, so every ring keeps the alpha of
/// the smallest disc that reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientConfig {
    /// Fill colour shared by every disc.
    pub color: Srgb<u8>,

    /// Opacity scale applied to every disc (0.0-1.0).
    pub peak_opacity: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self::new(CORE_BLUE, DEFAULT_PEAK_OPACITY)
    }
}

impl GradientConfig {
    /// Creates a gradient config. `peak_opacity` is clamped to 0.0-1.0.
    pub fn new(color: Srgb<u8>, peak_opacity: f64) -> Self {
        Self {
            color,
            peak_opacity: peak_opacity.clamp(0.0, 1.0),
        }
    }

    /// Alpha of the disc with the given radius.
    pub fn disc_alpha(&self, radius: u32, outer_radius: u32) -> u8 {
        gradient_alpha(radius, outer_radius, self.peak_opacity)
    }
}

impl LayerConfig for GradientConfig {
    fn differs_from(&self, other: &Self) -> bool {
        self.color != other.color || (self.peak_opacity - other.peak_opacity).abs() > 1e-6
    }
}

impl LayerEffect for GradientConfig {
    const NAME: &'static str = "gradient";

    fn paint(&self, ctx: &mut RenderContext) {
        let geometry = ctx.geometry;
        let (red, green, blue) = (self.color.red, self.color.green, self.color.blue);

        for radius in (1..=geometry.outer_radius).rev() {
            let alpha = self.disc_alpha(radius, geometry.outer_radius);
            ctx.canvas.fill_disc(
                geometry.center,
                geometry.center,
                radius,
                Rgba([red, green, blue, alpha]),
            );
        }
    }
}

/// `round(255 * (radius / outer_radius) * peak)`, or 0 when there is no
/// outer radius.
fn gradient_alpha(radius: u32, outer_radius: u32, peak: f64) -> u8 {
    if outer_radius == 0 {
        return 0;
    }
    let fraction = radius as f64 / outer_radius as f64;
    (255.0 * fraction * peak).round().clamp(0.0, 255.0) as u8
}
