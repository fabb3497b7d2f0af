//! Layer infrastructure for badge rendering.
//!
//! A badge is painted by a fixed sequence of layers onto one [`Canvas`].
//! Each layer wraps an optional configuration and an enabled flag, and
//! tracks a version so the pipeline can tell when a cached render is stale.
//!
//! # Architecture
//!
//! Each layer config implements [`LayerEffect`], which paints the layer into
//! a [`RenderContext`]. The context carries the canvas together with the
//! [`BadgeGeometry`] computed once per render, so every layer agrees on the
//! centre and outer radius.

pub mod disc;
pub mod gradient;

pub use disc::DiscConfig;
pub use gradient::GradientConfig;

use std::collections::HashMap;

use image::RgbaImage;
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::icon::{BadgeGeometry, DEFAULT_OUTER_RATIO};

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the rendering pipeline.
pub struct RenderContext {
    /// The canvas being painted.
    pub canvas: Canvas,

    /// Centre and outer radius for this render.
    pub geometry: BadgeGeometry,
}

impl RenderContext {
    /// Creates a context with a fresh transparent canvas of `size` pixels.
    pub fn new(size: u32, outer_ratio: f32) -> Result<Self> {
        Ok(Self {
            canvas: Canvas::new(size)?,
            geometry: BadgeGeometry::new(size, outer_ratio),
        })
    }
}

// ============================================================================
// Layer Traits
// ============================================================================

/// Trait for layer configuration types.
///
/// Implementations must detect when a configuration meaningfully differs
/// from another, which drives cache invalidation.
pub trait LayerConfig: Clone {
    /// Returns true if this config differs from another in a way that
    /// would produce different rendering output.
    fn differs_from(&self, other: &Self) -> bool;
}

/// Trait for layer configurations that know how to paint themselves.
pub trait LayerEffect: LayerConfig {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Paints this layer onto `ctx.canvas`.
    fn paint(&self, ctx: &mut RenderContext);
}

// ============================================================================
// Generic Layer
// ============================================================================

/// A generic layer with configuration, enabled state, and version tracking.
///
/// Toggling a layer off keeps its configuration, so it can be re-enabled
/// later without being reconfigured.
#[derive(Debug, Clone)]
pub struct Layer<C: LayerConfig> {
    config: Option<C>,
    enabled: bool,
    version: u64,
}

impl<C: LayerConfig> Default for Layer<C> {
    fn default() -> Self {
        Self {
            config: None,
            enabled: true,
            version: 0,
        }
    }
}

impl<C: LayerConfig> Layer<C> {
    /// Creates an enabled layer with the given configuration.
    pub fn with_config(config: C) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    /// Returns the current configuration, if any.
    pub fn config(&self) -> Option<&C> {
        self.config.as_ref()
    }

    /// Returns true if this layer is active (has config AND is enabled).
    pub fn is_active(&self) -> bool {
        self.enabled && self.config.is_some()
    }

    /// Returns true if the layer has a configuration set.
    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    /// Returns whether the layer is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the layer is enabled.
    ///
    /// Returns true if the enabled state changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.version = self.version.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Returns the current version number.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Sets the configuration. Returns true if it changed.
    pub fn set_config(&mut self, config: Option<C>) -> bool {
        let differs = match (&self.config, &config) {
            (None, None) => false,
            (Some(_), None) | (None, Some(_)) => true,
            (Some(old), Some(new)) => old.differs_from(new),
        };

        if differs {
            self.config = config;
            self.version = self.version.wrapping_add(1);
            true
        } else {
            false
        }
    }
}

impl<C: LayerEffect> Layer<C> {
    /// Paints this layer if it is active; otherwise the canvas is untouched.
    pub fn apply(&self, ctx: &mut RenderContext) {
        let Some(config) = self.config.as_ref().filter(|_| self.enabled) else {
            return;
        };
        debug!(layer = C::NAME, size = ctx.geometry.size, "painting layer");
        config.paint(ctx);
    }
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The badge layers in their fixed compositing order.
///
/// ```text
/// transparent canvas
///     │
///     ▼
/// ┌──────────┐
/// │ Gradient │ ◄── concentric discs, outermost first
/// └────┬─────┘
///      ▼
/// ┌───────────┐
/// │ Highlight │
/// └────┬──────┘
///      ▼
/// ┌──────┐
/// │ Core │
/// └──────┘
/// ```
///
/// Finished renders are cached per size and reused until any layer (or the
/// outer ratio) changes.
#[derive(Debug, Clone)]
pub struct LayerPipeline {
    /// Radial gradient built from concentric discs.
    pub gradient: Layer<GradientConfig>,

    /// Lighter disc painted over the gradient.
    pub highlight: Layer<DiscConfig>,

    /// Opaque centre disc, painted last.
    pub core: Layer<DiscConfig>,

    outer_ratio: f32,
    ratio_version: u64,
    cache: HashMap<u32, (RgbaImage, u64)>,
}

impl Default for LayerPipeline {
    fn default() -> Self {
        Self {
            gradient: Layer::with_config(GradientConfig::default()),
            highlight: Layer::with_config(DiscConfig::highlight()),
            core: Layer::with_config(DiscConfig::core()),
            outer_ratio: DEFAULT_OUTER_RATIO,
            ratio_version: 0,
            cache: HashMap::new(),
        }
    }
}

impl LayerPipeline {
    /// Creates a pipeline with no layers configured.
    pub fn empty() -> Self {
        Self {
            gradient: Layer::default(),
            highlight: Layer::default(),
            core: Layer::default(),
            ..Self::default()
        }
    }

    /// Returns the outer radius as a fraction of the icon size.
    pub fn outer_ratio(&self) -> f32 {
        self.outer_ratio
    }

    /// Sets the outer radius fraction, clamped to `0.0..=1.0`.
    ///
    /// Returns true if the ratio changed.
    pub fn set_outer_ratio(&mut self, ratio: f32) -> bool {
        let ratio = ratio.clamp(0.0, 1.0);
        if (self.outer_ratio - ratio).abs() > f32::EPSILON {
            self.outer_ratio = ratio;
            self.ratio_version = self.ratio_version.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Combined version of every input that affects the rendered pixels.
    fn dependency_version(&self) -> u64 {
        [
            self.gradient.version(),
            self.highlight.version(),
            self.core.version(),
            self.ratio_version,
        ]
        .iter()
        .fold(0u64, |acc, v| acc.wrapping_add(*v))
    }

    /// Drops all cached renders.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Number of sizes currently cached.
    pub fn cached_sizes(&self) -> usize {
        self.cache.len()
    }

    /// Renders the badge at `size` pixels.
    ///
    /// Returns the cached image when nothing changed since the last render
    /// at this size.
    pub fn render(&mut self, size: u32) -> Result<RgbaImage> {
        let deps = self.dependency_version();
        if let Some((image, stored)) = self.cache.get(&size) {
            if *stored == deps {
                return Ok(image.clone());
            }
        }

        let mut ctx = RenderContext::new(size, self.outer_ratio)?;
        debug!(
            size,
            center = ctx.geometry.center,
            outer_radius = ctx.geometry.outer_radius,
            "rendering badge"
        );

        self.gradient.apply(&mut ctx);
        self.highlight.apply(&mut ctx);
        self.core.apply(&mut ctx);

        let image = ctx.canvas.into_image();
        self.cache.insert(size, (image.clone(), deps));
        Ok(image)
    }
}
