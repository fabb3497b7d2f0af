//! Badge rendering engine and PNG output.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::icon::IconRequest;
use crate::layer::LayerPipeline;
use crate::profile::{BadgeProfile, DiscSettings, GradientSettings};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`BadgeProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    ///
    /// Fails without changing anything if the profile holds an invalid colour.
    fn apply_profile(&mut self, profile: &BadgeProfile) -> Result<()>;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> BadgeProfile;
}

// ============================================================================
// BadgeRenderer
// ============================================================================

/// Main badge rendering engine.
///
/// `BadgeRenderer` owns a [`LayerPipeline`] and turns it into PNG files.
/// Access layers directly through the [`pipeline`](Self::pipeline) field to
/// configure them, or load a whole style with
/// [`apply_profile`](Configurable::apply_profile).
///
/// # Example
///
/// ```no_run
/// use badge_renderer::{BadgeRenderer, IconRequest};
///
/// let mut renderer = BadgeRenderer::new();
/// renderer.pipeline.highlight.set_enabled(false);
///
/// let request = IconRequest::new(48, "icons/icon48.png").unwrap();
/// renderer.render_to_file(&request).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BadgeRenderer {
    /// The layer pipeline. Access layers directly to configure them.
    pub pipeline: LayerPipeline,
}

impl BadgeRenderer {
    /// Creates a renderer for the standard badge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer configured from `profile`.
    pub fn from_profile(profile: &BadgeProfile) -> Result<Self> {
        let mut renderer = Self {
            pipeline: LayerPipeline::empty(),
        };
        renderer.apply_profile(profile)?;
        Ok(renderer)
    }

    /// Renders the badge at `size` pixels.
    pub fn render(&mut self, size: u32) -> Result<RgbaImage> {
        self.pipeline.render(size)
    }

    /// Renders the badge and encodes it as PNG bytes.
    pub fn render_png(&mut self, size: u32) -> Result<Vec<u8>> {
        let image = self.render(size)?;
        encode_png(&image)
    }

    /// Renders `request` and writes the PNG, creating parent directories.
    ///
    /// Returns the path that was written.
    pub fn render_to_file(&mut self, request: &IconRequest) -> Result<PathBuf> {
        let bytes = self.render_png(request.size)?;
        let path = request.output_path();
        write_file(path, &bytes)?;
        info!(path = %path.display(), size = request.size, "wrote icon");
        Ok(path.to_path_buf())
    }

    /// Clears the render cache. Useful for freeing memory.
    pub fn clear_cache(&mut self) {
        self.pipeline.invalidate_all();
    }
}

impl Configurable for BadgeRenderer {
    fn apply_profile(&mut self, profile: &BadgeProfile) -> Result<()> {
        // Validate everything before touching the pipeline.
        let gradient = profile
            .gradient
            .as_ref()
            .map(|s| s.to_config().map(|c| (c, s.enabled)))
            .transpose()?;
        let highlight = profile
            .highlight
            .as_ref()
            .map(|s| s.to_config().map(|c| (c, s.enabled)))
            .transpose()?;
        let core = profile
            .core
            .as_ref()
            .map(|s| s.to_config().map(|c| (c, s.enabled)))
            .transpose()?;

        self.pipeline.set_outer_ratio(profile.outer_ratio);

        match gradient {
            Some((config, enabled)) => {
                self.pipeline.gradient.set_config(Some(config));
                self.pipeline.gradient.set_enabled(enabled);
            }
            None => {
                self.pipeline.gradient.set_config(None);
            }
        }

        match highlight {
            Some((config, enabled)) => {
                self.pipeline.highlight.set_config(Some(config));
                self.pipeline.highlight.set_enabled(enabled);
            }
            None => {
                self.pipeline.highlight.set_config(None);
            }
        }

        match core {
            Some((config, enabled)) => {
                self.pipeline.core.set_config(Some(config));
                self.pipeline.core.set_enabled(enabled);
            }
            None => {
                self.pipeline.core.set_config(None);
            }
        }

        Ok(())
    }

    fn export_profile(&self) -> BadgeProfile {
        let gradient = self.pipeline.gradient.config().map(|c| GradientSettings {
            enabled: self.pipeline.gradient.is_enabled(),
            ..c.into()
        });

        let highlight = self.pipeline.highlight.config().map(|c| DiscSettings {
            enabled: self.pipeline.highlight.is_enabled(),
            ..c.into()
        });

        let core = self.pipeline.core.config().map(|c| DiscSettings {
            enabled: self.pipeline.core.is_enabled(),
            ..c.into()
        });

        BadgeProfile {
            outer_ratio: self.pipeline.outer_ratio(),
            gradient,
            highlight,
            core,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Renders the standard badge at `size` pixels and writes it to `output_path`.
///
/// Parent directories are created if missing. Returns the written path.
pub fn render_icon(size: u32, output_path: impl AsRef<Path>) -> Result<PathBuf> {
    let request = IconRequest::new(size, output_path.as_ref())?;
    BadgeRenderer::new().render_to_file(&request)
}

/// Encodes an RGBA image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

// ============================================================================
// Tests
// ============================================================================
