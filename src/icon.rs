//! Icon request and geometry types.
//!
//! An [`IconRequest`] names a pixel size and a destination file. The
//! [`BadgeGeometry`] derived from the size is shared by every layer so that
//! all circles agree on the same centre and outer radius.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Largest edge length accepted for a badge, in pixels.
pub const MAX_ICON_SIZE: u32 = 4096;

/// Fraction of the icon size used as the outer badge radius.
pub const DEFAULT_OUTER_RATIO: f32 = 0.4;

/// Checks that `size` is a usable icon edge length.
pub fn validate_size(size: u32) -> Result<u32> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(Error::InvalidSize {
            size,
            max: MAX_ICON_SIZE,
        });
    }
    Ok(size)
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A single icon to render: the edge length and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Edge length in pixels.
    pub size: u32,
    /// Destination PNG path.
    pub output_path: PathBuf,
}

impl IconRequest {
    /// Creates a request, rejecting sizes outside `1..=MAX_ICON_SIZE`.
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            size: validate_size(size)?,
            output_path: output_path.into(),
        })
    }

    /// Returns the destination path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the pixel dimensions of the output image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::square(self.size)
    }
}

/// Centre and outer radius shared by all badge layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeGeometry {
    /// Edge length of the canvas.
    pub size: u32,
    /// Centre coordinate on both axes (`size / 2`).
    pub center: i32,
    /// Radius of the largest gradient circle.
    pub outer_radius: u32,
}

impl BadgeGeometry {
    /// Computes the geometry for a canvas of `size` pixels.
    ///
    /// `outer_ratio` is clamped to `0.0..=1.0`.
    pub fn new(size: u32, outer_ratio: f32) -> Self {
        let ratio = outer_ratio.clamp(0.0, 1.0);
        Self {
            size,
            center: (size / 2) as i32,
            outer_radius: scale_radius(size, ratio),
        }
    }

    /// Returns `round(outer_radius * ratio)`.
    pub fn inner_radius(&self, ratio: f32) -> u32 {
        scale_radius(self.outer_radius, ratio.clamp(0.0, 1.0))
    }
}

fn scale_radius(length: u32, ratio: f32) -> u32 {
    (length as f32 * ratio).round() as u32
}
