//! badge-renderer: procedural badge icons for a browser extension
//!
//! This crate draws the extension's circular badge icon at any size and
//! writes it as PNG. The badge is a stack of layers painted onto a
//! transparent canvas: a radial gradient built from concentric discs, a
//! translucent highlight, and an opaque core.
//!
//! # Example
//!
//! ```no_run
//! use badge_renderer::{BadgeRenderer, IconBatch, render_icon};
//!
//! // One icon with the standard style
//! render_icon(48, "icons/icon48.png").unwrap();
//!
//! // The standard 16/48/128 set
//! let mut renderer = BadgeRenderer::new();
//! for icon in IconBatch::standard().render(&mut renderer).unwrap() {
//!     println!("{icon}");
//! }
//! ```
//!
//! # Profiles
//!
//! Badge styles can be saved and loaded as JSON through [`BadgeProfile`]
//! and the [`Configurable`] trait:
//!
//! ```
//! use badge_renderer::{BadgeProfile, BadgeRenderer, Configurable};
//!
//! let mut renderer = BadgeRenderer::new();
//! renderer.pipeline.core.set_enabled(false);
//!
//! let json = renderer.export_profile().to_json().unwrap();
//! let restored = BadgeRenderer::from_profile(&BadgeProfile::from_json(&json).unwrap()).unwrap();
//! assert!(!restored.pipeline.core.is_enabled());
//! ```

mod batch;
mod canvas;
mod error;
mod icon;
mod layer;
mod profile;
mod renderer;

#[cfg(feature = "probe")]
pub mod probe;

pub use batch::{IconBatch, RenderedIcon, STANDARD_DIRECTORY, STANDARD_SIZES};
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use icon::{
    BadgeGeometry, DEFAULT_OUTER_RATIO, IconRequest, MAX_ICON_SIZE, SizePx, validate_size,
};
pub use layer::{
    DiscConfig, GradientConfig, Layer, LayerConfig, LayerEffect, LayerPipeline, RenderContext,
};
pub use profile::{BadgeProfile, DiscSettings, GradientSettings, format_color, parse_color};
pub use renderer::{BadgeRenderer, Configurable, encode_png, render_icon};
