//! Rendering a fixed set of icon sizes into one directory.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::icon::IconRequest;
use crate::renderer::BadgeRenderer;

/// Sizes written by the standard batch.
pub const STANDARD_SIZES: [u32; 3] = [16, 48, 128];

/// Directory the standard batch writes into.
pub const STANDARD_DIRECTORY: &str = "icons";

/// A directory and the icon sizes to write into it.
///
/// Each size is written to `directory/icon{size}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBatch {
    pub directory: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for IconBatch {
    fn default() -> Self {
        Self::standard()
    }
}

impl IconBatch {
    /// Creates a batch for `sizes` in `directory`.
    pub fn new(directory: impl Into<PathBuf>, sizes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            directory: directory.into(),
            sizes: sizes.into_iter().collect(),
        }
    }

    /// 16, 48 and 128 pixel icons in `icons/`.
    pub fn standard() -> Self {
        Self::new(STANDARD_DIRECTORY, STANDARD_SIZES)
    }

    /// Returns the file name used for `size`.
    pub fn file_name(size: u32) -> String {
        format!("icon{size}.png")
    }

    /// Returns the output path for `size` inside this batch's directory.
    pub fn path_for(&self, size: u32) -> PathBuf {
        self.directory.join(Self::file_name(size))
    }

    /// Builds one request per size, validating every size first.
    pub fn requests(&self) -> Result<Vec<IconRequest>> {
        self.sizes
            .iter()
            .map(|&size| IconRequest::new(size, self.path_for(size)))
            .collect()
    }

    /// Renders every icon in order.
    ///
    /// Stops at the first failure. Icons written before the failure stay on
    /// disk.
    pub fn render(&self, renderer: &mut BadgeRenderer) -> Result<Vec<RenderedIcon>> {
        self.render_each(renderer, |_| {})
    }

    /// Renders every icon in order, calling `on_written` as soon as each file
    /// is on disk.
    ///
    /// The renderer's cache is cleared once the batch finishes, whether or not
    /// it succeeded.
    pub fn render_each<F>(
        &self,
        renderer: &mut BadgeRenderer,
        mut on_written: F,
    ) -> Result<Vec<RenderedIcon>>
    where
        F: FnMut(&RenderedIcon),
    {
        let requests = self.requests()?;
        debug!(
            directory = %self.directory.display(),
            count = requests.len(),
            "rendering icon batch"
        );

        let mut written = Vec::with_capacity(requests.len());
        let outcome = requests.iter().try_for_each(|request| -> Result<()> {
            let path = renderer.render_to_file(request)?;
            let icon = RenderedIcon {
                path,
                size: request.size,
            };
            on_written(&icon);
            written.push(icon);
            Ok(())
        });

        // Every size is rendered once per batch.
        renderer.clear_cache();
        outcome.map(|()| written)
    }
}

/// An icon that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub path: PathBuf,
    pub size: u32,
}

impl RenderedIcon {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for RenderedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} ({}x{})",
            self.path.display(),
            self.size,
            self.size
        )
    }
}
