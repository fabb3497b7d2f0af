//! Error types for badge rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing badge icons.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested icon size is zero or larger than the supported maximum.
    #[error("invalid icon size {size}: must be between 1 and {max}")]
    InvalidSize { size: u32, max: u32 },

    /// Creating the output directory or writing the file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// A style profile could not be parsed or serialized.
    #[error("invalid badge profile: {0}")]
    Profile(#[from] serde_json::Error),

    /// A colour string in a profile is not a valid hex colour.
    #[error("invalid colour {value:?}: expected #rrggbb")]
    InvalidColor { value: String },

    /// The HTTP client for the login probe could not be built.
    #[cfg(feature = "probe")]
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_message() {
        let err = Error::InvalidSize { size: 0, max: 4096 };
        assert_eq!(
            err.to_string(),
            "invalid icon size 0: must be between 1 and 4096"
        );
    }

    #[test]
    fn io_error_names_path() {
        let err = Error::io(
            "icons/icon16.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("icons/icon16.png"));
        assert!(message.contains("denied"));
    }
}
