//! Error types for the carousel library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CarouselError`.
pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Error, Debug)]
pub enum CarouselError {
    /// A carousel needs at least one slide to have an active one.
    #[error("carousel requires at least one slide")]
    NoSlides,

    /// Autoplay needs a non-zero interval to ever advance.
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// Settings file could not be read or parsed.
    #[error("configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Image file could not be read or decoded.
    #[error("failed to load image {path}: {message}")]
    Image { path: PathBuf, message: String },
}
