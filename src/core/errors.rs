//! Error types for overlay rendering.
//!
//! This module defines the error taxonomy for the overlay renderer and its
//! supporting layers: malformed detection regions, unusable canvases, image
//! and font loading failures, and payload parsing errors. It also provides
//! utility constructors for creating these errors with appropriate context.

use thiserror::Error;

/// Enum representing the errors that can occur while building an overlay.
///
/// The renderer itself only produces `InvalidRegion` and `CanvasUnavailable`;
/// the remaining variants belong to the surrounding utility layers (image
/// loading, font loading, payload ingestion).
#[derive(Error, Debug)]
pub enum OverlayError {
    /// A detection carried malformed or out-of-range coordinate data.
    #[error("invalid region: {message}")]
    InvalidRegion {
        /// A message describing which coordinate field was malformed.
        message: String,
    },

    /// The canvas passed to the renderer has a zero dimension.
    #[error("canvas unavailable: {width}x{height}")]
    CanvasUnavailable {
        /// The width of the rejected canvas.
        width: u32,
        /// The height of the rejected canvas.
        height: u32,
    },

    /// Error occurred while loading an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error occurred while loading or parsing a font.
    #[error("font load: {message}")]
    FontLoad {
        /// A message describing the font failure.
        message: String,
    },

    /// Error occurred while parsing a service response payload.
    #[error("payload parse")]
    Parse(#[from] serde_json::Error),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Implementation of OverlayError with utility functions for creating errors.
impl OverlayError {
    /// Creates an OverlayError for a malformed detection region.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of which coordinate field was malformed.
    ///
    /// # Returns
    ///
    /// An OverlayError instance.
    pub fn invalid_region(message: impl Into<String>) -> Self {
        Self::InvalidRegion {
            message: message.into(),
        }
    }

    /// Creates an OverlayError for an unusable canvas.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the rejected canvas.
    /// * `height` - The height of the rejected canvas.
    ///
    /// # Returns
    ///
    /// An OverlayError instance.
    pub fn canvas_unavailable(width: u32, height: u32) -> Self {
        Self::CanvasUnavailable { width, height }
    }

    /// Creates an OverlayError for a font that could not be loaded or parsed.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the font failure.
    ///
    /// # Returns
    ///
    /// An OverlayError instance.
    pub fn font_load(message: impl Into<String>) -> Self {
        Self::FontLoad {
            message: message.into(),
        }
    }
}

/// Convenient result alias for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;
