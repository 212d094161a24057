//! Core error handling for the overlay renderer.
//!
//! # Usage
//!
//! ```rust
//! use vision_overlay::core::OverlayError;
//!
//! // Create a region error with context
//! let error = OverlayError::invalid_region("normalized width -0.1 out of range");
//!
//! // Create a canvas error
//! let canvas_error = OverlayError::canvas_unavailable(0, 480);
//! ```

pub mod errors;

pub use errors::{OverlayError, OverlayResult};
