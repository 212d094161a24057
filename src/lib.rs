//! # vision-overlay
//!
//! A Rust library that draws labeled bounding-box overlays for vision
//! analysis results onto images. It normalizes the two coordinate
//! conventions vision services use for spatial results — normalized
//! fractional boxes and pixel-space polygons — into absolute pixel
//! rectangles, then burns rectangle strokes and text labels into a
//! caller-owned RGB canvas.
//!
//! ## Features
//!
//! - Tagged region model covering both coordinate conventions, resolved
//!   once at ingestion
//! - Typed parsers for the common vision payload shapes (image analysis,
//!   custom-vision predictions, face detection)
//! - Overlay rendering with configurable fonts, colors, and stroke
//!   thickness
//! - Skip-and-continue batch drawing so one malformed detection does not
//!   blank a visualization
//!
//! The crate performs no network I/O. Calling the vision service and
//! holding credentials stay with the application; this crate consumes the
//! parsed response and an image the caller already decoded.
//!
//! ## Modules
//!
//! * [`core`] - Error handling
//! * [`domain`] - Detection and region types
//! * [`ingest`] - Typed parsing of service response payloads
//! * [`overlay`] - The overlay renderer
//! * [`utils`] - Image loading helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vision_overlay::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), OverlayError> {
//! // Canvas decoded by the caller (or via the utility loader).
//! let mut canvas = load_image(Path::new("photo.jpg"))?;
//!
//! // Detections parsed from a service response the caller fetched.
//! let response = r#"{"predictions": [{"probability": 0.98, "tagName": "car",
//!     "boundingBox": {"left": 0.1, "top": 0.2, "width": 0.3, "height": 0.25}}]}"#;
//! let detections = PredictionResponse::from_json(response)?.detections();
//!
//! // Draw rectangles and labels in place.
//! let config = OverlayConfig::with_system_font();
//! let stats = draw_detections(&mut canvas, &detections, &config)?;
//! println!("{} drawn, {} skipped", stats.drawn, stats.skipped);
//!
//! canvas.save("annotated.png").ok();
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod ingest;
pub mod overlay;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use vision_overlay::prelude::*;
/// ```
///
/// Included items focus on the most common tasks:
/// - Detections and regions (`Detection`, `Region`, `Point`)
/// - Overlay rendering (`OverlayConfig`, `draw_detection`, `draw_detections`)
/// - Payload ingestion (`ImageAnalysis`, `PredictionResponse`, `DetectedFace`)
/// - Essential error and result types (`OverlayError`, `OverlayResult`)
/// - Basic image loading (`load_image`)
pub mod prelude {
    // Data model (essential)
    pub use crate::domain::{Detection, PixelRect, Point, Region};

    // Rendering (essential)
    pub use crate::overlay::{OverlayConfig, OverlayStats, draw_detection, draw_detections};

    // Ingestion
    pub use crate::ingest::{
        DetectedFace, ImageAnalysis, PredictionResponse, ScoredTag, face_detections,
    };

    // Error Handling (essential)
    pub use crate::core::{OverlayError, OverlayResult};

    // Image Utility (minimal)
    pub use crate::utils::load_image;
}
