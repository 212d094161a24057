//! Typed ingestion of vision service response payloads.
//!
//! Vision services report spatial results in different shapes depending on
//! the API variant: pixel `{x, y, w, h}` boxes for object detection and
//! dense captions, 4-point clockwise pixel polygons for read/OCR results,
//! normalized fractional boxes for custom-vision predictions, and pixel
//! `{top, left, width, height}` rectangles for face detection. Rather than
//! branching on field presence downstream, each payload shape is modeled
//! here and converted into [`Detection`](crate::domain::Detection)s with
//! their coordinate convention resolved exactly once.
//!
//! No network I/O happens in this module; it consumes response bodies the
//! caller already has in hand.
//!
//! # Modules
//!
//! * `analysis` - Image-analysis payloads (objects, dense captions, read)
//! * `prediction` - Custom-vision prediction payloads (normalized boxes)
//! * `face` - Face detection payloads (pixel rectangles)

pub mod analysis;
pub mod face;
pub mod prediction;

pub use analysis::ImageAnalysis;
pub use face::{DetectedFace, face_detections};
pub use prediction::{PredictionResponse, ScoredTag};
