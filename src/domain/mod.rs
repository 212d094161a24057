//! Domain types for vision detections.
//!
//! This module defines the data model shared by the ingestion boundary and
//! the overlay renderer:
//!
//! * `detection` - The labeled, scored finding produced by a vision call
//! * `region` - The two coordinate conventions a finding's extent comes in,
//!   and their resolution into pixel rectangles

mod detection;
mod region;

pub use detection::Detection;
pub use region::{PixelRect, Point, Region};
