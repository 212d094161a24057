//! Spatial regions for detections.
//!
//! Vision services report the spatial extent of a detection in one of two
//! conventions: normalized fractional boxes (custom-vision style prediction
//! endpoints) or absolute pixel polygons (read/OCR and layout endpoints).
//! This module represents both as a tagged [`Region`] and resolves either
//! into an absolute pixel rectangle for drawing. The variant tag is assigned
//! once at the ingestion boundary; nothing downstream sniffs fields to guess
//! the convention.

use serde::{Deserialize, Serialize};

use crate::core::{OverlayError, OverlayResult};

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: i32,
    /// Y-coordinate of the point.
    pub y: i32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in absolute pixel coordinates.
///
/// This is the resolved form every [`Region`] is converted into before
/// drawing. Corners are stored as-is; callers that supplied degenerate
/// polygon data get degenerate rectangles back (trusted input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// The top-left corner of the rectangle.
    pub top_left: Point,
    /// The bottom-right corner of the rectangle.
    pub bottom_right: Point,
}

impl PixelRect {
    /// Creates a new rectangle from its two corners.
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// The signed width of the rectangle in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    /// The signed height of the rectangle in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }
}

/// The spatial extent of a detection, in one of two coordinate conventions.
///
/// Which convention applies is an external contract of the producing API
/// variant, so it must be recorded at ingestion; mixing conventions without
/// conversion produces a corrupted overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Region {
    /// A box expressed as fractions of the canvas dimensions, each field
    /// declared in `[0, 1]`.
    NormalizedBox {
        /// Fractional distance of the left edge from the canvas left.
        left: f32,
        /// Fractional distance of the top edge from the canvas top.
        top: f32,
        /// Fractional width of the box.
        width: f32,
        /// Fractional height of the box.
        height: f32,
    },

    /// Corner points already in pixel space, ordered clockwise starting at
    /// the top-left. At least 4 points are required; corner 0 and corner 2
    /// are used verbatim as the rectangle corners.
    PixelPolygon(Vec<Point>),
}

impl Region {
    /// Creates a pixel polygon region from a pixel-space `{x, y, w, h}`
    /// rectangle, the other box shape vision services return.
    ///
    /// The corners are emitted clockwise from the top-left, so corner 0 and
    /// corner 2 carry the rectangle through resolution unchanged.
    ///
    /// # Arguments
    ///
    /// * `x` - Pixel x-coordinate of the top-left corner.
    /// * `y` - Pixel y-coordinate of the top-left corner.
    /// * `w` - Width of the rectangle in pixels.
    /// * `h` - Height of the rectangle in pixels.
    ///
    /// # Returns
    ///
    /// A `Region::PixelPolygon` with 4 clockwise corners.
    pub fn from_pixel_rect(x: i32, y: i32, w: i32, h: i32) -> Self {
        Region::PixelPolygon(vec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ])
    }

    /// Validates the coordinate data of this region.
    ///
    /// For a normalized box, every field must lie in `[0, 1]` and the box
    /// must not extend past the right or bottom canvas edge (`left + width`
    /// and `top + height` at most 1). For a pixel polygon, at least 4 corner
    /// points are required; winding and convexity are not checked.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the region is well-formed
    /// * `Err(OverlayError::InvalidRegion)` - Naming the offending field
    pub fn validate(&self) -> OverlayResult<()> {
        match self {
            Region::NormalizedBox {
                left,
                top,
                width,
                height,
            } => {
                for (name, value) in [
                    ("left", *left),
                    ("top", *top),
                    ("width", *width),
                    ("height", *height),
                ] {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(OverlayError::invalid_region(format!(
                            "normalized {name} {value} out of [0, 1]"
                        )));
                    }
                }
                if left + width > 1.0 {
                    return Err(OverlayError::invalid_region(format!(
                        "normalized box exceeds right edge: left {left} + width {width} > 1"
                    )));
                }
                if top + height > 1.0 {
                    return Err(OverlayError::invalid_region(format!(
                        "normalized box exceeds bottom edge: top {top} + height {height} > 1"
                    )));
                }
                Ok(())
            }
            Region::PixelPolygon(points) => {
                if points.len() < 4 {
                    return Err(OverlayError::invalid_region(format!(
                        "polygon has {} points, need at least 4",
                        points.len()
                    )));
                }
                Ok(())
            }
        }
    }

    /// Resolves this region into an absolute pixel rectangle on a canvas of
    /// the given dimensions.
    ///
    /// A normalized box is scaled by the canvas dimensions with each corner
    /// rounded to the nearest pixel. A pixel polygon contributes corner 0 as
    /// the top-left and corner 2 as the bottom-right, verbatim and unscaled
    /// (clockwise ordering is assumed, not verified).
    ///
    /// # Arguments
    ///
    /// * `canvas_width` - The canvas width in pixels.
    /// * `canvas_height` - The canvas height in pixels.
    ///
    /// # Returns
    ///
    /// * `Ok(PixelRect)` - The resolved rectangle
    /// * `Err(OverlayError::InvalidRegion)` - If validation fails
    pub fn to_pixel_rect(&self, canvas_width: u32, canvas_height: u32) -> OverlayResult<PixelRect> {
        self.validate()?;

        match self {
            Region::NormalizedBox {
                left,
                top,
                width,
                height,
            } => {
                let w = canvas_width as f32;
                let h = canvas_height as f32;
                let top_left = Point::new((left * w).round() as i32, (top * h).round() as i32);
                let bottom_right = Point::new(
                    ((left + width) * w).round() as i32,
                    ((top + height) * h).round() as i32,
                );
                Ok(PixelRect::new(top_left, bottom_right))
            }
            Region::PixelPolygon(points) => Ok(PixelRect::new(points[0], points[2])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_box_resolution() {
        let region = Region::NormalizedBox {
            left: 0.1,
            top: 0.2,
            width: 0.3,
            height: 0.25,
        };

        let rect = region.to_pixel_rect(640, 480).unwrap();

        assert_eq!(rect.top_left, Point::new(64, 96));
        assert_eq!(rect.bottom_right, Point::new(256, 216));
    }

    #[test]
    fn test_normalized_box_stays_within_canvas() {
        let boxes = [
            (0.0, 0.0, 1.0, 1.0),
            (0.5, 0.5, 0.5, 0.5),
            (0.013, 0.987, 0.9, 0.01),
        ];

        for (left, top, width, height) in boxes {
            let region = Region::NormalizedBox {
                left,
                top,
                width,
                height,
            };
            let rect = region.to_pixel_rect(800, 600).unwrap();

            assert!(0 <= rect.top_left.x);
            assert!(rect.top_left.x <= rect.bottom_right.x);
            assert!(rect.bottom_right.x <= 800);
            assert!(0 <= rect.top_left.y);
            assert!(rect.top_left.y <= rect.bottom_right.y);
            assert!(rect.bottom_right.y <= 600);
        }
    }

    #[test]
    fn test_pixel_polygon_corners_used_verbatim() {
        let region = Region::PixelPolygon(vec![
            Point::new(120, 33),
            Point::new(310, 35),
            Point::new(308, 77),
            Point::new(118, 75),
        ]);

        // Corner 0 and corner 2, no scaling regardless of canvas size.
        let rect = region.to_pixel_rect(64, 64).unwrap();

        assert_eq!(rect.top_left, Point::new(120, 33));
        assert_eq!(rect.bottom_right, Point::new(308, 77));
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let region = Region::NormalizedBox {
            left: 0.1,
            top: 0.1,
            width: -0.1,
            height: 0.2,
        };

        let err = region.to_pixel_rect(640, 480).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidRegion { .. }));
    }

    #[test]
    fn test_box_past_canvas_edge_is_rejected() {
        let region = Region::NormalizedBox {
            left: 0.9,
            top: 0.1,
            width: 0.2,
            height: 0.2,
        };

        assert!(region.validate().is_err());
    }

    #[test]
    fn test_short_polygon_is_rejected() {
        let region = Region::PixelPolygon(vec![Point::new(0, 0), Point::new(10, 10)]);

        let err = region.validate().unwrap_err();
        assert!(matches!(err, OverlayError::InvalidRegion { .. }));
    }

    #[test]
    fn test_from_pixel_rect_is_clockwise() {
        let region = Region::from_pixel_rect(10, 20, 30, 40);

        let Region::PixelPolygon(points) = &region else {
            panic!("expected pixel polygon");
        };
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Point::new(10, 20));
        assert_eq!(points[1], Point::new(40, 20));
        assert_eq!(points[2], Point::new(40, 60));
        assert_eq!(points[3], Point::new(10, 60));
    }
}
