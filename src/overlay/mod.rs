//! Overlay rendering for vision detections.
//!
//! This module draws detection results onto an image: one hollow rectangle
//! and one text label per detection, burned directly into the caller-owned
//! pixel buffer. Both region conventions are resolved into pixel rectangles
//! before any drawing happens, so a malformed detection fails without
//! touching the canvas.
//!
//! # Features
//!
//! - Rectangle strokes with configurable thickness and color
//! - Labels of the form `"{label}: {confidence}%"` placed above the box,
//!   or below it when the box sits near the top edge
//! - Configurable fonts with system-font discovery and graceful fallback
//!   (rectangles are still drawn when no font is available)
//! - Strict per-detection drawing plus a skip-and-continue batch helper
//!
//! # Examples
//!
//! ```rust,no_run
//! use vision_overlay::prelude::*;
//!
//! # fn main() -> Result<(), OverlayError> {
//! let mut canvas = image::RgbImage::new(640, 480);
//! let detections = vec![Detection::new(
//!     "car",
//!     0.92,
//!     Region::NormalizedBox { left: 0.1, top: 0.2, width: 0.3, height: 0.25 },
//! )];
//!
//! let config = OverlayConfig::with_system_font();
//! let stats = draw_detections(&mut canvas, &detections, &config)?;
//! assert_eq!(stats.drawn, 1);
//! # Ok(())
//! # }
//! ```

use ab_glyph::FontVec;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::core::{OverlayError, OverlayResult};
use crate::domain::{Detection, PixelRect, Point};

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

const LABEL_COLOR: Rgb<u8> = Rgb([36, 255, 12]);

/// Vertical distance between the label origin and the rectangle's top-left
/// corner, in pixels.
const LABEL_OFFSET: i32 = 10;

/// Boxes whose top edge is at most this many pixels from the canvas top get
/// their label placed below the corner instead of above it.
const TOP_EDGE_MARGIN: i32 = 20;

/// Configuration for overlay rendering.
///
/// This struct holds settings that control how detections are drawn,
/// including font settings, stroke thickness, and colors. You can customize
/// these settings to change the appearance of the annotated image.
pub struct OverlayConfig {
    /// The font to use for label rendering. If None, labels are skipped and
    /// only rectangles are drawn.
    pub font: Option<FontVec>,

    /// The scale factor for the label font. Defaults to 16.0.
    pub font_scale: f32,

    /// The thickness of rectangle strokes. Defaults to 2.
    pub stroke_thickness: i32,

    /// The color of rectangle strokes. Defaults to green.
    pub box_color: Rgb<u8>,

    /// The color of label text. Defaults to bright green.
    pub label_color: Rgb<u8>,
}

impl Default for OverlayConfig {
    /// Creates a default OverlayConfig with no font, font scale of 16.0,
    /// stroke thickness of 2, and green box/label colors.
    fn default() -> Self {
        Self {
            font: None,
            font_scale: 16.0,
            stroke_thickness: 2,
            box_color: BOX_COLOR,
            label_color: LABEL_COLOR,
        }
    }
}

impl OverlayConfig {
    /// Creates an OverlayConfig with a font loaded from the specified path.
    ///
    /// # Arguments
    ///
    /// * `font_path` - Path to the font file to load
    ///
    /// # Returns
    ///
    /// A Result containing the OverlayConfig if successful, or an error if
    /// the font could not be loaded.
    pub fn with_font_path(font_path: &Path) -> OverlayResult<Self> {
        let font_data = std::fs::read(font_path)?;
        let font = FontVec::try_from_vec(font_data).map_err(|_| {
            OverlayError::font_load(format!("failed to parse font file: {}", font_path.display()))
        })?;

        Ok(Self {
            font: Some(font),
            ..Self::default()
        })
    }

    /// Creates an OverlayConfig with a system font.
    ///
    /// This function attempts to load a system font from common locations.
    /// If no system font is found, it falls back to the default
    /// configuration and labels are skipped.
    ///
    /// # Returns
    ///
    /// An OverlayConfig with a system font if found, otherwise with default
    /// settings.
    pub fn with_system_font() -> Self {
        let font_paths = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/System/Library/Fonts/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];

        for path in &font_paths {
            if let Ok(font_data) = std::fs::read(path) {
                if let Ok(font) = FontVec::try_from_vec(font_data) {
                    info!("Loaded system font: {}", path);
                    return Self {
                        font: Some(font),
                        ..Self::default()
                    };
                }
            }
        }

        debug!("No system font found, label rendering will be skipped");
        Self::default()
    }
}

/// Counts reported by the skip-and-continue batch draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    /// Number of detections drawn onto the canvas.
    pub drawn: usize,
    /// Number of detections skipped because their region was malformed.
    pub skipped: usize,
}

/// Draws a batch of detections onto a canvas, skipping malformed ones.
///
/// Detections are drawn in the order they are provided; no reordering,
/// deduplication, or confidence filtering is applied. A detection with a
/// malformed region is logged and skipped so that one bad record does not
/// blank the whole visualization; all other errors abort the batch.
///
/// Drawing the same batch twice double-draws the overlay. That is accepted
/// behavior, not a defect: the renderer keeps no state between calls.
///
/// # Arguments
///
/// * `canvas` - The image to draw on, mutated in place
/// * `detections` - The detections to draw, in display order
/// * `config` - Overlay configuration controlling how elements are drawn
///
/// # Returns
///
/// * `Ok(OverlayStats)` - How many detections were drawn and skipped
/// * `Err(OverlayError::CanvasUnavailable)` - If the canvas has a zero dimension
pub fn draw_detections(
    canvas: &mut RgbImage,
    detections: &[Detection],
    config: &OverlayConfig,
) -> OverlayResult<OverlayStats> {
    ensure_canvas(canvas)?;

    let mut stats = OverlayStats::default();
    for detection in detections {
        match draw_detection(canvas, detection, config) {
            Ok(()) => stats.drawn += 1,
            Err(OverlayError::InvalidRegion { message }) => {
                warn!(
                    "Skipping detection '{}' with malformed region: {}",
                    detection.label, message
                );
                stats.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Overlay complete: {} drawn, {} skipped",
        stats.drawn, stats.skipped
    );
    Ok(stats)
}

/// Draws a single detection onto a canvas.
///
/// The detection's region is validated and resolved into a pixel rectangle
/// before any pixel is touched, so a malformed detection leaves the canvas
/// unmodified. The label is rendered only when the configuration carries a
/// font.
///
/// # Arguments
///
/// * `canvas` - The image to draw on, mutated in place
/// * `detection` - The detection to draw
/// * `config` - Overlay configuration controlling how elements are drawn
///
/// # Returns
///
/// * `Ok(())` - If the detection was drawn
/// * `Err(OverlayError::InvalidRegion)` - If the region data is malformed
/// * `Err(OverlayError::CanvasUnavailable)` - If the canvas has a zero dimension
pub fn draw_detection(
    canvas: &mut RgbImage,
    detection: &Detection,
    config: &OverlayConfig,
) -> OverlayResult<()> {
    ensure_canvas(canvas)?;

    let rect = detection
        .region
        .to_pixel_rect(canvas.width(), canvas.height())?;

    draw_box(canvas, &rect, config);
    draw_label(canvas, &rect, &detection.label_text(), config);

    Ok(())
}

/// Rejects canvases the renderer cannot draw on.
fn ensure_canvas(canvas: &RgbImage) -> OverlayResult<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(OverlayError::canvas_unavailable(
            canvas.width(),
            canvas.height(),
        ));
    }
    Ok(())
}

/// Draws a hollow rectangle with the configured stroke thickness.
///
/// The stroke grows outward from the resolved rectangle, one ring per
/// thickness step. Rectangles with non-positive dimensions (possible with
/// trusted but degenerate polygon input) are silently not stroked.
fn draw_box(canvas: &mut RgbImage, rect: &PixelRect, config: &OverlayConfig) {
    let Some(base) = to_draw_rect(rect) else {
        return;
    };

    for thickness in 0..config.stroke_thickness {
        let ring = Rect::at(base.left() - thickness, base.top() - thickness).of_size(
            base.width() + (2 * thickness) as u32,
            base.height() + (2 * thickness) as u32,
        );
        draw_hollow_rect_mut(canvas, ring, config.box_color);
    }
}

/// Draws the label text for a resolved rectangle.
///
/// Skipped when the configuration has no font or the label origin falls
/// outside the canvas.
fn draw_label(canvas: &mut RgbImage, rect: &PixelRect, text: &str, config: &OverlayConfig) {
    let Some(ref font) = config.font else { return };

    let origin = label_origin(rect.top_left);
    let in_bounds = origin.x >= 0
        && origin.y >= 0
        && origin.x < canvas.width() as i32
        && origin.y < canvas.height() as i32;
    if !in_bounds {
        return;
    }

    draw_text_mut(
        canvas,
        config.label_color,
        origin.x,
        origin.y,
        config.font_scale,
        font,
        text,
    );
}

/// Computes where a label for a rectangle starts.
///
/// The label sits 10 pixels above the top-left corner, unless the corner is
/// within 20 pixels of the canvas top, in which case it sits 10 pixels below
/// so it is not clipped off the edge.
fn label_origin(top_left: Point) -> Point {
    if top_left.y <= TOP_EDGE_MARGIN {
        Point::new(top_left.x, top_left.y + LABEL_OFFSET)
    } else {
        Point::new(top_left.x, top_left.y - LABEL_OFFSET)
    }
}

/// Converts a resolved rectangle into an imageproc Rect.
///
/// Returns None when the rectangle has no positive area.
fn to_draw_rect(rect: &PixelRect) -> Option<Rect> {
    let width = rect.width();
    let height = rect.height();

    (width > 0 && height > 0)
        .then(|| Rect::at(rect.top_left.x, rect.top_left.y).of_size(width as u32, height as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;

    fn normalized_detection() -> Detection {
        Detection::new(
            "car",
            0.92,
            Region::NormalizedBox {
                left: 0.1,
                top: 0.2,
                width: 0.3,
                height: 0.25,
            },
        )
    }

    #[test]
    fn test_label_above_box() {
        let origin = label_origin(Point::new(100, 50));
        assert_eq!(origin, Point::new(100, 40));
    }

    #[test]
    fn test_label_below_box_near_top_edge() {
        let origin = label_origin(Point::new(100, 15));
        assert_eq!(origin, Point::new(100, 25));
    }

    #[test]
    fn test_empty_batch_leaves_canvas_unmodified() {
        let mut canvas = RgbImage::new(64, 64);
        let before = canvas.clone();

        let stats = draw_detections(&mut canvas, &[], &OverlayConfig::default()).unwrap();

        assert_eq!(stats, OverlayStats::default());
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_draw_strokes_box_pixels() {
        let mut canvas = RgbImage::new(640, 480);

        draw_detection(&mut canvas, &normalized_detection(), &OverlayConfig::default()).unwrap();

        // Resolved rect is (64, 96)..(256, 216); the corner sits on the
        // innermost stroke ring, and the second ring sits one pixel out.
        assert_eq!(*canvas.get_pixel(64, 96), BOX_COLOR);
        assert_eq!(*canvas.get_pixel(63, 95), BOX_COLOR);
        assert_eq!(*canvas.get_pixel(200, 150), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_malformed_detection_leaves_canvas_unmodified() {
        let mut canvas = RgbImage::new(64, 64);
        let before = canvas.clone();
        let bad = Detection::new(
            "ghost",
            0.5,
            Region::NormalizedBox {
                left: 0.1,
                top: 0.1,
                width: -0.1,
                height: 0.2,
            },
        );

        let err = draw_detection(&mut canvas, &bad, &OverlayConfig::default()).unwrap_err();

        assert!(matches!(err, OverlayError::InvalidRegion { .. }));
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_batch_skips_malformed_and_continues() {
        let mut canvas = RgbImage::new(640, 480);
        let bad = Detection::new("ghost", 0.5, Region::PixelPolygon(vec![Point::new(1, 1)]));
        let batch = vec![bad, normalized_detection()];

        let stats = draw_detections(&mut canvas, &batch, &OverlayConfig::default()).unwrap();

        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(*canvas.get_pixel(64, 96), BOX_COLOR);
    }

    #[test]
    fn test_zero_dimension_canvas_is_rejected() {
        let mut canvas = RgbImage::new(0, 480);

        let err =
            draw_detections(&mut canvas, &[normalized_detection()], &OverlayConfig::default())
                .unwrap_err();

        assert!(matches!(
            err,
            OverlayError::CanvasUnavailable {
                width: 0,
                height: 480
            }
        ));
    }

    #[test]
    fn test_double_draw_is_stable() {
        let config = OverlayConfig::default();
        let detection = normalized_detection();

        let mut once = RgbImage::new(640, 480);
        draw_detection(&mut once, &detection, &config).unwrap();

        // Drawing the same detection twice lays identical rectangles on top
        // of each other; no deduplication happens.
        let mut twice = RgbImage::new(640, 480);
        draw_detection(&mut twice, &detection, &config).unwrap();
        draw_detection(&mut twice, &detection, &config).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_pixel_polygon_drawn_unscaled() {
        let mut canvas = RgbImage::new(400, 300);
        let detection = Detection::new(
            "word",
            0.99,
            Region::PixelPolygon(vec![
                Point::new(50, 60),
                Point::new(150, 60),
                Point::new(150, 100),
                Point::new(50, 100),
            ]),
        );

        draw_detection(&mut canvas, &detection, &OverlayConfig::default()).unwrap();

        assert_eq!(*canvas.get_pixel(50, 60), BOX_COLOR);
        assert_eq!(*canvas.get_pixel(150, 100), BOX_COLOR);
    }
}
