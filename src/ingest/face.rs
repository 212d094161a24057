//! Face detection payloads.
//!
//! Face endpoints return a JSON array of detected faces, each with a pixel
//! `{top, left, width, height}` rectangle and no confidence score. Face
//! detections therefore carry a confidence of 1.0 and the fixed label
//! "face".

use serde::Deserialize;

use crate::core::OverlayResult;
use crate::domain::{Detection, Region};

/// The pixel rectangle around a detected face.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FaceRectangle {
    /// Pixel distance of the top edge from the image top.
    pub top: i32,
    /// Pixel distance of the left edge from the image left.
    pub left: i32,
    /// Width of the rectangle in pixels.
    pub width: i32,
    /// Height of the rectangle in pixels.
    pub height: i32,
}

/// One detected face.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedFace {
    /// The service-assigned face identifier, when returned.
    #[serde(default)]
    pub face_id: Option<String>,
    /// The pixel rectangle around the face.
    pub face_rectangle: FaceRectangle,
}

impl DetectedFace {
    /// Parses a face detection response body (a JSON array of faces).
    pub fn from_json(json: &str) -> OverlayResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Converts detected faces into detections.
///
/// # Arguments
///
/// * `faces` - The detected faces to convert
///
/// # Returns
///
/// One detection per face, labeled "face" with confidence 1.0.
pub fn face_detections(faces: &[DetectedFace]) -> Vec<Detection> {
    faces
        .iter()
        .map(|face| {
            let rect = face.face_rectangle;
            Detection::new(
                "face",
                1.0,
                Region::from_pixel_rect(rect.left, rect.top, rect.width, rect.height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    const FACES_JSON: &str = r#"[
        {
            "faceId": "c5c24a82-6845-4031-9d5d-978df9175426",
            "faceRectangle": {"top": 131, "left": 177, "width": 162, "height": 162}
        }
    ]"#;

    #[test]
    fn test_face_rectangle_becomes_pixel_polygon() {
        let faces = DetectedFace::from_json(FACES_JSON).unwrap();
        let detections = face_detections(&faces);

        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].label, "face");
        assert_eq!(detections[0].confidence, 1.0);

        let Region::PixelPolygon(points) = &detections[0].region else {
            panic!("expected pixel polygon");
        };
        assert_eq!(points[0], Point::new(177, 131));
        assert_eq!(points[2], Point::new(339, 293));
    }
}
