//! Custom-vision prediction payloads.
//!
//! Prediction endpoints score an image against trained tags. Object
//! detection projects attach a normalized `{left, top, width, height}`
//! bounding box to each prediction; classification projects return scored
//! tags with no box. Boxed predictions become detections, the rest are
//! exposed as [`ScoredTag`]s for plain-text reporting.

use serde::Deserialize;

use crate::core::OverlayResult;
use crate::domain::{Detection, Region};

/// A normalized bounding box as reported by prediction endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NormalizedRect {
    /// Fractional distance of the left edge from the image left.
    pub left: f32,
    /// Fractional distance of the top edge from the image top.
    pub top: f32,
    /// Fractional width of the box.
    pub width: f32,
    /// Fractional height of the box.
    pub height: f32,
}

/// One prediction against a trained tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// The probability score in `[0, 1]`.
    pub probability: f32,
    /// The name of the matched tag.
    pub tag_name: String,
    /// The normalized bounding box; absent for classification projects.
    #[serde(default)]
    pub bounding_box: Option<NormalizedRect>,
}

/// A tag name with its probability, from a classification prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTag {
    /// The tag name.
    pub name: String,
    /// The probability score in `[0, 1]`.
    pub probability: f32,
}

/// A prediction response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    /// The predictions, highest probability first as the service returns them.
    pub predictions: Vec<Prediction>,
}

impl PredictionResponse {
    /// Parses a prediction response body.
    ///
    /// # Arguments
    ///
    /// * `json` - The raw JSON response body
    ///
    /// # Returns
    ///
    /// * `Ok(PredictionResponse)` - The parsed payload
    /// * `Err(OverlayError::Parse)` - If the body is not valid JSON of this shape
    pub fn from_json(json: &str) -> OverlayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Detections for the predictions that carry a bounding box.
    ///
    /// The normalized coordinate convention is recorded in the region tag
    /// here, at the ingestion boundary; the renderer scales the box to the
    /// canvas at draw time.
    pub fn detections(&self) -> Vec<Detection> {
        self.predictions
            .iter()
            .filter_map(|prediction| {
                let bbox = prediction.bounding_box.as_ref()?;
                Some(Detection::new(
                    prediction.tag_name.clone(),
                    prediction.probability,
                    Region::NormalizedBox {
                        left: bbox.left,
                        top: bbox.top,
                        width: bbox.width,
                        height: bbox.height,
                    },
                ))
            })
            .collect()
    }

    /// Scored tags for all predictions, boxed or not.
    pub fn tags(&self) -> Vec<ScoredTag> {
        self.predictions
            .iter()
            .map(|prediction| ScoredTag {
                name: prediction.tag_name.clone(),
                probability: prediction.probability,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETECT_JSON: &str = r#"{
        "predictions": [
            {
                "probability": 0.984,
                "tagName": "car",
                "boundingBox": {"left": 0.12, "top": 0.3, "width": 0.5, "height": 0.4}
            },
            {
                "probability": 0.02,
                "tagName": "truck"
            }
        ]
    }"#;

    #[test]
    fn test_boxed_predictions_become_normalized_detections() {
        let response = PredictionResponse::from_json(DETECT_JSON).unwrap();
        let detections = response.detections();

        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].label, "car");
        assert_eq!(
            detections[0].region,
            Region::NormalizedBox {
                left: 0.12,
                top: 0.3,
                width: 0.5,
                height: 0.4,
            }
        );
    }

    #[test]
    fn test_tags_include_boxless_predictions() {
        let response = PredictionResponse::from_json(DETECT_JSON).unwrap();
        let tags = response.tags();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "truck");
        assert_eq!(tags[1].probability, 0.02);
    }
}
