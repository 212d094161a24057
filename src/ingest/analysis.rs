//! Image-analysis response payloads.
//!
//! Models the parts of an image-analysis response that carry spatial
//! results: detected objects and dense captions (pixel `{x, y, w, h}`
//! boxes) and read results (pixel polygons per line and word). Each
//! accessor converts one result kind into detections; [`ImageAnalysis::detections`]
//! chains them all in response order.

use serde::Deserialize;

use crate::core::OverlayResult;
use crate::domain::{Detection, Point, Region};

/// A pixel-space bounding box as reported by object and caption results.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PixelBox {
    /// Pixel x-coordinate of the top-left corner.
    pub x: i32,
    /// Pixel y-coordinate of the top-left corner.
    pub y: i32,
    /// Width of the box in pixels.
    pub w: i32,
    /// Height of the box in pixels.
    pub h: i32,
}

impl PixelBox {
    fn to_region(self) -> Region {
        Region::from_pixel_rect(self.x, self.y, self.w, self.h)
    }
}

/// A name with a confidence score, attached to a detected object.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectTag {
    /// The tag name.
    pub name: String,
    /// The confidence score in `[0, 1]`.
    pub confidence: f32,
}

/// One detected object with its bounding box and tags.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    /// The pixel-space bounding box of the object.
    pub bounding_box: PixelBox,
    /// The tags describing the object; the first tag is the primary one.
    pub tags: Vec<ObjectTag>,
}

/// One dense caption with its bounding box.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DenseCaption {
    /// The caption text.
    pub text: String,
    /// The confidence score in `[0, 1]`.
    pub confidence: f32,
    /// The pixel-space bounding box the caption refers to.
    pub bounding_box: PixelBox,
}

/// One recognized word with its polygon and confidence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadWord {
    /// The recognized text.
    pub text: String,
    /// Clockwise pixel corner points of the word.
    pub bounding_polygon: Vec<Point>,
    /// The confidence score in `[0, 1]`.
    pub confidence: f32,
}

/// One recognized line of text with its polygon and words.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadLine {
    /// The recognized text of the whole line.
    pub text: String,
    /// Clockwise pixel corner points of the line.
    pub bounding_polygon: Vec<Point>,
    /// The words making up the line.
    #[serde(default)]
    pub words: Vec<ReadWord>,
}

/// One block of recognized text.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadBlock {
    /// The lines in the block.
    pub lines: Vec<ReadLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ObjectsResult {
    pub values: Vec<DetectedObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DenseCaptionsResult {
    pub values: Vec<DenseCaption>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReadResult {
    pub blocks: Vec<ReadBlock>,
}

/// The spatial portions of an image-analysis response.
///
/// Only the result kinds that carry drawable regions are modeled; plain
/// captions and tags without boxes are the caller's to print.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    #[serde(default)]
    pub(crate) objects_result: Option<ObjectsResult>,
    #[serde(default)]
    pub(crate) dense_captions_result: Option<DenseCaptionsResult>,
    #[serde(default)]
    pub(crate) read_result: Option<ReadResult>,
}

impl ImageAnalysis {
    /// Parses an image-analysis response body.
    ///
    /// # Arguments
    ///
    /// * `json` - The raw JSON response body
    ///
    /// # Returns
    ///
    /// * `Ok(ImageAnalysis)` - The parsed payload
    /// * `Err(OverlayError::Parse)` - If the body is not valid JSON of this shape
    pub fn from_json(json: &str) -> OverlayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Detections for the detected objects, labeled by their primary tag.
    ///
    /// Objects without any tag are skipped, as there is nothing to label
    /// them with.
    pub fn object_detections(&self) -> Vec<Detection> {
        let Some(objects) = &self.objects_result else {
            return Vec::new();
        };

        objects
            .values
            .iter()
            .filter_map(|obj| {
                let tag = obj.tags.first()?;
                Some(Detection::new(
                    tag.name.clone(),
                    tag.confidence,
                    obj.bounding_box.to_region(),
                ))
            })
            .collect()
    }

    /// Detections for the dense captions, labeled by the caption text.
    pub fn caption_detections(&self) -> Vec<Detection> {
        let Some(captions) = &self.dense_captions_result else {
            return Vec::new();
        };

        captions
            .values
            .iter()
            .map(|caption| {
                Detection::new(
                    caption.text.clone(),
                    caption.confidence,
                    caption.bounding_box.to_region(),
                )
            })
            .collect()
    }

    /// Detections for the recognized lines.
    ///
    /// The read result reports confidence per word, not per line, so line
    /// detections carry a confidence of 1.0.
    pub fn line_detections(&self) -> Vec<Detection> {
        self.read_lines()
            .map(|line| {
                Detection::new(
                    line.text.clone(),
                    1.0,
                    Region::PixelPolygon(line.bounding_polygon.clone()),
                )
            })
            .collect()
    }

    /// Detections for the recognized words.
    pub fn word_detections(&self) -> Vec<Detection> {
        self.read_lines()
            .flat_map(|line| line.words.iter())
            .map(|word| {
                Detection::new(
                    word.text.clone(),
                    word.confidence,
                    Region::PixelPolygon(word.bounding_polygon.clone()),
                )
            })
            .collect()
    }

    /// All detections in this payload, in response order: objects, dense
    /// captions, then recognized words.
    pub fn detections(&self) -> Vec<Detection> {
        let mut detections = self.object_detections();
        detections.extend(self.caption_detections());
        detections.extend(self.word_detections());
        detections
    }

    fn read_lines(&self) -> impl Iterator<Item = &ReadLine> {
        self.read_result
            .iter()
            .flat_map(|read| read.blocks.iter())
            .flat_map(|block| block.lines.iter())
    }
}
