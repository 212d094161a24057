//! Detection records produced by vision analysis calls.

use serde::{Deserialize, Serialize};

use crate::domain::Region;

/// One labeled, scored, spatially-located finding from a vision analysis
/// call.
///
/// A detection is immutable once ingested: the upstream response parser
/// assigns the label, the confidence score in `[0, 1]`, and the region in
/// its resolved coordinate convention, and the renderer consumes it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The class or text label reported by the service.
    pub label: String,
    /// The confidence score in `[0, 1]`.
    pub confidence: f32,
    /// The spatial extent of the finding.
    pub region: Region,
}

impl Detection {
    /// Creates a new detection.
    ///
    /// # Arguments
    ///
    /// * `label` - The class or text label reported by the service.
    /// * `confidence` - The confidence score in `[0, 1]`.
    /// * `region` - The spatial extent of the finding.
    ///
    /// # Returns
    ///
    /// A new `Detection` instance.
    pub fn new(label: impl Into<String>, confidence: f32, region: Region) -> Self {
        Self {
            label: label.into(),
            confidence,
            region,
        }
    }

    /// Formats the overlay label for this detection.
    ///
    /// The text is `"{label}: {confidence}%"` with the confidence expressed
    /// as a percentage to 2 decimal places.
    pub fn label_text(&self) -> String {
        format!("{}: {:.2}%", self.label, self.confidence * 100.0)
    }
}
